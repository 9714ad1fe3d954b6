//! Twisted-ElGamal balance commitments and the transfer tuples built from
//! them.
//!
//! A balance `b` under public key `y` is the pair `CL = y*r + b*G`,
//! `CR = r*G`. The holder of `sk` (with `y = sk*G`) recovers `b*G` as
//! `CL - sk*CR` and decodes `b` with a bounded discrete-log scan. Pairs
//! add pointwise, which is what lets the ledger fold per-epoch deltas into
//! the running commitment without seeing any amount.

use std::ops::Add;

use ark_ec::{AffineRepr, CurveGroup};

use crate::curve::{Point, ProtocolParams, Scalar};
use crate::dlog::BabyStepTable;

/// Ledger-side balance commitment `(CL, CR)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commitment {
    pub c_l: Point,
    pub c_r: Point,
}

impl Commitment {
    /// Encrypt `amount` to `recipient_pk` under blinding scalar `r`.
    pub fn encrypt(
        params: &ProtocolParams,
        recipient_pk: &Point,
        amount: u64,
        r: &Scalar,
    ) -> Self {
        let g = params.generator().into_group();
        Self {
            c_l: (recipient_pk.into_group() * *r + g * Scalar::from(amount)).into_affine(),
            c_r: (g * *r).into_affine(),
        }
    }

    /// Recover the committed balance with the matching secret key.
    ///
    /// Returns `None` when the balance is not in `[0, bound)` — either the
    /// key does not match or the commitment encodes something outside the
    /// protocol's range. The two cases are indistinguishable here.
    pub fn decode_balance(
        &self,
        table: &BabyStepTable,
        sk: &Scalar,
        bound: u64,
    ) -> Option<u64> {
        let message = self.c_l.into_group() - self.c_r.into_group() * *sk;
        table.discrete_log(&message.into_affine(), bound)
    }
}

impl Add for Commitment {
    type Output = Commitment;

    fn add(self, rhs: Commitment) -> Commitment {
        Commitment {
            c_l: (self.c_l.into_group() + rhs.c_l.into_group()).into_affine(),
            c_r: (self.c_r.into_group() + rhs.c_r.into_group()).into_affine(),
        }
    }
}

/// Two-party transfer tuple: sender decrement, receiver increment, and the
/// shared blinding commitment `D = r*G`. Built fresh per operation and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferCommitment {
    pub c_send: Point,
    pub c_receive: Point,
    pub d: Point,
}

/// Three-party tuple for spending out of an allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferFromCommitment {
    pub c_from: Point,
    pub c_spender: Point,
    pub c_to: Point,
    pub d: Point,
}

/// `C_send = senderPk*r + amount*G`, `C_receive = receiverPk*r + amount*G`,
/// `D = r*G`.
///
/// The caller must feed the same `amount` to the proof-input marshaler; a
/// mismatch yields a proof the ledger rejects.
pub fn build_transfer_commitment(
    params: &ProtocolParams,
    sender_pk: &Point,
    receiver_pk: &Point,
    amount: u64,
    r: &Scalar,
) -> TransferCommitment {
    let g = params.generator().into_group();
    let g_amount = g * Scalar::from(amount);
    TransferCommitment {
        c_send: (sender_pk.into_group() * *r + g_amount).into_affine(),
        c_receive: (receiver_pk.into_group() * *r + g_amount).into_affine(),
        d: (g * *r).into_affine(),
    }
}

/// Same construction over three keys: `C_from`/`C_spender` encode the
/// allowance decrement, `C_to` the recipient's increment.
pub fn build_transfer_from_commitment(
    params: &ProtocolParams,
    from_pk: &Point,
    spender_pk: &Point,
    to_pk: &Point,
    amount: u64,
    r: &Scalar,
) -> TransferFromCommitment {
    let g = params.generator().into_group();
    let g_amount = g * Scalar::from(amount);
    TransferFromCommitment {
        c_from: (from_pk.into_group() * *r + g_amount).into_affine(),
        c_spender: (spender_pk.into_group() * *r + g_amount).into_affine(),
        c_to: (to_pk.into_group() * *r + g_amount).into_affine(),
        d: (g * *r).into_affine(),
    }
}

impl Add for TransferCommitment {
    type Output = TransferCommitment;

    fn add(self, rhs: TransferCommitment) -> TransferCommitment {
        TransferCommitment {
            c_send: (self.c_send.into_group() + rhs.c_send.into_group()).into_affine(),
            c_receive: (self.c_receive.into_group() + rhs.c_receive.into_group()).into_affine(),
            d: (self.d.into_group() + rhs.d.into_group()).into_affine(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::mul_generator;

    fn keypair(params: &ProtocolParams, sk: u64) -> (Scalar, Point) {
        let sk = Scalar::from(sk);
        (sk, mul_generator(params, &sk))
    }

    #[test]
    fn round_trip_recovers_the_amount() {
        let params = ProtocolParams::new();
        let table = BabyStepTable::generate(&params, 1_000_000);
        let (sk, pk) = keypair(&params, 271_828);
        for amount in [0u64, 1, 7, 4_095, 999_999] {
            let commitment = Commitment::encrypt(&params, &pk, amount, &Scalar::from(55u64));
            assert_eq!(
                commitment.decode_balance(&table, &sk, 1_000_000),
                Some(amount)
            );
        }
    }

    #[test]
    fn wrong_key_decodes_nothing() {
        let params = ProtocolParams::new();
        let table = BabyStepTable::generate(&params, 10_000);
        let (_, pk) = keypair(&params, 17);
        let (other_sk, _) = keypair(&params, 18);
        // A large blinding keeps the residual (sk - sk')*r far outside the
        // bound, so the mismatch shows up as an undecodable balance.
        let commitment = Commitment::encrypt(&params, &pk, 42, &Scalar::from(1_000_000u64));
        assert_eq!(commitment.decode_balance(&table, &other_sk, 10_000), None);
    }

    #[test]
    fn balances_at_or_past_the_bound_are_undecodable() {
        let params = ProtocolParams::new();
        let table = BabyStepTable::generate(&params, 500);
        let (sk, pk) = keypair(&params, 23);
        let commitment = Commitment::encrypt(&params, &pk, 500, &Scalar::from(3u64));
        assert_eq!(commitment.decode_balance(&table, &sk, 500), None);
    }

    #[test]
    fn commitments_add_homomorphically() {
        let params = ProtocolParams::new();
        let table = BabyStepTable::generate(&params, 10_000);
        let (sk, pk) = keypair(&params, 31);
        let a = Commitment::encrypt(&params, &pk, 1_200, &Scalar::from(5u64));
        let b = Commitment::encrypt(&params, &pk, 34, &Scalar::from(11u64));
        let combined =
            Commitment::encrypt(&params, &pk, 1_234, &(Scalar::from(5u64) + Scalar::from(11u64)));
        assert_eq!(a + b, combined);
        assert_eq!((a + b).decode_balance(&table, &sk, 10_000), Some(1_234));
    }

    #[test]
    fn transfer_tuples_add_homomorphically() {
        let params = ProtocolParams::new();
        let (_, sender_pk) = keypair(&params, 41);
        let (_, receiver_pk) = keypair(&params, 43);
        let (a1, r1) = (100u64, Scalar::from(7u64));
        let (a2, r2) = (250u64, Scalar::from(13u64));
        let lhs = build_transfer_commitment(&params, &sender_pk, &receiver_pk, a1, &r1)
            + build_transfer_commitment(&params, &sender_pk, &receiver_pk, a2, &r2);
        let rhs =
            build_transfer_commitment(&params, &sender_pk, &receiver_pk, a1 + a2, &(r1 + r2));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn transfer_tuple_matches_the_construction() {
        let params = ProtocolParams::new();
        let (_, sender_pk) = keypair(&params, 47);
        let (_, receiver_pk) = keypair(&params, 53);
        let r = Scalar::from(29u64);
        let tuple = build_transfer_commitment(&params, &sender_pk, &receiver_pk, 77, &r);
        assert_eq!(tuple.d, mul_generator(&params, &r));
        // The sender leg pairs with D exactly like a ledger commitment.
        let as_commitment = Commitment {
            c_l: tuple.c_send,
            c_r: tuple.d,
        };
        let expected = Commitment::encrypt(&params, &sender_pk, 77, &r);
        assert_eq!(as_commitment, expected);
        assert_eq!(tuple.c_receive, Commitment::encrypt(&params, &receiver_pk, 77, &r).c_l);
    }

    #[test]
    fn decodes_the_protocol_scenario() {
        // amount 10000, r = 7, full 32-bit bound.
        let params = ProtocolParams::new();
        let table = BabyStepTable::generate(&params, params.max_balance());
        let (sk, pk) = keypair(&params, 123_456_789);
        let commitment = Commitment::encrypt(&params, &pk, 10_000, &Scalar::from(7u64));
        assert_eq!(
            commitment.decode_balance(&table, &sk, params.max_balance()),
            Some(10_000)
        );
    }

    #[test]
    fn transfer_from_tuple_shares_one_blinding() {
        let params = ProtocolParams::new();
        let (_, from_pk) = keypair(&params, 59);
        let (_, spender_pk) = keypair(&params, 61);
        let (_, to_pk) = keypair(&params, 67);
        let r = Scalar::from(19u64);
        let tuple =
            build_transfer_from_commitment(&params, &from_pk, &spender_pk, &to_pk, 500, &r);
        let pair = build_transfer_commitment(&params, &from_pk, &spender_pk, 500, &r);
        assert_eq!(tuple.c_from, pair.c_send);
        assert_eq!(tuple.c_spender, pair.c_receive);
        assert_eq!(tuple.d, pair.d);
        assert_eq!(tuple.c_to, Commitment::encrypt(&params, &to_pk, 500, &r).c_l);
    }
}
