//! Schnorr proof of key possession for account registration.
//!
//! The challenge binds the signature to one contract instance and one
//! sender address, so a registration cannot be replayed across deployments
//! or accounts. The hash input is the ledger's own parameter encoding —
//! six fixed-width big-endian words — and must stay byte-identical to what
//! the contract recomputes.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use sha3::{Digest, Keccak256};

use zether_primitives::{
    base_to_word, mul_generator, random_scalar, subgroup_order, Point, ProtocolParams, Scalar,
};

use crate::account::Account;
use crate::ledger::Address;

/// Signature over the registration context `(contract, account, y, R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchnorrSignature {
    pub challenge: Scalar,
    pub response: Scalar,
}

fn address_word(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address);
    word
}

/// `Hash(contract || account || y || R) mod order`, over the ledger's
/// 6-word encoding.
fn challenge_scalar(
    contract: &Address,
    account: &Address,
    public_key: &Point,
    nonce_point: &Point,
) -> Scalar {
    let mut hasher = Keccak256::new();
    hasher.update(address_word(contract));
    hasher.update(address_word(account));
    hasher.update(base_to_word(&public_key.x));
    hasher.update(base_to_word(&public_key.y));
    hasher.update(base_to_word(&nonce_point.x));
    hasher.update(base_to_word(&nonce_point.y));
    let digest: [u8; 32] = hasher.finalize().into();
    let reduced = BigUint::from_bytes_be(&digest) % subgroup_order();
    Scalar::from_le_bytes_mod_order(&reduced.to_bytes_le())
}

/// Sign the registration context with a fresh nonce.
///
/// The nonce is drawn zero-excluded and used exactly once; reusing a nonce
/// across two signatures would leak the secret key.
pub fn sign<R: RngCore + CryptoRng>(
    params: &ProtocolParams,
    contract: &Address,
    account_address: &Address,
    account: &Account,
    rng: &mut R,
) -> SchnorrSignature {
    let nonce = random_scalar(params, rng, true);
    let nonce_point = mul_generator(params, &nonce);
    let challenge = challenge_scalar(contract, account_address, account.public_key(), &nonce_point);
    let response = nonce + challenge * *account.secret_key();
    SchnorrSignature {
        challenge,
        response,
    }
}

/// Mirror of the ledger-side check: recompute `R' = s*G - c*y` and accept
/// iff the re-derived challenge matches.
pub fn verify(
    params: &ProtocolParams,
    contract: &Address,
    account_address: &Address,
    public_key: &Point,
    signature: &SchnorrSignature,
) -> bool {
    let nonce_point = (params.generator().into_group() * signature.response
        - public_key.into_group() * signature.challenge)
        .into_affine();
    let expected = challenge_scalar(contract, account_address, public_key, &nonce_point);
    expected == signature.challenge
}

/// `keccak256(y.x || y.y)` over 32-byte words, the ledger's key index.
pub fn public_key_hash(public_key: &Point) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(base_to_word(&public_key.x));
    hasher.update(base_to_word(&public_key.y));
    hasher.finalize().into()
}
