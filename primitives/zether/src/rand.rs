//! Uniform scalar sampling.

use ark_ff::PrimeField;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::curve::{ProtocolParams, Scalar};

/// Draw a scalar uniformly from `[0, order)`, or `[1, order)` with
/// `exclude_zero`.
///
/// Rejection sampling over fixed-width buffers: draws at or above the
/// precomputed limit (the largest multiple of the order representable in
/// the buffer) are discarded and retried, so the final reduction cannot
/// bias any residue class. Zero is likewise retried rather than remapped.
///
/// Every call draws fresh bytes; nothing is cached between calls, so a
/// nonce obtained here is never observable by a second proof.
pub fn random_scalar<R: RngCore + CryptoRng>(
    params: &ProtocolParams,
    rng: &mut R,
    exclude_zero: bool,
) -> Scalar {
    let mut buf = vec![0u8; params.scalar_byte_len()];
    loop {
        rng.fill_bytes(&mut buf);
        let draw = BigUint::from_bytes_be(&buf);
        if draw >= *params.sample_limit() {
            continue;
        }
        let reduced = draw % params.subgroup_order();
        if exclude_zero && reduced == BigUint::from(0u8) {
            continue;
        }
        return Scalar::from_le_bytes_mod_order(&reduced.to_bytes_le());
    }
}
