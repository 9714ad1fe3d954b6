//! Wire encodings for ledger submission.
//!
//! Everything the contract reads is a sequence of 32-byte big-endian
//! words: commitment tuples are concatenated point pairs, proofs are the
//! fixed 8-word Groth16 flattening, and allowances decode from the 8-word
//! owner/spender layout.

use num_bigint::BigUint;

use zether_primitives::{
    base_to_word, point_from_coords, Commitment, Point, TransferCommitment,
    TransferFromCommitment,
};

use crate::ClientError;

/// Raw output of the external proving engine. `p_b` is the degree-2
/// extension point as two coordinate pairs, already in the order the
/// verifier's calldata expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofResult {
    pub p_a: (BigUint, BigUint),
    pub p_b: ((BigUint, BigUint), (BigUint, BigUint)),
    pub p_c: (BigUint, BigUint),
    pub public_signals: Vec<BigUint>,
}

impl ProofResult {
    pub fn flatten(&self) -> [BigUint; 8] {
        flatten_proof(&self.p_a, &self.p_b, &self.p_c)
    }
}

/// `[pA.x, pA.y, pB0.x, pB0.y, pB1.x, pB1.y, pC.x, pC.y]` — the
/// verifier's parameter layout. Fixed; do not reorder.
pub fn flatten_proof(
    p_a: &(BigUint, BigUint),
    p_b: &((BigUint, BigUint), (BigUint, BigUint)),
    p_c: &(BigUint, BigUint),
) -> [BigUint; 8] {
    [
        p_a.0.clone(),
        p_a.1.clone(),
        p_b.0 .0.clone(),
        p_b.0 .1.clone(),
        p_b.1 .0.clone(),
        p_b.1 .1.clone(),
        p_c.0.clone(),
        p_c.1.clone(),
    ]
}

fn word_be(value: &BigUint) -> Result<[u8; 32], ClientError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > 32 {
        return Err(ClientError::Malformed("proof word exceeds 256 bits"));
    }
    let mut word = [0u8; 32];
    word[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(word)
}

/// Pack the flattened proof as a fixed array of 256-bit words.
pub fn encode_proof(words: &[BigUint; 8]) -> Result<[u8; 256], ClientError> {
    let mut out = [0u8; 256];
    for (i, value) in words.iter().enumerate() {
        out[i * 32..(i + 1) * 32].copy_from_slice(&word_be(value)?);
    }
    Ok(out)
}

fn write_point(out: &mut [u8], offset: usize, point: &Point) {
    out[offset..offset + 32].copy_from_slice(&base_to_word(&point.x));
    out[offset + 32..offset + 64].copy_from_slice(&base_to_word(&point.y));
}

/// `(C_send, C_receive, D)` as three point pairs.
pub fn encode_transfer_value(tuple: &TransferCommitment) -> [u8; 192] {
    let mut out = [0u8; 192];
    write_point(&mut out, 0, &tuple.c_send);
    write_point(&mut out, 64, &tuple.c_receive);
    write_point(&mut out, 128, &tuple.d);
    out
}

/// `(C_from, C_spender, C_to, D)` as four point pairs.
pub fn encode_transfer_from_value(tuple: &TransferFromCommitment) -> [u8; 256] {
    let mut out = [0u8; 256];
    write_point(&mut out, 0, &tuple.c_from);
    write_point(&mut out, 64, &tuple.c_spender);
    write_point(&mut out, 128, &tuple.c_to);
    write_point(&mut out, 192, &tuple.d);
    out
}

/// Both halves of a confidential allowance as stored by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceCommitments {
    pub owner: Commitment,
    pub spender: Commitment,
}

/// Decode the ledger's allowance blob: owner `CL.x CL.y CR.x CR.y`, then
/// the spender's four words. Empty bytes mean no allowance exists.
pub fn decode_allowance(bytes: &[u8]) -> Result<AllowanceCommitments, ClientError> {
    if bytes.is_empty() {
        return Err(ClientError::AllowanceNotFound);
    }
    if bytes.len() != 256 {
        return Err(ClientError::Malformed(
            "allowance blob must be eight 32-byte words",
        ));
    }
    let word = |i: usize| BigUint::from_bytes_be(&bytes[i * 32..(i + 1) * 32]);
    let point = |i: usize| point_from_coords(&word(i), &word(i + 1));
    Ok(AllowanceCommitments {
        owner: Commitment {
            c_l: point(0)?,
            c_r: point(2)?,
        },
        spender: Commitment {
            c_l: point(4)?,
            c_r: point(6)?,
        },
    })
}
