//! Boundaries to the external collaborators: the ledger contract and the
//! proving engine. Consumed, never implemented here — orchestration code
//! supplies RPC- or test-backed implementations and is free to make the
//! calls asynchronous and cancelable; the engine itself stays synchronous
//! and pure.

use num_bigint::BigUint;

use zether_primitives::{point_from_coords, Commitment, CurveError};

use crate::calldata::ProofResult;
use crate::proof_inputs::{CircuitId, ProofInput};
use crate::ClientError;

/// 20-byte ledger address.
pub type Address = [u8; 20];

/// Unvalidated affine coordinates as the ledger returns them. (0, 0)
/// marks an address that never registered a key.
pub type RawPoint = (BigUint, BigUint);

/// Unvalidated `(CL, CR)` pair from `simulate_accounts`.
#[derive(Debug, Clone)]
pub struct RawCommitmentPair {
    pub c_l: RawPoint,
    pub c_r: RawPoint,
}

impl RawCommitmentPair {
    /// Validate both points onto the curve.
    pub fn parse(&self) -> Result<Commitment, CurveError> {
        Ok(Commitment {
            c_l: point_from_coords(&self.c_l.0, &self.c_l.1)?,
            c_r: point_from_coords(&self.c_r.0, &self.c_r.1)?,
        })
    }
}

/// Read side of the ledger contract.
pub trait LedgerReader {
    type Error;

    /// Registered key for `address`; (0, 0) when unregistered.
    fn address_to_public_key(&self, address: Address) -> Result<RawPoint, Self::Error>;

    /// Replay-protection nonce consumed by every proof.
    fn counter(&self, address: Address) -> Result<u64, Self::Error>;

    fn epoch_length(&self) -> Result<u64, Self::Error>;

    fn current_block_number(&self) -> Result<u64, Self::Error>;

    /// Project pending deltas into epoch-settled commitments.
    fn simulate_accounts(
        &self,
        addresses: &[Address],
        epoch: u64,
    ) -> Result<Vec<RawCommitmentPair>, Self::Error>;

    /// Allowance blob for (owner, spender); empty when none exists.
    fn confidential_allowance(
        &self,
        owner: Address,
        spender: Address,
    ) -> Result<Vec<u8>, Self::Error>;
}

/// Write side of the ledger contract.
pub trait LedgerSubmitter {
    type Error;

    fn register_account(
        &mut self,
        public_key: RawPoint,
        challenge: BigUint,
        response: BigUint,
    ) -> Result<(), Self::Error>;

    fn mint(&mut self, value: u64) -> Result<(), Self::Error>;

    fn burn(&mut self, amount: u64, proof: &[u8]) -> Result<(), Self::Error>;

    fn confidential_transfer(
        &mut self,
        to: Address,
        value: &[u8],
        proof: &[u8],
    ) -> Result<(), Self::Error>;

    fn confidential_approve(
        &mut self,
        spender: Address,
        value: &[u8],
        proof: &[u8],
    ) -> Result<(), Self::Error>;

    fn confidential_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: &[u8],
        proof: &[u8],
    ) -> Result<(), Self::Error>;

    fn revoke_allowance(&mut self, spender: Address) -> Result<(), Self::Error>;

    fn roll_over(&mut self, address: Address) -> Result<(), Self::Error>;
}

/// External Groth16 prover. Failures are opaque to this engine: map them
/// to [`ClientError::ProofGenerationFailed`] and propagate unchanged.
pub trait ProvingEngine {
    type Error;

    fn prove(&self, circuit: CircuitId, input: &ProofInput) -> Result<ProofResult, Self::Error>;
}

/// Epoch containing `block_number`.
pub fn current_epoch(block_number: u64, epoch_length: u64) -> Result<u64, ClientError> {
    if epoch_length == 0 {
        return Err(ClientError::Malformed("epoch length must be nonzero"));
    }
    Ok(block_number / epoch_length)
}
