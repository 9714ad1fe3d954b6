//! # zether-client — confidential-balance proof construction
//!
//! Client-side engine for a Zether-style confidential token: account
//! balances live on the ledger only as twisted-ElGamal commitments, and
//! every balance-changing call (mint, burn, transfer, approve,
//! transfer-from) carries a zero-knowledge proof produced by an external
//! Groth16 engine from inputs assembled here.
//!
//! ## Flow
//!
//! 1. The orchestrating caller reads chain state ([`ledger::LedgerReader`])
//!    and decodes the current balance with the commitment codec.
//! 2. An operation builder in [`ops`] produces the fresh commitment tuple
//!    and the exact public/private input record for the circuit.
//! 3. The external engine ([`ledger::ProvingEngine`]) turns that record
//!    into a Groth16 proof.
//! 4. [`calldata`] flattens the proof and encodes the commitment tuple into
//!    the ledger's parameter layout for submission.
//!
//! ## Wire layouts
//!
//! **Proof blob:** 8 x 32-byte big-endian words,
//! `pA.x || pA.y || pB0.x || pB0.y || pB1.x || pB1.y || pC.x || pC.y`.
//!
//! **Transfer/approve value:** 3 point pairs (C_send, C_receive, D),
//! each point as `x(32) || y(32)`.
//!
//! **Transfer-from value:** 4 point pairs (C_from, C_spender, C_to, D).
//!
//! **Allowance blob:** 8 words — owner `CL.x CL.y CR.x CR.y`, then the
//! spender's four.
//!
//! ## Security notes
//!
//! - Secret keys, current balances, remaining balances, and blinding
//!   scalars are witness-only; the marshaler separates them from public
//!   fields statically so they cannot leak into calldata.
//! - Every nonce and blinding factor is freshly sampled per operation via
//!   rejection sampling; nothing is cached between proofs.

pub mod account;
pub mod calldata;
pub mod ledger;
pub mod ops;
pub mod proof_inputs;
pub mod schnorr;

pub mod bench_vectors;

use thiserror::Error;
use zether_primitives::CurveError;

/// Client-side failure taxonomy. All of these are value-level results:
/// none is used for control flow, and none is retried internally.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("account is not registered")]
    AccountNotRegistered,
    #[error("receiver is not registered")]
    ReceiverNotRegistered,
    #[error("spender is not registered")]
    SpenderNotRegistered,
    #[error("balance could not be decoded within the search bound")]
    BalanceUndecodable,
    #[error("no confidential allowance exists for this owner/spender pair")]
    AllowanceNotFound,
    #[error("proof generation failed: {0}")]
    ProofGenerationFailed(String),
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
    #[error("malformed input: {0}")]
    Malformed(&'static str),
    #[error(transparent)]
    Curve(#[from] CurveError),
}

pub use account::Account;
pub use calldata::{
    decode_allowance, encode_proof, encode_transfer_from_value, encode_transfer_value,
    flatten_proof, AllowanceCommitments, ProofResult,
};
pub use ledger::{
    current_epoch, Address, LedgerReader, LedgerSubmitter, ProvingEngine, RawCommitmentPair,
    RawPoint,
};
pub use ops::{
    approve, burn, proof_calldata, register, transfer, transfer_from, AccountState,
    BurnOperation, RegisterOperation, TransferFromOperation, TransferOperation,
};
pub use proof_inputs::{
    BurnProofInput, CircuitId, FieldValue, ProofInput, RegisterInput, TransferFromProofInput,
    TransferProofInput,
};
pub use schnorr::{public_key_hash, sign, verify, SchnorrSignature};
