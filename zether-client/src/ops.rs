//! Operation builders.
//!
//! Each builder is a pure function over pre-fetched chain state: the
//! orchestrating caller reads the ledger, hands the raw values in, and
//! gets back the fresh commitment tuple, the encoded submission value, and
//! the proof input for the external engine. Nothing here touches the
//! network or holds state between calls.

use log::debug;
use rand::{CryptoRng, RngCore};

use num_bigint::BigUint;
use zether_primitives::{
    base_to_biguint, build_transfer_commitment, build_transfer_from_commitment, is_zero_pair,
    point_from_coords, random_scalar, scalar_to_biguint, BabyStepTable, Commitment, Point,
    ProtocolParams, TransferCommitment, TransferFromCommitment,
};

use crate::account::Account;
use crate::calldata::{
    encode_proof, encode_transfer_from_value, encode_transfer_value, AllowanceCommitments,
    ProofResult,
};
use crate::ledger::{Address, RawPoint};
use crate::proof_inputs::{
    BurnProofInput, ProofInput, RegisterInput, TransferFromProofInput, TransferProofInput,
};
use crate::schnorr::{self, SchnorrSignature};
use crate::ClientError;

/// Epoch-settled commitment and replay counter for one account, as read
/// from the ledger.
#[derive(Debug, Clone)]
pub struct AccountState {
    pub commitment: Commitment,
    pub counter: u64,
}

/// Registration payload: key plus possession proof.
#[derive(Debug, Clone)]
pub struct RegisterOperation {
    pub public_key: Point,
    pub signature: SchnorrSignature,
    pub proof_input: ProofInput,
}

impl RegisterOperation {
    /// Values in the shape `register_account` takes on the wire.
    pub fn submission(&self) -> (RawPoint, BigUint, BigUint) {
        (
            (
                base_to_biguint(&self.public_key.x),
                base_to_biguint(&self.public_key.y),
            ),
            scalar_to_biguint(&self.signature.challenge),
            scalar_to_biguint(&self.signature.response),
        )
    }
}

/// Bind the account's key to this contract and sender address.
pub fn register<R: RngCore + CryptoRng>(
    params: &ProtocolParams,
    account: &Account,
    contract: &Address,
    holder: &Address,
    rng: &mut R,
) -> RegisterOperation {
    debug!("building registration proof of possession");
    let signature = schnorr::sign(params, contract, holder, account, rng);
    RegisterOperation {
        public_key: *account.public_key(),
        signature,
        proof_input: ProofInput::Register(RegisterInput {
            y: *account.public_key(),
            signature,
        }),
    }
}

/// Burn proof input over the caller's settled balance.
#[derive(Debug, Clone)]
pub struct BurnOperation {
    pub amount: u64,
    pub proof_input: ProofInput,
}

pub fn burn(
    params: &ProtocolParams,
    table: &BabyStepTable,
    account: &Account,
    state: &AccountState,
    amount: u64,
) -> Result<BurnOperation, ClientError> {
    let cur_b = state
        .commitment
        .decode_balance(table, account.secret_key(), params.max_balance())
        .ok_or(ClientError::BalanceUndecodable)?;
    cur_b
        .checked_sub(amount)
        .ok_or(ClientError::Overflow("current balance - burn amount"))?;
    debug!("building burn proof input (counter {})", state.counter);
    Ok(BurnOperation {
        amount,
        proof_input: ProofInput::Burn(BurnProofInput {
            y: *account.public_key(),
            c_l: state.commitment.c_l,
            c_r: state.commitment.c_r,
            b: amount,
            counter: state.counter,
            sk: *account.secret_key(),
            cur_b,
        }),
    })
}

/// Two-party operation output: the tuple, its wire encoding, and the
/// circuit input built from the same amount and blinding.
#[derive(Debug, Clone)]
pub struct TransferOperation {
    pub tuple: TransferCommitment,
    pub value: [u8; 192],
    pub proof_input: ProofInput,
}

fn two_party<R: RngCore + CryptoRng>(
    params: &ProtocolParams,
    table: &BabyStepTable,
    account: &Account,
    state: &AccountState,
    counterparty_key: &RawPoint,
    amount: u64,
    unregistered: ClientError,
    rng: &mut R,
) -> Result<(TransferCommitment, TransferProofInput), ClientError> {
    // The unregistered marker must short-circuit before any commitment or
    // nonce is produced: no partial side effects.
    if is_zero_pair(&counterparty_key.0, &counterparty_key.1) {
        return Err(unregistered);
    }
    let counterparty = point_from_coords(&counterparty_key.0, &counterparty_key.1)?;
    let cur_b = state
        .commitment
        .decode_balance(table, account.secret_key(), params.max_balance())
        .ok_or(ClientError::BalanceUndecodable)?;
    let b_rem = cur_b
        .checked_sub(amount)
        .ok_or(ClientError::Overflow("current balance - transfer amount"))?;
    let r = random_scalar(params, rng, true);
    let tuple = build_transfer_commitment(params, account.public_key(), &counterparty, amount, &r);
    let input = TransferProofInput {
        max: params.max_balance(),
        c_s: tuple.c_send,
        d: tuple.d,
        c_re: tuple.c_receive,
        y: *account.public_key(),
        y_r: counterparty,
        c_l: state.commitment.c_l,
        c_r: state.commitment.c_r,
        counter: state.counter,
        sk: *account.secret_key(),
        r,
        s_amount: amount,
        b_rem,
    };
    Ok((tuple, input))
}

/// Confidential transfer to a registered receiver.
pub fn transfer<R: RngCore + CryptoRng>(
    params: &ProtocolParams,
    table: &BabyStepTable,
    account: &Account,
    state: &AccountState,
    receiver_key: &RawPoint,
    amount: u64,
    rng: &mut R,
) -> Result<TransferOperation, ClientError> {
    debug!("building transfer proof input (counter {})", state.counter);
    let (tuple, input) = two_party(
        params,
        table,
        account,
        state,
        receiver_key,
        amount,
        ClientError::ReceiverNotRegistered,
        rng,
    )?;
    Ok(TransferOperation {
        value: encode_transfer_value(&tuple),
        proof_input: ProofInput::Transfer(input),
        tuple,
    })
}

/// Confidential approval: decrements the owner's balance into an
/// allowance held for the spender. Same construction as a transfer with
/// the spender in the receiver role.
pub fn approve<R: RngCore + CryptoRng>(
    params: &ProtocolParams,
    table: &BabyStepTable,
    account: &Account,
    state: &AccountState,
    spender_key: &RawPoint,
    amount: u64,
    rng: &mut R,
) -> Result<TransferOperation, ClientError> {
    debug!("building approve proof input (counter {})", state.counter);
    let (tuple, input) = two_party(
        params,
        table,
        account,
        state,
        spender_key,
        amount,
        ClientError::SpenderNotRegistered,
        rng,
    )?;
    Ok(TransferOperation {
        value: encode_transfer_value(&tuple),
        proof_input: ProofInput::Approve(input),
        tuple,
    })
}

/// Three-party operation output for spending an allowance.
#[derive(Debug, Clone)]
pub struct TransferFromOperation {
    pub tuple: TransferFromCommitment,
    pub value: [u8; 256],
    pub proof_input: ProofInput,
}

/// Spend `amount` out of the allowance `owner -> spender` toward `to`.
/// The spender decodes its own half of the allowance; `counter` is the
/// spender's replay nonce.
pub fn transfer_from<R: RngCore + CryptoRng>(
    params: &ProtocolParams,
    table: &BabyStepTable,
    spender: &Account,
    allowance: &AllowanceCommitments,
    counter: u64,
    from_key: &RawPoint,
    to_key: &RawPoint,
    amount: u64,
    rng: &mut R,
) -> Result<TransferFromOperation, ClientError> {
    if is_zero_pair(&from_key.0, &from_key.1) {
        return Err(ClientError::AccountNotRegistered);
    }
    if is_zero_pair(&to_key.0, &to_key.1) {
        return Err(ClientError::ReceiverNotRegistered);
    }
    let from_pk = point_from_coords(&from_key.0, &from_key.1)?;
    let to_pk = point_from_coords(&to_key.0, &to_key.1)?;
    let cur_allowance = allowance
        .spender
        .decode_balance(table, spender.secret_key(), params.max_balance())
        .ok_or(ClientError::BalanceUndecodable)?;
    let b_rem = cur_allowance
        .checked_sub(amount)
        .ok_or(ClientError::Overflow("allowance - transfer amount"))?;
    debug!("building transfer-from proof input (counter {counter})");
    let r = random_scalar(params, rng, true);
    let tuple = build_transfer_from_commitment(
        params,
        &from_pk,
        spender.public_key(),
        &to_pk,
        amount,
        &r,
    );
    let input = TransferFromProofInput {
        y: *spender.public_key(),
        y_r: to_pk,
        y_f: from_pk,
        c_l: allowance.spender.c_l,
        c_r: allowance.spender.c_r,
        c_s: tuple.c_spender,
        c_re: tuple.c_to,
        c_fr: tuple.c_from,
        d: tuple.d,
        counter,
        max: params.max_balance(),
        sk: *spender.secret_key(),
        b_rem,
        s_amount: amount,
        r,
    };
    Ok(TransferFromOperation {
        value: encode_transfer_from_value(&tuple),
        proof_input: ProofInput::TransferFrom(input),
        tuple,
    })
}

/// Flatten and pack a proving-engine result for submission.
pub fn proof_calldata(result: &ProofResult) -> Result<[u8; 256], ClientError> {
    encode_proof(&result.flatten())
}
