//! Deterministic proof-input vectors.
//!
//! Everything is derived from a fixed ChaCha20 seed so the output is
//! byte-stable across runs; `gen_vectors` dumps it as JSON for circuit
//! harnesses and benchmarks.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde_json::{json, Value};

use zether_primitives::{
    base_to_biguint, BabyStepTable, Commitment, Point, ProtocolParams, Scalar,
};

use crate::account::Account;
use crate::calldata::AllowanceCommitments;
use crate::ledger::RawPoint;
use crate::ops::{self, AccountState};
use crate::proof_inputs::ProofInput;

fn raw(point: &Point) -> RawPoint {
    (base_to_biguint(&point.x), base_to_biguint(&point.y))
}

fn op_json(input: &ProofInput) -> Value {
    json!({
        "circuit": input.circuit().map(|c| c.as_str()),
        "inputs": input.prover_fields_json(),
        "public": input
            .public_fields()
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>(),
    })
}

/// Build one deterministic vector per proof kind.
pub fn deterministic_vectors() -> Value {
    // A reduced balance bound keeps table generation cheap for vector work.
    let defaults = ProtocolParams::new();
    let params = ProtocolParams::with_generator(*defaults.generator(), 1_000_000);
    let table = BabyStepTable::generate(&params, params.max_balance());

    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let sender = Account::generate(&params, &mut rng);
    let receiver = Account::generate(&params, &mut rng);
    let third = Account::generate(&params, &mut rng);

    let contract = [0x11u8; 20];
    let holder = [0x22u8; 20];
    let register = ops::register(&params, &sender, &contract, &holder, &mut rng);

    // Sender holds 12_345 settled under blinding 42.
    let state = AccountState {
        commitment: Commitment::encrypt(&params, sender.public_key(), 12_345, &Scalar::from(42u64)),
        counter: 3,
    };

    let burn = ops::burn(&params, &table, &sender, &state, 111).expect("burn vector");
    let transfer = ops::transfer(
        &params,
        &table,
        &sender,
        &state,
        &raw(receiver.public_key()),
        1_000,
        &mut rng,
    )
    .expect("transfer vector");
    let approve = ops::approve(
        &params,
        &table,
        &sender,
        &state,
        &raw(receiver.public_key()),
        2_000,
        &mut rng,
    )
    .expect("approve vector");

    // Allowance of 600 held for the receiver-as-spender.
    let allowance = AllowanceCommitments {
        owner: Commitment::encrypt(&params, sender.public_key(), 600, &Scalar::from(99u64)),
        spender: Commitment::encrypt(&params, receiver.public_key(), 600, &Scalar::from(99u64)),
    };
    let transfer_from = ops::transfer_from(
        &params,
        &table,
        &receiver,
        &allowance,
        5,
        &raw(sender.public_key()),
        &raw(third.public_key()),
        250,
        &mut rng,
    )
    .expect("transfer-from vector");

    json!({
        "seed": "07x32",
        "max": params.max_balance(),
        "register": op_json(&register.proof_input),
        "burn": op_json(&burn.proof_input),
        "transfer": op_json(&transfer.proof_input),
        "approve": op_json(&approve.proof_input),
        "transferFrom": op_json(&transfer_from.proof_input),
    })
}
