//! Proof-input records for the external circuits.
//!
//! One fixed-shape record per proof kind, collected in the [`ProofInput`]
//! sum type. Serialization to the circuit's named-signal map is an
//! exhaustive match per variant, and public fields are listed by a
//! separate method in the circuit's declared public-input order — a caller
//! cannot misorder a public signal or leak a witness field by accident.
//!
//! Scalars travel as decimal strings, points as `[x, y]` decimal pairs,
//! which is the input convention of the proving engine.

use serde::Serialize;
use serde_json::{Map, Value};

use zether_primitives::{base_to_decimal, scalar_to_decimal, Point, Scalar};

use crate::schnorr::SchnorrSignature;

/// Selector for the four circuit-backed proof kinds. Registration carries
/// only a Schnorr signature and never reaches the proving engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitId {
    Burn,
    Transfer,
    Approve,
    TransferFrom,
}

impl CircuitId {
    pub fn as_str(self) -> &'static str {
        match self {
            CircuitId::Burn => "burn",
            CircuitId::Transfer => "transfer",
            CircuitId::Approve => "approve",
            CircuitId::TransferFrom => "transferFrom",
        }
    }
}

/// A single named circuit input: a decimal scalar or a decimal point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    Point([String; 2]),
}

impl FieldValue {
    fn scalar(s: &Scalar) -> Self {
        FieldValue::Scalar(scalar_to_decimal(s))
    }

    fn uint(v: u64) -> Self {
        FieldValue::Scalar(v.to_string())
    }

    fn point(p: &Point) -> Self {
        FieldValue::Point([base_to_decimal(&p.x), base_to_decimal(&p.y)])
    }
}

/// Registration: the account's key plus the Schnorr possession proof.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub y: Point,
    pub signature: SchnorrSignature,
}

/// Burn `b` out of the caller's balance.
#[derive(Debug, Clone)]
pub struct BurnProofInput {
    // Public.
    pub y: Point,
    pub c_l: Point,
    pub c_r: Point,
    pub b: u64,
    pub counter: u64,
    // Witness only.
    pub sk: Scalar,
    pub cur_b: u64,
}

/// Transfer (and approve, which shares the shape with the owner and
/// spender in the sender and receiver roles).
#[derive(Debug, Clone)]
pub struct TransferProofInput {
    // Public.
    pub max: u64,
    pub c_s: Point,
    pub d: Point,
    pub c_re: Point,
    pub y: Point,
    pub y_r: Point,
    pub c_l: Point,
    pub c_r: Point,
    pub counter: u64,
    // Witness only.
    pub sk: Scalar,
    pub r: Scalar,
    pub s_amount: u64,
    pub b_rem: u64,
}

/// Spend out of an allowance toward a third party.
#[derive(Debug, Clone)]
pub struct TransferFromProofInput {
    // Public.
    pub y: Point,
    pub y_r: Point,
    pub y_f: Point,
    pub c_l: Point,
    pub c_r: Point,
    pub c_s: Point,
    pub c_re: Point,
    pub c_fr: Point,
    pub d: Point,
    pub counter: u64,
    pub max: u64,
    // Witness only.
    pub sk: Scalar,
    pub b_rem: u64,
    pub s_amount: u64,
    pub r: Scalar,
}

/// Tagged proof input, one variant per proof kind.
#[derive(Debug, Clone)]
pub enum ProofInput {
    Register(RegisterInput),
    Burn(BurnProofInput),
    Transfer(TransferProofInput),
    Approve(TransferProofInput),
    TransferFrom(TransferFromProofInput),
}

impl ProofInput {
    /// Circuit this input drives; `None` for registration.
    pub fn circuit(&self) -> Option<CircuitId> {
        match self {
            ProofInput::Register(_) => None,
            ProofInput::Burn(_) => Some(CircuitId::Burn),
            ProofInput::Transfer(_) => Some(CircuitId::Transfer),
            ProofInput::Approve(_) => Some(CircuitId::Approve),
            ProofInput::TransferFrom(_) => Some(CircuitId::TransferFrom),
        }
    }

    /// Public fields in the circuit's declared public-input order. These
    /// are echoed on-chain as public signals; the order is part of the
    /// verifier's interface and must not change.
    pub fn public_fields(&self) -> Vec<(&'static str, FieldValue)> {
        match self {
            ProofInput::Register(input) => vec![
                ("y", FieldValue::point(&input.y)),
                ("c", FieldValue::scalar(&input.signature.challenge)),
                ("s", FieldValue::scalar(&input.signature.response)),
            ],
            ProofInput::Burn(input) => vec![
                ("y", FieldValue::point(&input.y)),
                ("CL", FieldValue::point(&input.c_l)),
                ("CR", FieldValue::point(&input.c_r)),
                ("b", FieldValue::uint(input.b)),
                ("counter", FieldValue::uint(input.counter)),
            ],
            ProofInput::Transfer(input) | ProofInput::Approve(input) => vec![
                ("MAX", FieldValue::uint(input.max)),
                ("CS", FieldValue::point(&input.c_s)),
                ("D", FieldValue::point(&input.d)),
                ("CRe", FieldValue::point(&input.c_re)),
                ("y", FieldValue::point(&input.y)),
                ("yR", FieldValue::point(&input.y_r)),
                ("CL", FieldValue::point(&input.c_l)),
                ("CR", FieldValue::point(&input.c_r)),
                ("counter", FieldValue::uint(input.counter)),
            ],
            ProofInput::TransferFrom(input) => vec![
                ("y", FieldValue::point(&input.y)),
                ("yR", FieldValue::point(&input.y_r)),
                ("yF", FieldValue::point(&input.y_f)),
                ("CL", FieldValue::point(&input.c_l)),
                ("CR", FieldValue::point(&input.c_r)),
                ("CS", FieldValue::point(&input.c_s)),
                ("CRe", FieldValue::point(&input.c_re)),
                ("CFr", FieldValue::point(&input.c_fr)),
                ("D", FieldValue::point(&input.d)),
                ("counter", FieldValue::uint(input.counter)),
                ("MAX", FieldValue::uint(input.max)),
            ],
        }
    }

    /// Witness-only fields. Never serialized into calldata or logs.
    pub fn private_fields(&self) -> Vec<(&'static str, FieldValue)> {
        match self {
            ProofInput::Register(_) => Vec::new(),
            ProofInput::Burn(input) => vec![
                ("sk", FieldValue::scalar(&input.sk)),
                ("cur_b", FieldValue::uint(input.cur_b)),
            ],
            ProofInput::Transfer(input) | ProofInput::Approve(input) => vec![
                ("sk", FieldValue::scalar(&input.sk)),
                ("r", FieldValue::scalar(&input.r)),
                ("sAmount", FieldValue::uint(input.s_amount)),
                ("bRem", FieldValue::uint(input.b_rem)),
            ],
            ProofInput::TransferFrom(input) => vec![
                ("sk", FieldValue::scalar(&input.sk)),
                ("bRem", FieldValue::uint(input.b_rem)),
                ("sAmount", FieldValue::uint(input.s_amount)),
                ("r", FieldValue::scalar(&input.r)),
            ],
        }
    }

    /// Full named-signal map handed to the proving engine: public fields
    /// plus witness fields. The witness half never leaves the local
    /// proving step.
    pub fn prover_fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = self.public_fields();
        fields.extend(self.private_fields());
        fields
    }

    /// The prover map as JSON, the proving engine's native input format.
    pub fn prover_fields_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in self.prover_fields() {
            map.insert(
                name.to_string(),
                serde_json::to_value(&value).unwrap_or(Value::Null),
            );
        }
        Value::Object(map)
    }
}
