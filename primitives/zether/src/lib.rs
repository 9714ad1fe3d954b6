//! # zether-primitives — curve and commitment layer
//!
//! Shared primitives for the Zether-style confidential-balance token
//! client: the Baby Jubjub curve context, unbiased scalar sampling,
//! twisted-ElGamal balance commitments with their homomorphic algebra, and
//! bounded discrete-log balance recovery.
//!
//! Everything here is a pure function over immutable inputs. Curve
//! parameters live in an explicit [`ProtocolParams`] value that callers
//! construct once and pass by reference — there is no global curve state
//! and no init-order dependency.

pub mod commitment;
pub mod curve;
pub mod dlog;
pub mod error;
pub mod rand;

pub use commitment::{
    build_transfer_commitment, build_transfer_from_commitment, Commitment, TransferCommitment,
    TransferFromCommitment,
};
pub use curve::{
    base_field_modulus, base_to_biguint, base_to_decimal, base_to_word, biguint_to_base,
    biguint_to_scalar, is_zero_pair, mul_generator, point_from_coords, scalar_to_biguint,
    scalar_to_decimal, scalar_to_word, subgroup_order, Base, Point, PointProjective,
    ProtocolParams, Scalar, DEFAULT_MAX_BALANCE,
};
pub use dlog::BabyStepTable;
pub use error::CurveError;
pub use rand::random_scalar;
