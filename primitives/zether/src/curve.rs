//! Baby Jubjub curve context and coordinate conversions.
//!
//! All group arithmetic is done with arkworks operators on
//! [`Point`]/[`PointProjective`]; this module owns the boundary where
//! untrusted coordinates (ledger reads, allowance blobs, decimal proof
//! fields) become validated curve points or scalars. Validation failures
//! surface as [`CurveError`]; nothing is silently reduced or truncated.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ed_on_bn254::{EdwardsAffine, EdwardsProjective, Fq, Fr};
use ark_ff::{BigInteger, MontFp, PrimeField};
use num_bigint::BigUint;

use crate::error::CurveError;

/// Element of the prime-order scalar subgroup.
pub type Scalar = Fr;
/// Element of the coordinate field (a 256-bit word on the wire).
pub type Base = Fq;
/// Affine curve point, the representation the ledger stores and hashes.
pub type Point = EdwardsAffine;
/// Projective representation used for arithmetic.
pub type PointProjective = EdwardsProjective;

// Prime-subgroup base point (the cofactor-cleared generator the circuits use).
const GENERATOR_X: Fq =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");
const GENERATOR_Y: Fq =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");

/// Largest balance/amount the protocol's range circuits admit.
pub const DEFAULT_MAX_BALANCE: u64 = 4_294_967_295;

/// Immutable protocol configuration, constructed once at startup and passed
/// by reference into every component. There is no global curve state.
#[derive(Debug, Clone)]
pub struct ProtocolParams {
    generator: Point,
    max_balance: u64,
    scalar_byte_len: usize,
    sample_limit: BigUint,
    subgroup_order: BigUint,
}

impl ProtocolParams {
    pub fn new() -> Self {
        Self::with_generator(
            Point::new_unchecked(GENERATOR_X, GENERATOR_Y),
            DEFAULT_MAX_BALANCE,
        )
    }

    /// Build params around a non-default generator or balance bound.
    /// The generator must match the one the external circuits hardcode.
    pub fn with_generator(generator: Point, max_balance: u64) -> Self {
        let subgroup_order = subgroup_order();
        let scalar_byte_len = ((Scalar::MODULUS_BIT_SIZE as usize) + 7) / 8;
        // Largest multiple of the order below 2^(8*byte_len); draws at or
        // above it would fold unevenly under the final reduction.
        let ceiling = BigUint::from(1u8) << (8 * scalar_byte_len);
        let sample_limit = (&ceiling / &subgroup_order) * &subgroup_order;
        Self {
            generator,
            max_balance,
            scalar_byte_len,
            sample_limit,
            subgroup_order,
        }
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    pub fn max_balance(&self) -> u64 {
        self.max_balance
    }

    pub(crate) fn scalar_byte_len(&self) -> usize {
        self.scalar_byte_len
    }

    pub(crate) fn sample_limit(&self) -> &BigUint {
        &self.sample_limit
    }

    pub(crate) fn subgroup_order(&self) -> &BigUint {
        &self.subgroup_order
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Order of the prime scalar subgroup.
pub fn subgroup_order() -> BigUint {
    BigUint::from_bytes_le(&Scalar::MODULUS.to_bytes_le())
}

/// Modulus of the coordinate field.
pub fn base_field_modulus() -> BigUint {
    BigUint::from_bytes_le(&Base::MODULUS.to_bytes_le())
}

pub fn scalar_to_biguint(s: &Scalar) -> BigUint {
    BigUint::from_bytes_le(&s.into_bigint().to_bytes_le())
}

pub fn base_to_biguint(c: &Base) -> BigUint {
    BigUint::from_bytes_le(&c.into_bigint().to_bytes_le())
}

/// Canonical integer, rejected (not reduced) when out of range.
pub fn biguint_to_scalar(v: &BigUint) -> Result<Scalar, CurveError> {
    if *v >= subgroup_order() {
        return Err(CurveError::ScalarOutOfRange);
    }
    Ok(Scalar::from_le_bytes_mod_order(&v.to_bytes_le()))
}

pub fn biguint_to_base(v: &BigUint) -> Result<Base, CurveError> {
    if *v >= base_field_modulus() {
        return Err(CurveError::CoordinateOutOfRange);
    }
    Ok(Base::from_le_bytes_mod_order(&v.to_bytes_le()))
}

pub fn scalar_to_decimal(s: &Scalar) -> String {
    scalar_to_biguint(s).to_str_radix(10)
}

pub fn base_to_decimal(c: &Base) -> String {
    base_to_biguint(c).to_str_radix(10)
}

/// Fixed-width big-endian word, the ledger's parameter encoding.
pub fn base_to_word(c: &Base) -> [u8; 32] {
    let bytes = c.into_bigint().to_bytes_be();
    let mut word = [0u8; 32];
    word[32 - bytes.len()..].copy_from_slice(&bytes);
    word
}

pub fn scalar_to_word(s: &Scalar) -> [u8; 32] {
    let bytes = s.into_bigint().to_bytes_be();
    let mut word = [0u8; 32];
    word[32 - bytes.len()..].copy_from_slice(&bytes);
    word
}

/// Validate untrusted affine coordinates into a subgroup point.
///
/// The ledger's "unregistered" marker (0, 0) is not on the curve and is
/// expected to be screened out by the caller before this runs; here it
/// fails with [`CurveError::NotOnCurve`] like any other invalid pair.
pub fn point_from_coords(x: &BigUint, y: &BigUint) -> Result<Point, CurveError> {
    let x = biguint_to_base(x)?;
    let y = biguint_to_base(y)?;
    let point = Point::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(CurveError::NotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CurveError::NotInSubgroup);
    }
    Ok(point)
}

/// The ledger returns (0, 0) for addresses that never registered a key.
pub fn is_zero_pair(x: &BigUint, y: &BigUint) -> bool {
    *x == BigUint::from(0u8) && *y == BigUint::from(0u8)
}

/// `k * G` in affine form.
pub fn mul_generator(params: &ProtocolParams, k: &Scalar) -> Point {
    (params.generator.into_group() * *k).into_affine()
}
