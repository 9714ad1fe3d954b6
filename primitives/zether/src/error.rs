use thiserror::Error;

/// Failures of curve-level input validation.
///
/// These are fatal: a value that fails here never entered the group, so
/// there is nothing to retry and no sentinel result to fall back to.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
    #[error("coordinate exceeds the base field modulus")]
    CoordinateOutOfRange,
    #[error("scalar exceeds the subgroup order")]
    ScalarOutOfRange,
}
