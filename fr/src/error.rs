use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = FieldError> = core::result::Result<T, E>;

/// Top-level error type of the crate.
///
/// Inverting zero and taking the square root of a non-residue are not
/// errors: see [`Inverse`](crate::traits::Inverse) and
/// [`Element::sqrt`](crate::Element::sqrt).
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error(transparent)]
    Parse(#[from] ParseElementError),
    #[error("randomness source failed: {0}")]
    RandomSource(String),
    #[error("can't set field element from type {0}")]
    UnsupportedInputType(&'static str),
}

pub type Error = FieldError;

/// Errors from parsing an integer literal into an
/// [`Element`](crate::Element).
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseElementError {
    #[error("cannot parse field element from empty string")]
    Empty,
    #[error("integer literal has no digits")]
    MissingDigits,
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
    #[error("misplaced underscore at byte {position}")]
    MisplacedUnderscore { position: usize },
}
