use thiserror::Error;

/// Returned by the non-panicking constructors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum RationalError {
    #[error("denominator is 0")]
    DivisionByZero,
    #[error("sign of the result does not fit in the integer type")]
    Overflow
}

/// Why a string could not be turned into a rational
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ParseRationalError {
    #[error("cannot parse rational from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
    #[error("missing denominator after '/'")]
    MissingDenominator,
    #[error("number too large or too small to fit in target type")]
    OutOfRange,
    #[error("denominator is 0")]
    DivisionByZero
}
impl From<RationalError> for ParseRationalError {
    fn from(err: RationalError) -> Self {
        match err {
            RationalError::DivisionByZero => ParseRationalError::DivisionByZero,
            RationalError::Overflow => ParseRationalError::OutOfRange
        }
    }
}
