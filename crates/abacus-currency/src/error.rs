use thiserror::Error;

/// Errors produced while formatting a number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// The input is not a plain decimal number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// The floating-point input is NaN or infinite.
    #[error("cannot format non-finite value {0}")]
    NonFinite(String),
}

pub type CurrencyResult<T> = Result<T, CurrencyError>;
