use thiserror::Error;

/// Errors produced while reading a price series.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TradeError {
    #[error("invalid price {token:?} at position {position}")]
    InvalidPrice { position: usize, token: String },
}

pub type TradeResult<T> = Result<T, TradeError>;
