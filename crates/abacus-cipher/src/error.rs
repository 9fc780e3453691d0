use thiserror::Error;

/// Errors produced by cipher operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("unknown cipher direction: {0} (expected \"encode\" or \"decode\")")]
    UnknownDirection(String),
}
