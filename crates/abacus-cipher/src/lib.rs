//! Caesar cipher over ASCII letters.
//!
//! Each ASCII letter is rotated within its own case; every other character
//! passes through untouched.

pub mod caesar;
pub mod error;

pub use caesar::{caesar, decode, encode, Direction, DEFAULT_SHIFT};
pub use error::CipherError;
