//! Indian numbering system digit grouping.
//!
//! The rightmost three integer digits form one group and every group to the
//! left of it holds two digits, so `1234567.89` becomes `12,34,567.89`.

pub mod error;
pub mod grouping;

pub use error::{CurrencyError, CurrencyResult};
pub use grouping::{format_indian, format_indian_f64, format_indian_int};
