//! Minimum-loss buy/sell search.
//!
//! Given a price series, find the pair of days `buy < sell` with
//! `price[buy] > price[sell]` whose loss `price[buy] - price[sell]` is the
//! smallest. Two searches are provided: an exhaustive pairwise scan and an
//! ordered-set sweep with the same minimum.

pub mod error;
pub mod scan;

pub use error::{TradeError, TradeResult};
pub use scan::{min_loss, min_loss_sorted, parse_prices, Trade};
