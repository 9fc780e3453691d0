use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TradeError, TradeResult};

/// A loss-making buy/sell pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trade {
    /// Index of the buy day.
    pub buy_index: usize,
    /// Index of the sell day. Always greater than `buy_index`.
    pub sell_index: usize,
    pub buy: i64,
    pub sell: i64,
    /// `buy - sell`, always positive.
    pub loss: u64,
}

impl Trade {
    fn new(prices: &[i64], buy_index: usize, sell_index: usize) -> Self {
        let (buy, sell) = (prices[buy_index], prices[sell_index]);
        Self {
            buy_index,
            sell_index,
            buy,
            sell,
            loss: buy.abs_diff(sell),
        }
    }
}

/// Exhaustive O(n²) search over every pair `i < j`.
///
/// Returns `None` when no later price is strictly lower than an earlier
/// one. Among pairs with equal loss, the first in `(i, j)` order wins.
pub fn min_loss(prices: &[i64]) -> Option<Trade> {
    let mut best: Option<Trade> = None;

    for (i, &buy) in prices.iter().enumerate() {
        for (j, &sell) in prices.iter().enumerate().skip(i + 1) {
            if buy <= sell {
                continue;
            }
            let loss = buy.abs_diff(sell);
            if best.map_or(true, |b| loss < b.loss) {
                best = Some(Trade::new(prices, i, j));
            }
        }
    }

    debug!(days = prices.len(), found = best.is_some(), "pairwise loss scan");
    best
}

/// O(n log n) sweep keeping earlier prices in an ordered map.
///
/// For each sell day the cheapest earlier price still above it is the best
/// buy. Ties on loss resolve to the smallest `(buy_index, sell_index)`, so
/// the result is identical to [`min_loss`].
pub fn min_loss_sorted(prices: &[i64]) -> Option<Trade> {
    // price -> earliest day it was seen
    let mut seen: BTreeMap<i64, usize> = BTreeMap::new();
    let mut best: Option<Trade> = None;

    for (j, &sell) in prices.iter().enumerate() {
        if let Some((&buy, &i)) = seen.range((Excluded(sell), Unbounded)).next() {
            let loss = buy.abs_diff(sell);
            // j only grows, so an earlier buy day is the only way to win a tie
            if best.map_or(true, |b| loss < b.loss || (loss == b.loss && i < b.buy_index)) {
                best = Some(Trade::new(prices, i, j));
            }
        }
        seen.entry(sell).or_insert(j);
    }

    debug!(days = prices.len(), found = best.is_some(), "ordered loss sweep");
    best
}

/// Parse whitespace-separated integer prices.
pub fn parse_prices(input: &str) -> TradeResult<Vec<i64>> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| TradeError::InvalidPrice {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}
