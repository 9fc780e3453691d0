//! The merge pass: concatenate, stable-sort by left edge, then a single
//! greedy scan against the last accepted interval.
//!
//! # Invariants
//!
//! - Output is sorted by left edge ascending.
//! - Every input value appears exactly once in the output, in scan order.
//! - A surviving interval keeps the positions it had on input.
//! - `output.len() == input_count - merge_events`.

use tracing::debug;

use crate::config::{MergeConfig, Validation, ZeroWidthPolicy, DEFAULT_THRESHOLD};
use crate::error::{IntervalError, IntervalResult};
use crate::interval::Interval;

/// Merge two collections with the default configuration.
///
/// Never fails: edges are not validated and zero-width spans are allowed.
pub fn merge_intervals<V>(
    a: impl IntoIterator<Item = Interval<V>>,
    b: impl IntoIterator<Item = Interval<V>>,
) -> Vec<Interval<V>> {
    scan(concat_sorted(a, b), DEFAULT_THRESHOLD).0
}

/// The output of [`IntervalMerger::merge_with_report`].
#[derive(Clone, Debug, PartialEq)]
pub struct MergeReport<V = serde_json::Value> {
    /// Merged intervals, ascending by left edge.
    pub intervals: Vec<Interval<V>>,
    /// Total number of input intervals across both collections.
    pub input_count: usize,
    /// Number of intervals absorbed into a predecessor.
    pub merge_events: usize,
}

impl<V> MergeReport<V> {
    /// Total number of values across the merged intervals.
    pub fn value_count(&self) -> usize {
        self.intervals.iter().map(Interval::value_count).sum()
    }
}

/// Merges labeled intervals according to a [`MergeConfig`].
#[derive(Clone, Debug, Default)]
pub struct IntervalMerger {
    config: MergeConfig,
}

impl IntervalMerger {
    /// Create a merger, rejecting an out-of-range threshold.
    pub fn new(config: MergeConfig) -> IntervalResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge `a` and `b` into a single ordered sequence.
    pub fn merge<V>(
        &self,
        a: impl IntoIterator<Item = Interval<V>>,
        b: impl IntoIterator<Item = Interval<V>>,
    ) -> IntervalResult<Vec<Interval<V>>> {
        Ok(self.merge_with_report(a, b)?.intervals)
    }

    /// Merge `a` and `b`, also reporting how many merge events occurred.
    ///
    /// Validation errors index into the concatenation `a ++ b`.
    pub fn merge_with_report<V>(
        &self,
        a: impl IntoIterator<Item = Interval<V>>,
        b: impl IntoIterator<Item = Interval<V>>,
    ) -> IntervalResult<MergeReport<V>> {
        let mut working: Vec<Interval<V>> = a.into_iter().chain(b).collect();
        for (index, interval) in working.iter().enumerate() {
            self.check(index, interval)?;
        }

        let input_count = working.len();
        sort_by_left(&mut working);
        let (intervals, merge_events) = scan(working, self.config.threshold);

        debug!(
            input = input_count,
            output = intervals.len(),
            merges = merge_events,
            threshold = self.config.threshold,
            "merged intervals"
        );

        Ok(MergeReport {
            intervals,
            input_count,
            merge_events,
        })
    }

    fn check<V>(&self, index: usize, interval: &Interval<V>) -> IntervalResult<()> {
        let (left, right) = interval.positions;

        if self.config.validation == Validation::Strict
            && !(left.is_finite() && right.is_finite() && left <= right)
        {
            return Err(IntervalError::InvalidInterval { index, left, right });
        }

        if self.config.zero_width == ZeroWidthPolicy::Reject && left == right {
            return Err(IntervalError::ZeroWidth {
                index,
                position: left,
            });
        }

        Ok(())
    }
}

fn concat_sorted<V>(
    a: impl IntoIterator<Item = Interval<V>>,
    b: impl IntoIterator<Item = Interval<V>>,
) -> Vec<Interval<V>> {
    let mut working: Vec<Interval<V>> = a.into_iter().chain(b).collect();
    sort_by_left(&mut working);
    working
}

/// Stable sort by left edge. `total_cmp` keeps the order total for NaN;
/// adding `0.0` folds `-0.0` into `0.0` so signed zeros stay a tie.
fn sort_by_left<V>(intervals: &mut [Interval<V>]) {
    intervals.sort_by(|x, y| (x.left() + 0.0).total_cmp(&(y.left() + 0.0)));
}

/// Greedy scan over sorted intervals. Returns the output and the number of
/// absorbed intervals.
fn scan<V>(sorted: Vec<Interval<V>>, threshold: f64) -> (Vec<Interval<V>>, usize) {
    let mut result: Vec<Interval<V>> = Vec::with_capacity(sorted.len());
    let mut merges = 0;

    for current in sorted {
        match result.last_mut() {
            Some(last) if last.should_merge(&current, threshold) => {
                debug!(
                    into_left = last.left(),
                    into_right = last.right(),
                    left = current.left(),
                    right = current.right(),
                    "absorbed interval"
                );
                last.absorb(current);
                merges += 1;
            }
            _ => result.push(current),
        }
    }

    (result, merges)
}
