use std::fmt;

use serde::{Deserialize, Serialize};

/// A labeled numeric span `[left, right]` carrying an ordered list of values.
///
/// `left <= right` is assumed but not enforced; see
/// [`Validation::Strict`](crate::Validation::Strict) for the checked path.
/// The JSON shape is `{"positions": [left, right], "values": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval<V = serde_json::Value> {
    /// The `(left, right)` edges of the span.
    pub positions: (f64, f64),
    /// Opaque payload, concatenated on merge.
    pub values: Vec<V>,
}

impl<V> Interval<V> {
    /// Create an interval from its edges and values.
    pub fn new(left: f64, right: f64, values: Vec<V>) -> Self {
        Self {
            positions: (left, right),
            values,
        }
    }

    pub fn left(&self) -> f64 {
        self.positions.0
    }

    pub fn right(&self) -> f64 {
        self.positions.1
    }

    /// `right - left`. Negative for malformed intervals.
    pub fn width(&self) -> f64 {
        self.positions.1 - self.positions.0
    }

    /// Length of the intersection with `other`.
    ///
    /// Zero or negative when the spans only touch or are disjoint.
    pub fn overlap_with<W>(&self, other: &Interval<W>) -> f64 {
        self.right().min(other.right()) - self.left().max(other.left())
    }

    /// Whether `other` should be absorbed into `self`.
    ///
    /// True when the overlap strictly exceeds `threshold` times the width
    /// of the narrower of the two spans.
    pub fn should_merge<W>(&self, other: &Interval<W>, threshold: f64) -> bool {
        let width = self.width().min(other.width());
        self.overlap_with(other) > threshold * width
    }

    /// Number of values carried.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Append the values of `other`, discarding its positions.
    pub(crate) fn absorb(&mut self, other: Interval<V>) {
        self.values.extend(other.values);
    }
}

impl<V: fmt::Debug> fmt::Display for Interval<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] {:?}",
            self.positions.0, self.positions.1, self.values
        )
    }
}
