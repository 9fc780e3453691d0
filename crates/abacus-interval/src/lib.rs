//! Overlap-ratio merging of labeled numeric intervals.
//!
//! Two unordered collections of intervals are concatenated, stably sorted by
//! their left edge, and scanned once. Each interval is either absorbed into
//! the most recently accepted interval (when their overlap strictly exceeds
//! a fraction of the narrower width) or becomes the new accepted interval.
//!
//! # Key Types
//!
//! - [`Interval`] -- A `[left, right]` span with an ordered list of values
//! - [`IntervalMerger`] -- Configured merger producing the merged sequence
//! - [`MergeConfig`] -- Threshold, validation and zero-width policy
//! - [`MergeReport`] -- Merged output plus merge statistics

pub mod config;
pub mod error;
pub mod interval;
pub mod merge;

pub use config::{MergeConfig, Validation, ZeroWidthPolicy, DEFAULT_THRESHOLD};
pub use error::{IntervalError, IntervalResult};
pub use interval::Interval;
pub use merge::{merge_intervals, IntervalMerger, MergeReport};
