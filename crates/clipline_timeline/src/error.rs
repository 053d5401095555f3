//! Timeline error types

use clipline_core::RangeError;
use thiserror::Error;

use crate::runtime::TimelineId;

/// Timeline-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// A section descriptor has invalid bounds
    #[error("Invalid section at index {index}: {source}")]
    InvalidSection {
        index: usize,
        #[source]
        source: RangeError,
    },

    /// State and params disagree on the number of sections
    #[error("Section count mismatch: state has {state} sections, params has {params}")]
    SectionCountMismatch { state: usize, params: usize },

    /// Time delta is negative, NaN or infinite
    #[error("Invalid time delta: {0}")]
    InvalidDelta(f64),

    /// Section index past the end of the timeline
    #[error("Section index {index} out of range for {len} sections")]
    SectionIndex { index: usize, len: usize },

    /// Section has no run clock yet
    #[error("Section {index} has not started")]
    NotStarted { index: usize },

    /// Handle does not refer to a live timeline
    #[error("Unknown timeline: {0:?}")]
    UnknownTimeline(TimelineId),
}

/// Result type for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
