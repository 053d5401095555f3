//! Timeline parameters
//!
//! Parameters are validated once when a timeline is set up and never change
//! afterwards; every update call borrows them.

use clipline_core::Interval;

use crate::error::{Result, TimelineError};
use crate::status::RunClock;

/// Which accumulated value a section's bounds are compared against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunType {
    /// Bounds are in units of run time
    #[default]
    ByTime,
    /// Bounds are in units of update calls
    ByCount,
}

impl RunType {
    /// Read the value this run type measures from a clock
    pub fn measure(self, clock: &RunClock) -> f64 {
        match self {
            RunType::ByTime => clock.time,
            RunType::ByCount => clock.count as f64,
        }
    }
}

/// Unvalidated description of one section, as supplied by callers
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionDescriptor {
    #[cfg_attr(feature = "serde", serde(default))]
    pub run_type: RunType,
    /// Timeline value at which the section starts
    pub start: f64,
    /// Timeline value at which the section completes
    pub end: f64,
}

impl SectionDescriptor {
    pub fn by_time(start: f64, end: f64) -> Self {
        Self {
            run_type: RunType::ByTime,
            start,
            end,
        }
    }

    pub fn by_count(start: f64, end: f64) -> Self {
        Self {
            run_type: RunType::ByCount,
            start,
            end,
        }
    }
}

/// Validated parameters for one section
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SectionParams {
    run_type: RunType,
    bounds: Interval,
}

impl SectionParams {
    pub fn new(run_type: RunType, start: f64, end: f64) -> clipline_core::Result<Self> {
        Ok(Self {
            run_type,
            bounds: Interval::new(start, end)?,
        })
    }

    pub fn run_type(&self) -> RunType {
        self.run_type
    }

    pub fn bounds(&self) -> &Interval {
        &self.bounds
    }

    pub fn start(&self) -> f64 {
        self.bounds.minimum()
    }

    pub fn end(&self) -> f64 {
        self.bounds.maximum()
    }

    /// Whether the measured value of `clock` has reached `bound`
    pub(crate) fn reached(&self, clock: &RunClock, bound: f64) -> bool {
        self.run_type.measure(clock) >= bound
    }
}

impl TryFrom<SectionDescriptor> for SectionParams {
    type Error = clipline_core::RangeError;

    fn try_from(descriptor: SectionDescriptor) -> std::result::Result<Self, Self::Error> {
        SectionParams::new(descriptor.run_type, descriptor.start, descriptor.end)
    }
}

/// Parameters for a timeline: its sections, by index
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimelineParams {
    sections: Vec<SectionParams>,
}

impl TimelineParams {
    /// Validate descriptors and build params.
    ///
    /// Fails on the first invalid descriptor, reporting its index.
    pub fn create(descriptors: &[SectionDescriptor]) -> Result<Self> {
        let sections = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| {
                SectionParams::try_from(*descriptor)
                    .map_err(|source| TimelineError::InvalidSection { index, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { sections })
    }

    /// Build params from already validated sections
    pub fn new(sections: Vec<SectionParams>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[SectionParams] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&SectionParams> {
        self.sections.get(index)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
