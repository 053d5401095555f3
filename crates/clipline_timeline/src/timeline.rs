//! Timeline state machine
//!
//! A timeline and each of its sections move through
//! `NotStarted -> Running -> Completed`, never backwards. Every update
//! builds a new [`TimelineState`] from the previous one; the previous value
//! is left untouched.
//!
//! Within one update the timeline clock is advanced first, and every section
//! decision is made against the advanced clock. A section whose start bound
//! is reached starts and runs in that same update, and may also complete in
//! it when the delta spans its whole duration.

use clipline_core::interpolate;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::{Result, TimelineError};
use crate::params::{RunType, SectionParams, TimelineParams};
use crate::status::{RunClock, RunState, TimeStatus};

/// Section states stored inline for typical timelines
pub type SectionStates = SmallVec<[SectionState; 8]>;

/// State for one section of a timeline
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionState {
    run: RunState,
}

impl SectionState {
    pub fn run(&self) -> RunState {
        self.run
    }

    pub fn status(&self) -> TimeStatus {
        self.run.status()
    }

    pub fn run_time(&self) -> Option<f64> {
        self.run.run_time()
    }

    pub fn run_count(&self) -> Option<u64> {
        self.run.run_count()
    }

    /// Normalized progress of the timeline clock through this section's
    /// bounds, measured by the section's run type. `None` until started.
    ///
    /// `timeline` is the clock the start and complete decisions were made
    /// against, so a section reads `0.0` on the update that starts it and
    /// `1.0` on the update that completes it. Zero-length sections report
    /// `1.0` once started.
    pub fn progress(&self, params: &SectionParams, timeline: &RunClock) -> Option<f64> {
        if self.run == RunState::NotStarted {
            return None;
        }
        let value = params.run_type().measure(timeline);
        Some(interpolate::progress(value, params.start(), params.end()))
    }

    /// [`SectionState::progress`] clamped to `[0, 1]`
    pub fn progress_clamped(&self, params: &SectionParams, timeline: &RunClock) -> Option<f64> {
        self.progress(params, timeline).map(interpolate::clamp_unit)
    }

    fn advance(
        self,
        index: usize,
        params: &SectionParams,
        timeline: &RunClock,
        delta_time: f64,
    ) -> Self {
        let clock = match self.run {
            RunState::NotStarted if params.reached(timeline, params.start()) => {
                debug!(section = index, "section started");
                RunClock::ZERO
            }
            RunState::Running(clock) => clock,
            RunState::NotStarted | RunState::Completed(_) => return self,
        };

        let mut clock = clock.advanced(delta_time);
        if params.run_type() == RunType::ByTime {
            clock.time = clock.time.min(params.end());
        }

        let run = if params.reached(timeline, params.end()) {
            debug!(
                section = index,
                run_time = clock.time,
                run_count = clock.count,
                "section completed"
            );
            RunState::Completed(clock)
        } else {
            RunState::Running(clock)
        };

        Self { run }
    }
}

/// State for a timeline, including all of its sections by index
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineState {
    run: RunState,
    sections: SectionStates,
}

impl TimelineState {
    /// Fresh timeline with `section_count` sections, all not started
    pub fn create(section_count: usize) -> Self {
        Self {
            run: RunState::NotStarted,
            sections: std::iter::repeat(SectionState::default())
                .take(section_count)
                .collect(),
        }
    }

    pub fn run(&self) -> RunState {
        self.run
    }

    pub fn status(&self) -> TimeStatus {
        self.run.status()
    }

    pub fn run_time(&self) -> Option<f64> {
        self.run.run_time()
    }

    pub fn run_count(&self) -> Option<u64> {
        self.run.run_count()
    }

    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&SectionState> {
        self.sections.get(index)
    }

    pub fn is_completed(&self) -> bool {
        self.run.is_completed()
    }

    /// Progress of the section at `index`
    pub fn progress(&self, params: &TimelineParams, index: usize) -> Result<f64> {
        let (section, section_params) = self.section_pair(params, index)?;
        self.run
            .clock()
            .and_then(|clock| section.progress(section_params, &clock))
            .ok_or(TimelineError::NotStarted { index })
    }

    /// Progress of the section at `index`, clamped to `[0, 1]`
    pub fn progress_clamped(&self, params: &TimelineParams, index: usize) -> Result<f64> {
        self.progress(params, index).map(interpolate::clamp_unit)
    }

    fn section_pair<'a>(
        &'a self,
        params: &'a TimelineParams,
        index: usize,
    ) -> Result<(&'a SectionState, &'a SectionParams)> {
        let len = self.sections.len();
        self.sections
            .get(index)
            .zip(params.section(index))
            .ok_or(TimelineError::SectionIndex { index, len })
    }

    /// Advance the timeline and all of its sections by `delta_time`.
    ///
    /// Returns `Ok(None)` when `delta_time` is zero: nothing changed and the
    /// caller keeps its current state. Otherwise returns the next state.
    pub fn update(&self, params: &TimelineParams, delta_time: f64) -> Result<Option<Self>> {
        if delta_time == 0.0 {
            return Ok(None);
        }

        if self.sections.len() != params.len() {
            return Err(TimelineError::SectionCountMismatch {
                state: self.sections.len(),
                params: params.len(),
            });
        }

        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(TimelineError::InvalidDelta(delta_time));
        }

        let clock = match self.run {
            RunState::NotStarted => {
                debug!(sections = params.len(), "timeline started");
                RunClock::ZERO.advanced(delta_time)
            }
            RunState::Running(clock) => clock.advanced(delta_time),
            RunState::Completed(clock) => clock,
        };
        trace!(run_time = clock.time, run_count = clock.count, "timeline clock");

        let sections: SectionStates = self
            .sections
            .iter()
            .zip(params.sections())
            .enumerate()
            .map(|(index, (section, section_params))| {
                section.advance(index, section_params, &clock, delta_time)
            })
            .collect();

        let all_completed = sections
            .iter()
            .all(|section| section.status() == TimeStatus::Completed);

        let run = if self.run.is_completed() {
            self.run
        } else if all_completed {
            debug!(
                run_time = clock.time,
                run_count = clock.count,
                "timeline completed"
            );
            RunState::Completed(clock)
        } else {
            RunState::Running(clock)
        };

        Ok(Some(Self { run, sections }))
    }
}
