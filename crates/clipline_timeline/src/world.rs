//! A timeline's params paired with its current state

use crate::error::Result;
use crate::params::{SectionDescriptor, TimelineParams};
use crate::status::TimeStatus;
use crate::timeline::{SectionState, TimelineState};

/// Params and the latest state of one timeline.
///
/// Owns the "keep the previous state on a no-op" bookkeeping so callers
/// driving a frame loop only need to call [`TimelineWorld::advance`].
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineWorld {
    params: TimelineParams,
    state: TimelineState,
}

impl TimelineWorld {
    /// Validate descriptors and create a not-started timeline for them
    pub fn create(descriptors: &[SectionDescriptor]) -> Result<Self> {
        Ok(Self::new(TimelineParams::create(descriptors)?))
    }

    pub fn new(params: TimelineParams) -> Self {
        let state = TimelineState::create(params.len());
        Self { params, state }
    }

    pub fn params(&self) -> &TimelineParams {
        &self.params
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn status(&self) -> TimeStatus {
        self.state.status()
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    pub fn section(&self, index: usize) -> Option<&SectionState> {
        self.state.section(index)
    }

    /// Advance by `delta_time`, returning whether the state was replaced
    pub fn advance(&mut self, delta_time: f64) -> Result<bool> {
        match self.state.update(&self.params, delta_time)? {
            Some(next) => {
                self.state = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Discard progress and start over from a fresh state
    pub fn reset(&mut self) {
        self.state = TimelineState::create(self.params.len());
    }

    pub fn progress(&self, index: usize) -> Result<f64> {
        self.state.progress(&self.params, index)
    }

    pub fn progress_clamped(&self, index: usize) -> Result<f64> {
        self.state.progress_clamped(&self.params, index)
    }
}
