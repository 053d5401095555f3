//! Run status shared by timelines and their sections

/// Lifecycle status of a timeline or section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeStatus {
    #[default]
    NotStarted,
    Running,
    Completed,
}

/// Accumulated run time and run count (update calls, i.e. frames)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunClock {
    pub time: f64,
    pub count: u64,
}

impl RunClock {
    pub const ZERO: RunClock = RunClock { time: 0.0, count: 0 };

    /// Clock after one more update of `delta_time`
    pub fn advanced(self, delta_time: f64) -> Self {
        Self {
            time: self.time + delta_time,
            count: self.count + 1,
        }
    }
}

/// Status together with the run clock it carries.
///
/// A clock exists exactly when the object has started, so run time and run
/// count are either both absent or both present.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunState {
    #[default]
    NotStarted,
    Running(RunClock),
    Completed(RunClock),
}

impl RunState {
    pub fn status(&self) -> TimeStatus {
        match self {
            RunState::NotStarted => TimeStatus::NotStarted,
            RunState::Running(_) => TimeStatus::Running,
            RunState::Completed(_) => TimeStatus::Completed,
        }
    }

    pub fn clock(&self) -> Option<RunClock> {
        match self {
            RunState::NotStarted => None,
            RunState::Running(clock) | RunState::Completed(clock) => Some(*clock),
        }
    }

    pub fn run_time(&self) -> Option<f64> {
        self.clock().map(|clock| clock.time)
    }

    pub fn run_count(&self) -> Option<u64> {
        self.clock().map(|clock| clock.count)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunState::Completed(_))
    }
}
