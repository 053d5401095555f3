//! Clipline Timeline
//!
//! Tracks progress of bounded sections against a clock the caller supplies.
//!
//! # Features
//!
//! - **Section time state**: before/in/after classification and signed
//!   offsets for a section at a given time and direction
//! - **Timeline state machine**: advances any number of independently timed
//!   sections together, by run time or by update count
//! - **Immutable updates**: every update returns a new state; a zero delta is
//!   reported as "nothing changed"
//! - **Runtime**: a registry that drives many independent timelines
//!
//! # Example
//!
//! ```rust
//! use clipline_timeline::{SectionDescriptor, TimeStatus, TimelineParams, TimelineState};
//!
//! let params = TimelineParams::create(&[
//!     SectionDescriptor::by_time(0.0, 1.0),
//!     SectionDescriptor::by_time(1.0, 2.0),
//! ])
//! .unwrap();
//!
//! let state = TimelineState::create(params.len());
//! let state = state.update(&params, 1.0).unwrap().unwrap();
//!
//! assert_eq!(state.sections()[0].status(), TimeStatus::Completed);
//! assert_eq!(state.sections()[1].status(), TimeStatus::Running);
//! assert_eq!(state.status(), TimeStatus::Running);
//! ```

pub mod error;
pub mod params;
pub mod runtime;
pub mod section;
pub mod status;
pub mod timeline;
pub mod world;

pub use error::{Result, TimelineError};
pub use params::{RunType, SectionDescriptor, SectionParams, TimelineParams};
pub use runtime::{TimelineId, TimelineRuntime};
pub use section::{PassStatus, SectionTimeState};
pub use status::{RunClock, RunState, TimeStatus};
pub use timeline::{SectionState, SectionStates, TimelineState};
pub use world::TimelineWorld;
