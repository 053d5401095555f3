//! Clipline Core
//!
//! Numeric building blocks for tracking progress through bounded time
//! intervals:
//!
//! - **Position classification**: where a value sits relative to a closed
//!   range, in absolute or direction-relative terms
//! - **Overflow policies**: bounded "in-amounts" under reject, pass-through,
//!   clamp and wrap behaviors
//! - **Intervals**: validated, immutable ranges of the non-negative time axis
//! - **Interpolation**: linear interpolation of scalars and 2D points
//!
//! # Example
//!
//! ```rust
//! use clipline_core::{interpolate_point, Interval};
//!
//! let interval = Interval::new(1000.0, 2000.0).unwrap();
//! let t = interval.progress(1500.0);
//!
//! assert_eq!(interpolate_point([0.0, 0.0], [100.0, 100.0], t), [50.0, 50.0]);
//! ```

pub mod error;
pub mod interpolate;
pub mod overflow;
pub mod position;
pub mod range;

pub use error::{BoundKind, RangeError, Result};
pub use interpolate::{
    clamp_unit, interpolate, interpolate_clamped, interpolate_point, interpolate_point_clamped,
    progress, progress_clamped, Point2,
};
pub use overflow::{negative_in_amount, positive_in_amount, OverflowBehavior};
pub use position::{
    absolute_position, relative_position, AbsolutePosition, AxisDirection, RelativePosition,
};
pub use range::{Interval, RangeState};
