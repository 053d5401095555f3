//! Validated ranges on the time axis

use crate::error::{BoundKind, RangeError, Result};
use crate::interpolate;
use crate::overflow::{self, OverflowBehavior};
use crate::position::{self, AbsolutePosition, AxisDirection, RelativePosition};

/// A closed range `[minimum, maximum]` of the non-negative time axis.
///
/// Both bounds are finite and non-negative, and `minimum <= maximum`. The
/// bounds cannot change after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    minimum: f64,
    maximum: f64,
}

impl Interval {
    /// Create an interval, validating both bounds
    pub fn new(minimum: f64, maximum: f64) -> Result<Self> {
        validate_bound(BoundKind::Minimum, minimum)?;
        validate_bound(BoundKind::Maximum, maximum)?;

        if maximum < minimum {
            return Err(RangeError::Inverted { minimum, maximum });
        }

        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Bound where the range starts when travelling in `direction`
    pub fn start(&self, direction: AxisDirection) -> f64 {
        match direction {
            AxisDirection::Positive => self.minimum,
            AxisDirection::Negative => self.maximum,
        }
    }

    /// Bound where the range ends when travelling in `direction`
    pub fn end(&self, direction: AxisDirection) -> f64 {
        self.start(direction.reversed())
    }

    pub fn length(&self) -> f64 {
        self.maximum - self.minimum
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0.0
    }

    /// Whether `value` lies inside the range, bounds included
    pub fn contains(&self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    pub fn absolute_position(&self, value: f64) -> AbsolutePosition {
        position::absolute_position(value, self.minimum, self.maximum)
    }

    pub fn relative_position(&self, value: f64, direction: AxisDirection) -> RelativePosition {
        position::relative_position(value, self.minimum, self.maximum, direction)
    }

    /// Amount `value` is in the range measured from the minimum bound, unbounded
    pub fn positive_in(&self, value: f64) -> f64 {
        value - self.minimum
    }

    /// Amount `value` is in the range measured from the maximum bound, unbounded
    pub fn negative_in(&self, value: f64) -> f64 {
        self.maximum - value
    }

    /// See [`overflow::positive_in_amount`]
    pub fn positive_in_with(
        &self,
        value: f64,
        min_overflow: OverflowBehavior,
        max_overflow: OverflowBehavior,
    ) -> Option<f64> {
        overflow::positive_in_amount(value, self.minimum, self.maximum, min_overflow, max_overflow)
    }

    /// See [`overflow::negative_in_amount`]
    pub fn negative_in_with(
        &self,
        value: f64,
        min_overflow: OverflowBehavior,
        max_overflow: OverflowBehavior,
    ) -> Option<f64> {
        overflow::negative_in_amount(value, self.minimum, self.maximum, min_overflow, max_overflow)
    }

    /// Normalized progress of `value` through the range, unclamped.
    ///
    /// See [`interpolate::progress`] for the zero-length case.
    pub fn progress(&self, value: f64) -> f64 {
        interpolate::progress(value, self.minimum, self.maximum)
    }
}

fn validate_bound(bound: BoundKind, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(RangeError::NaN { bound });
    }
    if !value.is_finite() {
        return Err(RangeError::NonFinite { bound, value });
    }
    if value < 0.0 {
        return Err(RangeError::Negative { bound, value });
    }
    Ok(())
}

/// Where a value sits in an [`Interval`], without a direction.
///
/// Derived state, computed fresh for every query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeState {
    pub position: AbsolutePosition,
    /// Distance from the minimum bound; negative below the range
    pub in_positive: f64,
    /// Distance from the maximum bound; negative above the range
    pub in_negative: f64,
}

impl RangeState {
    pub fn new(interval: &Interval, value: f64) -> Self {
        Self {
            position: interval.absolute_position(value),
            in_positive: interval.positive_in(value),
            in_negative: interval.negative_in(value),
        }
    }
}
