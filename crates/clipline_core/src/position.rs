//! Range position classification
//!
//! Classifies where a scalar value sits relative to a closed interval
//! `[minimum, maximum]`, either in absolute terms or relative to the
//! direction "forward" runs along the axis.

use crate::error::RangeError;

/// Absolute position of a value in a range of an axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum AbsolutePosition {
    LessThanMin = -2,
    EqualToMin = -1,
    Between = 0,
    EqualToMax = 1,
    GreaterThanMax = 2,
}

/// Position of a value in a range, relative to an [`AxisDirection`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum RelativePosition {
    LessThanStart = -2,
    EqualToStart = -1,
    Between = 0,
    EqualToEnd = 1,
    GreaterThanEnd = 2,
}

/// Direction on an axis
///
/// For [`AxisDirection::Negative`] the maximum bound is the start of a range
/// and the minimum bound is its end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(i8)]
pub enum AxisDirection {
    #[default]
    Positive = 1,
    Negative = -1,
}

impl AxisDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            AxisDirection::Positive => AxisDirection::Negative,
            AxisDirection::Negative => AxisDirection::Positive,
        }
    }

    /// `1.0` for positive, `-1.0` for negative
    pub fn sign(self) -> f64 {
        match self {
            AxisDirection::Positive => 1.0,
            AxisDirection::Negative => -1.0,
        }
    }
}

impl TryFrom<i8> for AxisDirection {
    type Error = RangeError;

    fn try_from(tag: i8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(AxisDirection::Positive),
            -1 => Ok(AxisDirection::Negative),
            other => Err(RangeError::InvalidState(other)),
        }
    }
}

impl AbsolutePosition {
    /// Whether the value lies inside the closed range (bounds included)
    pub fn is_inside(self) -> bool {
        matches!(
            self,
            AbsolutePosition::EqualToMin | AbsolutePosition::Between | AbsolutePosition::EqualToMax
        )
    }
}

impl RelativePosition {
    /// Whether the value lies inside the closed range (bounds included)
    pub fn is_inside(self) -> bool {
        matches!(
            self,
            RelativePosition::EqualToStart
                | RelativePosition::Between
                | RelativePosition::EqualToEnd
        )
    }

    /// The classification seen from the opposite direction
    pub fn mirrored(self) -> Self {
        match self {
            RelativePosition::LessThanStart => RelativePosition::GreaterThanEnd,
            RelativePosition::EqualToStart => RelativePosition::EqualToEnd,
            RelativePosition::Between => RelativePosition::Between,
            RelativePosition::EqualToEnd => RelativePosition::EqualToStart,
            RelativePosition::GreaterThanEnd => RelativePosition::LessThanStart,
        }
    }
}

/// Get the absolute position of `value` in `[minimum, maximum]`.
///
/// Checks are made in the order: less than minimum, equal to minimum, equal
/// to maximum, greater than maximum. For a zero-length range a value on the
/// bound is therefore `EqualToMin`.
pub fn absolute_position(value: f64, minimum: f64, maximum: f64) -> AbsolutePosition {
    if value < minimum {
        return AbsolutePosition::LessThanMin;
    }
    if value == minimum {
        return AbsolutePosition::EqualToMin;
    }
    if value == maximum {
        return AbsolutePosition::EqualToMax;
    }
    if value > maximum {
        return AbsolutePosition::GreaterThanMax;
    }
    AbsolutePosition::Between
}

/// Get the position of `value` in `[minimum, maximum]` relative to `direction`.
pub fn relative_position(
    value: f64,
    minimum: f64,
    maximum: f64,
    direction: AxisDirection,
) -> RelativePosition {
    match direction {
        AxisDirection::Positive => {
            if value < minimum {
                return RelativePosition::LessThanStart;
            }
            if value == minimum {
                return RelativePosition::EqualToStart;
            }
            if value == maximum {
                return RelativePosition::EqualToEnd;
            }
            if value > maximum {
                return RelativePosition::GreaterThanEnd;
            }
            RelativePosition::Between
        }
        AxisDirection::Negative => {
            if value < minimum {
                return RelativePosition::GreaterThanEnd;
            }
            if value == minimum {
                return RelativePosition::EqualToEnd;
            }
            if value == maximum {
                return RelativePosition::EqualToStart;
            }
            if value > maximum {
                return RelativePosition::LessThanStart;
            }
            RelativePosition::Between
        }
    }
}
