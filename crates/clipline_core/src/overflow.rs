//! Overflow policies for in-range amounts
//!
//! An "in-amount" is how far a value has travelled into a range, measured
//! from one of its bounds. When the value lies outside the range the
//! [`OverflowBehavior`] configured for that bound decides the result.

use crate::error::RangeError;

/// How an in-amount behaves when a value lies past a bound
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum OverflowBehavior {
    /// No amount outside the range
    Reject = 0,
    /// Plain difference, may leave the range
    #[default]
    PassThrough = 1,
    /// Full range length
    Clamp = 2,
    /// Wrap the value back into the range
    Wrap = 3,
}

impl TryFrom<u8> for OverflowBehavior {
    type Error = RangeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(OverflowBehavior::Reject),
            1 => Ok(OverflowBehavior::PassThrough),
            2 => Ok(OverflowBehavior::Clamp),
            3 => Ok(OverflowBehavior::Wrap),
            other => Err(RangeError::Unimplemented(other)),
        }
    }
}

/// Wrap `value` into the half-open range `[minimum, maximum)`.
///
/// A zero-length range wraps everything onto its single point.
pub fn wrap_min_inclusive(value: f64, minimum: f64, maximum: f64) -> f64 {
    let length = maximum - minimum;
    if length <= 0.0 {
        return minimum;
    }
    minimum + (value - minimum).rem_euclid(length)
}

/// Wrap `value` into the half-open range `(minimum, maximum]`.
pub fn wrap_max_inclusive(value: f64, minimum: f64, maximum: f64) -> f64 {
    let length = maximum - minimum;
    if length <= 0.0 {
        return maximum;
    }
    maximum - (maximum - value).rem_euclid(length)
}

/// Amount `value` is in `[minimum, maximum]`, measured from the minimum bound
/// in the positive direction.
///
/// Returns `None` when the value lies past a bound whose behavior is
/// [`OverflowBehavior::Reject`].
pub fn positive_in_amount(
    value: f64,
    minimum: f64,
    maximum: f64,
    min_overflow: OverflowBehavior,
    max_overflow: OverflowBehavior,
) -> Option<f64> {
    let length = maximum - minimum;

    if value < minimum {
        return match min_overflow {
            OverflowBehavior::Reject => None,
            OverflowBehavior::PassThrough => Some(value - minimum),
            OverflowBehavior::Clamp => Some(length),
            OverflowBehavior::Wrap => Some(wrap_min_inclusive(value, minimum, maximum) - minimum),
        };
    }

    if value == minimum {
        return Some(0.0);
    }

    if value == maximum {
        return match max_overflow {
            OverflowBehavior::Wrap => Some(0.0),
            _ => Some(length),
        };
    }

    if value > maximum {
        return match max_overflow {
            OverflowBehavior::Reject => None,
            OverflowBehavior::PassThrough => Some(value - minimum),
            OverflowBehavior::Clamp => Some(length),
            OverflowBehavior::Wrap => Some(wrap_min_inclusive(value, minimum, maximum) - minimum),
        };
    }

    Some(value - minimum)
}

/// Amount `value` is in `[minimum, maximum]`, measured from the maximum bound
/// in the negative direction.
///
/// Wrapping uses the half-open range `(minimum, maximum]`. A value exactly on
/// the minimum bound is a full range length in for every behavior.
pub fn negative_in_amount(
    value: f64,
    minimum: f64,
    maximum: f64,
    min_overflow: OverflowBehavior,
    max_overflow: OverflowBehavior,
) -> Option<f64> {
    let length = maximum - minimum;

    if value > maximum {
        return match max_overflow {
            OverflowBehavior::Reject => None,
            OverflowBehavior::PassThrough => Some(maximum - value),
            OverflowBehavior::Clamp => Some(length),
            OverflowBehavior::Wrap => Some(maximum - wrap_max_inclusive(value, minimum, maximum)),
        };
    }

    if value == maximum {
        return Some(0.0);
    }

    if value == minimum {
        return Some(length);
    }

    if value < minimum {
        return match min_overflow {
            OverflowBehavior::Reject => None,
            OverflowBehavior::PassThrough => Some(maximum - value),
            OverflowBehavior::Clamp => Some(length),
            OverflowBehavior::Wrap => Some(maximum - wrap_max_inclusive(value, minimum, maximum)),
        };
    }

    Some(maximum - value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use OverflowBehavior::*;

    #[test]
    fn test_positive_in_below_minimum() {
        assert_eq!(positive_in_amount(3.0, 5.0, 10.0, Reject, Reject), None);
        assert_eq!(positive_in_amount(3.0, 5.0, 10.0, PassThrough, PassThrough), Some(-2.0));
        assert_eq!(positive_in_amount(3.0, 5.0, 10.0, Clamp, Clamp), Some(5.0));
        // 3 wraps to 8
        assert_eq!(positive_in_amount(3.0, 5.0, 10.0, Wrap, Wrap), Some(3.0));
        assert_eq!(positive_in_amount(2.0, 5.0, 10.0, Wrap, Wrap), Some(2.0));
    }

    #[test]
    fn test_positive_in_above_maximum() {
        assert_eq!(positive_in_amount(12.0, 5.0, 10.0, Reject, Reject), None);
        assert_eq!(positive_in_amount(13.0, 5.0, 10.0, PassThrough, PassThrough), Some(8.0));
        assert_eq!(positive_in_amount(12.0, 5.0, 10.0, Clamp, Clamp), Some(5.0));
        assert_eq!(positive_in_amount(12.0, 5.0, 10.0, Wrap, Wrap), Some(2.0));
    }

    #[test]
    fn test_positive_in_on_bounds() {
        for behavior in [Reject, PassThrough, Clamp, Wrap] {
            assert_eq!(positive_in_amount(5.0, 5.0, 10.0, behavior, behavior), Some(0.0));
        }
        assert_eq!(positive_in_amount(10.0, 5.0, 10.0, Reject, Reject), Some(5.0));
        assert_eq!(positive_in_amount(10.0, 5.0, 10.0, Clamp, Clamp), Some(5.0));
        assert_eq!(positive_in_amount(10.0, 5.0, 10.0, Wrap, Wrap), Some(0.0));
    }

    #[test]
    fn test_bound_behaviors_are_independent() {
        // only the crossed bound's behavior applies
        assert_eq!(positive_in_amount(3.0, 5.0, 10.0, PassThrough, Reject), Some(-2.0));
        assert_eq!(positive_in_amount(12.0, 5.0, 10.0, PassThrough, Reject), None);
        assert_eq!(negative_in_amount(12.0, 5.0, 10.0, Reject, PassThrough), Some(-2.0));
        assert_eq!(negative_in_amount(3.0, 5.0, 10.0, Reject, PassThrough), None);
    }

    #[test]
    fn test_negative_in_wrap() {
        assert_eq!(negative_in_amount(4.0, 5.0, 10.0, Wrap, Wrap), Some(1.0));
        assert_eq!(negative_in_amount(5.0, 5.0, 10.0, Wrap, Wrap), Some(5.0));
        assert_eq!(negative_in_amount(10.0, 5.0, 10.0, Wrap, Wrap), Some(0.0));
        assert_eq!(negative_in_amount(11.0, 3.0, 10.0, Wrap, Wrap), Some(6.0));
    }

    #[test]
    fn test_negative_in_outside() {
        assert_eq!(negative_in_amount(3.0, 5.0, 10.0, PassThrough, PassThrough), Some(7.0));
        assert_eq!(negative_in_amount(12.0, 5.0, 10.0, PassThrough, PassThrough), Some(-2.0));
        assert_eq!(negative_in_amount(3.0, 5.0, 10.0, Clamp, Clamp), Some(5.0));
        assert_eq!(negative_in_amount(12.0, 5.0, 10.0, Reject, Reject), None);
    }

    #[test]
    fn test_in_amounts_sum_to_length_inside() {
        for behavior in [Reject, PassThrough, Clamp, Wrap] {
            for value in [5.5, 6.0, 7.25, 9.0, 9.75] {
                let positive = positive_in_amount(value, 5.0, 10.0, behavior, behavior);
                let negative = negative_in_amount(value, 5.0, 10.0, behavior, behavior);
                assert_eq!(positive.zip(negative).map(|(p, n)| p + n), Some(5.0));
            }
            let at_min = positive_in_amount(5.0, 5.0, 10.0, behavior, behavior)
                .zip(negative_in_amount(5.0, 5.0, 10.0, behavior, behavior))
                .map(|(p, n)| p + n);
            assert_eq!(at_min, Some(5.0));
        }
    }

    #[test]
    fn test_wrap_is_periodic() {
        let base = positive_in_amount(7.0, 5.0, 10.0, Wrap, Wrap);
        for k in -3..=3 {
            let shifted = 7.0 + f64::from(k) * 5.0;
            assert_eq!(positive_in_amount(shifted, 5.0, 10.0, Wrap, Wrap), base, "k = {k}");
        }
    }

    #[test]
    fn test_wrap_zero_length_range() {
        assert_eq!(positive_in_amount(8.0, 4.0, 4.0, Wrap, Wrap), Some(0.0));
        assert_eq!(negative_in_amount(1.0, 4.0, 4.0, Wrap, Wrap), Some(0.0));
    }

    #[test]
    fn test_overflow_behavior_tags() {
        assert_eq!(OverflowBehavior::try_from(3), Ok(Wrap));
        assert_eq!(OverflowBehavior::try_from(4), Err(RangeError::Unimplemented(4)));
    }
}
