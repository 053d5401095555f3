//! Directional time state of a section
//!
//! Given a section's bounds and an externally supplied time, describes
//! whether the time is before, inside or after the section when travelling
//! in a given direction, and how far into the section it is.

use clipline_core::{interpolate, AxisDirection, Interval, RelativePosition};

/// Whether a time has reached, is inside, or has passed a section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassStatus {
    Before,
    /// Inside the section, bounds included
    In,
    After,
}

impl From<RelativePosition> for PassStatus {
    fn from(position: RelativePosition) -> Self {
        match position {
            RelativePosition::LessThanStart => PassStatus::Before,
            RelativePosition::EqualToStart
            | RelativePosition::Between
            | RelativePosition::EqualToEnd => PassStatus::In,
            RelativePosition::GreaterThanEnd => PassStatus::After,
        }
    }
}

/// Time state of a section for a given time and direction.
///
/// Derived state, computed fresh for every query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SectionTimeState {
    pub direction: AxisDirection,
    pub position: RelativePosition,
    pub status: PassStatus,
    /// Time from the minimum bound; negative below the section
    pub positive_time: f64,
    /// Time from the maximum bound; negative above the section
    pub negative_time: f64,
    /// Time from the start bound in `direction`; negative while before,
    /// the section length once after
    pub in_time: f64,
    length: f64,
}

impl SectionTimeState {
    pub fn create(interval: &Interval, time: f64, direction: AxisDirection) -> Self {
        let position = interval.relative_position(time, direction);
        let status = PassStatus::from(position);
        let positive_time = interval.positive_in(time);
        let negative_time = interval.negative_in(time);

        let directional = match direction {
            AxisDirection::Positive => positive_time,
            AxisDirection::Negative => negative_time,
        };
        let in_time = match status {
            PassStatus::After => interval.length(),
            PassStatus::Before | PassStatus::In => directional,
        };

        Self {
            direction,
            position,
            status,
            positive_time,
            negative_time,
            in_time,
            length: interval.length(),
        }
    }

    /// Offset from the start bound in the travel direction, not clamped
    pub fn raw_in_time(&self) -> f64 {
        match self.direction {
            AxisDirection::Positive => self.positive_time,
            AxisDirection::Negative => self.negative_time,
        }
    }

    /// Normalized progress through the section, in `[0, 1]` once reached
    pub fn progress(&self) -> f64 {
        interpolate::progress(self.in_time, 0.0, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Interval {
        Interval::new(10.0, 20.0).unwrap()
    }

    fn create(time: f64, direction: AxisDirection) -> SectionTimeState {
        SectionTimeState::create(&section(), time, direction)
    }

    #[test]
    fn test_positive_direction() {
        let d = AxisDirection::Positive;

        let before = create(5.0, d);
        assert_eq!(before.status, PassStatus::Before);
        assert_eq!(before.position, RelativePosition::LessThanStart);
        assert_eq!(before.in_time, -5.0);
        assert_eq!(before.positive_time, -5.0);
        assert_eq!(before.negative_time, 15.0);

        let at_start = create(10.0, d);
        assert_eq!(at_start.status, PassStatus::In);
        assert_eq!(at_start.in_time, 0.0);

        let between = create(12.0, d);
        assert_eq!(between.status, PassStatus::In);
        assert_eq!(between.in_time, 2.0);
        assert_eq!(between.negative_time, 8.0);

        let at_end = create(20.0, d);
        assert_eq!(at_end.status, PassStatus::In);
        assert_eq!(at_end.position, RelativePosition::EqualToEnd);
        assert_eq!(at_end.in_time, 10.0);

        let after = create(25.0, d);
        assert_eq!(after.status, PassStatus::After);
        assert_eq!(after.in_time, 10.0);
        assert_eq!(after.raw_in_time(), 15.0);
        assert_eq!(after.negative_time, -5.0);
    }

    #[test]
    fn test_negative_direction() {
        let d = AxisDirection::Negative;

        let after = create(5.0, d);
        assert_eq!(after.status, PassStatus::After);
        assert_eq!(after.position, RelativePosition::GreaterThanEnd);
        assert_eq!(after.in_time, 10.0);
        assert_eq!(after.raw_in_time(), 15.0);

        let at_min = create(10.0, d);
        assert_eq!(at_min.status, PassStatus::In);
        assert_eq!(at_min.position, RelativePosition::EqualToEnd);
        assert_eq!(at_min.in_time, 10.0);

        let between = create(12.0, d);
        assert_eq!(between.in_time, 8.0);

        let at_max = create(20.0, d);
        assert_eq!(at_max.position, RelativePosition::EqualToStart);
        assert_eq!(at_max.in_time, 0.0);

        let before = create(25.0, d);
        assert_eq!(before.status, PassStatus::Before);
        assert_eq!(before.position, RelativePosition::LessThanStart);
        assert_eq!(before.in_time, -5.0);
    }

    #[test]
    fn test_progress() {
        assert_eq!(create(15.0, AxisDirection::Positive).progress(), 0.5);
        assert_eq!(create(12.0, AxisDirection::Negative).progress(), 0.8);
        assert_eq!(create(40.0, AxisDirection::Positive).progress(), 1.0);
        assert!(create(5.0, AxisDirection::Positive).progress() < 0.0);
    }

    #[test]
    fn test_zero_length_section() {
        let interval = Interval::new(3.0, 3.0).unwrap();
        let at = SectionTimeState::create(&interval, 3.0, AxisDirection::Positive);
        assert_eq!(at.status, PassStatus::In);
        assert_eq!(at.progress(), 1.0);

        let before = SectionTimeState::create(&interval, 1.0, AxisDirection::Positive);
        assert_eq!(before.progress(), 0.0);
    }
}
