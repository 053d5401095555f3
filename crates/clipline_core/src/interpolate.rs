//! Linear interpolation helpers

/// A point in 2D space, `[x, y]`
pub type Point2 = [f64; 2];

/// Normalized progress of `value` from `start` to `end`.
///
/// Not clamped; values outside the bounds give results outside `[0, 1]`.
/// A zero-length range has no interior: values at or past its bound are
/// complete (`1.0`), values before it have not begun (`0.0`).
pub fn progress(value: f64, start: f64, end: f64) -> f64 {
    let length = end - start;
    if length == 0.0 {
        return if value >= start { 1.0 } else { 0.0 };
    }
    (value - start) / length
}

/// [`progress`] clamped to `[0, 1]`
pub fn progress_clamped(value: f64, start: f64, end: f64) -> f64 {
    clamp_unit(progress(value, start, end))
}

/// Clamp an interpolant to `[0, 1]`
#[inline]
pub fn clamp_unit(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Linear interpolation between `start` and `end`; `t` is used as given
#[inline]
pub fn interpolate(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Linear interpolation with `t` clamped to `[0, 1]` first
#[inline]
pub fn interpolate_clamped(start: f64, end: f64, t: f64) -> f64 {
    interpolate(start, end, clamp_unit(t))
}

/// Interpolate each coordinate of two points independently
pub fn interpolate_point(start: Point2, end: Point2, t: f64) -> Point2 {
    [
        interpolate(start[0], end[0], t),
        interpolate(start[1], end[1], t),
    ]
}

/// [`interpolate_point`] with `t` clamped to `[0, 1]`
pub fn interpolate_point_clamped(start: Point2, end: Point2, t: f64) -> Point2 {
    interpolate_point(start, end, clamp_unit(t))
}
