//! Interpolation helpers shared by the motion code.
//! All time arguments are normalized progress in 0.0–1.0.

use floem::kurbo::{Point, Rect};

/// Linear interpolation from `a` to `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Center of a laid-out rect.
pub(crate) fn rect_center(rect: Rect) -> Point {
    Point::new(rect.x0 + rect.width() / 2.0, rect.y0 + rect.height() / 2.0)
}

/// Sample a linear keyframe track at `progress`.
///
/// `values[i]` is reached at `times[i]`. Only the first
/// `min(values.len(), times.len())` pairs are used; before the first time
/// the first value holds and after the last used time the last value holds.
pub(crate) fn sample_keyframes(values: &[f64], times: &[f64], progress: f64) -> f64 {
    let n = values.len().min(times.len());
    if n == 0 {
        return 0.0;
    }
    if progress <= times[0] {
        return values[0];
    }
    if progress >= times[n - 1] {
        return values[n - 1];
    }
    for i in 1..n {
        if progress < times[i] {
            let local = (progress - times[i - 1]) / (times[i] - times[i - 1]);
            return lerp(values[i - 1], values[i], local);
        }
    }
    values[n - 1]
}
