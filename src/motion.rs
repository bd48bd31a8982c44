//! Time-parameterized motion for the picker.
//!
//! Nothing here touches the view tree. Views keep an `Instant` and ask
//! these types for the value at the elapsed time, so every curve can be
//! checked without a window.

use std::time::Duration;

use floem::kurbo::{Point, Vec2};

use crate::color::SolidColor;
use crate::constants;
use crate::math;

/// Fraction of `duration` covered by `elapsed`, clamped to 0.0–1.0.
fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// One frame of the flying dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotFrame {
    pub center: Point,
    pub scale: f64,
}

/// Jump-arc trajectory from a swatch center to the folder center.
///
/// Scale follows [`constants::FLIGHT_SCALE`]. The x and y offsets have
/// three keyframes (`0`, the arc apex, the destination) at
/// [`constants::FLIGHT_PATH_TIMES`]: the dot rises straight up for the
/// first 30% and then travels to the folder, arriving as it shrinks away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightPath {
    start: Point,
    end: Point,
    arc_height: f64,
    duration: Duration,
}

impl FlightPath {
    pub fn new(start: Point, end: Point, arc_height: f64, duration: Duration) -> Self {
        Self {
            start,
            end,
            arc_height,
            duration,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn sample(&self, elapsed: Duration) -> DotFrame {
        let t = progress(elapsed, self.duration);
        let delta = self.end - self.start;
        let xs = [0.0, 0.0, delta.x];
        let ys = [0.0, -self.arc_height, delta.y];
        let offset = Vec2::new(
            math::sample_keyframes(&xs, &constants::FLIGHT_PATH_TIMES, t),
            math::sample_keyframes(&ys, &constants::FLIGHT_PATH_TIMES, t),
        );
        DotFrame {
            center: self.start + offset,
            scale: math::sample_keyframes(&constants::FLIGHT_SCALE, &constants::FLIGHT_TIMES, t),
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Linear RGB blend between two colors over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTransition {
    from: SolidColor,
    to: SolidColor,
    duration: Duration,
}

impl ColorTransition {
    /// A transition that is already at rest on `color`.
    pub fn settled(color: SolidColor, duration: Duration) -> Self {
        Self {
            from: color,
            to: color,
            duration,
        }
    }

    pub fn target(&self) -> SolidColor {
        self.to
    }

    pub fn sample(&self, elapsed: Duration) -> SolidColor {
        self.from.mix(self.to, progress(elapsed, self.duration))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.from == self.to || elapsed >= self.duration
    }

    /// Start a new blend toward `to` from wherever this one is at `elapsed`.
    pub fn retarget(&self, elapsed: Duration, to: SolidColor) -> Self {
        Self {
            from: self.sample(elapsed),
            to,
            duration: self.duration,
        }
    }
}

/// Linear move of a scalar, e.g. a swatch's hover scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
}

impl Tween {
    pub fn settled(value: f64, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn sample(&self, elapsed: Duration) -> f64 {
        math::lerp(self.from, self.to, progress(elapsed, self.duration))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.from == self.to || elapsed >= self.duration
    }

    /// Start a new move toward `to` from the value shown at `elapsed`.
    pub fn retarget(&self, elapsed: Duration, to: f64) -> Self {
        Self {
            from: self.sample(elapsed),
            to,
            duration: self.duration,
        }
    }
}

/// Largest step fed to the spring integrator; longer frame gaps are split.
const MAX_SPRING_STEP: f64 = 1.0 / 60.0;

/// Damped spring that moves a point toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    current: Point,
    target: Point,
    velocity: Vec2,
    stiffness: f64,
    damping: f64,
    mass: f64,
    threshold: f64,
    settled: bool,
}

impl Spring {
    pub fn new(at: Point, stiffness: f64, damping: f64) -> Self {
        Self {
            current: at,
            target: at,
            velocity: Vec2::ZERO,
            stiffness,
            damping,
            mass: 1.0,
            threshold: 0.01,
            settled: true,
        }
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn set_target(&mut self, target: Point) {
        if target != self.target {
            self.target = target;
            self.settled = false;
        }
    }

    /// Jump to `at` with no motion.
    pub fn snap(&mut self, at: Point) {
        self.current = at;
        self.target = at;
        self.velocity = Vec2::ZERO;
        self.settled = true;
    }

    /// Advance by `delta` and return the new position.
    pub fn tick(&mut self, delta: Duration) -> Point {
        let mut remaining = delta.as_secs_f64();
        while !self.settled && remaining > 0.0 {
            let dt = remaining.min(MAX_SPRING_STEP);
            remaining -= dt;
            self.step(dt);
        }
        self.current
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.current - self.target;
        let force = displacement * -self.stiffness - self.velocity * self.damping;
        let acceleration = force / self.mass;

        // Semi-implicit Euler
        self.velocity += acceleration * dt;
        self.current += self.velocity * dt;

        let remaining = self.current - self.target;
        if remaining.hypot() < self.threshold && self.velocity.hypot() < self.threshold {
            self.snap(self.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn path() -> FlightPath {
        FlightPath::new(
            Point::new(100.0, 400.0),
            Point::new(300.0, 150.0),
            100.0,
            ms(500),
        )
    }

    #[test]
    fn dot_grows_holds_and_shrinks() {
        let p = path();
        assert_eq!(p.sample(ms(0)).scale, 0.0);
        assert_eq!(p.sample(ms(150)).scale, 1.0);
        assert_eq!(p.sample(ms(250)).scale, 1.0);
        assert_eq!(p.sample(ms(350)).scale, 1.0);
        assert_eq!(p.sample(ms(500)).scale, 0.0);
        assert!((p.sample(ms(75)).scale - 0.5).abs() < 1e-9);
    }

    #[test]
    fn dot_jumps_before_travelling() {
        let p = path();
        let apex = p.sample(ms(150));
        assert_eq!(apex.center, Point::new(100.0, 300.0));

        // Still on the way at 70%: 4/7 of the apex-to-folder leg is done.
        let travelling = p.sample(ms(350));
        let leg = 4.0 / 7.0;
        assert!((travelling.center.x - (100.0 + 200.0 * leg)).abs() < 1e-9);
        assert!((travelling.center.y - (300.0 - 150.0 * leg)).abs() < 1e-9);
        assert!((travelling.center.x - 214.2857).abs() < 1e-3);
        assert!((travelling.center.y - 214.2857).abs() < 1e-3);

        assert_eq!(p.sample(ms(500)).center, Point::new(300.0, 150.0));

        let rising = p.sample(ms(75));
        assert_eq!(rising.center.x, 100.0);
        assert!((rising.center.y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn flight_finishes_at_its_duration() {
        let p = path();
        assert!(!p.is_finished(ms(499)));
        assert!(p.is_finished(ms(500)));
        assert_eq!(p.sample(ms(900)), p.sample(ms(500)));
    }

    #[test]
    fn color_transition_blends_linearly() {
        let red = SolidColor::from_rgb(255, 0, 0);
        let blue = SolidColor::from_rgb(0, 0, 255);
        let t = ColorTransition::settled(red, ms(300)).retarget(ms(0), blue);
        assert_eq!(t.sample(ms(0)), red);
        assert_eq!(t.sample(ms(300)), blue);
        assert!(!t.is_finished(ms(150)));
        assert!(t.is_finished(ms(300)));
        let mid = t.sample(ms(150));
        assert!((mid.r() - 0.5).abs() < 1e-9 && (mid.b() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn retarget_starts_from_displayed_color() {
        let red = SolidColor::from_rgb(255, 0, 0);
        let blue = SolidColor::from_rgb(0, 0, 255);
        let green = SolidColor::from_rgb(0, 255, 0);
        let first = ColorTransition::settled(red, ms(300)).retarget(ms(0), blue);
        let shown = first.sample(ms(150));
        let second = first.retarget(ms(150), green);
        assert_eq!(second.sample(ms(0)), shown);
        assert_eq!(second.target(), green);
    }

    #[test]
    fn settled_transition_is_finished() {
        let c = SolidColor::from_rgb(1, 2, 3);
        assert!(ColorTransition::settled(c, ms(300)).is_finished(ms(0)));
    }

    #[test]
    fn dot_arrives_only_at_the_end() {
        let p = path();
        let end = p.end();
        for millis in [200, 300, 400, 450, 490] {
            assert_ne!(p.sample(ms(millis)).center, end, "landed early at {millis}ms");
        }
        let late = p.sample(ms(490)).center;
        assert!((late - end).hypot() < 10.0);
    }

    #[test]
    fn tween_eases_and_retargets_midway() {
        let hover = Tween::settled(1.0, ms(150)).retarget(ms(0), 1.1);
        assert_eq!(hover.sample(ms(0)), 1.0);
        assert!((hover.sample(ms(75)) - 1.05).abs() < 1e-9);
        assert_eq!(hover.sample(ms(150)), 1.1);
        assert!(!hover.is_finished(ms(100)));
        assert!(hover.is_finished(ms(150)));

        let press = hover.retarget(ms(75), 0.95);
        assert!((press.sample(ms(0)) - 1.05).abs() < 1e-9);
        assert_eq!(press.target(), 0.95);
        assert!(Tween::settled(1.0, ms(150)).is_finished(ms(0)));
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::new(Point::new(0.0, 0.0), 300.0, 30.0);
        assert!(spring.is_settled());
        spring.set_target(Point::new(48.0, 0.0));
        assert!(!spring.is_settled());

        spring.tick(ms(16));
        assert!(spring.current().x > 0.0 && spring.current().x < 48.0);

        for _ in 0..200 {
            spring.tick(ms(16));
        }
        assert!(spring.is_settled());
        assert_eq!(spring.current(), Point::new(48.0, 0.0));
    }

    #[test]
    fn long_frame_gaps_stay_stable() {
        let mut spring = Spring::new(Point::new(0.0, 0.0), 300.0, 30.0);
        spring.set_target(Point::new(0.0, 96.0));
        spring.tick(Duration::from_secs(5));
        assert!(spring.is_settled());
        assert_eq!(spring.current(), Point::new(0.0, 96.0));
    }
}
