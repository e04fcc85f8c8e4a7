//! Pointer tracker: critically-damped spring toward the latest pointer cell
//!
//! Raw positions set the spring target; the spring advances once per frame.
//! Critical damping reaches the target as fast as possible without
//! overshooting, so the cursor dot trails the pointer instead of jittering
//! with it.

use super::Derivation;
use std::time::Duration;

/// Below this distance and speed the spring snaps to rest
const REST_EPSILON: f64 = 0.01;

/// Position in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One spring per axis, sharing the same natural frequency
#[derive(Debug, Clone, Copy, Default)]
struct Axis {
    position: f64,
    velocity: f64,
    target: f64,
}

impl Axis {
    /// Closed-form critically damped step; stable for any dt
    fn advance(&mut self, omega: f64, dt: f64) -> bool {
        let displacement = self.position - self.target;
        if displacement.abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON {
            let moved = self.position != self.target;
            self.position = self.target;
            self.velocity = 0.0;
            return moved;
        }

        let decay = (-omega * dt).exp();
        let k = self.velocity + omega * displacement;
        let next_displacement = (displacement + k * dt) * decay;
        self.velocity = (self.velocity - omega * k * dt) * decay;
        self.position = self.target + next_displacement;
        true
    }
}

/// Spring smoothing for the cursor indicator
#[derive(Debug, Clone)]
pub struct PointerSpring {
    x: Axis,
    y: Axis,
    /// Natural frequency sqrt(stiffness / mass)
    omega: f64,
    /// Whether a real pointer sample has arrived yet
    seen: bool,
}

impl PointerSpring {
    /// Unit mass; damping is fixed at critical for the given stiffness
    pub fn new(stiffness: f64) -> Self {
        Self {
            x: Axis::default(),
            y: Axis::default(),
            omega: stiffness.max(f64::EPSILON).sqrt(),
            seen: false,
        }
    }

    /// Whether the pointer has been observed over the terminal
    pub fn has_pointer(&self) -> bool {
        self.seen
    }

    /// Drop the last known position. The next sample snaps again, so a
    /// position from before a gap in sampling is never animated away from.
    pub fn forget(&mut self) {
        self.seen = false;
        self.x.velocity = 0.0;
        self.y.velocity = 0.0;
    }

    #[cfg(test)]
    fn is_at_rest(&self) -> bool {
        self.x.position == self.x.target
            && self.y.position == self.y.target
            && self.x.velocity == 0.0
            && self.y.velocity == 0.0
    }

    fn position(&self) -> Point {
        Point::new(self.x.position, self.y.position)
    }
}

impl Derivation for PointerSpring {
    type Raw = Option<Point>;
    type Output = Point;

    fn derive(&mut self, raw: Option<Point>) -> Point {
        let Some(target) = raw else {
            return self.position();
        };

        if !self.seen {
            // First sighting: start at the pointer rather than sweeping in from the origin
            self.seen = true;
            self.x = Axis {
                position: target.x,
                velocity: 0.0,
                target: target.x,
            };
            self.y = Axis {
                position: target.y,
                velocity: 0.0,
                target: target.y,
            };
        } else {
            self.x.target = target.x;
            self.y.target = target.y;
        }
        self.position()
    }

    fn advance(&mut self, dt: Duration) -> Option<Point> {
        let dt = dt.as_secs_f64();
        if dt <= 0.0 {
            return None;
        }
        let moved_x = self.x.advance(self.omega, dt);
        let moved_y = self.y.advance(self.omega, dt);
        (moved_x || moved_y).then(|| self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_first_sample_snaps() {
        let mut spring = PointerSpring::new(200.0);
        assert!(!spring.has_pointer());
        let p = spring.derive(Some(Point::new(40.0, 12.0)));
        assert_eq!(p, Point::new(40.0, 12.0));
        assert!(spring.has_pointer());
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_no_sample_keeps_origin() {
        let mut spring = PointerSpring::new(200.0);
        assert_eq!(spring.derive(None), Point::default());
        assert!(!spring.has_pointer());
    }

    #[test]
    fn test_spring_converges_without_overshoot() {
        let mut spring = PointerSpring::new(200.0);
        spring.derive(Some(Point::new(0.0, 0.0)));
        spring.derive(Some(Point::new(100.0, 50.0)));

        let mut last_x = 0.0;
        for _ in 0..120 {
            if let Some(p) = spring.advance(FRAME) {
                assert!(p.x >= last_x, "x moved backwards: {} < {}", p.x, last_x);
                assert!(p.x <= 100.0, "overshoot: {}", p.x);
                assert!(p.y <= 50.0, "overshoot: {}", p.y);
                last_x = p.x;
            }
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_spring_lags_raw_input() {
        let mut spring = PointerSpring::new(200.0);
        spring.derive(Some(Point::new(0.0, 0.0)));
        let p = spring.derive(Some(Point::new(80.0, 0.0)));
        // Target moved but position has not advanced yet
        assert_eq!(p.x, 0.0);

        let p = spring.advance(FRAME).expect("spring should move");
        assert!(p.x > 0.0 && p.x < 80.0);
    }

    #[test]
    fn test_retarget_mid_flight_stays_bounded() {
        let mut spring = PointerSpring::new(200.0);
        spring.derive(Some(Point::new(0.0, 0.0)));
        spring.derive(Some(Point::new(100.0, 0.0)));
        for _ in 0..5 {
            spring.advance(FRAME);
        }
        spring.derive(Some(Point::new(20.0, 0.0)));
        for _ in 0..200 {
            spring.advance(FRAME);
        }
        assert!((spring.position().x - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_forget_snaps_on_next_sample() {
        let mut spring = PointerSpring::new(200.0);
        spring.derive(Some(Point::new(0.0, 0.0)));
        spring.derive(Some(Point::new(100.0, 0.0)));
        spring.advance(FRAME);

        spring.forget();
        assert!(!spring.has_pointer());
        let p = spring.derive(Some(Point::new(30.0, 7.0)));
        assert_eq!(p, Point::new(30.0, 7.0));
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_at_rest_reports_no_motion() {
        let mut spring = PointerSpring::new(200.0);
        spring.derive(Some(Point::new(5.0, 5.0)));
        assert_eq!(spring.advance(FRAME), None);
        assert_eq!(spring.advance(Duration::ZERO), None);
    }
}
