//! Touch momentum
//!
//! [`VelocityTracker`] estimates finger velocity while a touch moves and
//! [`Fling`] turns the release velocity into a geometrically decaying series
//! of displacements, one per fixed-interval tick.

use thumbrail_core::{Point, Vec2};

/// Fling tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingConfig {
    /// Tick interval in milliseconds
    pub interval_ms: f64,
    /// Displacement per tick = velocity (px/ms) * multiplier
    pub multiplier: f64,
    /// Velocity factor applied after each tick
    pub decay: f64,
    /// Fling stops once both velocity components are below this (px/ms)
    pub stop_threshold: f64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 10.0,
            multiplier: 30.0,
            decay: 0.8,
            stop_threshold: 0.01,
        }
    }
}

/// Frame-to-frame velocity estimate for a single touch contact
///
/// Each sample with a positive time gap replaces the estimate outright; samples
/// that arrive in the same millisecond move the contact but keep the previous
/// velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityTracker {
    last_position: Point,
    last_time: f64,
    velocity: Vec2,
}

impl VelocityTracker {
    /// Start tracking at the initial contact point
    pub fn begin(position: Point, time: f64) -> Self {
        Self {
            last_position: position,
            last_time: time,
            velocity: Vec2::ZERO,
        }
    }

    /// Record a new contact position. Returns the movement since the previous
    /// sample.
    pub fn track(&mut self, position: Point, time: f64) -> Vec2 {
        let delta = position - self.last_position;
        self.last_position = position;

        let elapsed = time - self.last_time;
        if elapsed > 0.0 {
            self.velocity = delta.scale(1.0 / elapsed);
            self.last_time = time;
        }

        delta
    }

    /// Current estimate in px/ms
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

/// Post-release momentum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling {
    velocity: Vec2,
    config: FlingConfig,
}

impl Fling {
    pub fn new(velocity: Vec2, config: FlingConfig) -> Self {
        Self { velocity, config }
    }

    /// Velocity that the next tick will use
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// True when the next tick would stop the fling
    pub fn is_settled(&self) -> bool {
        let v = self.velocity;
        if v.x == 0.0 && v.y == 0.0 {
            return true;
        }
        v.x.abs() < self.config.stop_threshold && v.y.abs() < self.config.stop_threshold
    }

    /// Advance one tick
    ///
    /// Returns the displacement to apply this tick (in px, same sign as the
    /// velocity), then decays the velocity. Returns None once settled.
    pub fn step(&mut self) -> Option<Vec2> {
        if self.is_settled() {
            return None;
        }

        let displacement = self.velocity.scale(self.config.multiplier);
        self.velocity = self.velocity.scale(self.config.decay);
        Some(displacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_replaces_previous_estimate() {
        let mut tracker = VelocityTracker::begin(Point::new(0.0, 100.0), 0.0);

        let delta = tracker.track(Point::new(0.0, 80.0), 10.0);
        assert_eq!(delta, Vec2::new(0.0, -20.0));
        assert_eq!(tracker.velocity(), Vec2::new(0.0, -2.0));

        tracker.track(Point::new(0.0, 79.0), 20.0);
        assert_eq!(tracker.velocity(), Vec2::new(0.0, -0.1));
    }

    #[test]
    fn test_same_timestamp_keeps_velocity() {
        let mut tracker = VelocityTracker::begin(Point::ZERO, 0.0);
        tracker.track(Point::new(10.0, 0.0), 5.0);
        let before = tracker.velocity();

        let delta = tracker.track(Point::new(15.0, 0.0), 5.0);
        assert_eq!(delta, Vec2::new(5.0, 0.0));
        assert_eq!(tracker.velocity(), before);
    }

    #[test]
    fn test_fling_decays_geometrically() {
        let mut fling = Fling::new(Vec2::new(0.0, 1.0), FlingConfig::default());

        let first = fling.step().unwrap();
        assert_eq!(first, Vec2::new(0.0, 30.0));
        assert!((fling.velocity().y - 0.8).abs() < 1e-12);

        let mut previous = fling.velocity().y;
        while fling.step().is_some() {
            let current = fling.velocity().y;
            assert!((current - previous * 0.8).abs() < 1e-12);
            previous = current;
        }
        assert!(fling.velocity().y.abs() < 0.01);
    }

    #[test]
    fn test_fling_terminates_within_bound() {
        let v0: f64 = 5.0;
        let mut fling = Fling::new(Vec2::new(-v0, 0.0), FlingConfig::default());

        let bound = ((0.01 / v0).ln() / 0.8f64.ln()).ceil() as usize + 1;
        let ticks = std::iter::from_fn(|| fling.step()).count();
        assert!(ticks <= bound, "{ticks} ticks exceeds bound {bound}");
        assert!(fling.is_settled());
    }

    #[test]
    fn test_zero_velocity_is_settled() {
        let mut fling = Fling::new(Vec2::ZERO, FlingConfig::default());
        assert!(fling.step().is_none());
    }
}
