//! Exponential smoothing toward a target scroll offset.

/// Remaining distance is multiplied by `exp(-CATCH_UP_RATE)` over one
/// `smooth` interval, leaving under 1% after `smooth` seconds.
const CATCH_UP_RATE: f64 = 5.0;

/// Positions closer than this to the target snap onto it.
const SNAP_DISTANCE: f64 = 0.01;

/// Follows a target offset with a catch-up time of `smooth` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroller {
    position: f64,
    target: f64,
    smooth: f64,
}

impl SmoothScroller {
    /// `smooth <= 0` disables smoothing; the position jumps to the target.
    pub fn new(smooth: f64) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            smooth: if smooth.is_finite() { smooth.max(0.0) } else { 0.0 },
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.smooth == 0.0 {
            self.position = self.target;
            return self.position;
        }

        let dt = dt.max(0.0);
        let decay = (-CATCH_UP_RATE / self.smooth * dt).exp();
        self.position = self.target + (self.position - self.target) * decay;
        if (self.position - self.target).abs() < SNAP_DISTANCE {
            self.position = self.target;
        }
        self.position
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn smooth(&self) -> f64 {
        self.smooth
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target
    }
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_smooth_is_two_seconds() {
        assert_eq!(SmoothScroller::default().smooth(), 2.0);
    }

    #[test]
    fn zero_smooth_jumps() {
        let mut s = SmoothScroller::new(0.0);
        s.set_target(500.0);
        assert_eq!(s.step(0.016), 500.0);
        assert!(s.is_settled());
    }

    #[test]
    fn negative_or_nan_smooth_disables_smoothing() {
        assert_eq!(SmoothScroller::new(-1.0).smooth(), 0.0);
        assert_eq!(SmoothScroller::new(f64::NAN).smooth(), 0.0);
    }

    #[test]
    fn approaches_target_monotonically() {
        let mut s = SmoothScroller::new(2.0);
        s.set_target(1000.0);
        let mut prev = s.position();
        for _ in 0..60 {
            let p = s.step(1.0 / 60.0);
            assert!(p > prev && p <= 1000.0);
            prev = p;
        }
    }

    #[test]
    fn mostly_caught_up_after_smooth_seconds() {
        let mut s = SmoothScroller::new(2.0);
        s.set_target(1000.0);
        for _ in 0..120 {
            s.step(1.0 / 60.0);
        }
        assert!(s.position() > 990.0, "position {}", s.position());
    }

    #[test]
    fn halfway_time_scales_with_smooth() {
        let mut fast = SmoothScroller::new(1.0);
        let mut slow = SmoothScroller::new(2.0);
        fast.set_target(100.0);
        slow.set_target(100.0);
        let f = fast.step(0.5);
        let s = slow.step(1.0);
        assert!((f - s).abs() < 1e-9);
    }

    #[test]
    fn step_is_frame_rate_independent() {
        let mut one = SmoothScroller::new(2.0);
        let mut many = SmoothScroller::new(2.0);
        one.set_target(800.0);
        many.set_target(800.0);
        one.step(0.5);
        for _ in 0..10 {
            many.step(0.05);
        }
        assert!((one.position() - many.position()).abs() < 1e-6);
    }

    #[test]
    fn snaps_when_close() {
        let mut s = SmoothScroller::new(2.0);
        s.set_target(1.0);
        for _ in 0..1000 {
            s.step(0.1);
        }
        assert!(s.is_settled());
        assert_eq!(s.position(), 1.0);
    }
}
