/// Eased interpolation between two scroll offsets over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: i32,
    to: i32,
    duration: f64,
}

impl ScrollAnimation {
    /// `duration` is in seconds; zero or negative snaps straight to `to`.
    pub fn new(from: i32, to: i32, duration: f64) -> Self {
        Self { from, to, duration }
    }

    pub fn target(&self) -> i32 {
        self.to
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.from == self.to || self.duration <= 0.0 || elapsed >= self.duration
    }

    /// Offset to show `elapsed` seconds after the start.
    pub fn position_at(&self, elapsed: f64) -> i32 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let t = (elapsed / self.duration).clamp(0.0, 1.0);
        let distance = (self.to - self.from) as f64;
        self.from + (distance * ease_in_out_cubic(t)).round() as i32
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Length of one bounce of the hero's scroll hint, in seconds.
pub const BOUNCE_PERIOD: f64 = 1.0;

/// Vertical offset of a bouncing hint `elapsed` seconds in: `-height` at the
/// top of each period, resting at 0 halfway through.
pub fn bounce_offset(elapsed: f64, height: i32) -> i32 {
    let phase = (elapsed / BOUNCE_PERIOD).rem_euclid(1.0);
    let lift = (2.0 * phase - 1.0).powi(2);
    -(height as f64 * lift).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let anim = ScrollAnimation::new(0, 800, 0.4);
        assert_eq!(anim.position_at(0.0), 0);
        assert_eq!(anim.position_at(0.2), 400);
        assert_eq!(anim.position_at(0.4), 800);
        assert_eq!(anim.position_at(5.0), 800);
        assert!(anim.is_finished(0.4));
        assert!(!anim.is_finished(0.39));
    }

    #[test]
    fn test_monotonic_upwards_and_downwards() {
        for (from, to) in [(0, 1200), (1500, 300)] {
            let anim = ScrollAnimation::new(from, to, 0.5);
            let samples: Vec<i32> = (0..=50).map(|i| anim.position_at(i as f64 * 0.01)).collect();
            let ordered = samples.windows(2).all(|w| if to > from { w[0] <= w[1] } else { w[0] >= w[1] });
            assert!(ordered, "{:?}", samples);
            assert_eq!(*samples.last().unwrap(), to);
        }
    }

    #[test]
    fn test_zero_duration_snaps() {
        let anim = ScrollAnimation::new(100, 900, 0.0);
        assert!(anim.is_finished(0.0));
        assert_eq!(anim.position_at(0.0), 900);
    }

    #[test]
    fn test_no_distance_is_finished() {
        let anim = ScrollAnimation::new(300, 300, 1.0);
        assert!(anim.is_finished(0.0));
        assert_eq!(anim.target(), 300);
    }

    #[test]
    fn test_bounce_rests_mid_period() {
        assert_eq!(bounce_offset(0.0, 8), -8);
        assert_eq!(bounce_offset(0.5, 8), 0);
        assert_eq!(bounce_offset(1.0, 8), -8);
        assert_eq!(bounce_offset(3.25, 8), bounce_offset(0.25, 8));
        for i in 0..100 {
            let y = bounce_offset(i as f64 * 0.013, 8);
            assert!((-8..=0).contains(&y), "{}", y);
        }
    }
}
