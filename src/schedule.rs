use std::time::Duration;

/// One-shot timer driven by the frame loop.
///
/// `arm` starts a countdown, `tick` advances it by the frame time and reports
/// `true` exactly once when it runs out. A fired or cancelled timer stays idle
/// until armed again.
#[derive(Debug, Default)]
pub struct Schedule {
    remaining: Option<f32>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, delay: Duration) {
        self.remaining = Some(delay.as_secs_f32());
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.remaining = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut schedule = Schedule::new();
        schedule.arm(Duration::from_millis(2000));

        assert!(!schedule.tick(0.5));
        assert!(!schedule.tick(1.0));
        assert!(schedule.tick(0.5));
        assert!(!schedule.is_armed());
        assert!(!schedule.tick(10.0));
    }

    #[test]
    fn long_frame_fires_immediately() {
        let mut schedule = Schedule::new();
        schedule.arm(Duration::from_millis(100));
        assert!(schedule.tick(3.0));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut schedule = Schedule::new();
        schedule.arm(Duration::from_secs(1));
        schedule.cancel();
        assert!(!schedule.is_armed());
        assert!(!schedule.tick(5.0));
    }

    #[test]
    fn idle_by_default() {
        let mut schedule = Schedule::new();
        assert!(!schedule.is_armed());
        assert!(!schedule.tick(1.0));
    }

    #[test]
    fn rearm_restarts_countdown() {
        let mut schedule = Schedule::new();
        schedule.arm(Duration::from_secs(1));
        assert!(!schedule.tick(0.9));
        schedule.arm(Duration::from_secs(1));
        assert!(!schedule.tick(0.9));
        assert!(schedule.tick(0.2));
    }
}
