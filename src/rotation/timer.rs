use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A recurring deadline driven by frame time.
///
/// Nothing fires on its own: the owner feeds elapsed time through `tick`
/// and gets back how many whole periods went by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAdvance {
    period: Duration,
    elapsed: Duration,
}

impl AutoAdvance {
    /// `period` must be non-zero.
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Self { period, elapsed: Duration::ZERO }
    }

    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Whole periods elapsed, saturating at `u32::MAX` for absurdly long frames.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.period {
            return 0;
        }
        let elapsed = self.elapsed.as_nanos();
        let period = self.period.as_nanos();
        let rest = elapsed % period;
        self.elapsed = Duration::new((rest / NANOS_PER_SEC) as u64, (rest % NANOS_PER_SEC) as u32);
        u32::try_from(elapsed / period).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = AutoAdvance::new(Duration::from_millis(5500));
        assert_eq!(timer.tick(Duration::from_millis(5499)), 0);
        assert_eq!(timer.tick(Duration::from_millis(1)), 1);
        assert_eq!(timer.tick(Duration::from_millis(5499)), 0);
    }

    #[test]
    fn test_long_frame_fires_multiple_times() {
        let mut timer = AutoAdvance::new(Duration::from_secs(2));
        assert_eq!(timer.tick(Duration::from_millis(4500)), 2);
        assert_eq!(timer.tick(Duration::from_millis(1499)), 0);
        assert_eq!(timer.tick(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_restart_discards_elapsed_time() {
        let mut timer = AutoAdvance::new(Duration::from_secs(1));
        timer.tick(Duration::from_millis(900));
        timer.restart();
        assert_eq!(timer.tick(Duration::from_millis(900)), 0);
        assert_eq!(timer.tick(Duration::from_millis(100)), 1);
    }

    #[test]
    fn test_tiny_period_with_long_frame_saturates() {
        let mut timer = AutoAdvance::new(Duration::from_nanos(1));
        assert_eq!(timer.tick(Duration::from_secs(5)), u32::MAX);
        assert_eq!(timer.tick(Duration::from_nanos(3)), 3);
    }

    #[test]
    fn test_remainder_carries_into_next_tick() {
        let mut timer = AutoAdvance::new(Duration::from_millis(3));
        assert_eq!(timer.tick(Duration::from_millis(7)), 2);
        assert_eq!(timer.tick(Duration::from_millis(1)), 0);
        assert_eq!(timer.tick(Duration::from_millis(1)), 1);
    }
}
