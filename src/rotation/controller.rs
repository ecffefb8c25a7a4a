use std::time::Duration;
use tracing::{debug, trace};

use crate::error::RotationError;
use crate::rotation::state::Rotation;
use crate::rotation::timer::AutoAdvance;

/// Keeps exactly one item of a fixed sequence active and moves between
/// items on a schedule or on demand.
///
/// The schedule is cooperative: the owner calls [`tick`](Self::tick) once per
/// frame. At most one auto-advance timer exists at any time and it never
/// outlives the controller.
pub struct RotationController<T> {
    items: Vec<T>,
    rotation: Rotation,
    period: Duration,
    timer: Option<AutoAdvance>,
    reset_on_interaction: bool,
}

impl<T> RotationController<T> {
    pub fn new(items: Vec<T>, period: Duration) -> Result<Self, RotationError> {
        if period.is_zero() {
            return Err(RotationError::ZeroPeriod);
        }
        let rotation = Rotation::new(items.len())?;
        Ok(Self {
            items,
            rotation,
            period,
            timer: None,
            reset_on_interaction: false,
        })
    }

    /// Restart the auto-advance period whenever the user navigates manually.
    pub fn with_reset_on_interaction(mut self, reset: bool) -> Self {
        self.reset_on_interaction = reset;
        self
    }

    pub fn current(&self) -> usize {
        self.rotation.current()
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.rotation.current()]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next(&mut self) {
        self.rotation.next();
        self.after_interaction();
    }

    pub fn previous(&mut self) {
        self.rotation.previous();
        self.after_interaction();
    }

    /// Jump to `index`. Returns `false` and changes nothing when out of range.
    pub fn goto(&mut self, index: usize) -> bool {
        if !self.rotation.goto(index) {
            debug!(index, len = self.len(), "ignoring out-of-range jump");
            return false;
        }
        self.after_interaction();
        true
    }

    /// Begin auto-advancing. A timer that is already running is replaced.
    pub fn start(&mut self) {
        self.timer = Some(AutoAdvance::new(self.period));
        debug!(period_ms = self.period.as_millis() as u64, "auto-advance started");
    }

    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            debug!("auto-advance stopped");
        }
    }

    /// Feed elapsed frame time to the auto-advance timer.
    ///
    /// Returns how many positions the rotation advanced.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let fired = timer.tick(dt);
        self.rotation.advance(fired as usize % self.items.len());
        if fired > 0 {
            trace!(fired, current = self.rotation.current(), "auto-advance");
        }
        fired
    }

    fn after_interaction(&mut self) {
        if self.reset_on_interaction {
            if let Some(timer) = self.timer.as_mut() {
                timer.restart();
            }
        }
    }
}

impl<T> Drop for RotationController<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PERIOD: Duration = Duration::from_millis(5500);

    fn controller(len: usize) -> RotationController<usize> {
        RotationController::new((0..len).collect(), PERIOD).unwrap()
    }

    #[test]
    fn test_rejects_empty_sequence() {
        let result = RotationController::<u8>::new(Vec::new(), PERIOD);
        assert!(matches!(result, Err(RotationError::EmptySequence)));
    }

    #[test]
    fn test_rejects_zero_period() {
        let result = RotationController::new(vec!['a'], Duration::ZERO);
        assert!(matches!(result, Err(RotationError::ZeroPeriod)));
    }

    #[test]
    fn test_starts_at_first_item_without_timer() {
        let c = RotationController::new(vec!["canapes", "buffet"], PERIOD).unwrap();
        assert_eq!(c.current(), 0);
        assert_eq!(*c.current_item(), "canapes");
        assert!(!c.is_running());
    }

    #[test]
    fn test_tick_without_start_does_nothing() {
        let mut c = controller(3);
        assert_eq!(c.tick(PERIOD * 10), 0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_advances_once_per_period() {
        let mut c = controller(4);
        c.start();
        assert_eq!(c.tick(PERIOD - Duration::from_millis(1)), 0);
        assert_eq!(c.current(), 0);
        assert_eq!(c.tick(Duration::from_millis(1)), 1);
        assert_eq!(c.current(), 1);
        for expected in [2, 3, 0, 1] {
            c.tick(PERIOD);
            assert_eq!(c.current(), expected);
        }
    }

    #[test]
    fn test_double_start_keeps_a_single_timer() {
        let mut c = controller(5);
        c.start();
        c.start();
        assert_eq!(c.tick(PERIOD), 1);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_restart_replaces_the_previous_timer() {
        let mut c = controller(5);
        c.start();
        c.tick(PERIOD / 2);
        c.start();
        assert_eq!(c.tick(PERIOD / 2), 0);
        assert_eq!(c.tick(PERIOD / 2), 1);
    }

    #[test]
    fn test_stop_halts_auto_advance() {
        let mut c = controller(3);
        c.start();
        c.tick(PERIOD);
        c.stop();
        c.stop();
        assert_eq!(c.tick(PERIOD * 3), 0);
        assert_eq!(c.current(), 1);
        assert!(!c.is_running());
    }

    #[test]
    fn test_nanosecond_period_survives_long_frame() {
        let mut c = RotationController::new(vec![0u8; 3], Duration::from_nanos(1)).unwrap();
        c.start();
        assert_eq!(c.tick(Duration::from_secs(5)), u32::MAX);
        assert_eq!(c.current(), (u32::MAX % 3) as usize);
        assert_eq!(c.tick(Duration::from_nanos(2)), 2);
        assert_eq!(c.current(), ((u32::MAX % 3 + 2) % 3) as usize);
    }

    #[test]
    fn test_replacing_a_running_controller_cancels_its_timer() {
        let mut c = controller(3);
        c.start();
        let old = std::mem::replace(&mut c, controller(3));
        assert!(old.is_running());
        assert!(!c.is_running());
        drop(old);

        c.start();
        c.stop();
        assert!(!c.is_running());
        assert_eq!(c.tick(PERIOD), 0);
    }

    #[test]
    fn test_manual_navigation_keeps_timer_phase_by_default() {
        let mut c = controller(6);
        c.start();
        c.tick(PERIOD - Duration::from_millis(10));
        c.next();
        assert_eq!(c.current(), 1);
        assert_eq!(c.tick(Duration::from_millis(10)), 1);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_reset_on_interaction_restarts_period() {
        let mut c = controller(6).with_reset_on_interaction(true);
        c.start();
        c.tick(PERIOD - Duration::from_millis(10));
        c.previous();
        assert_eq!(c.current(), 5);
        assert_eq!(c.tick(Duration::from_millis(10)), 0);
        assert_eq!(c.tick(PERIOD), 1);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_rejected_goto_does_not_reset_timer() {
        let mut c = controller(2).with_reset_on_interaction(true);
        c.start();
        c.tick(PERIOD - Duration::from_millis(1));
        assert!(!c.goto(7));
        assert_eq!(c.tick(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_goto_selects_item() {
        let mut c = RotationController::new(vec!["a", "b", "c"], PERIOD).unwrap();
        assert!(c.goto(2));
        assert_eq!(*c.current_item(), "c");
        assert!(!c.goto(3));
        assert_eq!(*c.current_item(), "c");
    }

    proptest! {
        #[test]
        fn prop_ticks_advance_by_whole_periods(
            len in 1usize..20,
            frames in prop::collection::vec(0u64..20_000, 0..100),
        ) {
            let mut c = controller(len);
            c.start();
            let mut total = Duration::ZERO;
            let mut advanced = 0u64;
            for ms in frames {
                let dt = Duration::from_millis(ms);
                total += dt;
                advanced += c.tick(dt) as u64;
                prop_assert!(c.current() < len);
            }
            let expected = (total.as_nanos() / PERIOD.as_nanos()) as u64;
            prop_assert_eq!(advanced, expected);
            prop_assert_eq!(c.current() as u64, expected % len as u64);
        }
    }
}
