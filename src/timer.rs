use std::time::{Duration, Instant};

/// A fixed-period timer driven by the host loop. The host asks how long it
/// may block, then asks whether the timer fired.
///
/// Missed periods are dropped: after a stall the timer fires once and the
/// next firing is one full period after that.
#[derive(Debug, Clone)]
pub struct RecurringTimer {
    period: Duration,
    next_due: Instant,
}

impl RecurringTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Fires at most once per call and reschedules from `now`.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }

    pub fn until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Restarts the schedule one full period from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next_due = now + self.period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::models::{CardView, Chrome, Entry};
    use crate::session::{DisplaySurface, FlashcardSession};
    use crate::settings::MemoryStore;

    #[derive(Debug, Default)]
    struct NullSurface;

    impl DisplaySurface for NullSurface {
        fn show_card(&mut self, _card: &CardView) {}
        fn apply_chrome(&mut self, _chrome: &Chrome) {}
    }

    #[test]
    fn test_not_due_before_period() {
        let start = Instant::now();
        let mut timer = RecurringTimer::new(Duration::from_secs(1), start);
        assert!(!timer.due(start));
        assert!(!timer.due(start + Duration::from_millis(999)));
    }

    #[test]
    fn test_due_once_per_period() {
        let start = Instant::now();
        let mut timer = RecurringTimer::new(Duration::from_secs(1), start);
        assert!(timer.due(start + Duration::from_secs(1)));
        assert!(!timer.due(start + Duration::from_millis(1500)));
        assert!(timer.due(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_stall_fires_once_and_reschedules_from_now() {
        let start = Instant::now();
        let mut timer = RecurringTimer::new(Duration::from_millis(300), start);
        let late = start + Duration::from_millis(1000);
        assert!(timer.due(late));
        assert!(!timer.due(late));
        assert_eq!(timer.until_due(late), Duration::from_millis(300));
    }

    #[test]
    fn test_long_stall_ticks_session_once() {
        let start = Instant::now();
        let mut timer = RecurringTimer::new(Duration::from_secs(1), start);
        let mut session = FlashcardSession::new(
            vec![Entry::new("run", "to move fast"), Entry::new("jump", "")],
            NullSurface,
            MemoryStore::default(),
            &WidgetConfig::default(),
        );
        let writes_before = session.store().write_count();

        let after_sleep = start + Duration::from_secs(8 * 60 * 60);
        if timer.due(after_sleep) {
            session.on_tick();
        }
        if timer.due(after_sleep) {
            session.on_tick();
        }

        assert_eq!(session.store().write_count(), writes_before + 1);
        assert_eq!(session.remaining_seconds(), 59);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_until_due_saturates() {
        let start = Instant::now();
        let timer = RecurringTimer::new(Duration::from_secs(1), start);
        assert_eq!(timer.until_due(start), Duration::from_secs(1));
        assert_eq!(timer.until_due(start + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn test_reset() {
        let start = Instant::now();
        let mut timer = RecurringTimer::new(Duration::from_secs(1), start);
        timer.reset(start + Duration::from_millis(800));
        assert!(!timer.due(start + Duration::from_secs(1)));
        assert!(timer.due(start + Duration::from_millis(1800)));
    }
}
