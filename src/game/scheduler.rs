use std::time::{Duration, Instant};

/// Fixed-interval tick source with a single pending deadline.
///
/// Re-arming always replaces the previous deadline, so restart and resume can
/// never leave a second tick source running alongside the new one.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancels any pending tick and arms a new one a full interval from `now`.
    pub fn reschedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true at most once per call when the deadline has passed, then
    /// re-arms from the missed deadline. Falls back to `now` if more than one
    /// interval was missed so a stalled host does not replay a burst of ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let next = deadline + self.interval;
        self.deadline = Some(if next <= now { now + self.interval } else { next });
        true
    }

    /// Time left until the next tick, or `None` while cancelled.
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(1000);

    #[test]
    fn unarmed_scheduler_never_fires() {
        let mut ticker = TickScheduler::new(INTERVAL);
        let now = Instant::now();
        assert!(!ticker.poll(now + INTERVAL * 5));
        assert_eq!(ticker.time_until(now), None);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut ticker = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        ticker.reschedule(start);

        assert!(!ticker.poll(start + Duration::from_millis(999)));
        assert!(ticker.poll(start + INTERVAL));
        assert!(!ticker.poll(start + INTERVAL));
        assert!(ticker.poll(start + INTERVAL * 2));
    }

    #[test]
    fn reschedule_replaces_pending_deadline() {
        let mut ticker = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        ticker.reschedule(start);
        ticker.reschedule(start + Duration::from_millis(600));

        assert!(!ticker.poll(start + INTERVAL));
        assert!(ticker.poll(start + Duration::from_millis(1600)));
    }

    #[test]
    fn cancel_stops_ticks() {
        let mut ticker = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        ticker.reschedule(start);
        ticker.cancel();

        assert!(!ticker.is_armed());
        assert!(!ticker.poll(start + INTERVAL * 3));
    }

    #[test]
    fn stall_does_not_replay_missed_ticks() {
        let mut ticker = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        ticker.reschedule(start);

        let late = start + INTERVAL * 5;
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.time_until(late), Some(INTERVAL));
    }
}
