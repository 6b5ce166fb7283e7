use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Repeating tick source for the countdown stage.
///
/// The handle owns the schedule: once it is dropped no further tick can be
/// observed, so holding it only while the countdown stage is active is enough
/// to keep a stale tick from reaching a session that has moved on.
#[derive(Debug)]
pub struct CountdownTimer {
    interval: Interval,
    fired: u32,
}

impl CountdownTimer {
    /// Arm a timer whose first tick fires one full `period` from now.
    ///
    /// Must be called from within a tokio runtime. A zero period is raised to 1 ms.
    #[must_use]
    pub fn arm(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        // A stalled UI thread should not replay a burst of ticks.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, fired: 0 }
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
        self.fired = self.fired.saturating_add(1);
    }

    /// Number of ticks delivered so far.
    #[must_use]
    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// Stop the timer. Equivalent to dropping it.
    pub fn cancel(self) {}
}
