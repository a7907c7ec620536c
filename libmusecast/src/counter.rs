//! Advisory execution accounting for the timer daemon

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

/// Stock number of executions expected per UTC day.
pub const DEFAULT_DAILY_CAP: u32 = 10;

/// In-memory counter of publish cycles within the current UTC day.
///
/// The cap is advisory. Reaching it logs a warning and clears the count;
/// it never prevents the next execution from running. The count also
/// clears when the UTC day rolls over. State lives only in this process,
/// so a restart starts the day's count from zero.
#[derive(Debug)]
pub struct ExecutionCounter {
    cap: u32,
    count: u32,
    day: NaiveDate,
}

impl ExecutionCounter {
    pub fn new(cap: u32) -> Self {
        Self {
            cap,
            count: 0,
            day: Utc::now().date_naive(),
        }
    }

    /// Record one execution at `now` and return its ordinal within the day.
    pub fn record(&mut self, now: DateTime<Utc>) -> u32 {
        let today = now.date_naive();
        if today != self.day {
            info!("Resetting daily execution count for {}", today);
            self.day = today;
            self.count = 0;
        }

        self.count += 1;
        let ordinal = self.count;
        info!(
            "Execution #{} at {}",
            ordinal,
            now.format("%Y-%m-%d %H:%M:%S UTC")
        );

        if self.count >= self.cap {
            warn!(
                "Reached maximum executions for the day ({}), resetting counter",
                self.cap
            );
            self.count = 0;
        }

        ordinal
    }

    /// Executions recorded so far today, after any cap reset.
    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_returns_ordinal_within_day() {
        let mut counter = ExecutionCounter::new(10);
        let now = Utc::now();

        assert_eq!(counter.record(now), 1);
        assert_eq!(counter.record(now), 2);
        assert_eq!(counter.record(now), 3);
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn test_reaching_cap_resets_count_without_blocking() {
        let mut counter = ExecutionCounter::new(3);
        let now = Utc::now();

        assert_eq!(counter.record(now), 1);
        assert_eq!(counter.record(now), 2);
        assert_eq!(counter.record(now), 3);
        // Cap reached on the previous call; counting starts over but the
        // next execution still goes through.
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.record(now), 1);
    }

    #[test]
    fn test_day_roll_resets_count() {
        let mut counter = ExecutionCounter::new(10);
        let today = Utc::now();
        let tomorrow = today + Duration::days(1);

        counter.record(today);
        counter.record(today);
        assert_eq!(counter.count(), 2);

        assert_eq!(counter.record(tomorrow), 1);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_every_execution_is_recorded_past_the_cap() {
        let mut counter = ExecutionCounter::new(2);
        let now = Utc::now();

        let ordinals: Vec<u32> = (0..5).map(|_| counter.record(now)).collect();
        assert_eq!(ordinals, vec![1, 2, 1, 2, 1]);
    }
}
