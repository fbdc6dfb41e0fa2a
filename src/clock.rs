//! Injectable wall clock.
//!
//! The template transform stamps the title slide with the current month and
//! year, and the editor derives element ids from timestamps. Both read time
//! through [`Clock`] so tests can pin it.

use chrono::{DateTime, Local};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// "October 2024" style caption for the given clock.
pub fn month_and_year(clock: &dyn Clock) -> String {
    clock.now().format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_and_year() {
        let clock = FixedClock(Local.with_ymd_and_hms(2024, 10, 15, 9, 30, 0).unwrap());
        assert_eq!(month_and_year(&clock), "October 2024");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock(Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(clock.now(), clock.now());
    }
}
