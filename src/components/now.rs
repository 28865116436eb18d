//! [`Now`]: the process-clock entry point, composing [`Clock`] with
//! [`DateTime`]'s epoch conversions.

use alloc::sync::Arc;

use crate::clock::Clock;
use crate::clock_time::ClockTime;
use crate::components::datetime::DateTime;
use crate::error::TemporalResult;
use crate::tzinfo::TzInfo;

/// A namespace for reading the current time: a zoneless clock reading
/// ([`Now::clock_time`]), a UTC `DateTime` ([`Now::utc_datetime`]), and a
/// `DateTime` optionally converted into a caller-supplied zone
/// ([`Now::datetime`]).
pub struct Now;

impl Now {
    /// The raw [`ClockTime`] reported by the process's clock.
    pub fn clock_time() -> TemporalResult<ClockTime> {
        Clock::new()?.utc_time()
    }

    /// The current `DateTime` in UTC.
    pub fn utc_datetime() -> TemporalResult<DateTime> {
        DateTime::utc_now()
    }

    /// The current `DateTime`, optionally converted into `tz`.
    pub fn datetime(tz: Option<Arc<dyn TzInfo>>) -> TemporalResult<DateTime> {
        DateTime::now(tz)
    }
}

#[cfg(all(test, feature = "sys"))]
mod tests {
    use super::Now;

    #[test]
    fn clock_time_reports_a_positive_unix_offset() {
        let ct = Now::clock_time().unwrap();
        assert!(ct.seconds() > 0);
    }

    #[test]
    fn utc_datetime_lands_well_past_the_unix_epoch() {
        let dt = Now::utc_datetime().unwrap();
        assert!(dt.year().unwrap() >= 2024);
    }

    #[test]
    fn datetime_with_no_zone_matches_utc_datetime_to_the_second() {
        let a = Now::datetime(None).unwrap().to_clock_time().unwrap();
        let b = Now::utc_datetime().unwrap().to_clock_time().unwrap();
        assert!((a.seconds() - b.seconds()).abs() <= 1);
    }
}
