//! `DateTime`: a `Date` and `Time` composed into a single value, plus the
//! clock/epoch conversions that tie the calendar layer to [`ClockTime`].

use alloc::sync::Arc;
use core::cmp::Ordering;
use core::fmt;

use crate::arithmetic::{floor_div, floor_mod, symmetric_divmod128};
use crate::clock::Clock;
use crate::clock_time::ClockTime;
use crate::components::date::Date;
use crate::components::duration::Duration;
use crate::components::time::Time;
use crate::error::{Error, TemporalResult};
use crate::tzinfo::TzInfo;

/// A composed calendar date and time-of-day.
///
/// Equality and ordering are lexicographic: date first, then time.
/// `DateTime::NEVER` composes `Date::ZERO` with midnight, the sentinel
/// for "no value" that callers reach for instead of `Option<DateTime>`.
#[derive(Debug, Clone)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    pub const MIN: DateTime = DateTime {
        date: Date::MIN,
        time: Time::MIN,
    };
    pub const MAX: DateTime = DateTime {
        date: Date::MAX,
        time: Time::MAX,
    };
    pub const NEVER: DateTime = DateTime {
        date: Date::ZERO,
        time: Time::MIDNIGHT,
    };
    pub const UNIX_EPOCH: DateTime = DateTime {
        date: Date::UNIX_EPOCH,
        time: Time::MIDNIGHT,
    };

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u8,
        day: i32,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        tz: Option<Arc<dyn TzInfo>>,
    ) -> TemporalResult<Self> {
        let date = Date::new(year, month, day)?;
        let time = Time::new(hour, minute, second, nanosecond, tz)?;
        Ok(Self { date, time })
    }

    /// Composes an already-validated `Date` and `Time` directly.
    #[must_use]
    pub fn combine(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> Time {
        self.time.clone()
    }

    pub fn year(&self) -> TemporalResult<i32> {
        self.date.year()
    }

    pub fn month(&self) -> TemporalResult<u8> {
        self.date.month()
    }

    pub fn day(&self) -> TemporalResult<u8> {
        self.date.day()
    }

    #[must_use]
    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    #[must_use]
    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    #[must_use]
    pub fn second(&self) -> u8 {
        self.time.second()
    }

    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }

    #[must_use]
    pub fn with_date(&self, date: Date) -> Self {
        Self {
            date,
            time: self.time.clone(),
        }
    }

    #[must_use]
    pub fn with_time(&self, time: Time) -> Self {
        Self { date: self.date, time }
    }

    pub fn with_year(&self, year: i32) -> TemporalResult<Self> {
        Ok(self.with_date(self.date.with_year(year)?))
    }

    pub fn with_month(&self, month: u8) -> TemporalResult<Self> {
        Ok(self.with_date(self.date.with_month(month)?))
    }

    pub fn with_day(&self, day: i32) -> TemporalResult<Self> {
        Ok(self.with_date(self.date.with_day(day)?))
    }

    pub fn with_hour(&self, hour: u8) -> TemporalResult<Self> {
        Ok(self.with_time(self.time.with_hour(hour)?))
    }

    pub fn with_minute(&self, minute: u8) -> TemporalResult<Self> {
        Ok(self.with_time(self.time.with_minute(minute)?))
    }

    pub fn with_second(&self, second: u8) -> TemporalResult<Self> {
        Ok(self.with_time(self.time.with_second(second)?))
    }

    pub fn with_nanosecond(&self, nanosecond: u32) -> TemporalResult<Self> {
        Ok(self.with_time(self.time.with_nanosecond(nanosecond)?))
    }

    /// Attaches `tz` to this value's time component, without otherwise
    /// changing the wall-clock fields.
    #[must_use]
    pub(crate) fn with_time_tz(&self, tz: Arc<dyn TzInfo>) -> Self {
        self.with_time(self.time.with_tz(Some(tz)))
    }

    /// Orders two `DateTime`s lexicographically: date first, then time.
    /// Fails if the two times carry different zones, like
    /// [`Time::compare`].
    pub fn compare(&self, other: &Self) -> TemporalResult<Ordering> {
        match self.date.cmp(&other.date) {
            Ordering::Equal => self.time.compare(&other.time),
            ord => Ok(ord),
        }
    }

    /// Reconstructs a `DateTime` from a [`ClockTime`] relative to `epoch`:
    /// splits `ct`'s seconds into whole days and a seconds-of-day
    /// remainder, advances `epoch`'s date by that many days, and advances
    /// `epoch`'s time-of-day by the remainder plus `ct`'s nanoseconds.
    pub fn from_clock_time(ct: ClockTime, epoch: &DateTime) -> TemporalResult<Self> {
        let days = floor_div(ct.seconds(), 86400);
        let secs_of_day = floor_mod(ct.seconds(), 86400);

        let ordinal = days
            .checked_add(epoch.date.ordinal())
            .ok_or_else(|| Error::out_of_range().with_message("ordinal overflow"))?;
        let date = Date::from_ordinal(ordinal)?;

        let total_ns = i128::from(epoch.time.total_nanos_of_day())
            + i128::from(secs_of_day) * 1_000_000_000
            + i128::from(ct.nanoseconds());
        let tick_seconds = total_ns.div_euclid(1_000_000_000);
        let tick_nanos = total_ns.rem_euclid(1_000_000_000) as u32;
        if !(0..86400).contains(&tick_seconds) {
            return Err(Error::out_of_range().with_message("computed ticks out of range"));
        }
        let time = Time::from_ticks(tick_seconds as u32, tick_nanos, epoch.time.tz())?;
        Ok(Self::combine(date, time))
    }

    /// The inverse of [`DateTime::from_clock_time`] against
    /// `0001-01-01T00:00:00`: `86400 * (ordinal - 1) + ticks`.
    pub fn to_clock_time(&self) -> TemporalResult<ClockTime> {
        if self.date.is_zero() {
            return Err(
                Error::invalid_operation().with_message("DateTime::NEVER has no clock time")
            );
        }
        let days = self.date.ordinal() - 1;
        let seconds = days
            .checked_mul(86400)
            .and_then(|s| s.checked_add(i64::from(self.time.seconds_of_day())))
            .ok_or_else(|| Error::out_of_range().with_message("clock time seconds overflow"))?;
        ClockTime::new(seconds, i64::from(self.time.nanosecond()))
    }

    /// Adds an elapsed `(seconds, nanoseconds)` interval, measured from
    /// this value's own `0001-01-01` reference rather than from
    /// `UnixEpoch`.
    pub fn add_interval(&self, seconds: i64, nanoseconds: i32) -> TemporalResult<Self> {
        let base_days = self.date.ordinal() - 1;
        let base_seconds = base_days
            .checked_mul(86400)
            .and_then(|s| s.checked_add(i64::from(self.time.seconds_of_day())))
            .ok_or_else(|| Error::out_of_range().with_message("seconds overflow"))?;

        let total_ns = i128::from(base_seconds) * 1_000_000_000
            + i128::from(self.time.nanosecond())
            + i128::from(seconds) * 1_000_000_000
            + i128::from(nanoseconds);

        let total_seconds = i64::try_from(total_ns.div_euclid(1_000_000_000))
            .map_err(|_| Error::out_of_range().with_message("seconds overflow"))?;
        let frac_ns = total_ns.rem_euclid(1_000_000_000) as u32;

        let days = floor_div(total_seconds, 86400);
        let secs_of_day = floor_mod(total_seconds, 86400);
        let ordinal = days
            .checked_add(1)
            .ok_or_else(|| Error::out_of_range().with_message("ordinal overflow"))?;
        let date = Date::from_ordinal(ordinal)?;
        let time = Time::from_ticks(secs_of_day as u32, frac_ns, self.time.tz())?;
        Ok(Self::combine(date, time))
    }

    pub fn sub_interval(&self, seconds: i64, nanoseconds: i32) -> TemporalResult<Self> {
        self.add_interval(-seconds, -nanoseconds)
    }

    /// `self - other`, as a `Duration` whose months/days/seconds/subseconds
    /// are each computed independently and never renormalized against one
    /// another: `months = 12*Δyear + Δmonth`, `days = day1 - day2`, and
    /// the time-of-day difference splits into `(seconds, subsecond_nanos)`.
    /// Mixed-sign results (e.g. `+3 months, -25 days`) are by design.
    pub fn sub_datetime(&self, other: &Self) -> TemporalResult<Duration> {
        let syear = self.date.year()?;
        let smonth = self.date.month()?;
        let sday = self.date.day()?;
        let oyear = other.date.year()?;
        let omonth = other.date.month()?;
        let oday = other.date.day()?;

        let months = 12 * i64::from(syear - oyear) + (i64::from(smonth) - i64::from(omonth));
        let days = i64::from(sday) - i64::from(oday);

        let diff_ns = self.time.total_nanos_of_day() - other.time.total_nanos_of_day();
        let (seconds, subsecond_nanos) = symmetric_divmod128(i128::from(diff_ns), 1_000_000_000);
        let seconds = i64::try_from(seconds)
            .map_err(|_| Error::out_of_range().with_message("seconds overflow"))?;

        Ok(Duration::from_raw_parts(months, days, seconds, subsecond_nanos as i32))
    }

    /// The current UTC `DateTime`, read from the process's [`Clock`].
    pub fn utc_now() -> TemporalResult<Self> {
        let clock = Clock::new()?;
        Self::from_clock_time(clock.utc_time()?, &Self::UNIX_EPOCH)
    }

    /// The current `DateTime`. With no `tz`, converts `utc + local_offset`
    /// against `UnixEpoch`; with a `tz`, produces a UTC value tagged with
    /// `tz` and delegates to [`TzInfo::from_utc`].
    pub fn now(tz: Option<Arc<dyn TzInfo>>) -> TemporalResult<Self> {
        let clock = Clock::new()?;
        let utc = clock.utc_time()?;
        match tz {
            None => {
                let local = utc.add(clock.local_offset())?;
                Self::from_clock_time(local, &Self::UNIX_EPOCH)
            }
            Some(tz) => {
                let utc_dt =
                    Self::from_clock_time(utc, &Self::UNIX_EPOCH)?.with_time_tz(tz.clone());
                tz.from_utc(&utc_dt)
            }
        }
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.time == other.time
    }
}

impl Eq for DateTime {}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)?;
        if let Some(name) = self.time.tz_name() {
            write!(f, "[{name}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DateTime;
    use crate::clock_time::ClockTime;
    use crate::components::date::Date;
    use crate::components::time::Time;

    fn dt(y: i32, mo: u8, d: i32, h: u8, mi: u8, s: u8, ns: u32) -> DateTime {
        DateTime::new(y, mo, d, h, mi, s, ns, None).unwrap()
    }

    #[test]
    fn to_clock_time_matches_a_known_value() {
        let value = dt(2018, 4, 26, 23, 0, 17, 914_390_409);
        let ct = value.to_clock_time().unwrap();
        assert_eq!(ct.seconds(), 63_660_380_417);
        assert_eq!(ct.nanoseconds(), 914_390_409);
    }

    #[test]
    fn from_clock_time_round_trips_to_clock_time() {
        let value = dt(2018, 4, 26, 23, 0, 17, 914_390_409);
        let ct = value.to_clock_time().unwrap();
        let rebuilt =
            DateTime::from_clock_time(ct, &DateTime::combine(Date::MIN, Time::MIDNIGHT)).unwrap();
        assert_eq!(rebuilt, value);
    }

    #[test]
    fn add_interval_of_one_day() {
        let value = dt(2018, 4, 26, 23, 0, 17, 914_390_409);
        let next = value.add_interval(86_400, 0).unwrap();
        assert_eq!(next, dt(2018, 4, 27, 23, 0, 17, 914_390_409));
    }

    #[test]
    fn subtraction_decomposes_with_mixed_signs() {
        let a = dt(2018, 4, 1, 23, 0, 17, 914_390_409);
        let b = dt(2018, 1, 26, 0, 0, 0, 0);
        let diff = a.sub_datetime(&b).unwrap();
        assert_eq!(diff.months(), 3);
        assert_eq!(diff.days(), -25);
        assert_eq!(diff.seconds(), 23 * 3600 + 17);
        assert_eq!(diff.subsecond_nanos(), 914_390_409);
    }

    #[test]
    fn ordering_falls_back_to_time_when_dates_tie() {
        let a = dt(2020, 1, 1, 1, 0, 0, 0);
        let b = dt(2020, 1, 1, 2, 0, 0, 0);
        assert!(a.compare(&b).unwrap().is_lt());
    }

    #[test]
    fn unix_epoch_clock_time_is_its_day_count_since_0001_01_01() {
        assert_eq!(
            DateTime::UNIX_EPOCH.to_clock_time().unwrap(),
            ClockTime::new(62_135_596_800, 0).unwrap()
        );
    }

    #[test]
    fn never_has_no_clock_time() {
        assert!(DateTime::NEVER.to_clock_time().is_err());
    }
}
