//! `Time`: a time-of-day with nanosecond precision and an optional
//! attached timezone.

use alloc::string::String;
use alloc::sync::Arc;
use core::cmp::Ordering;
use core::fmt;

use crate::components::duration::Duration;
use crate::error::{Error, TemporalResult};
use crate::iso::IsoTime;
use crate::tzinfo::{validate_offset, TzInfo};

/// A time of day, independent of any calendar date.
///
/// Two `Time`s are equal only when both their ticks and their attached zone
/// agree; "the same zone" means either both zoneless, or both holding the
/// same `Arc<dyn TzInfo>` allocation (`Arc::ptr_eq`), since `TzInfo` is an
/// opaque trait object with no value-equality contract of its own. Ordering
/// is likewise only defined within a single zone: [`Time::compare`]
/// surfaces [`crate::ErrorKind::InvalidOperation`] rather than the
/// standard library's `PartialOrd::partial_cmp() -> None`, since a failed
/// comparison is exactly the kind of violation this crate's error design
/// says must never be swallowed.
#[derive(Debug, Clone)]
pub struct Time {
    iso: IsoTime,
    tz: Option<Arc<dyn TzInfo>>,
}

impl Time {
    pub const MIDNIGHT: Time = Time {
        iso: IsoTime::MIDNIGHT,
        tz: None,
    };
    pub const MIN: Time = Time::MIDNIGHT;
    pub const MAX: Time = Time {
        iso: IsoTime::MAX,
        tz: None,
    };

    pub fn new(
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        tz: Option<Arc<dyn TzInfo>>,
    ) -> TemporalResult<Self> {
        Ok(Self {
            iso: IsoTime::new(hour, minute, second, nanosecond)?,
            tz,
        })
    }

    /// Builds a `Time` from a whole-day-relative tick count: `0 <=
    /// seconds_of_day < 86400`, the inverse of [`Time::to_ticks_f64`].
    pub fn from_ticks(
        seconds_of_day: u32,
        nanosecond: u32,
        tz: Option<Arc<dyn TzInfo>>,
    ) -> TemporalResult<Self> {
        Ok(Self {
            iso: IsoTime::from_ticks(seconds_of_day, nanosecond)?,
            tz,
        })
    }

    #[must_use]
    pub fn hour(&self) -> u8 {
        self.iso.hour()
    }

    #[must_use]
    pub fn minute(&self) -> u8 {
        self.iso.minute()
    }

    #[must_use]
    pub fn second(&self) -> u8 {
        self.iso.second()
    }

    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.iso.nanosecond
    }

    #[must_use]
    pub(crate) fn seconds_of_day(&self) -> u32 {
        self.iso.seconds_of_day
    }

    #[must_use]
    pub(crate) fn total_nanos_of_day(&self) -> i64 {
        self.iso.total_nanos_of_day()
    }

    /// The total elapsed seconds since midnight, as an exact `f64`. Stored
    /// internally as `(seconds_of_day: u32, nanosecond: u32)` rather than
    /// this floating-point view — the Open-Question resolution recorded in
    /// `DESIGN.md` — so this accessor is a pure derivation, never the
    /// source of truth.
    #[must_use]
    pub fn to_ticks_f64(&self) -> f64 {
        self.iso.ticks_f64()
    }

    #[must_use]
    pub fn tz(&self) -> Option<Arc<dyn TzInfo>> {
        self.tz.clone()
    }

    /// Attaches (or clears) a zone, leaving the time-of-day unchanged.
    #[must_use]
    pub fn with_tz(&self, tz: Option<Arc<dyn TzInfo>>) -> Self {
        Self { iso: self.iso, tz }
    }

    pub fn with_hour(&self, hour: u8) -> TemporalResult<Self> {
        Self::new(hour, self.minute(), self.second(), self.nanosecond(), self.tz())
    }

    pub fn with_minute(&self, minute: u8) -> TemporalResult<Self> {
        Self::new(self.hour(), minute, self.second(), self.nanosecond(), self.tz())
    }

    pub fn with_second(&self, second: u8) -> TemporalResult<Self> {
        Self::new(self.hour(), self.minute(), second, self.nanosecond(), self.tz())
    }

    pub fn with_nanosecond(&self, nanosecond: u32) -> TemporalResult<Self> {
        Self::new(self.hour(), self.minute(), self.second(), nanosecond, self.tz())
    }

    fn same_zone(&self, other: &Self) -> bool {
        match (&self.tz, &other.tz) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Orders two `Time`s within the same zone; different zones are
    /// [`crate::ErrorKind::InvalidOperation`] rather than an arbitrary
    /// answer.
    pub fn compare(&self, other: &Self) -> TemporalResult<Ordering> {
        if !self.same_zone(other) {
            return Err(Error::invalid_operation()
                .with_message("cannot compare Times attached to different zones"));
        }
        Ok(self.iso.cmp(&other.iso))
    }

    /// The zone's UTC offset for this time, validated whole-minute and
    /// `< 24h` (an `InvalidZoneOffset` error otherwise). `None` if this `Time`
    /// carries no zone, or if the zone itself declines to answer.
    pub fn utc_offset(&self) -> TemporalResult<Option<Duration>> {
        let Some(tz) = &self.tz else {
            return Ok(None);
        };
        tz.utc_offset(self).map(validate_offset).transpose()
    }

    /// The zone's DST adjustment for this time, validated the same way as
    /// [`Time::utc_offset`].
    pub fn dst(&self) -> TemporalResult<Option<Duration>> {
        let Some(tz) = &self.tz else {
            return Ok(None);
        };
        tz.dst(self).map(validate_offset).transpose()
    }

    /// The zone's display name for this time. Unvalidated: only `utcoffset`/`dst`
    /// carry the whole-minute, sub-24h contract; the name string doesn't.
    #[must_use]
    pub fn tz_name(&self) -> Option<String> {
        self.tz.as_ref().and_then(|tz| tz.tz_name(self))
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.iso == other.iso && self.same_zone(other)
    }
}

impl Eq for Time {}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
        if self.nanosecond() != 0 {
            write!(f, ".{:09}", self.nanosecond())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Time;
    use crate::tzinfo::FixedOffset;

    #[test]
    fn ticks_round_trips_through_from_ticks() {
        let t = Time::new(13, 45, 6, 123_456_789, None).unwrap();
        let rebuilt = Time::from_ticks(t.seconds_of_day(), t.nanosecond(), None).unwrap();
        assert_eq!(rebuilt, t);
    }

    #[test]
    fn rejects_hour_past_23() {
        assert!(Time::new(24, 0, 0, 0, None).is_err());
    }

    #[test]
    fn rejects_second_at_60() {
        assert!(Time::new(0, 0, 60, 0, None).is_err());
    }

    #[test]
    fn zoneless_times_compare_by_ticks() {
        let a = Time::new(1, 0, 0, 0, None).unwrap();
        let b = Time::new(2, 0, 0, 0, None).unwrap();
        assert!(a.compare(&b).unwrap().is_lt());
    }

    #[test]
    fn comparing_across_distinct_zones_is_an_error() {
        let za = FixedOffset::from_seconds(3600).unwrap().into_arc();
        let zb = FixedOffset::from_seconds(7200).unwrap().into_arc();
        let a = Time::new(1, 0, 0, 0, Some(za)).unwrap();
        let b = Time::new(1, 0, 0, 0, Some(zb)).unwrap();
        assert!(a.compare(&b).is_err());
        assert_ne!(a, b);
    }

    #[test]
    fn same_zone_instance_compares_and_equates() {
        let z = FixedOffset::UTC.into_arc();
        let a = Time::new(1, 0, 0, 0, Some(z.clone())).unwrap();
        let b = Time::new(1, 0, 0, 0, Some(z)).unwrap();
        assert_eq!(a, b);
        assert!(a.compare(&b).unwrap().is_eq());
    }

    #[test]
    fn utc_offset_delegates_to_the_attached_zone() {
        let tz = FixedOffset::from_seconds(-18_000).unwrap().into_arc();
        let t = Time::new(12, 0, 0, 0, Some(tz)).unwrap();
        assert_eq!(t.utc_offset().unwrap().unwrap().seconds(), -18_000);
    }

    #[test]
    fn max_is_one_nanosecond_before_midnight_wraps() {
        assert_eq!(Time::MAX.hour(), 23);
        assert_eq!(Time::MAX.minute(), 59);
        assert_eq!(Time::MAX.second(), 59);
        assert_eq!(Time::MAX.nanosecond(), 999_999_999);
    }
}
