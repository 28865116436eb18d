//! The timezone adapter seam: [`TzInfo`], consumed by [`crate::Time`] and
//! [`crate::DateTime`], plus the one concrete zone this crate ships,
//! [`FixedOffset`].

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::components::{DateTime, Duration, Time};
use crate::error::{Error, TemporalResult};

/// A pluggable source of UTC offsets, DST adjustments and zone names.
///
/// This crate carries no IANA rule tables or DST transition database;
/// anything richer than a fixed offset (`FixedOffset` below) is the
/// caller's responsibility, reached only through this trait. `utc_offset`,
/// `dst` and `tz_name` are asked about a bare `Time`, matching how a
/// `DateTime`'s own zone query strips its date component before
/// delegating; `from_utc` receives the full `DateTime` since reconstituting
/// local wall-clock fields needs the calendar date too.
pub trait TzInfo: fmt::Debug + Send + Sync {
    /// The UTC offset in effect for `time`, or `None` if this zone cannot
    /// answer without more context.
    fn utc_offset(&self, time: &Time) -> Option<Duration>;

    /// The daylight-saving adjustment in effect for `time`, or `None`.
    fn dst(&self, time: &Time) -> Option<Duration>;

    /// A short display name for this zone at `time`, or `None`.
    fn tz_name(&self, time: &Time) -> Option<String>;

    /// Converts a UTC `dt` (tagged with this zone) into this zone's local
    /// wall-clock representation.
    fn from_utc(&self, dt: &DateTime) -> TemporalResult<DateTime>;
}

/// Validates a candidate UTC offset against the whole-minute, `< 24h`
/// contract every `TzInfo` offset must satisfy, wrapping a raw
/// `TzInfo::utc_offset`/`dst` call.
pub(crate) fn validate_offset(offset: Duration) -> TemporalResult<Duration> {
    let total_seconds = offset.whole_seconds().ok_or_else(|| {
        Error::invalid_zone_offset()
            .with_message("zone offset must be an integral number of seconds")
    })?;
    if total_seconds % 60 != 0 {
        return Err(Error::invalid_zone_offset()
            .with_message("zone offset must be a whole number of minutes"));
    }
    if total_seconds.abs() >= 24 * 3600 {
        return Err(
            Error::invalid_zone_offset().with_message("zone offset magnitude must be < 24h")
        );
    }
    Ok(offset)
}

/// A constant, whole-minute UTC offset zone with no DST rule of its own.
///
/// An immutable, integer-seconds zone with no instance cache: Rust's
/// ownership model already lets callers share one `Arc<FixedOffset>`
/// when they want to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffset {
    seconds: i32,
}

impl FixedOffset {
    pub const UTC: FixedOffset = FixedOffset { seconds: 0 };

    /// Builds a `FixedOffset` from a whole-minute offset in seconds,
    /// validating the same whole-minute/`< 24h` contract every `TzInfo`
    /// offset must satisfy.
    pub fn from_seconds(seconds: i32) -> TemporalResult<Self> {
        if seconds % 60 != 0 {
            return Err(Error::invalid_zone_offset()
                .with_message("zone offset must be a whole number of minutes"));
        }
        if seconds.abs() >= 24 * 3600 {
            return Err(
                Error::invalid_zone_offset().with_message("zone offset magnitude must be < 24h")
            );
        }
        Ok(Self { seconds })
    }

    /// Wraps this offset in an `Arc` for attaching to a `Time`/`DateTime`.
    #[must_use]
    pub fn into_arc(self) -> Arc<dyn TzInfo> {
        Arc::new(self)
    }

    #[must_use]
    pub const fn offset_seconds(&self) -> i32 {
        self.seconds
    }
}

impl TzInfo for FixedOffset {
    fn utc_offset(&self, _time: &Time) -> Option<Duration> {
        Some(Duration::from_seconds(i64::from(self.seconds)))
    }

    fn dst(&self, _time: &Time) -> Option<Duration> {
        Some(Duration::ZERO)
    }

    fn tz_name(&self, _time: &Time) -> Option<String> {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        Some(alloc::format!(
            "UTC{sign}{:02}:{:02}",
            abs / 3600,
            (abs % 3600) / 60
        ))
    }

    fn from_utc(&self, dt: &DateTime) -> TemporalResult<DateTime> {
        dt.add_interval(i64::from(self.seconds), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::FixedOffset;

    #[test]
    fn rejects_sub_minute_offsets() {
        assert!(FixedOffset::from_seconds(90).is_err());
    }

    #[test]
    fn rejects_offsets_at_or_past_24h() {
        assert!(FixedOffset::from_seconds(24 * 3600).is_err());
        assert!(FixedOffset::from_seconds(-24 * 3600).is_err());
    }

    #[test]
    fn accepts_whole_minute_offsets() {
        assert!(FixedOffset::from_seconds(3600).is_ok());
        assert!(FixedOffset::from_seconds(-1800).is_ok());
    }

    #[test]
    fn utc_has_zero_offset() {
        assert_eq!(FixedOffset::UTC.offset_seconds(), 0);
    }
}
