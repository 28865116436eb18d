//! Platform glue: the concrete [`crate::clock::Clock`] backends and the
//! system timezone name lookup. Everything here is gated on the `sys`
//! feature; the arithmetic core builds without it.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::clock_time::ClockTime;
use crate::error::{Error, TemporalResult};

/// Reads the system clock via `web_time::SystemTime`, which resolves to
/// `clock_gettime(CLOCK_REALTIME, ..)` on unix and the platform's
/// equivalent high-resolution call elsewhere. This is the crate's only
/// wall-clock backend with full precision; see `FallbackClock` below for
/// the reduced-precision counterpart.
fn system_now() -> TemporalResult<ClockTime> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::no_clock_available().with_message(e.to_string()))?;
    ClockTime::new(
        i64::try_from(since_epoch.as_secs())
            .map_err(|_| Error::out_of_range().with_message("system clock seconds overflow"))?,
        i64::from(since_epoch.subsec_nanos()),
    )
}

/// Full-precision backend: nanosecond resolution, sourced directly from
/// `SystemTime`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SystemClock;

impl SystemClock {
    pub(crate) fn available() -> bool {
        true
    }

    pub(crate) fn precision() -> u8 {
        9
    }

    pub(crate) fn utc_time(self) -> TemporalResult<ClockTime> {
        system_now()
    }
}

/// Reduced-precision backend: the same source, rounded down to whole
/// microseconds. Stands in for a "safe, lower-resolution fallback clock"
/// distinct from the full-precision backend above, without introducing a
/// second, redundant platform call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FallbackClock;

impl FallbackClock {
    pub(crate) fn available() -> bool {
        true
    }

    pub(crate) fn precision() -> u8 {
        6
    }

    pub(crate) fn utc_time(self) -> TemporalResult<ClockTime> {
        let exact = system_now()?;
        let micros = exact.nanoseconds() / 1_000;
        ClockTime::new(exact.seconds(), i64::from(micros) * 1_000)
    }
}

/// The system's IANA timezone identifier, e.g. `"Europe/Berlin"`. Only the
/// name is available this way; numeric local offsets come from a
/// `TzInfo`.
pub(crate) fn get_system_timezone() -> TemporalResult<String> {
    iana_time_zone::get_timezone()
        .map_err(|e| Error::no_clock_available().with_message(e.to_string()))
}
