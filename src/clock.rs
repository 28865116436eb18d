//! [`Clock`]: an abstract "what time is it" accessor, backed by whichever
//! platform backend is available, chosen by descending precision.

use crate::clock_time::ClockTime;
use crate::error::{Error, TemporalResult};

#[cfg(feature = "sys")]
use crate::sys;

/// Which concrete backend a [`Clock`] is reading from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    #[cfg(feature = "sys")]
    System,
    #[cfg(feature = "sys")]
    Fallback,
}

impl Backend {
    #[cfg(feature = "sys")]
    const REGISTRY: &'static [Backend] = &[Backend::System, Backend::Fallback];

    #[cfg(not(feature = "sys"))]
    const REGISTRY: &'static [Backend] = &[];

    fn available(self) -> bool {
        match self {
            #[cfg(feature = "sys")]
            Backend::System => sys::SystemClock::available(),
            #[cfg(feature = "sys")]
            Backend::Fallback => sys::FallbackClock::available(),
        }
    }

    #[cfg_attr(not(feature = "sys"), allow(dead_code))]
    fn precision(self) -> u8 {
        match self {
            #[cfg(feature = "sys")]
            Backend::System => sys::SystemClock::precision(),
            #[cfg(feature = "sys")]
            Backend::Fallback => sys::FallbackClock::precision(),
        }
    }

    fn utc_time(self) -> TemporalResult<ClockTime> {
        match self {
            #[cfg(feature = "sys")]
            Backend::System => sys::SystemClock.utc_time(),
            #[cfg(feature = "sys")]
            Backend::Fallback => sys::FallbackClock.utc_time(),
        }
    }
}

/// A selected wall-clock accessor.
///
/// `Clock::new` walks the registered backends in descending-precision
/// order and latches onto the first one that reports itself available,
/// failing with [`crate::ErrorKind::NoClockAvailable`] if none are (this
/// happens whenever the `sys` feature is disabled, since the pure
/// arithmetic core has no platform access at all).
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    backend: Backend,
}

impl Clock {
    /// Selects the highest-precision available backend.
    ///
    /// The selection itself is memoized (`std::sync::OnceLock` under the
    /// `std` feature) so repeated calls don't re-probe every registered
    /// backend; without `std` the registry is empty anyway and each call
    /// just fails immediately.
    pub fn new() -> TemporalResult<Self> {
        #[cfg(feature = "std")]
        {
            static SELECTED: std::sync::OnceLock<Option<Backend>> = std::sync::OnceLock::new();
            let backend = *SELECTED.get_or_init(Self::select_backend);
            return backend.map(|backend| Self { backend }).ok_or_else(Error::no_clock_available);
        }

        #[cfg(not(feature = "std"))]
        {
            Self::select_backend()
                .map(|backend| Self { backend })
                .ok_or_else(Error::no_clock_available)
        }
    }

    fn select_backend() -> Option<Backend> {
        #[cfg(feature = "log")]
        log::trace!("selecting clock backend from {} candidates", Backend::REGISTRY.len());

        let backend = Backend::REGISTRY.iter().copied().find(|b| b.available());

        #[cfg(feature = "log")]
        if let Some(backend) = backend {
            log::debug!("selected clock backend with precision {}", backend.precision());
        }

        backend
    }

    /// The selected backend's precision, as a count of significant
    /// fractional-second decimal digits (`9` for nanoseconds, `6` for
    /// microseconds, and so on).
    #[must_use]
    pub fn precision(&self) -> u8 {
        self.backend.precision()
    }

    /// The current UTC time as a [`ClockTime`] since the backend's epoch.
    pub fn utc_time(&self) -> TemporalResult<ClockTime> {
        self.backend.utc_time()
    }

    /// The host's IANA timezone identifier, e.g. `"Europe/Berlin"`. This
    /// names the zone only; constructing a [`crate::TzInfo`] that honors
    /// its rules is the caller's job.
    #[cfg(feature = "sys")]
    pub fn system_timezone_name() -> TemporalResult<alloc::string::String> {
        sys::get_system_timezone()
    }

    /// The local-minus-UTC offset fixed at clock construction time.
    ///
    /// Always `ClockTime::ZERO`: the standard library has no portable,
    /// safe API for the numeric local UTC offset (only `iana-time-zone`'s
    /// zone *name*, which says nothing about the offset itself). Callers
    /// that need an accurate local time should attach a
    /// [`crate::TzInfo`], which is this crate's authoritative source of
    /// offsets.
    #[must_use]
    pub fn local_offset(&self) -> ClockTime {
        ClockTime::ZERO
    }
}

#[cfg(all(test, feature = "sys"))]
mod tests {
    use super::Clock;

    #[test]
    fn selects_a_backend_with_sys_enabled() {
        let clock = Clock::new().unwrap();
        assert_eq!(clock.precision(), 9);
        let now = clock.utc_time().unwrap();
        assert!(now.seconds() > 0);
    }

    #[test]
    fn local_offset_is_always_zero() {
        let clock = Clock::new().unwrap();
        assert_eq!(clock.local_offset(), super::ClockTime::ZERO);
    }
}
