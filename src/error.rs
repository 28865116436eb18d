//! The crate's error type.
//!
//! All fallible operations in this crate surface one of the kinds below;
//! nothing is swallowed internally. See `ErrorKind` for the conditions
//! each variant corresponds to.

use alloc::borrow::Cow;
use core::fmt;

/// The kind of failure that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A year/month/day/hour/minute/second/ticks/ordinal fell outside its
    /// valid bounds, or a `Duration` component exceeded `i64`'s range.
    OutOfRange,
    /// An operation was attempted that the data model forbids: adding a
    /// `Duration` with nonzero seconds/subseconds to a `Date`, a division
    /// requiring an integer result that wasn't one, or comparing two
    /// `Time`s that carry different timezones.
    InvalidOperation,
    /// A `TzInfo` implementation returned an offset that was not a whole
    /// number of minutes, or whose magnitude was not less than 24 hours.
    InvalidZoneOffset,
    /// `Clock::new` found no available backend.
    NoClockAvailable,
    /// The operation is explicitly out of scope for this crate (e.g.
    /// parsing a malformed or unsupported ISO-8601 string).
    NotSupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OutOfRange => "out of range",
            Self::InvalidOperation => "invalid operation",
            Self::InvalidZoneOffset => "invalid zone offset",
            Self::NoClockAvailable => "no clock available",
            Self::NotSupported => "not supported",
        };
        f.write_str(s)
    }
}

/// The crate's error type: an [`ErrorKind`] plus an optional human-readable
/// message describing the specific violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: Option<Cow<'static, str>>,
}

impl Error {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Attaches a message to this error, consuming and returning `self` so
    /// call sites can write `Error::out_of_range().with_message("...")`.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn out_of_range() -> Self {
        Self::new(ErrorKind::OutOfRange)
    }

    #[must_use]
    pub fn invalid_operation() -> Self {
        Self::new(ErrorKind::InvalidOperation)
    }

    #[must_use]
    pub fn invalid_zone_offset() -> Self {
        Self::new(ErrorKind::InvalidZoneOffset)
    }

    #[must_use]
    pub fn no_clock_available() -> Self {
        Self::new(ErrorKind::NoClockAvailable)
    }

    #[must_use]
    pub fn not_supported() -> Self {
        Self::new(ErrorKind::NotSupported)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The crate's result type.
pub type TemporalResult<T> = Result<T, Error>;
