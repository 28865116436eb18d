//! [`ClockTime`]: a seconds+nanoseconds pair used both as an absolute
//! instant (time since an epoch) and as an elapsed interval.

use core::cmp::Ordering;
use core::fmt;

use crate::error::{Error, TemporalResult};

/// A `(seconds, nanoseconds)` pair, normalized so `nanoseconds` always
/// falls in `0..1_000_000_000` and any sign lives entirely in `seconds`.
///
/// Overflowing or negative nanoseconds are folded into `seconds` by floor
/// division, not truncated division, so `ClockTime::new(1, -1)` is
/// `(0, 999_999_999)` rather than `(1, -1)` left unnormalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    seconds: i64,
    nanoseconds: i32,
}

impl ClockTime {
    pub const ZERO: ClockTime = ClockTime {
        seconds: 0,
        nanoseconds: 0,
    };

    /// Builds a normalized `ClockTime` from a possibly out-of-range or
    /// negative nanosecond component.
    pub fn new(seconds: i64, nanoseconds: i64) -> TemporalResult<Self> {
        let total = i128::from(seconds) * 1_000_000_000 + i128::from(nanoseconds);
        let norm_seconds = total.div_euclid(1_000_000_000);
        let norm_nanos = total.rem_euclid(1_000_000_000);
        let seconds = i64::try_from(norm_seconds)
            .map_err(|_| Error::out_of_range().with_message("ClockTime seconds out of range"))?;
        Ok(Self {
            seconds,
            nanoseconds: norm_nanos as i32,
        })
    }

    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    #[must_use]
    pub const fn nanoseconds(&self) -> i32 {
        self.nanoseconds
    }

    pub fn add(&self, other: ClockTime) -> TemporalResult<Self> {
        Self::new(
            self.seconds + other.seconds,
            i64::from(self.nanoseconds) + i64::from(other.nanoseconds),
        )
    }

    pub fn sub(&self, other: ClockTime) -> TemporalResult<Self> {
        Self::new(
            self.seconds - other.seconds,
            i64::from(self.nanoseconds) - i64::from(other.nanoseconds),
        )
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.seconds, self.nanoseconds).cmp(&(other.seconds, other.nanoseconds))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::ClockTime;

    #[test]
    fn zero_timebase() {
        let t = ClockTime::ZERO;
        assert_eq!(t.seconds(), 0);
        assert_eq!(t.nanoseconds(), 0);
    }

    #[test]
    fn only_seconds() {
        let t = ClockTime::new(123_456, 0).unwrap();
        assert_eq!(t.seconds(), 123_456);
        assert_eq!(t.nanoseconds(), 0);
    }

    #[test]
    fn nanoseconds_overflow_carries_into_seconds() {
        let t = ClockTime::new(0, 2_123_456_789).unwrap();
        assert_eq!(t.seconds(), 2);
        assert_eq!(t.nanoseconds(), 123_456_789);
    }

    #[test]
    fn negative_nanoseconds_borrow_from_seconds() {
        let t = ClockTime::new(1, -1).unwrap();
        assert_eq!(t.seconds(), 0);
        assert_eq!(t.nanoseconds(), 999_999_999);
    }

    #[test]
    fn add_and_sub_round_trip() {
        let a = ClockTime::new(10, 500_000_000).unwrap();
        let b = ClockTime::new(5, 700_000_000).unwrap();
        let sum = a.add(b).unwrap();
        assert_eq!(sum.seconds(), 16);
        assert_eq!(sum.nanoseconds(), 200_000_000);
        assert_eq!(sum.sub(b).unwrap(), a);
    }
}
