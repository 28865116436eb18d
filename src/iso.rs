//! The internal proleptic-Gregorian date bijection: ordinal ↔ (year,
//! month, day), with the month-anchored "encoded day" that lets adding a
//! month to an end-of-month date resolve to the new month's own last day.
//!
//! Construction accepts a day either as the public `1..=31` value or as a
//! "from end" reference (`-1` last day, `-2` second-to-last, `-3`
//! third-to-last); both forms for the same calendar day normalize onto
//! the same internal encoding (see [`encode_day`]). Which encoding a
//! `Date` actually holds is chosen once at construction and then
//! preserved across month additions by [`IsoDate::add_months`], so
//! `Date(.., 31) + 1 month` anchors to the new month's last day instead
//! of overflowing into the month after.

use crate::error::{Error, TemporalResult};
use crate::utils::{days_before_month, days_before_year, days_in_month, days_in_year, is_leap_year};

pub(crate) const MIN_YEAR: i32 = 1;
pub(crate) const MAX_YEAR: i32 = 9999;
pub(crate) const MAX_ORDINAL: i64 = 3_652_059;

/// Encodes a public day-of-month as the internal representation: plain
/// positive for any day that isn't one of the month's last three, and
/// `-1..=-3` (counting back from month end) otherwise.
///
/// `day` also accepts the "from end" reference form `-1` (last day), `-2`
/// (second-to-last) and `-3` (third-to-last), normalized here onto the
/// same positive day before validation, so `encode_day(y, m, -1)` and
/// `encode_day(y, m, dim)` produce an identical encoded value.
fn encode_day(year: i32, month: u8, day: i32) -> TemporalResult<i16> {
    let dim = i32::from(days_in_month(year, month));
    let day = if day < 0 {
        if day < -3 {
            return Err(Error::out_of_range().with_message(alloc::format!(
                "day {day} out of range for {year:04}-{month:02}"
            )));
        }
        dim + day + 1
    } else {
        day
    };
    if day < 1 || day > dim {
        return Err(Error::out_of_range().with_message(alloc::format!(
            "day {day} out of range for {year:04}-{month:02}"
        )));
    }
    let from_end = dim - day; // 0 for the last day, 1 for the second-to-last, ...
    if from_end < 3 {
        Ok((-(from_end + 1)) as i16)
    } else {
        Ok(day as i16)
    }
}

/// Recovers the public `1..=31` day from an encoded day.
fn decode_day(year: i32, month: u8, encoded_day: i16) -> u8 {
    if encoded_day >= 1 {
        encoded_day as u8
    } else {
        let dim = i32::from(days_in_month(year, month));
        (dim + i32::from(encoded_day) + 1) as u8
    }
}

fn ordinal_from_parts(year: i32, month: u8, encoded_day: i16) -> i64 {
    let day = decode_day(year, month, encoded_day);
    days_before_year(year) + days_before_month(year, month) + i64::from(day)
}

/// A validated proleptic-Gregorian date, stored with its encoded day and
/// precomputed ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IsoDate {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) encoded_day: i16,
    pub(crate) ordinal: i64,
}

impl IsoDate {
    pub(crate) const MIN: IsoDate = IsoDate {
        year: MIN_YEAR,
        month: 1,
        encoded_day: 1,
        ordinal: 1,
    };

    pub(crate) const MAX: IsoDate = IsoDate {
        year: MAX_YEAR,
        month: 12,
        encoded_day: -1,
        ordinal: MAX_ORDINAL,
    };

    /// `1970-01-01`, the Unix epoch. Ordinal `719_163` is exact (the
    /// bijection gives the same value; it's inlined here so the constant
    /// doesn't need a fallible constructor).
    pub(crate) const UNIX_EPOCH: IsoDate = IsoDate {
        year: 1970,
        month: 1,
        encoded_day: 1,
        ordinal: 719_163,
    };

    pub(crate) fn new(year: i32, month: u8, day: i32) -> TemporalResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::out_of_range().with_message("year out of range"));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::out_of_range().with_message("month out of range"));
        }
        let encoded_day = encode_day(year, month, day)?;
        let ordinal = ordinal_from_parts(year, month, encoded_day);
        Ok(Self {
            year,
            month,
            encoded_day,
            ordinal,
        })
    }

    pub(crate) fn day(&self) -> u8 {
        decode_day(self.year, self.month, self.encoded_day)
    }

    pub(crate) fn from_ordinal(ordinal: i64) -> TemporalResult<Self> {
        if !(1..=MAX_ORDINAL).contains(&ordinal) {
            return Err(Error::out_of_range().with_message("ordinal out of range"));
        }

        // Binary search for the year whose [days_before_year, days_before_year
        // + days_in_year) window contains `ordinal`.
        let mut lo = MIN_YEAR;
        let mut hi = MAX_YEAR;
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if days_before_year(mid) < ordinal {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        let year = lo;
        let mut remaining = ordinal - days_before_year(year);

        let mut month = 1u8;
        loop {
            let dim = i64::from(days_in_month(year, month));
            if remaining <= dim {
                break;
            }
            remaining -= dim;
            month += 1;
        }
        let day = remaining as i32;
        let encoded_day = encode_day(year, month, day)?;
        Ok(Self {
            year,
            month,
            encoded_day,
            ordinal,
        })
    }

    pub(crate) fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub(crate) fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    pub(crate) fn days_in_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// Increments by a (possibly negative) day count. When the encoded day
    /// stays within the conservative fast-path band `1..=27` after the
    /// shift, only the day field changes; otherwise the date is
    /// reconstructed wholesale from the shifted ordinal. The `27` (not
    /// `28`) bound is deliberately conservative: every month has at least
    /// 28 days, so encoded days `1..=27` are always valid regardless of
    /// which month they land in.
    pub(crate) fn add_days(&self, days: i64) -> TemporalResult<Self> {
        if self.encoded_day >= 1 {
            let new_day = i64::from(self.encoded_day) + days;
            if (1..=27).contains(&new_day) {
                return Ok(Self {
                    encoded_day: new_day as i16,
                    ordinal: self.ordinal + days,
                    ..*self
                });
            }
        }
        let new_ordinal = self
            .ordinal
            .checked_add(days)
            .ok_or_else(|| Error::out_of_range().with_message("ordinal overflow"))?;
        Self::from_ordinal(new_ordinal)
    }

    /// Increments by a (possibly negative) month count, preserving the
    /// encoded day so an end-of-month anchor carries over to the new
    /// month's own end.
    pub(crate) fn add_months(&self, months: i64) -> TemporalResult<Self> {
        let (delta_years, delta_month) = crate::arithmetic::symmetric_divmod(months, 12);
        let mut year = i64::from(self.year) + delta_years;
        let mut month = i64::from(self.month) + delta_month;
        if month > 12 {
            year += 1;
            month -= 12;
        } else if month < 1 {
            year -= 1;
            month += 12;
        }
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
            return Err(Error::out_of_range().with_message("year out of range"));
        }
        let year = year as i32;
        let month = month as u8;
        // The encoded day may now exceed the new month's day count if it
        // was a plain positive day from a longer month; re-derive the
        // public day under the *original* month's length, then re-encode
        // against the new month (a no-op unless the new month is shorter).
        let day = decode_day(self.year, self.month, self.encoded_day);
        let encoded_day = encode_day(year, month, i32::from(day.min(days_in_month(year, month))))?;
        let ordinal = ordinal_from_parts(year, month, encoded_day);
        Ok(Self {
            year,
            month,
            encoded_day,
            ordinal,
        })
    }
}

/// Time-of-day, stored as exact whole seconds since midnight plus a
/// nanosecond fraction, rather than a lossy `f64` of fractional seconds
/// (the Open-Question resolution documented in `DESIGN.md`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IsoTime {
    pub(crate) seconds_of_day: u32,
    pub(crate) nanosecond: u32,
}

impl IsoTime {
    pub(crate) const MIDNIGHT: IsoTime = IsoTime {
        seconds_of_day: 0,
        nanosecond: 0,
    };

    /// `23:59:59.999999999`, the latest representable time of day.
    pub(crate) const MAX: IsoTime = IsoTime {
        seconds_of_day: 86_399,
        nanosecond: 999_999_999,
    };

    pub(crate) fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> TemporalResult<Self> {
        if hour > 23 {
            return Err(Error::out_of_range().with_message("hour out of range"));
        }
        if minute > 59 {
            return Err(Error::out_of_range().with_message("minute out of range"));
        }
        if second > 59 {
            return Err(Error::out_of_range().with_message("second out of range"));
        }
        if nanosecond >= 1_000_000_000 {
            return Err(Error::out_of_range().with_message("nanosecond out of range"));
        }
        let seconds_of_day = u32::from(hour) * 3600 + u32::from(minute) * 60 + u32::from(second);
        Ok(Self {
            seconds_of_day,
            nanosecond,
        })
    }

    pub(crate) fn from_ticks(seconds_of_day: u32, nanosecond: u32) -> TemporalResult<Self> {
        if seconds_of_day >= 86400 {
            return Err(Error::out_of_range().with_message("ticks out of range"));
        }
        if nanosecond >= 1_000_000_000 {
            return Err(Error::out_of_range().with_message("nanosecond out of range"));
        }
        Ok(Self {
            seconds_of_day,
            nanosecond,
        })
    }

    pub(crate) fn hour(&self) -> u8 {
        (self.seconds_of_day / 3600) as u8
    }

    pub(crate) fn minute(&self) -> u8 {
        ((self.seconds_of_day % 3600) / 60) as u8
    }

    pub(crate) fn second(&self) -> u8 {
        (self.seconds_of_day % 60) as u8
    }

    pub(crate) fn ticks_f64(&self) -> f64 {
        f64::from(self.seconds_of_day) + f64::from(self.nanosecond) / 1_000_000_000.0
    }

    pub(crate) fn total_nanos_of_day(&self) -> i64 {
        i64::from(self.seconds_of_day) * 1_000_000_000 + i64::from(self.nanosecond)
    }
}

#[cfg(test)]
mod tests {
    use super::IsoDate;

    #[test]
    fn ordinal_bijection_round_trips() {
        for ordinal in [1i64, 365, 366, 1000, 365_000, super::MAX_ORDINAL] {
            let date = IsoDate::from_ordinal(ordinal).unwrap();
            assert_eq!(date.ordinal, ordinal);
            let rebuilt = IsoDate::new(date.year, date.month, i32::from(date.day())).unwrap();
            assert_eq!(rebuilt.ordinal, ordinal);
        }
    }

    #[test]
    fn end_of_month_anchor_survives_a_month_addition() {
        let d = IsoDate::new(1976, 1, 31).unwrap();
        let next = d.add_months(1).unwrap();
        assert_eq!((next.year, next.month, next.day()), (1976, 2, 29));
    }

    #[test]
    fn end_of_month_chain_through_a_leap_year() {
        let mut d = IsoDate::new(2024, 1, 31).unwrap();
        let expect = [
            (2024, 2, 29),
            (2024, 3, 31),
            (2024, 4, 30),
            (2024, 5, 31),
            (2024, 6, 30),
        ];
        for (y, m, day) in expect {
            d = d.add_months(1).unwrap();
            assert_eq!((d.year, d.month, d.day()), (y, m, day));
        }
    }

    #[test]
    fn first_of_month_is_not_anchored() {
        let d = IsoDate::new(2023, 1, 1).unwrap();
        let next = d.add_months(1).unwrap();
        assert_eq!((next.year, next.month, next.day()), (2023, 2, 1));
    }

    #[test]
    fn day_past_month_end_is_rejected() {
        assert!(IsoDate::new(2023, 2, 29).is_err());
        assert!(IsoDate::new(2024, 2, 30).is_err());
        assert!(IsoDate::new(2023, 4, 31).is_err());
    }

    #[test]
    fn month_and_year_bounds_are_enforced() {
        assert!(IsoDate::new(2023, 0, 1).is_err());
        assert!(IsoDate::new(2023, 13, 1).is_err());
        assert!(IsoDate::new(0, 1, 1).is_err());
        assert!(IsoDate::new(10000, 1, 1).is_err());
    }

    #[test]
    fn add_days_crosses_a_year_boundary() {
        let d = IsoDate::new(2023, 12, 31).unwrap();
        let next = d.add_days(1).unwrap();
        assert_eq!((next.year, next.month, next.day()), (2024, 1, 1));
    }

    #[test]
    fn unix_epoch_constant_matches_the_bijection() {
        let computed = IsoDate::new(1970, 1, 1).unwrap();
        assert_eq!(computed.ordinal, super::IsoDate::UNIX_EPOCH.ordinal);
        assert_eq!(computed, super::IsoDate::UNIX_EPOCH);
    }
}
