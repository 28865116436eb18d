//! `Date`: a proleptic-Gregorian calendar date.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::components::duration::Duration;
use crate::error::{Error, TemporalResult};
use crate::iso::IsoDate;

/// A proleptic-Gregorian date in years `1..=9999`.
///
/// `Date::ZERO` is the one documented exception: a sentinel representing
/// the absence of a date (year, month and day all `0`), used by callers
/// that need a "no date" value without reaching for `Option<Date>` at
/// every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    iso: Option<IsoDate>,
}

impl Date {
    pub const ZERO: Date = Date { iso: None };
    pub const MIN: Date = Date {
        iso: Some(IsoDate::MIN),
    };
    pub const MAX: Date = Date {
        iso: Some(IsoDate::MAX),
    };
    /// `1970-01-01`, the reference date `DateTime::UNIX_EPOCH` composes
    /// with midnight.
    pub const UNIX_EPOCH: Date = Date {
        iso: Some(IsoDate::UNIX_EPOCH),
    };
    /// The smallest representable step between two distinct `Date`s.
    pub const RESOLUTION_DAYS: i64 = 1;

    /// Builds a `Date` from a calendar year/month/day. `(0, 0, 0)` yields
    /// `Date::ZERO`. `day` accepts either the public `1..=days_in_month`
    /// value or a "from end" reference (`-1` last day, `-2`
    /// second-to-last, `-3` third-to-last); both forms for the same
    /// calendar day produce an identical `Date`.
    pub fn new(year: i32, month: u8, day: i32) -> TemporalResult<Self> {
        if year == 0 && month == 0 && day == 0 {
            return Ok(Self::ZERO);
        }
        Ok(Self {
            iso: Some(IsoDate::new(year, month, day)?),
        })
    }

    pub fn from_ordinal(ordinal: i64) -> TemporalResult<Self> {
        if ordinal == 0 {
            return Ok(Self::ZERO);
        }
        Ok(Self {
            iso: Some(IsoDate::from_ordinal(ordinal)?),
        })
    }

    fn iso(&self) -> TemporalResult<IsoDate> {
        self.iso.ok_or_else(|| {
            Error::invalid_operation().with_message("operation undefined on Date::ZERO")
        })
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.iso.is_none()
    }

    pub fn year(&self) -> TemporalResult<i32> {
        Ok(self.iso()?.year)
    }

    pub fn month(&self) -> TemporalResult<u8> {
        Ok(self.iso()?.month)
    }

    pub fn day(&self) -> TemporalResult<u8> {
        Ok(self.iso()?.day())
    }

    #[must_use]
    pub fn ordinal(&self) -> i64 {
        self.iso.map_or(0, |d| d.ordinal)
    }

    pub fn is_leap_year(&self) -> TemporalResult<bool> {
        Ok(self.iso()?.is_leap_year())
    }

    pub fn days_in_month(&self) -> TemporalResult<u8> {
        Ok(self.iso()?.days_in_month())
    }

    pub fn days_in_year(&self) -> TemporalResult<u16> {
        Ok(self.iso()?.days_in_year())
    }

    /// The ISO day-of-week (`1` = Monday, `7` = Sunday) for `ordinal`.
    fn day_of_week_for_ordinal(ordinal: i64) -> u8 {
        (((ordinal - 1) % 7) + 1) as u8
    }

    fn iso_week_1(year: i32) -> TemporalResult<Self> {
        let jan4 = Self::new(year, 1, 4)?;
        let shift = 1 - i64::from(Self::day_of_week_for_ordinal(jan4.ordinal()));
        jan4.add(&Duration::from_days(shift))
    }

    /// The ISO calendar triple `(iso_year, iso_week, iso_weekday)`.
    pub fn year_week_day(&self) -> TemporalResult<(i32, u16, u8)> {
        let iso = self.iso()?;
        let ordinal = iso.ordinal;
        let weekday = Self::day_of_week_for_ordinal(ordinal);

        let dec29 = Self::new(iso.year, 12, 29)?;
        let (iso_year, week1) = if ordinal >= dec29.ordinal() {
            let candidate = Self::iso_week_1(iso.year + 1)?;
            if ordinal < candidate.ordinal() {
                (iso.year, Self::iso_week_1(iso.year)?)
            } else {
                (iso.year + 1, candidate)
            }
        } else {
            let candidate = Self::iso_week_1(iso.year)?;
            if ordinal < candidate.ordinal() {
                (iso.year - 1, Self::iso_week_1(iso.year - 1)?)
            } else {
                (iso.year, candidate)
            }
        };
        let week = (ordinal - week1.ordinal()) / 7 + 1;
        Ok((iso_year, week as u16, weekday))
    }

    /// `(year, day_of_year)`.
    pub fn year_day(&self) -> TemporalResult<(i32, u16)> {
        let iso = self.iso()?;
        let jan1 = Self::new(iso.year, 1, 1)?;
        Ok((iso.year, (iso.ordinal - jan1.ordinal() + 1) as u16))
    }

    pub fn with_year(&self, year: i32) -> TemporalResult<Self> {
        let iso = self.iso()?;
        Self::new(year, iso.month, i32::from(iso.day()))
    }

    pub fn with_month(&self, month: u8) -> TemporalResult<Self> {
        let iso = self.iso()?;
        Self::new(iso.year, month, i32::from(iso.day()))
    }

    pub fn with_day(&self, day: i32) -> TemporalResult<Self> {
        let iso = self.iso()?;
        Self::new(iso.year, iso.month, day)
    }

    /// Adds a `Duration` to this date. Days are applied before months:
    /// `Date(1976, 6, 30) + Duration(months=1, days=1) == Date(1976, 8,
    /// 1)`. A `Duration` with any nonzero seconds/subseconds component is
    /// rejected; adding a sub-day interval to a pure calendar date is
    /// undefined.
    pub fn add(&self, duration: &Duration) -> TemporalResult<Self> {
        if duration.seconds() != 0 || duration.subsecond_nanos() != 0 {
            return Err(Error::invalid_operation()
                .with_message("cannot add a Duration with nonzero seconds/subseconds to a Date"));
        }
        let mut iso = self.iso()?;
        if duration.days() != 0 {
            iso = iso.add_days(duration.days())?;
        }
        if duration.months() != 0 {
            iso = iso.add_months(duration.months())?;
        }
        Ok(Self { iso: Some(iso) })
    }

    pub fn subtract(&self, duration: &Duration) -> TemporalResult<Self> {
        self.add(&duration.neg())
    }

    /// `self - other`, as a `Duration` whose only nonzero component is
    /// `days = ordinal(self) - ordinal(other)`.
    pub fn sub_date(&self, other: &Self) -> TemporalResult<Duration> {
        let a = self.iso()?;
        let b = other.iso()?;
        Ok(Duration::from_days(a.ordinal - b.ordinal))
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.ordinal().cmp(&other.ordinal()))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.iso {
            None => write!(f, "0000-00-00"),
            Some(iso) => write!(f, "{:04}-{:02}-{:02}", iso.year, iso.month, iso.day()),
        }
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses the `"YYYY-MM-DD"` form produced by `Display`. This is the
    /// one hand-written parser this crate ships; general ISO-8601 date
    /// parsing is out of scope.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::not_supported().with_message("expected YYYY-MM-DD"));
        };
        let year: i32 = y
            .parse()
            .map_err(|_| Error::not_supported().with_message("invalid year"))?;
        let month: u8 = m
            .parse()
            .map_err(|_| Error::not_supported().with_message("invalid month"))?;
        let day: i32 = d
            .parse()
            .map_err(|_| Error::not_supported().with_message("invalid day"))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::Date;
    use crate::components::duration::Duration;

    #[test]
    fn zero_date_displays_as_all_zero() {
        assert_eq!(Date::ZERO.to_string(), "0000-00-00");
        assert!(Date::ZERO.is_zero());
    }

    #[test]
    fn adds_days_before_months() {
        let d = Date::new(1976, 6, 30).unwrap();
        let duration = Duration::new(0, 1, 0, 1, 0, 0, 0, 0.0, 0, 0, 0).unwrap();
        let result = d.add(&duration).unwrap();
        assert_eq!(result, Date::new(1976, 8, 1).unwrap());
    }

    #[test]
    fn rejects_adding_a_sub_day_duration() {
        let d = Date::new(2023, 1, 1).unwrap();
        let duration = Duration::new(0, 0, 0, 0, 1, 0, 0, 0.0, 0, 0, 0).unwrap();
        assert!(d.add(&duration).is_err());
    }

    #[test]
    fn negative_day_is_a_from_end_reference() {
        assert_eq!(Date::new(1976, 1, -1).unwrap(), Date::new(1976, 1, 31).unwrap());
        assert_eq!(Date::new(1976, 1, -2).unwrap(), Date::new(1976, 1, 30).unwrap());
        assert_eq!(Date::new(1976, 1, -3).unwrap(), Date::new(1976, 1, 29).unwrap());
        assert_eq!(Date::new(1976, 2, -1).unwrap(), Date::new(1976, 2, 29).unwrap());
        assert!(Date::new(1976, 1, -4).is_err());
        assert!(Date::new(1976, 1, 0).is_err());
    }

    #[test]
    fn last_day_of_month_addition_chains_across_varying_month_lengths() {
        let plus_one_month = Duration::new(0, 1, 0, 0, 0, 0, 0, 0.0, 0, 0, 0).unwrap();
        let mut d = Date::new(1976, 1, -1).unwrap();
        assert_eq!(d, Date::new(1976, 1, 31).unwrap());
        for expected in [
            (1976, 2, 29),
            (1976, 3, 31),
            (1976, 4, 30),
            (1976, 5, 31),
            (1976, 6, 30),
        ] {
            d = d.add(&plus_one_month).unwrap();
            assert_eq!(d, Date::new(expected.0, expected.1, expected.2).unwrap());
        }
    }

    #[test]
    fn date_subtraction_yields_an_ordinal_difference_in_days() {
        let a = Date::new(2023, 3, 1).unwrap();
        let b = Date::new(2023, 1, 1).unwrap();
        let diff = a.sub_date(&b).unwrap();
        assert_eq!(diff.days(), 59);
        assert_eq!(diff.months(), 0);
    }

    #[test]
    fn with_year_preserves_month_and_day() {
        let d = Date::new(2020, 2, 29).unwrap();
        assert!(d.with_year(2021).is_err());
        let d2024 = d.with_year(2024).unwrap();
        assert_eq!(
            (
                d2024.year().unwrap(),
                d2024.month().unwrap(),
                d2024.day().unwrap()
            ),
            (2024, 2, 29)
        );
    }

    #[test]
    fn ordering_follows_ordinal() {
        let a = Date::new(2023, 1, 1).unwrap();
        let b = Date::new(2023, 12, 31).unwrap();
        assert!(a < b);
    }

    #[test]
    fn year_day_is_one_based() {
        let d = Date::new(2023, 1, 1).unwrap();
        assert_eq!(d.year_day().unwrap(), (2023, 1));
        let d2 = Date::new(2023, 12, 31).unwrap();
        assert_eq!(d2.year_day().unwrap(), (2023, 365));
    }

    #[test]
    fn iso_week_for_a_known_date() {
        // 2018-04-01 is a Sunday, ISO week 13 of ISO year 2018.
        let d = Date::new(2018, 4, 1).unwrap();
        assert_eq!(d.year_week_day().unwrap(), (2018, 13, 7));
    }

    #[test]
    fn parses_and_displays_round_trip() {
        let d = Date::new(2023, 7, 4).unwrap();
        let rendered = d.to_string();
        let parsed: Date = rendered.parse().unwrap();
        assert_eq!(parsed, d);
    }
}
