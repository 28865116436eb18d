//! `Duration`: an exact, four-component (months, days, seconds,
//! subseconds) interval.
//!
//! Equality and ordering are structural, not normalized: two `Duration`s
//! denoting the same elapsed time but decomposed differently across
//! months/days are *not* equal. A month has no fixed length, so collapsing
//! `Duration { months: 1, .. }` and `Duration { days: 30, .. }` into a
//! single comparable value would silently assume one.

use core::cmp::Ordering;
use core::fmt;

use crate::arithmetic::{floor_div128, floor_mod128, round_half_to_even, symmetric_divmod128};
use crate::error::{Error, TemporalResult};

fn checked_add_i64(a: i64, b: i64) -> TemporalResult<i64> {
    a.checked_add(b)
        .ok_or_else(|| Error::out_of_range().with_message("Duration component overflow"))
}

fn checked_mul_i64(a: i64, b: i64) -> TemporalResult<i64> {
    a.checked_mul(b)
        .ok_or_else(|| Error::out_of_range().with_message("Duration component overflow"))
}

fn i64_from_i128(n: i128) -> TemporalResult<i64> {
    i64::try_from(n).map_err(|_| Error::out_of_range().with_message("Duration component overflow"))
}

/// An exact interval expressed as months, days, seconds and a nanosecond
/// fraction of a second.
///
/// `subsecond_nanos` always shares `seconds`'s sign (or is zero) and is
/// stored as an exact integer count of nanoseconds in `-999_999_999..=
/// 999_999_999`, the Open-Question resolution of keeping the fractional
/// component exact rather than a lossy `f64`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    months: i64,
    days: i64,
    seconds: i64,
    subsecond_nanos: i32,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        months: 0,
        days: 0,
        seconds: 0,
        subsecond_nanos: 0,
    };

    /// Builds a `Duration` by fusing every unit field, the way the value
    /// is constructed everywhere else in this crate's public surface:
    /// `months = 12*years + months`, `days = 7*weeks + days`, and the
    /// sub-day fields collapse into an exact nanosecond total before being
    /// split back into `(seconds, subsecond_nanos)`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        years: i64,
        months: i64,
        weeks: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        subseconds: f64,
        milliseconds: i64,
        microseconds: i64,
        nanoseconds: i64,
    ) -> TemporalResult<Self> {
        let total_months = checked_add_i64(checked_mul_i64(years, 12)?, months)?;
        let total_days = checked_add_i64(checked_mul_i64(weeks, 7)?, days)?;

        let mut total_ns: i128 = 0;
        total_ns += i128::from(hours) * 3_600_000_000_000;
        total_ns += i128::from(minutes) * 60_000_000_000;
        total_ns += i128::from(seconds) * 1_000_000_000;
        total_ns += (subseconds * 1_000_000_000.0) as i128;
        total_ns += i128::from(milliseconds) * 1_000_000;
        total_ns += i128::from(microseconds) * 1_000;
        total_ns += i128::from(nanoseconds);

        let (whole_seconds, frac_ns) = symmetric_divmod128(total_ns, 1_000_000_000);

        Ok(Self {
            months: total_months,
            days: total_days,
            seconds: i64_from_i128(whole_seconds)?,
            subsecond_nanos: frac_ns as i32,
        })
    }

    /// Builds a `Duration` from already-normalized parts without
    /// revalidating the fuse above; used internally where each component
    /// is independently derived and deliberately not renormalized against
    /// the others (`DateTime - DateTime`'s mixed-sign result, most
    /// notably).
    pub(crate) fn from_raw_parts(
        months: i64,
        days: i64,
        seconds: i64,
        subsecond_nanos: i32,
    ) -> Self {
        Self {
            months,
            days,
            seconds,
            subsecond_nanos,
        }
    }

    #[must_use]
    pub fn from_months(months: i64) -> Self {
        Self::from_raw_parts(months, 0, 0, 0)
    }

    #[must_use]
    pub fn from_days(days: i64) -> Self {
        Self::from_raw_parts(0, days, 0, 0)
    }

    #[must_use]
    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_raw_parts(0, 0, seconds, 0)
    }

    #[must_use]
    pub const fn months(&self) -> i64 {
        self.months
    }

    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    #[must_use]
    pub const fn subsecond_nanos(&self) -> i32 {
        self.subsecond_nanos
    }

    /// `(years, months, days)`, derived from the canonical fields.
    #[must_use]
    pub fn years_months_days(&self) -> (i64, i64, i64) {
        let (years, months) = symmetric_divmod128(i128::from(self.months), 12);
        (years as i64, months as i64, self.days)
    }

    /// `(hours, minutes, seconds)`, the whole-second part of the
    /// time-of-day component; `subsecond_nanos` is reported separately.
    #[must_use]
    pub fn hours_minutes_seconds(&self) -> (i64, i64, i64) {
        let (hours, rem) = symmetric_divmod128(i128::from(self.seconds), 3600);
        let (minutes, secs) = symmetric_divmod128(rem, 60);
        (hours as i64, minutes as i64, secs as i64)
    }

    /// The `P%04d-%02d-%02dT%02d:%02d:%012.9f` rendering, on
    /// `(years, months, days, hours, minutes, seconds)`.
    #[must_use]
    pub fn iso_format(&self) -> alloc::string::String {
        let (years, months, days) = self.years_months_days();
        let (hours, minutes, seconds) = self.hours_minutes_seconds();
        let seconds_f = seconds as f64 + f64::from(self.subsecond_nanos) / 1_000_000_000.0;
        alloc::format!(
            "P{years:04}-{months:02}-{days:02}T{hours:02}:{minutes:02}:{seconds_f:012.9}"
        )
    }

    /// The exact total in nanoseconds of `seconds`+`subsecond_nanos`, used
    /// internally wherever the two need combining before a divmod.
    fn total_nanos(&self) -> i128 {
        i128::from(self.seconds) * 1_000_000_000 + i128::from(self.subsecond_nanos)
    }

    fn from_total_nanos(total_ns: i128, months: i64, days: i64) -> TemporalResult<Self> {
        let (seconds, subsecond_nanos) = symmetric_divmod128(total_ns, 1_000_000_000);
        Ok(Self {
            months,
            days,
            seconds: i64_from_i128(seconds)?,
            subsecond_nanos: subsecond_nanos as i32,
        })
    }

    /// `seconds`/`subsecond_nanos` collapsed to whole seconds, or `None`
    /// if there's a nonzero `months`/`days`/fractional-second component to
    /// lose. Used to validate a zone offset, which must be an exact
    /// integral second count.
    #[must_use]
    pub(crate) fn whole_seconds(&self) -> Option<i64> {
        if self.months != 0 || self.days != 0 || self.subsecond_nanos != 0 {
            return None;
        }
        Some(self.seconds)
    }

    /// Whether any component is nonzero.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.months != 0 || self.days != 0 || self.seconds != 0 || self.subsecond_nanos != 0
    }

    pub fn add(&self, other: &Self) -> TemporalResult<Self> {
        let months = checked_add_i64(self.months, other.months)?;
        let days = checked_add_i64(self.days, other.days)?;
        let total_ns = self.total_nanos() + other.total_nanos();
        Self::from_total_nanos(total_ns, months, days)
    }

    pub fn sub(&self, other: &Self) -> TemporalResult<Self> {
        let months = checked_add_i64(self.months, -other.months)?;
        let days = checked_add_i64(self.days, -other.days)?;
        let total_ns = self.total_nanos() - other.total_nanos();
        Self::from_total_nanos(total_ns, months, days)
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            months: -self.months,
            days: -self.days,
            seconds: -self.seconds,
            subsecond_nanos: -self.subsecond_nanos,
        }
    }

    /// Each component independently absolute-valued; the result need not
    /// be internally consistent as an elapsed interval any more than the
    /// original was (a `Duration` with mixed-sign components abs'd
    /// component-wise, matching how the fields are always treated
    /// independently elsewhere in this type).
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            months: self.months.abs(),
            days: self.days.abs(),
            seconds: self.seconds.abs(),
            subsecond_nanos: self.subsecond_nanos.abs(),
        }
    }

    /// Scales every component by `scalar`, rounding months/days and the
    /// nanosecond total half-to-even. Errors with `OutOfRange` rather than
    /// clamping if a scaled component would overflow `i64`.
    pub fn mul(&self, scalar: f64) -> TemporalResult<Self> {
        let months = round_half_to_even(self.months as f64 * scalar)?;
        let days = round_half_to_even(self.days as f64 * scalar)?;
        let total_ns = i128::from(round_half_to_even(self.total_nanos() as f64 * scalar)?);
        Self::from_total_nanos(total_ns, months, days)
    }

    /// True division by `scalar`, the inverse of [`Self::mul`].
    pub fn div(&self, scalar: f64) -> TemporalResult<Self> {
        if scalar == 0.0 {
            return Err(Error::invalid_operation().with_message("division by zero"));
        }
        self.mul(1.0 / scalar)
    }

    /// Floor division by an integer: floors `months`, `days` and the
    /// combined `seconds`+`subsecond_nanos` each independently; the
    /// result's `subsecond_nanos` is always `0`.
    pub fn floor_div(&self, other: i64) -> TemporalResult<Self> {
        if other == 0 {
            return Err(Error::invalid_operation().with_message("division by zero"));
        }
        let months = floor_div128(i128::from(self.months), i128::from(other)) as i64;
        let days = floor_div128(i128::from(self.days), i128::from(other)) as i64;
        let seconds = floor_div128(self.total_nanos(), i128::from(other) * 1_000_000_000);
        Ok(Self {
            months,
            days,
            seconds: i64_from_i128(seconds)?,
            subsecond_nanos: 0,
        })
    }

    /// Modulo by an integer: `months % n` and `days % n` follow floor
    /// semantics (banker's-rounded, though that's a no-op on already
    /// integral values); the combined seconds+subseconds remainder is
    /// split back into `(seconds, subsecond_nanos)` by
    /// [`symmetric_divmod128`], matching `Duration.__mod__`'s
    /// `symmetric_divmod(total % other, 1)`.
    pub fn rem(&self, other: i64) -> TemporalResult<Self> {
        if other == 0 {
            return Err(Error::invalid_operation().with_message("division by zero"));
        }
        let months =
            round_half_to_even(floor_mod128(i128::from(self.months), i128::from(other)) as f64)?;
        let days =
            round_half_to_even(floor_mod128(i128::from(self.days), i128::from(other)) as f64)?;
        let r_ns = floor_mod128(self.total_nanos(), i128::from(other) * 1_000_000_000);
        Self::from_total_nanos(r_ns, months, days)
    }
}

impl fmt::Debug for Duration {
    /// `Duration(months=M, days=D, seconds=S, subseconds=F)`, `F` the
    /// `subsecond_nanos` fraction rendered as a float.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subseconds = f64::from(self.subsecond_nanos) / 1_000_000_000.0;
        write!(
            f,
            "Duration(months={}, days={}, seconds={}, subseconds={subseconds})",
            self.months, self.days, self.seconds
        )
    }
}

impl fmt::Display for Duration {
    /// Compact form: space-joined non-empty `{±months}mo`, `{±days}d`,
    /// `{±seconds[.fffffffff]}s` terms. The seconds term carries a sign
    /// only when `seconds` itself is nonzero; its fraction always keeps at
    /// least one digit after the point (`"1.0s"`, never `"1.s"`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if self.months != 0 {
            write!(f, "{:+}mo", self.months)?;
            wrote = true;
        }
        if self.days != 0 {
            if wrote {
                write!(f, " ")?;
            }
            write!(f, "{:+}d", self.days)?;
            wrote = true;
        }
        if self.seconds != 0 || self.subsecond_nanos != 0 {
            if wrote {
                write!(f, " ")?;
            }
            if self.seconds == 0 {
                write!(f, "0")?;
            } else {
                write!(f, "{:+}", self.seconds)?;
            }
            let frac = f64::from(self.subsecond_nanos.unsigned_abs()) / 1_000_000_000.0;
            let mut frac_str = alloc::format!("{frac:.9}");
            frac_str.remove(0);
            let trimmed = frac_str.trim_end_matches('0');
            if trimmed.is_empty() || trimmed == "." {
                write!(f, ".0")?;
            } else {
                write!(f, "{trimmed}")?;
            }
            write!(f, "s")?;
        }
        Ok(())
    }
}

impl PartialOrd for Duration {
    /// Structural ordering by `(months, days, seconds, subsecond_nanos)`
    /// tuple; like equality, this never normalizes months/days against
    /// each other (a month having no fixed length).
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(
            (self.months, self.days, self.seconds, self.subsecond_nanos).cmp(&(
                other.months,
                other.days,
                other.seconds,
                other.subsecond_nanos,
            )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Duration;

    #[test]
    fn fuses_years_weeks_and_subday_units() {
        let d = Duration::new(1, 2, 1, 3, 1, 1, 1, 0.5, 1, 1, 1).unwrap();
        assert_eq!(d.months(), 14);
        assert_eq!(d.days(), 10);
        assert_eq!(d.seconds(), 3661);
        assert_eq!(d.subsecond_nanos(), 501_001_001);
    }

    #[test]
    fn subseconds_fusing_truncates_rather_than_rounds() {
        let d = Duration::new(0, 0, 0, 0, 0, 0, 0, 3.5e-9, 0, 0, 0).unwrap();
        assert_eq!(d.subsecond_nanos(), 3);
    }

    #[test]
    fn debug_matches_the_named_field_repr() {
        let d = Duration::new(0, 1, 0, 2, 0, 0, 3, 0.5, 0, 0, 0).unwrap();
        assert_eq!(
            alloc::format!("{d:?}"),
            "Duration(months=1, days=2, seconds=3, subseconds=0.5)"
        );
    }

    #[test]
    fn display_renders_the_compact_space_joined_form() {
        let d = Duration::new(0, 1, 0, -2, 0, 0, 3, 0.5, 0, 0, 0).unwrap();
        assert_eq!(d.to_string(), "+1mo -2d +3.5s");
        assert_eq!(Duration::ZERO.to_string(), "");
        assert_eq!(Duration::new(0, 0, 0, 0, 0, 0, 1, 0.0, 0, 0, 0).unwrap().to_string(), "+1.0s");
        assert_eq!(Duration::new(0, 0, 0, 0, 0, 0, 0, 0.5, 0, 0, 0).unwrap().to_string(), "0.5s");
    }

    #[test]
    fn iso_format_matches_the_p_date_t_time_layout() {
        let d = Duration::new(1, 2, 0, 3, 4, 5, 6, 0.0, 0, 0, 0).unwrap();
        assert_eq!(d.iso_format(), "P0001-02-03T04:05:06.000000000");
    }

    #[test]
    fn structural_equality_does_not_normalize_months_and_days() {
        let a = Duration::from_months(1);
        let b = Duration::from_days(30);
        assert_ne!(a, b);
    }

    #[test]
    fn add_carries_subseconds_into_seconds() {
        let a = Duration::new(0, 0, 0, 0, 0, 0, 1, 0.6, 0, 0, 0).unwrap();
        let b = Duration::new(0, 0, 0, 0, 0, 0, 1, 0.6, 0, 0, 0).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.seconds(), 3);
        assert_eq!(sum.subsecond_nanos(), 200_000_000);
    }

    #[test]
    fn negative_duration_round_trips_through_neg() {
        let a = Duration::new(0, 0, 0, 1, 0, 0, 30, 0.0, 0, 0, 0).unwrap();
        let b = a.neg();
        assert_eq!(b.days(), -1);
        assert_eq!(b.seconds(), -30);
        assert_eq!(b.neg(), a);
    }

    #[test]
    fn floor_div_drops_the_fractional_remainder() {
        let d = Duration::from_seconds(7).floor_div(2).unwrap();
        assert_eq!(d.seconds(), 3);
        assert_eq!(d.subsecond_nanos(), 0);
        let d = Duration::from_seconds(-7).floor_div(2).unwrap();
        assert_eq!(d.seconds(), -4);
    }

    #[test]
    fn rem_keeps_sign_of_the_divisor() {
        let d = Duration::from_seconds(-7).rem(2).unwrap();
        assert_eq!(d.seconds(), 1);
    }

    #[test]
    fn is_truthy_reflects_any_nonzero_component() {
        assert!(!Duration::ZERO.is_truthy());
        assert!(Duration::from_days(1).is_truthy());
    }
}
