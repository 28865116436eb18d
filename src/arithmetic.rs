//! Integer arithmetic helpers shared by [`crate::Duration`], the iso date
//! bijection and [`crate::ClockTime`].
//!
//! Two divmod conventions show up across the crate and must not be
//! confused: [`symmetric_divmod`] truncates its quotient toward zero (the
//! remainder takes the sign of the dividend) and is what `Duration`'s
//! component fusing and `Date`/`DateTime` differencing use; [`floor_div`]
//! and [`floor_mod`] floor toward negative infinity and back `Duration`'s
//! `//` and `%` operators.

use crate::error::{Error, TemporalResult};

/// Divides `n` by `d`, truncating the quotient toward zero. The remainder
/// always shares `n`'s sign (or is zero), unlike [`floor_mod`].
#[inline]
#[must_use]
pub(crate) fn symmetric_divmod(n: i64, d: i64) -> (i64, i64) {
    (n / d, n % d)
}

#[inline]
#[must_use]
pub(crate) fn symmetric_divmod128(n: i128, d: i128) -> (i128, i128) {
    (n / d, n % d)
}

/// Floor division: the quotient rounds toward negative infinity.
#[inline]
#[must_use]
pub(crate) fn floor_div(n: i64, d: i64) -> i64 {
    let q = n / d;
    let r = n % d;
    if r != 0 && (r < 0) != (d < 0) {
        q - 1
    } else {
        q
    }
}

#[inline]
#[must_use]
pub(crate) fn floor_div128(n: i128, d: i128) -> i128 {
    let q = n / d;
    let r = n % d;
    if r != 0 && (r < 0) != (d < 0) {
        q - 1
    } else {
        q
    }
}

/// Floor modulo: the remainder shares `d`'s sign (or is zero).
#[inline]
#[must_use]
pub(crate) fn floor_mod(n: i64, d: i64) -> i64 {
    n - floor_div(n, d) * d
}

#[inline]
#[must_use]
pub(crate) fn floor_mod128(n: i128, d: i128) -> i128 {
    n - floor_div128(n, d) * d
}

/// Rounds a float to the nearest integer, ties resolving to the even
/// neighbor. Used wherever an originally floating-point quantity (a
/// `Duration` scaled by a non-integer factor) must collapse back onto the
/// integer grid this crate actually stores.
///
/// Errors rather than saturating if `x` falls outside what `i64` can
/// represent: a float-to-int `as` cast clamps out-of-range values instead
/// of wrapping, which would otherwise silently turn an extreme scalar
/// into `i64::MIN`/`MAX` rather than surfacing `OutOfRange`.
pub(crate) fn round_half_to_even(x: f64) -> TemporalResult<i64> {
    if !(i64::MIN as f64..=i64::MAX as f64).contains(&x) {
        return Err(Error::out_of_range().with_message("value out of i64 range"));
    }
    let floor = x.floor();
    let diff = x - floor;
    let floor_i = floor as i64;
    Ok(if diff < 0.5 {
        floor_i
    } else if diff > 0.5 {
        floor_i + 1
    } else if floor_i % 2 == 0 {
        floor_i
    } else {
        floor_i + 1
    })
}

/// Adds two nanosecond-fraction quantities, returning the unnormalized
/// total; callers carry overflow of `(-1s, 1s)` into whole seconds
/// themselves (the crossing point differs between `Duration`'s
/// symmetric carry and `ClockTime`'s floor carry).
#[inline]
#[must_use]
pub(crate) fn nano_add(a: i32, b: i32) -> i64 {
    i64::from(a) + i64::from(b)
}

#[inline]
#[must_use]
pub(crate) fn nano_sub(a: i32, b: i32) -> i64 {
    i64::from(a) - i64::from(b)
}

#[cfg(test)]
mod tests {
    use super::{floor_div, floor_mod, round_half_to_even, symmetric_divmod};

    #[test]
    fn symmetric_divmod_truncates_toward_zero() {
        assert_eq!(symmetric_divmod(7, 2), (3, 1));
        assert_eq!(symmetric_divmod(-7, 2), (-3, -1));
        assert_eq!(symmetric_divmod(7, -2), (-3, 1));
    }

    #[test]
    fn floor_div_mod_round_toward_negative_infinity() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_mod(-7, 2), 1);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_mod(7, -2), -1);
    }

    #[test]
    fn half_to_even_breaks_ties_to_the_even_neighbor() {
        assert_eq!(round_half_to_even(2.5).unwrap(), 2);
        assert_eq!(round_half_to_even(3.5).unwrap(), 4);
        assert_eq!(round_half_to_even(-2.5).unwrap(), -2);
        assert_eq!(round_half_to_even(2.4).unwrap(), 2);
        assert_eq!(round_half_to_even(2.6).unwrap(), 3);
    }

    #[test]
    fn half_to_even_rejects_magnitudes_past_i64() {
        assert!(round_half_to_even(1e30).is_err());
        assert!(round_half_to_even(-1e30).is_err());
    }
}
