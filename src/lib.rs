//! An exact, nanosecond-resolution temporal value library: a
//! proleptic-Gregorian [`Date`], a nanosecond [`Time`] of day, their
//! composition as [`DateTime`], and the [`Duration`] interval type that
//! relates them.
//!
//! Calendar arithmetic is pure and has no notion of "now"; reading the
//! current time goes through [`Clock`], a pluggable wall-clock accessor
//! selected by descending precision, and [`Now`][components::Now], the
//! convenience namespace built on top of it. Timezone awareness is
//! composed in through the object-safe [`TzInfo`] trait rather than baked
//! into the date/time types themselves.
//!
//! This crate is `no_std` (with `alloc`); the `std`/`sys` features add the
//! platform clock and local timezone name lookup.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
)]

extern crate alloc;

pub mod error;

pub(crate) mod arithmetic;
pub(crate) mod clock;
pub(crate) mod clock_time;
pub(crate) mod components;
pub(crate) mod iso;
pub(crate) mod utils;

#[cfg(feature = "sys")]
pub(crate) mod sys;

pub mod tzinfo;

#[doc(inline)]
pub use clock::Clock;
#[doc(inline)]
pub use clock_time::ClockTime;
#[doc(inline)]
pub use components::{Date, DateTime, Duration, Time};
#[doc(inline)]
pub use error::{Error, ErrorKind, TemporalResult};
#[doc(inline)]
pub use tzinfo::{FixedOffset, TzInfo};

#[cfg(feature = "std")]
#[doc(inline)]
pub use components::Now;
