//! Julian Day arithmetic.
//!
//! Every ephemeris formula in this crate takes its time argument as Julian
//! centuries since J2000.0. This module converts civil (proleptic Gregorian)
//! dates to Julian Day numbers and back, and between Julian Days and
//! Julian centuries.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::SolarError;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00 TT).
pub const J2000: f64 = 2_451_545.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Smallest Julian Day the calculator will render or accept.
pub const MIN_JULIAN_DAY: f64 = 900_000.0;

/// Largest Julian Day the calculator will render or accept.
pub const MAX_JULIAN_DAY: f64 = 2_817_000.0;

/// First day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_SWITCH: f64 = 2_299_161.0;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date decoded from a Julian Day.
///
/// `day` carries the fraction of the day that the Julian Day held past
/// midnight, so 2000-01-01T12:00 decodes to day `1.5`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalendarDate {
    /// Astronomical year (year 0 = 1 BC)
    pub year: i32,
    /// Month, 1 to 12
    pub month: u32,
    /// Day of month including the fractional part
    pub day: f64,
}

/// Compute the Julian Day at the start (00:00) of the given Gregorian date.
///
/// January and February are treated as months 13 and 14 of the previous
/// year before the Gregorian leap correction
/// `B = 2 − ⌊Y/100⌋ + ⌊⌊Y/100⌋/4⌋` is applied. `day` may carry a fraction.
pub fn date_to_julian_day(year: i32, month: u32, day: f64) -> f64 {
    let (year, month) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5
}

/// Decode a Julian Day into a calendar date.
///
/// Day numbers before 1582-10-15 decode to the Julian calendar, later ones
/// to the Gregorian calendar.
pub fn julian_day_to_date(julian_day: f64) -> CalendarDate {
    let z = (julian_day + 0.5).floor();
    let f = (julian_day + 0.5) - z;
    let a = if z < GREGORIAN_SWITCH {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    CalendarDate {
        year: year as i32,
        month: month as u32,
        day,
    }
}

/// Julian centuries since J2000.0 for the given Julian Day.
pub fn julian_centuries(julian_day: f64) -> f64 {
    (julian_day - J2000) / DAYS_PER_CENTURY
}

/// Julian Day for a time given in Julian centuries since J2000.0.
pub fn centuries_to_julian_day(centuries: f64) -> f64 {
    centuries * DAYS_PER_CENTURY + J2000
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1 to 12) of `year`, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Ordinal day of the year (1 to 366) of the date holding this Julian Day.
pub fn day_of_year(julian_day: f64) -> u32 {
    let date = julian_day_to_date(julian_day);
    let k = if is_leap_year(date.year) { 1.0 } else { 2.0 };
    let month = f64::from(date.month);
    let ordinal = (275.0 * month / 9.0).floor() - k * ((month + 9.0) / 12.0).floor() + date.day.floor() - 30.0;
    ordinal as u32
}

/// Check that a Julian Day lies in the supported window
/// [`MIN_JULIAN_DAY`, `MAX_JULIAN_DAY`].
pub fn check_julian_day(julian_day: f64) -> Result<f64, SolarError> {
    if (MIN_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&julian_day) {
        Ok(julian_day)
    } else {
        Err(SolarError::DateOutOfRange { julian_day })
    }
}
