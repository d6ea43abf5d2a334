//! Tabular Islamic (Hijri) calendar conversion
//!
//! Used by the `islamic` output calendar. Conversion goes through the Julian
//! Day Number with the arithmetic (civil) Islamic calendar: a 30-year cycle
//! of 10631 days with 11 leap years. Observational calendars can differ by a
//! day or two.

use crate::civil::days_from_civil;

/// Julian Day Number of 1 Muharram 1 AH (July 19, 622 proleptic Gregorian).
const EPOCH: i64 = 1_948_440;

/// Julian Day Number of 1970-01-01.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Convert a Gregorian date to a Hijri date.
///
/// # Returns
/// A tuple of (hijri_year, hijri_month, hijri_day)
pub fn gregorian_to_hijri(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    jdn_to_hijri(gregorian_to_jdn(year, month, day))
}

/// Julian Day Number of a proleptic Gregorian date
fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    days_from_civil(year, month, day) + UNIX_EPOCH_JDN
}

/// Julian Day Number of a Hijri date
fn hijri_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    // Months alternate 30 and 29 days; ceil(29.5 * (month - 1))
    let month_days = (59 * (month - 1) + 1) / 2;
    let leap_days = (3 + 11 * year).div_euclid(30);
    day + month_days + (year - 1) * 354 + leap_days + EPOCH - 1
}

/// Convert a Julian Day Number to a Hijri date
fn jdn_to_hijri(jd: i64) -> (i32, u32, u32) {
    let year = (30 * (jd - EPOCH) + 10646).div_euclid(10631);

    // ceil((jd - (29 + start of year)) / 29.5) + 1
    let into_year = jd - (29 + hijri_to_jdn(year, 1, 1));
    let month = (-((-2 * into_year).div_euclid(59)) + 1).clamp(1, 12);
    let day = jd - hijri_to_jdn(year, month, 1) + 1;

    (year as i32, month as u32, day as u32)
}
