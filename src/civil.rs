//! Proleptic Gregorian calendar arithmetic
//!
//! Derived date fields for [`DateTimeFields`](crate::value::DateTimeFields):
//! - ordinal day of the year (1 = January 1)
//! - ISO weekday (1 = Monday ... 7 = Sunday)
//! - ISO week-year and week number (weeks start on Monday, week 1 contains
//!   the year's first Thursday)
//! - the 12-hour clock hour

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Cumulative days before each month for non-leap years
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Earliest year accepted by [`DateTimeFields`](crate::value::DateTimeFields).
pub const MIN_YEAR: i32 = -999_999;

/// Latest year accepted by [`DateTimeFields`](crate::value::DateTimeFields).
pub const MAX_YEAR: i32 = 999_999;

/// Returns true if the given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

/// Day of the year, 1-based.
pub fn ordinal(year: i32, month: u32, day: u32) -> u32 {
    let leap_day = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[(month - 1) as usize] + leap_day + day
}

/// Days since 1970-01-01 for a civil date.
///
/// Works for any year, including years before the epoch and before 1 AD.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// ISO weekday for a civil date: 1 = Monday ... 7 = Sunday.
pub fn weekday(year: i32, month: u32, day: u32) -> u32 {
    // 1970-01-01 was a Thursday
    (days_from_civil(year, month, day) + 3).rem_euclid(7) as u32 + 1
}

/// Number of ISO weeks in a year (52 or 53).
pub fn weeks_in_week_year(year: i32) -> u32 {
    let p = |y: i64| (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)).rem_euclid(7);
    let year = i64::from(year);
    if p(year) == 4 || p(year - 1) == 3 {
        53
    } else {
        52
    }
}

/// ISO week-year and week number for a civil date.
///
/// The year must lie within [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn iso_week(year: i32, month: u32, day: u32) -> (i32, u32) {
    let ordinal = ordinal(year, month, day) as i32;
    let weekday = weekday(year, month, day) as i32;
    let week = (ordinal - weekday + 10) / 7;

    if week < 1 {
        (year - 1, weeks_in_week_year(year - 1))
    } else if week as u32 > weeks_in_week_year(year) {
        (year + 1, 1)
    } else {
        (year, week as u32)
    }
}

/// Last two digits of a year, ignoring its sign: 1983 -> 83, -5 -> 5.
pub fn two_digit_year(year: i32) -> i64 {
    i64::from(year % 100).abs()
}

/// Convert a 24-hour clock hour to the 12-hour clock.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
pub fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}
