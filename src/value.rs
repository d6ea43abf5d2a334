//! Date/time values that can be formatted.

use crate::civil;
use crate::error::FormatError;
use crate::formatter::offset::{render_offset, OffsetStyle};

/// Read access to the fields of a date/time value.
///
/// Implementors supply already-resolved local fields; the formatter never
/// performs calendar or time zone arithmetic itself.
pub trait DateTimeLike {
    fn year(&self) -> i32;
    /// Month of the year, 1-12.
    fn month(&self) -> u32;
    /// Day of the month, 1-31.
    fn day(&self) -> u32;
    /// Hour of the day, 0-23.
    fn hour(&self) -> u32;
    fn minute(&self) -> u32;
    fn second(&self) -> u32;
    fn millisecond(&self) -> u32;
    /// ISO weekday, 1 = Monday ... 7 = Sunday.
    fn weekday(&self) -> u32;
    /// ISO week-numbering year.
    fn week_year(&self) -> i32;
    /// ISO week of the week-year, 1-53.
    fn week_number(&self) -> u32;
    /// Day of the year, 1-366.
    fn ordinal(&self) -> u32;
    /// Offset from UTC in minutes.
    fn offset(&self) -> i32;
    /// True when the zone has a fixed offset, such as UTC.
    fn is_offset_fixed(&self) -> bool;
    /// Short offset name, like `EDT`.
    fn offset_name_short(&self) -> String;
    /// Long offset name, like `Eastern Daylight Time`.
    fn offset_name_long(&self) -> String;
    /// Zone identifier, like `America/New_York`.
    fn zone_name(&self) -> String;
}

/// Time zone information attached to a [`DateTimeFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneInfo {
    /// Offset from UTC in minutes.
    pub offset: i32,
    pub fixed: bool,
    pub name: String,
    pub short_name: String,
    pub long_name: String,
}

impl ZoneInfo {
    /// The UTC zone.
    pub fn utc() -> Self {
        Self::fixed(0)
    }

    /// A fixed-offset zone named like `UTC+5:30`.
    pub fn fixed(offset: i32) -> Self {
        let name = if offset == 0 {
            "UTC".to_string()
        } else {
            let ascii = |n: i64, pad: usize| format!("{:0pad$}", n, pad = pad);
            format!(
                "UTC{}",
                render_offset(offset, OffsetStyle::Narrow, false, true, ascii)
            )
        };
        ZoneInfo {
            offset,
            fixed: true,
            short_name: name.clone(),
            long_name: name.clone(),
            name,
        }
    }

    /// A named zone at a particular instant, for example
    /// `ZoneInfo::named("America/New_York", -240, "EDT", "Eastern Daylight Time")`.
    pub fn named(
        name: impl Into<String>,
        offset: i32,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
    ) -> Self {
        ZoneInfo {
            offset,
            fixed: false,
            name: name.into(),
            short_name: short_name.into(),
            long_name: long_name.into(),
        }
    }
}

impl Default for ZoneInfo {
    fn default() -> Self {
        Self::utc()
    }
}

/// A plain date/time record.
///
/// Weekday, ISO week and ordinal are derived from the date using the
/// proleptic Gregorian calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    weekday: u32,
    week_year: i32,
    week_number: u32,
    ordinal: u32,
    zone: ZoneInfo,
}

impl DateTimeFields {
    /// Midnight UTC on the given date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, FormatError> {
        if !(civil::MIN_YEAR..=civil::MAX_YEAR).contains(&year) {
            return Err(FormatError::FieldOutOfRange {
                field: "year",
                value: i64::from(year),
            });
        }
        if !(1..=12).contains(&month) {
            return Err(FormatError::FieldOutOfRange {
                field: "month",
                value: i64::from(month),
            });
        }
        if day < 1 || day > civil::days_in_month(year, month) {
            return Err(FormatError::FieldOutOfRange {
                field: "day",
                value: i64::from(day),
            });
        }

        let (week_year, week_number) = civil::iso_week(year, month, day);
        Ok(DateTimeFields {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            weekday: civil::weekday(year, month, day),
            week_year,
            week_number,
            ordinal: civil::ordinal(year, month, day),
            zone: ZoneInfo::utc(),
        })
    }

    /// Sets the wall-clock time.
    pub fn with_time(
        mut self,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, FormatError> {
        let checks: [(&'static str, u32, u32); 4] = [
            ("hour", hour, 23),
            ("minute", minute, 59),
            ("second", second, 59),
            ("millisecond", millisecond, 999),
        ];
        for (field, value, max) in checks {
            if value > max {
                return Err(FormatError::FieldOutOfRange {
                    field,
                    value: i64::from(value),
                });
            }
        }

        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self.millisecond = millisecond;
        Ok(self)
    }

    /// Sets the zone. The local fields are kept as they are.
    pub fn with_zone(mut self, zone: ZoneInfo) -> Self {
        self.zone = zone;
        self
    }

    pub fn zone(&self) -> &ZoneInfo {
        &self.zone
    }
}

impl DateTimeLike for DateTimeFields {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> u32 {
        self.month
    }

    fn day(&self) -> u32 {
        self.day
    }

    fn hour(&self) -> u32 {
        self.hour
    }

    fn minute(&self) -> u32 {
        self.minute
    }

    fn second(&self) -> u32 {
        self.second
    }

    fn millisecond(&self) -> u32 {
        self.millisecond
    }

    fn weekday(&self) -> u32 {
        self.weekday
    }

    fn week_year(&self) -> i32 {
        self.week_year
    }

    fn week_number(&self) -> u32 {
        self.week_number
    }

    fn ordinal(&self) -> u32 {
        self.ordinal
    }

    fn offset(&self) -> i32 {
        self.zone.offset
    }

    fn is_offset_fixed(&self) -> bool {
        self.zone.fixed
    }

    fn offset_name_short(&self) -> String {
        self.zone.short_name.clone()
    }

    fn offset_name_long(&self) -> String {
        self.zone.long_name.clone()
    }

    fn zone_name(&self) -> String {
        self.zone.name.clone()
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::{DateTimeLike, ZoneInfo};
    use chrono::{Datelike, Offset, TimeZone, Timelike};

    fn millis(nanosecond: u32) -> u32 {
        // Leap seconds are reported as nanosecond >= 1_000_000_000
        nanosecond % 1_000_000_000 / 1_000_000
    }

    /// Any chrono zone is exposed through its fixed offset at that instant.
    impl<Tz: TimeZone> DateTimeLike for chrono::DateTime<Tz> {
        fn year(&self) -> i32 {
            Datelike::year(self)
        }

        fn month(&self) -> u32 {
            Datelike::month(self)
        }

        fn day(&self) -> u32 {
            Datelike::day(self)
        }

        fn hour(&self) -> u32 {
            Timelike::hour(self)
        }

        fn minute(&self) -> u32 {
            Timelike::minute(self)
        }

        fn second(&self) -> u32 {
            Timelike::second(self)
        }

        fn millisecond(&self) -> u32 {
            millis(Timelike::nanosecond(self))
        }

        fn weekday(&self) -> u32 {
            Datelike::weekday(self).number_from_monday()
        }

        fn week_year(&self) -> i32 {
            self.iso_week().year()
        }

        fn week_number(&self) -> u32 {
            self.iso_week().week()
        }

        fn ordinal(&self) -> u32 {
            Datelike::ordinal(self)
        }

        fn offset(&self) -> i32 {
            self.offset().fix().local_minus_utc() / 60
        }

        fn is_offset_fixed(&self) -> bool {
            true
        }

        fn offset_name_short(&self) -> String {
            ZoneInfo::fixed(DateTimeLike::offset(self)).short_name
        }

        fn offset_name_long(&self) -> String {
            ZoneInfo::fixed(DateTimeLike::offset(self)).long_name
        }

        fn zone_name(&self) -> String {
            ZoneInfo::fixed(DateTimeLike::offset(self)).name
        }
    }

    /// Naive date/times are treated as UTC.
    impl DateTimeLike for chrono::NaiveDateTime {
        fn year(&self) -> i32 {
            Datelike::year(self)
        }

        fn month(&self) -> u32 {
            Datelike::month(self)
        }

        fn day(&self) -> u32 {
            Datelike::day(self)
        }

        fn hour(&self) -> u32 {
            Timelike::hour(self)
        }

        fn minute(&self) -> u32 {
            Timelike::minute(self)
        }

        fn second(&self) -> u32 {
            Timelike::second(self)
        }

        fn millisecond(&self) -> u32 {
            millis(Timelike::nanosecond(self))
        }

        fn weekday(&self) -> u32 {
            Datelike::weekday(self).number_from_monday()
        }

        fn week_year(&self) -> i32 {
            self.iso_week().year()
        }

        fn week_number(&self) -> u32 {
            self.iso_week().week()
        }

        fn ordinal(&self) -> u32 {
            Datelike::ordinal(self)
        }

        fn offset(&self) -> i32 {
            0
        }

        fn is_offset_fixed(&self) -> bool {
            true
        }

        fn offset_name_short(&self) -> String {
            "UTC".to_string()
        }

        fn offset_name_long(&self) -> String {
            "UTC".to_string()
        }

        fn zone_name(&self) -> String {
            "UTC".to_string()
        }
    }
}
