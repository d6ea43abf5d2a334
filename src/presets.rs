//! Named whole-value format presets.
//!
//! Each macro token (`D`, `tt`, `FFFF`, ...) stands for one preset: a fixed
//! [`DateTimeFormatOptions`] record that the locale renders as a whole, rather
//! than a sub-pattern of tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;
use crate::locale::{DateTimeFormatOptions, MonthStyle, NumericStyle, TextStyle, ZoneNameStyle};

/// A named whole-value format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// `10/14/1983`
    DateShort,
    /// `Oct 14, 1983`
    DateMed,
    /// `October 14, 1983`
    DateFull,
    /// `Friday, October 14, 1983`
    DateHuge,
    /// `9:30 AM`
    TimeSimple,
    /// `9:30:23 AM`
    TimeWithSeconds,
    /// `9:30:23 AM EDT`
    TimeWithShortOffset,
    /// `9:30:23 AM Eastern Daylight Time`
    TimeWithLongOffset,
    /// `09:30`
    Time24Simple,
    /// `09:30:23`
    Time24WithSeconds,
    /// `09:30:23 EDT`
    Time24WithShortOffset,
    /// `09:30:23 Eastern Daylight Time`
    Time24WithLongOffset,
    /// `10/14/1983, 9:30 AM`
    DateTimeShort,
    /// `Oct 14, 1983, 9:30 AM`
    DateTimeMed,
    /// `October 14, 1983 at 9:30 AM EDT`
    DateTimeFull,
    /// `Friday, October 14, 1983 at 9:30 AM Eastern Daylight Time`
    DateTimeHuge,
    /// `10/14/1983, 9:30:23 AM`
    DateTimeShortWithSeconds,
    /// `Oct 14, 1983, 9:30:23 AM`
    DateTimeMedWithSeconds,
    /// `October 14, 1983 at 9:30:23 AM EDT`
    DateTimeFullWithSeconds,
    /// `Friday, October 14, 1983 at 9:30:23 AM Eastern Daylight Time`
    DateTimeHugeWithSeconds,
}

const N: Option<NumericStyle> = Some(NumericStyle::Numeric);
const TWO: Option<NumericStyle> = Some(NumericStyle::TwoDigit);

const DATE_SHORT: DateTimeFormatOptions = DateTimeFormatOptions {
    year: N,
    month: Some(MonthStyle::Numeric),
    day: N,
    ..DateTimeFormatOptions::EMPTY
};

const DATE_MED: DateTimeFormatOptions = DateTimeFormatOptions {
    month: Some(MonthStyle::Short),
    ..DATE_SHORT
};

const DATE_FULL: DateTimeFormatOptions = DateTimeFormatOptions {
    month: Some(MonthStyle::Long),
    ..DATE_SHORT
};

const DATE_HUGE: DateTimeFormatOptions = DateTimeFormatOptions {
    weekday: Some(TextStyle::Long),
    ..DATE_FULL
};

const TIME_SIMPLE: DateTimeFormatOptions = DateTimeFormatOptions {
    hour: N,
    minute: TWO,
    ..DateTimeFormatOptions::EMPTY
};

const TIME_WITH_SECONDS: DateTimeFormatOptions = DateTimeFormatOptions {
    second: TWO,
    ..TIME_SIMPLE
};

const fn with_zone(options: DateTimeFormatOptions, style: ZoneNameStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        time_zone_name: Some(style),
        ..options
    }
}

const fn with_seconds(options: DateTimeFormatOptions) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        second: TWO,
        ..options
    }
}

const fn h24(options: DateTimeFormatOptions) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        hour12: Some(false),
        ..options
    }
}

const fn with_time(date: DateTimeFormatOptions) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        hour: N,
        minute: TWO,
        ..date
    }
}

impl Preset {
    /// Every preset, in token-table order.
    pub const ALL: [Preset; 20] = [
        Preset::DateShort,
        Preset::DateMed,
        Preset::DateFull,
        Preset::DateHuge,
        Preset::TimeSimple,
        Preset::TimeWithSeconds,
        Preset::TimeWithShortOffset,
        Preset::TimeWithLongOffset,
        Preset::Time24Simple,
        Preset::Time24WithSeconds,
        Preset::Time24WithShortOffset,
        Preset::Time24WithLongOffset,
        Preset::DateTimeShort,
        Preset::DateTimeMed,
        Preset::DateTimeFull,
        Preset::DateTimeHuge,
        Preset::DateTimeShortWithSeconds,
        Preset::DateTimeMedWithSeconds,
        Preset::DateTimeFullWithSeconds,
        Preset::DateTimeHugeWithSeconds,
    ];

    /// The constant name of this preset, like `DATE_SHORT`.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::DateShort => "DATE_SHORT",
            Preset::DateMed => "DATE_MED",
            Preset::DateFull => "DATE_FULL",
            Preset::DateHuge => "DATE_HUGE",
            Preset::TimeSimple => "TIME_SIMPLE",
            Preset::TimeWithSeconds => "TIME_WITH_SECONDS",
            Preset::TimeWithShortOffset => "TIME_WITH_SHORT_OFFSET",
            Preset::TimeWithLongOffset => "TIME_WITH_LONG_OFFSET",
            Preset::Time24Simple => "TIME_24_SIMPLE",
            Preset::Time24WithSeconds => "TIME_24_WITH_SECONDS",
            Preset::Time24WithShortOffset => "TIME_24_WITH_SHORT_OFFSET",
            Preset::Time24WithLongOffset => "TIME_24_WITH_LONG_OFFSET",
            Preset::DateTimeShort => "DATETIME_SHORT",
            Preset::DateTimeMed => "DATETIME_MED",
            Preset::DateTimeFull => "DATETIME_FULL",
            Preset::DateTimeHuge => "DATETIME_HUGE",
            Preset::DateTimeShortWithSeconds => "DATETIME_SHORT_WITH_SECONDS",
            Preset::DateTimeMedWithSeconds => "DATETIME_MED_WITH_SECONDS",
            Preset::DateTimeFullWithSeconds => "DATETIME_FULL_WITH_SECONDS",
            Preset::DateTimeHugeWithSeconds => "DATETIME_HUGE_WITH_SECONDS",
        }
    }

    /// Look up a preset by its constant name.
    ///
    /// # Examples
    /// ```
    /// use lxfmt::Preset;
    ///
    /// assert_eq!(Preset::from_name("DATE_MED"), Some(Preset::DateMed));
    /// assert_eq!(Preset::from_name("DATE_TINY"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.iter().copied().find(|preset| preset.name() == name)
    }

    /// The formatting options this preset stands for.
    pub const fn options(&self) -> DateTimeFormatOptions {
        match self {
            Preset::DateShort => DATE_SHORT,
            Preset::DateMed => DATE_MED,
            Preset::DateFull => DATE_FULL,
            Preset::DateHuge => DATE_HUGE,
            Preset::TimeSimple => TIME_SIMPLE,
            Preset::TimeWithSeconds => TIME_WITH_SECONDS,
            Preset::TimeWithShortOffset => with_zone(TIME_WITH_SECONDS, ZoneNameStyle::Short),
            Preset::TimeWithLongOffset => with_zone(TIME_WITH_SECONDS, ZoneNameStyle::Long),
            Preset::Time24Simple => h24(TIME_SIMPLE),
            Preset::Time24WithSeconds => h24(TIME_WITH_SECONDS),
            Preset::Time24WithShortOffset => {
                h24(with_zone(TIME_WITH_SECONDS, ZoneNameStyle::Short))
            }
            Preset::Time24WithLongOffset => h24(with_zone(TIME_WITH_SECONDS, ZoneNameStyle::Long)),
            Preset::DateTimeShort => with_time(DATE_SHORT),
            Preset::DateTimeMed => with_time(DATE_MED),
            Preset::DateTimeFull => with_zone(with_time(DATE_FULL), ZoneNameStyle::Short),
            Preset::DateTimeHuge => with_zone(with_time(DATE_HUGE), ZoneNameStyle::Long),
            Preset::DateTimeShortWithSeconds => with_seconds(with_time(DATE_SHORT)),
            Preset::DateTimeMedWithSeconds => with_seconds(with_time(DATE_MED)),
            Preset::DateTimeFullWithSeconds => {
                with_seconds(with_zone(with_time(DATE_FULL), ZoneNameStyle::Short))
            }
            Preset::DateTimeHugeWithSeconds => {
                with_seconds(with_zone(with_time(DATE_HUGE), ZoneNameStyle::Long))
            }
        }
    }
}

impl FromStr for Preset {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_name(s).ok_or_else(|| FormatError::invalid_option("preset", s))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
