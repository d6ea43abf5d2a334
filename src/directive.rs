//! Directive table for date/time pattern tokens.
//!
//! Each recognized token maps to a [`Directive`] describing how it renders.
//! Matching is by exact token text, so `M`, `MM`, `MMM`, `MMMM` and `MMMMM`
//! are independent entries, and a run like `MMMMMM` matches nothing.

use crate::civil::{to_12_hour, two_digit_year};
use crate::formatter::offset::OffsetStyle;
use crate::locale::{
    DateTimeFormatOptions, Field, MonthStyle, NumericStyle, TextStyle, ZoneNameStyle,
};
use crate::presets::Preset;
use crate::value::DateTimeLike;

/// A numeric date/time field read straight from the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Millisecond,
    Second,
    Minute,
    Hour,
    /// Hour on the 12-hour clock, 1-12.
    Hour12,
    Day,
    Month,
    Year,
    /// Last two digits of the year.
    YearTwoDigit,
    Weekday,
    WeekYear,
    /// Last two digits of the ISO week-year.
    WeekYearTwoDigit,
    WeekNumber,
    Ordinal,
}

impl NumericField {
    /// Read this field from a date/time.
    pub fn read<D: DateTimeLike + ?Sized>(&self, dt: &D) -> i64 {
        match self {
            NumericField::Millisecond => i64::from(dt.millisecond()),
            NumericField::Second => i64::from(dt.second()),
            NumericField::Minute => i64::from(dt.minute()),
            NumericField::Hour => i64::from(dt.hour()),
            NumericField::Hour12 => i64::from(to_12_hour(dt.hour())),
            NumericField::Day => i64::from(dt.day()),
            NumericField::Month => i64::from(dt.month()),
            NumericField::Year => i64::from(dt.year()),
            NumericField::YearTwoDigit => two_digit_year(dt.year()),
            NumericField::Weekday => i64::from(dt.weekday()),
            NumericField::WeekYear => i64::from(dt.week_year()),
            NumericField::WeekYearTwoDigit => two_digit_year(dt.week_year()),
            NumericField::WeekNumber => i64::from(dt.week_number()),
            NumericField::Ordinal => i64::from(dt.ordinal()),
        }
    }
}

/// A numeric field with its minimum digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric {
    pub field: NumericField,
    pub pad: usize,
}

/// How a pattern token renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// A number, zero-padded.
    Numeric(Numeric),
    /// The UTC offset.
    Offset { style: OffsetStyle, allow_z: bool },
    /// The zone's offset name, like `EDT`.
    OffsetName(ZoneNameStyle),
    /// The zone identifier, like `America/New_York`.
    ZoneName,
    /// A field extracted by the locale.
    Localized {
        field: Field,
        options: DateTimeFormatOptions,
    },
    /// A plain number, unless the locale has an output calendar, in which
    /// case the field is extracted by the locale.
    CalendarAware {
        numeric: Numeric,
        field: Field,
        options: DateTimeFormatOptions,
    },
    /// A whole-value preset.
    Macro(Preset),
}

const fn num(field: NumericField, pad: usize) -> Directive {
    Directive::Numeric(Numeric { field, pad })
}

const fn offset(style: OffsetStyle, allow_z: bool) -> Directive {
    Directive::Offset { style, allow_z }
}

const fn localized(field: Field, options: DateTimeFormatOptions) -> Directive {
    Directive::Localized { field, options }
}

const fn calendar_aware(
    field: NumericField,
    pad: usize,
    localized: Field,
    options: DateTimeFormatOptions,
) -> Directive {
    Directive::CalendarAware {
        numeric: Numeric { field, pad },
        field: localized,
        options,
    }
}

const EMPTY: DateTimeFormatOptions = DateTimeFormatOptions::EMPTY;

const fn weekday(style: TextStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        weekday: Some(style),
        ..EMPTY
    }
}

/// Weekday requested alongside month and day, as in a full date.
const fn weekday_in_date(style: TextStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        weekday: Some(style),
        month: Some(MonthStyle::Long),
        day: Some(NumericStyle::Numeric),
        ..EMPTY
    }
}

const fn month(style: MonthStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        month: Some(style),
        ..EMPTY
    }
}

const fn month_with_day(style: MonthStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        month: Some(style),
        day: Some(NumericStyle::Numeric),
        ..EMPTY
    }
}

const fn day(style: NumericStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        day: Some(style),
        ..EMPTY
    }
}

const fn year(style: NumericStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        year: Some(style),
        ..EMPTY
    }
}

const fn era(style: TextStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        era: Some(style),
        ..EMPTY
    }
}

const DAY_PERIOD: DateTimeFormatOptions = DateTimeFormatOptions {
    hour: Some(NumericStyle::Numeric),
    hour12: Some(true),
    ..EMPTY
};

/// Every recognized date/time token.
pub static DIRECTIVES: &[(&str, Directive)] = &[
    // milliseconds
    ("S", num(NumericField::Millisecond, 0)),
    ("SSS", num(NumericField::Millisecond, 3)),
    // seconds
    ("s", num(NumericField::Second, 0)),
    ("ss", num(NumericField::Second, 2)),
    // minutes
    ("m", num(NumericField::Minute, 0)),
    ("mm", num(NumericField::Minute, 2)),
    // hours
    ("h", num(NumericField::Hour12, 0)),
    ("hh", num(NumericField::Hour12, 2)),
    ("H", num(NumericField::Hour, 0)),
    ("HH", num(NumericField::Hour, 2)),
    // offset: +6, +06:00, +0600, EST, Eastern Standard Time
    ("Z", offset(OffsetStyle::Narrow, true)),
    ("ZZ", offset(OffsetStyle::Short, true)),
    ("ZZZ", offset(OffsetStyle::Techie, false)),
    ("ZZZZ", Directive::OffsetName(ZoneNameStyle::Short)),
    ("ZZZZZ", Directive::OffsetName(ZoneNameStyle::Long)),
    // zone
    ("z", Directive::ZoneName),
    // meridiem
    ("a", localized(Field::DayPeriod, DAY_PERIOD)),
    // day of month
    (
        "d",
        calendar_aware(NumericField::Day, 0, Field::Day, day(NumericStyle::Numeric)),
    ),
    (
        "dd",
        calendar_aware(NumericField::Day, 2, Field::Day, day(NumericStyle::TwoDigit)),
    ),
    // weekday, format
    ("c", num(NumericField::Weekday, 0)),
    ("ccc", localized(Field::Weekday, weekday(TextStyle::Short))),
    ("cccc", localized(Field::Weekday, weekday(TextStyle::Long))),
    ("ccccc", localized(Field::Weekday, weekday(TextStyle::Narrow))),
    // weekday, standalone
    ("E", num(NumericField::Weekday, 0)),
    ("EEE", localized(Field::Weekday, weekday_in_date(TextStyle::Short))),
    ("EEEE", localized(Field::Weekday, weekday_in_date(TextStyle::Long))),
    ("EEEEE", localized(Field::Weekday, weekday_in_date(TextStyle::Narrow))),
    // month, format
    ("L", localized(Field::Month, month_with_day(MonthStyle::Numeric))),
    ("LL", localized(Field::Month, month_with_day(MonthStyle::TwoDigit))),
    ("LLL", localized(Field::Month, month_with_day(MonthStyle::Short))),
    ("LLLL", localized(Field::Month, month(MonthStyle::Long))),
    ("LLLLL", localized(Field::Month, month(MonthStyle::Narrow))),
    // month, standalone
    (
        "M",
        calendar_aware(NumericField::Month, 0, Field::Month, month(MonthStyle::Numeric)),
    ),
    (
        "MM",
        calendar_aware(NumericField::Month, 2, Field::Month, month(MonthStyle::TwoDigit)),
    ),
    ("MMM", localized(Field::Month, month_with_day(MonthStyle::Short))),
    ("MMMM", localized(Field::Month, month_with_day(MonthStyle::Long))),
    ("MMMMM", localized(Field::Month, month(MonthStyle::Narrow))),
    // year
    (
        "y",
        calendar_aware(NumericField::Year, 0, Field::Year, year(NumericStyle::Numeric)),
    ),
    (
        "yy",
        calendar_aware(
            NumericField::YearTwoDigit,
            2,
            Field::Year,
            year(NumericStyle::TwoDigit),
        ),
    ),
    (
        "yyyy",
        calendar_aware(NumericField::Year, 4, Field::Year, year(NumericStyle::Numeric)),
    ),
    // era
    ("G", localized(Field::Era, era(TextStyle::Short))),
    ("GG", localized(Field::Era, era(TextStyle::Long))),
    ("GGGGG", localized(Field::Era, era(TextStyle::Narrow))),
    // ISO week
    ("kk", num(NumericField::WeekYearTwoDigit, 2)),
    ("kkkk", num(NumericField::WeekYear, 4)),
    ("W", num(NumericField::WeekNumber, 0)),
    ("WW", num(NumericField::WeekNumber, 2)),
    // ordinal
    ("o", num(NumericField::Ordinal, 0)),
    ("ooo", num(NumericField::Ordinal, 3)),
    // macros
    ("D", Directive::Macro(Preset::DateShort)),
    ("DD", Directive::Macro(Preset::DateMed)),
    ("DDD", Directive::Macro(Preset::DateFull)),
    ("DDDD", Directive::Macro(Preset::DateHuge)),
    ("t", Directive::Macro(Preset::TimeSimple)),
    ("tt", Directive::Macro(Preset::TimeWithSeconds)),
    ("ttt", Directive::Macro(Preset::TimeWithShortOffset)),
    ("tttt", Directive::Macro(Preset::TimeWithLongOffset)),
    ("T", Directive::Macro(Preset::Time24Simple)),
    ("TT", Directive::Macro(Preset::Time24WithSeconds)),
    ("TTT", Directive::Macro(Preset::Time24WithShortOffset)),
    ("TTTT", Directive::Macro(Preset::Time24WithLongOffset)),
    ("f", Directive::Macro(Preset::DateTimeShort)),
    ("ff", Directive::Macro(Preset::DateTimeMed)),
    ("fff", Directive::Macro(Preset::DateTimeFull)),
    ("ffff", Directive::Macro(Preset::DateTimeHuge)),
    ("F", Directive::Macro(Preset::DateTimeShortWithSeconds)),
    ("FF", Directive::Macro(Preset::DateTimeMedWithSeconds)),
    ("FFF", Directive::Macro(Preset::DateTimeFullWithSeconds)),
    ("FFFF", Directive::Macro(Preset::DateTimeHugeWithSeconds)),
];

/// Find the directive for a token, by exact text.
pub fn lookup(token: &str) -> Option<&'static Directive> {
    DIRECTIVES
        .iter()
        .find(|(text, _)| *text == token)
        .map(|(_, directive)| directive)
}
