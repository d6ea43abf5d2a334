//! Locale data and locale-aware rendering.
//!
//! A [`Locale`] pairs static locale data with a numbering system and an
//! optional output calendar. It renders numbers, extracts single named fields
//! (weekday, month, era, ...) and composes whole-value preset formats.

mod builtin;
mod compose;
mod fields;

pub use builtin::{DateLayouts, LocaleData, NameSet, Piece, EN_US, RU_RU};
pub use fields::{DateTimeFormatOptions, Field, MonthStyle, NumericStyle, TextStyle, ZoneNameStyle};

use std::fmt;
use std::str::FromStr;

use crate::civil::two_digit_year;
use crate::error::FormatError;
use crate::hijri::gregorian_to_hijri;
use crate::value::DateTimeLike;

/// Digit set used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingSystem {
    /// ASCII digits
    #[default]
    Latn,
    /// Arabic-Indic digits
    Arab,
    /// Extended Arabic-Indic (Persian) digits
    Arabext,
    /// Devanagari digits
    Deva,
    /// Bengali digits
    Beng,
    /// Thai digits
    Thai,
    /// Chinese decimal digits
    Hanidec,
    /// Fullwidth digits
    Fullwide,
}

impl NumberingSystem {
    /// The ten digits of this numbering system, zero first.
    pub fn digits(&self) -> [char; 10] {
        match self {
            NumberingSystem::Latn => ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            NumberingSystem::Arab => ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'],
            NumberingSystem::Arabext => ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
            NumberingSystem::Deva => ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'],
            NumberingSystem::Beng => ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'],
            NumberingSystem::Thai => ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙'],
            NumberingSystem::Hanidec => ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
            NumberingSystem::Fullwide => ['０', '１', '２', '３', '４', '５', '６', '７', '８', '９'],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NumberingSystem::Latn => "latn",
            NumberingSystem::Arab => "arab",
            NumberingSystem::Arabext => "arabext",
            NumberingSystem::Deva => "deva",
            NumberingSystem::Beng => "beng",
            NumberingSystem::Thai => "thai",
            NumberingSystem::Hanidec => "hanidec",
            NumberingSystem::Fullwide => "fullwide",
        }
    }

    /// Replace ASCII digits in `text` with this system's digits.
    fn substitute(&self, text: &str) -> String {
        if *self == NumberingSystem::Latn {
            return text.to_string();
        }
        let digits = self.digits();
        text.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => digits[d as usize],
                _ => c,
            })
            .collect()
    }
}

impl FromStr for NumberingSystem {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latn" => Ok(NumberingSystem::Latn),
            "arab" => Ok(NumberingSystem::Arab),
            "arabext" => Ok(NumberingSystem::Arabext),
            "deva" => Ok(NumberingSystem::Deva),
            "beng" => Ok(NumberingSystem::Beng),
            "thai" => Ok(NumberingSystem::Thai),
            "hanidec" => Ok(NumberingSystem::Hanidec),
            "fullwide" => Ok(NumberingSystem::Fullwide),
            _ => Err(FormatError::invalid_option("numberingSystem", s)),
        }
    }
}

/// Calendar system used for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calendar {
    Gregory,
    /// Thai solar calendar: Gregorian months, year + 543
    Buddhist,
    /// Tabular Islamic calendar
    Islamic,
}

impl Calendar {
    pub fn name(&self) -> &'static str {
        match self {
            Calendar::Gregory => "gregory",
            Calendar::Buddhist => "buddhist",
            Calendar::Islamic => "islamic",
        }
    }

    /// Convert a Gregorian date into this calendar.
    pub fn convert(&self, year: i32, month: u32, day: u32) -> (i32, u32, u32) {
        match self {
            Calendar::Gregory => (year, month, day),
            Calendar::Buddhist => (year + 543, month, day),
            Calendar::Islamic => gregorian_to_hijri(year, month, day),
        }
    }
}

impl FromStr for Calendar {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gregory" | "gregorian" => Ok(Calendar::Gregory),
            "buddhist" => Ok(Calendar::Buddhist),
            "islamic" | "islamic-civil" => Ok(Calendar::Islamic),
            _ => Err(FormatError::invalid_option("outputCalendar", s)),
        }
    }
}

/// Locale settings for formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    data: &'static LocaleData,
    numbering_system: NumberingSystem,
    output_calendar: Option<Calendar>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Self::from_data(&EN_US)
    }

    /// Russian locale.
    pub fn ru_ru() -> Self {
        Self::from_data(&RU_RU)
    }

    /// A locale over custom static data.
    pub fn from_data(data: &'static LocaleData) -> Self {
        Locale {
            data,
            numbering_system: NumberingSystem::Latn,
            output_calendar: None,
        }
    }

    /// Parse a tag like `en-US`, `ru`, or `en-US-u-nu-arab-ca-islamic`.
    ///
    /// The `nu` (numbering system) and `ca` (calendar) extension keys are
    /// honored; other extension keys are ignored.
    pub fn from_tag(tag: &str) -> Result<Self, FormatError> {
        let lowered = tag.to_ascii_lowercase().replace('_', "-");
        let (base, extensions) = match lowered.split_once("-u-") {
            Some((base, extensions)) => (base, Some(extensions)),
            None => (lowered.as_str(), None),
        };

        let language = base.split('-').next().unwrap_or_default();
        let mut locale = match language {
            "en" => Locale::en_us(),
            "ru" => Locale::ru_ru(),
            _ => return Err(FormatError::invalid_option("locale", tag)),
        };

        if let Some(extensions) = extensions {
            let parts: Vec<&str> = extensions.split('-').collect();
            for pair in parts.windows(2) {
                match pair[0] {
                    "nu" => locale.numbering_system = pair[1].parse()?,
                    "ca" => locale.output_calendar = Some(pair[1].parse()?),
                    _ => {}
                }
            }
        }

        Ok(locale)
    }

    pub fn with_numbering_system(mut self, numbering_system: NumberingSystem) -> Self {
        self.numbering_system = numbering_system;
        self
    }

    pub fn with_output_calendar(mut self, calendar: Calendar) -> Self {
        self.output_calendar = Some(calendar);
        self
    }

    pub fn data(&self) -> &'static LocaleData {
        self.data
    }

    pub fn numbering_system(&self) -> NumberingSystem {
        self.numbering_system
    }

    /// The calendar requested for output, if any.
    ///
    /// When set, day, month and year fields go through field extraction
    /// instead of plain numbers.
    pub fn output_calendar(&self) -> Option<Calendar> {
        self.output_calendar
    }

    fn calendar(&self) -> Calendar {
        self.output_calendar.unwrap_or(Calendar::Gregory)
    }

    /// Render an integer, zero-padded on the left to `min_digits` digits.
    ///
    /// Padding happens before digit substitution, and never truncates.
    pub fn format_number(&self, value: i64, min_digits: usize) -> String {
        let padded = format!("{:0width$}", value.unsigned_abs(), width = min_digits);
        let sign = if value < 0 { "-" } else { "" };
        format!("{}{}", sign, self.numbering_system.substitute(&padded))
    }

    /// Render a decimal with at most `max_fraction_digits` fraction digits,
    /// trailing zeros trimmed, and the integer part padded to `min_digits`.
    pub fn format_decimal(&self, value: f64, min_digits: usize, max_fraction_digits: usize) -> String {
        let fixed = format!("{:.*}", max_fraction_digits, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let mut out = String::new();
        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&format!("{:0>width$}", int_part, width = min_digits));
        if !frac_part.is_empty() {
            out.push(self.data.decimal_separator);
            out.push_str(frac_part);
        }
        self.numbering_system.substitute(&out)
    }

    /// Extract one named field of `dt` as it would appear when formatted
    /// with `options`.
    ///
    /// Day, month, year and era follow the output calendar. Month names use
    /// their format form when `options` also asks for the day, and weekday
    /// names when it asks for the month or day; otherwise the standalone
    /// form is used.
    pub fn extract<D>(&self, dt: &D, options: &DateTimeFormatOptions, field: Field) -> String
    where
        D: DateTimeLike + ?Sized,
    {
        let calendar = self.calendar();
        let (year, month, day) = calendar.convert(dt.year(), dt.month(), dt.day());

        match field {
            Field::Day => self.format_number(i64::from(day), pad_for(options.day)),
            Field::Weekday => {
                let style = options.weekday.unwrap_or(TextStyle::Long);
                let names = if options.month.is_some() || options.day.is_some() {
                    &self.data.day_names
                } else {
                    &self.data.day_names_standalone
                };
                names.get(style, (dt.weekday() as usize + 6) % 7).to_string()
            }
            Field::Month => match options.month.unwrap_or(MonthStyle::Numeric) {
                MonthStyle::Numeric => self.format_number(i64::from(month), 0),
                MonthStyle::TwoDigit => self.format_number(i64::from(month), 2),
                MonthStyle::Narrow => self.month_name(TextStyle::Narrow, month, options),
                MonthStyle::Short => self.month_name(TextStyle::Short, month, options),
                MonthStyle::Long => self.month_name(TextStyle::Long, month, options),
            },
            Field::Year => match options.year {
                Some(NumericStyle::TwoDigit) => self.format_number(two_digit_year(year), 2),
                _ => self.format_number(i64::from(year), 0),
            },
            Field::Era => self.era_name(options.era.unwrap_or(TextStyle::Short), year),
            Field::DayPeriod => {
                let name = if dt.hour() < 12 {
                    self.data.am_string
                } else {
                    self.data.pm_string
                };
                name.to_string()
            }
        }
    }

    fn month_name(&self, style: TextStyle, month: u32, options: &DateTimeFormatOptions) -> String {
        let index = (month - 1) as usize;
        let names = match self.calendar() {
            Calendar::Islamic => &self.data.islamic_month_names,
            Calendar::Gregory | Calendar::Buddhist if options.day.is_some() => {
                &self.data.month_names
            }
            Calendar::Gregory | Calendar::Buddhist => &self.data.month_names_standalone,
        };
        names.get(style, index).to_string()
    }

    fn era_name(&self, style: TextStyle, year: i32) -> String {
        match self.calendar() {
            Calendar::Islamic => self.data.islamic_era.to_string(),
            Calendar::Buddhist => self.data.buddhist_era.to_string(),
            Calendar::Gregory => {
                let index = if year > 0 { 1 } else { 0 };
                self.data.era_names.get(style, index).to_string()
            }
        }
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data.tag)?;
        let numbering = self.numbering_system != NumberingSystem::Latn;
        if numbering || self.output_calendar.is_some() {
            f.write_str("-u")?;
        }
        if let Some(calendar) = self.output_calendar {
            write!(f, "-ca-{}", calendar.name())?;
        }
        if numbering {
            write!(f, "-nu-{}", self.numbering_system.name())?;
        }
        Ok(())
    }
}

fn pad_for(style: Option<NumericStyle>) -> usize {
    match style {
        Some(NumericStyle::TwoDigit) => 2,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DateTimeFields;

    fn sample() -> DateTimeFields {
        DateTimeFields::new(1983, 10, 14)
            .unwrap()
            .with_time(13, 30, 23, 4)
            .unwrap()
    }

    #[test]
    fn test_format_number_pads_before_substitution() {
        let arab = Locale::en_us().with_numbering_system(NumberingSystem::Arab);
        assert_eq!(arab.format_number(5, 2), "٠٥");
        assert_eq!(Locale::en_us().format_number(-7, 3), "-007");
        assert_eq!(Locale::en_us().format_number(1234, 2), "1234");
    }

    #[test]
    fn test_format_decimal() {
        let en = Locale::en_us();
        assert_eq!(en.format_decimal(1.5, 2, 3), "01.5");
        assert_eq!(en.format_decimal(2.0, 0, 3), "2");
        assert_eq!(en.format_decimal(-0.0001, 0, 3), "0");
        assert_eq!(Locale::ru_ru().format_decimal(1.25, 0, 3), "1,25");
    }

    #[test]
    fn test_from_tag() {
        let locale = Locale::from_tag("en-US-u-nu-thai-ca-buddhist").unwrap();
        assert_eq!(locale.numbering_system(), NumberingSystem::Thai);
        assert_eq!(locale.output_calendar(), Some(Calendar::Buddhist));
        assert_eq!(locale.to_string(), "en-US-u-ca-buddhist-nu-thai");

        assert_eq!(Locale::from_tag("ru").unwrap().data().tag, "ru-RU");
        assert!(matches!(
            Locale::from_tag("xx-YY"),
            Err(FormatError::InvalidFormatOption { option: "locale", .. })
        ));
        assert!(Locale::from_tag("en-u-nu-roman").is_err());
    }

    #[test]
    fn test_extract_month_context() {
        let ru = Locale::ru_ru();
        let dt = sample();
        let standalone = DateTimeFormatOptions {
            month: Some(MonthStyle::Long),
            ..DateTimeFormatOptions::EMPTY
        };
        let with_day = DateTimeFormatOptions {
            day: Some(NumericStyle::Numeric),
            ..standalone
        };
        assert_eq!(ru.extract(&dt, &standalone, Field::Month), "октябрь");
        assert_eq!(ru.extract(&dt, &with_day, Field::Month), "октября");
    }

    #[test]
    fn test_extract_day_period_and_era() {
        let en = Locale::en_us();
        let dt = sample();
        assert_eq!(en.extract(&dt, &DateTimeFormatOptions::EMPTY, Field::DayPeriod), "PM");
        let era = DateTimeFormatOptions {
            era: Some(TextStyle::Long),
            ..DateTimeFormatOptions::EMPTY
        };
        assert_eq!(en.extract(&dt, &era, Field::Era), "Anno Domini");
    }

    #[test]
    fn test_extract_with_output_calendar() {
        let dt = sample();
        let islamic = Locale::en_us().with_output_calendar(Calendar::Islamic);
        let long_month = DateTimeFormatOptions {
            month: Some(MonthStyle::Long),
            ..DateTimeFormatOptions::EMPTY
        };
        assert_eq!(islamic.extract(&dt, &long_month, Field::Month), "Muharram");
        assert_eq!(islamic.extract(&dt, &DateTimeFormatOptions::EMPTY, Field::Year), "1404");
        assert_eq!(islamic.extract(&dt, &DateTimeFormatOptions::EMPTY, Field::Day), "7");

        let buddhist = Locale::en_us().with_output_calendar(Calendar::Buddhist);
        assert_eq!(buddhist.extract(&dt, &DateTimeFormatOptions::EMPTY, Field::Year), "2526");
        assert_eq!(buddhist.extract(&dt, &DateTimeFormatOptions::EMPTY, Field::Era), "BE");
    }
}
