//! Field extraction options.

/// Width of a textual field such as a weekday or era name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// `T`
    Narrow,
    /// `Tue`
    Short,
    /// `Tuesday`
    Long,
}

/// Width of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    /// `7`
    Numeric,
    /// `07`
    TwoDigit,
}

/// Rendering of the month field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Numeric,
    TwoDigit,
    Narrow,
    Short,
    Long,
}

/// Rendering of the time zone name in whole-value formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneNameStyle {
    /// `EDT`
    Short,
    /// `Eastern Daylight Time`
    Long,
}

/// A named field the locale can extract from a date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Day,
    Weekday,
    Month,
    Year,
    Era,
    DayPeriod,
}

/// Formatting options for the locale: which fields to show and how.
///
/// Used both to request a single field from [`Locale::extract`] and to
/// describe a whole-value preset for [`Locale::format_preset`]. Fields other
/// than the one extracted still matter: they decide whether month and
/// weekday names use their format or standalone forms.
///
/// [`Locale::extract`]: crate::Locale::extract
/// [`Locale::format_preset`]: crate::Locale::format_preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeFormatOptions {
    pub era: Option<TextStyle>,
    pub weekday: Option<TextStyle>,
    pub year: Option<NumericStyle>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumericStyle>,
    pub hour: Option<NumericStyle>,
    pub minute: Option<NumericStyle>,
    pub second: Option<NumericStyle>,
    pub time_zone_name: Option<ZoneNameStyle>,
    /// Overrides the locale's default hour cycle when set.
    pub hour12: Option<bool>,
}

impl DateTimeFormatOptions {
    /// No fields requested.
    pub const EMPTY: DateTimeFormatOptions = DateTimeFormatOptions {
        era: None,
        weekday: None,
        year: None,
        month: None,
        day: None,
        hour: None,
        minute: None,
        second: None,
        time_zone_name: None,
        hour12: None,
    };

    /// True when any calendar date field is requested.
    pub fn has_date(&self) -> bool {
        self.era.is_some()
            || self.weekday.is_some()
            || self.year.is_some()
            || self.month.is_some()
            || self.day.is_some()
    }

    /// True when any time-of-day field is requested.
    pub fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }
}
