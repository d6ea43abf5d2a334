//! lxfmt - token-pattern formatting for dates, times and durations
//!
//! This crate renders date/time and duration values against patterns such as
//! `yyyy-MM-dd'T'HH:mm:ssZZ` or `hh:mm:ss`, with locale-aware names, numbering
//! systems, output calendars and whole-value presets.
//!
//! # Examples
//! ```
//! use lxfmt::{format_date_time, format_duration, DateTimeFields, Duration, Unit};
//!
//! let dt = DateTimeFields::new(1983, 10, 14).unwrap().with_time(9, 30, 0, 0).unwrap();
//! assert_eq!(format_date_time(&dt, "MMM d, yyyy h:mm a").unwrap(), "Oct 14, 1983 9:30 AM");
//!
//! let dur = Duration::new().with(Unit::Second, 3909.0);
//! assert_eq!(format_duration(&dur, "hh:mm:ss").unwrap(), "01:05:09");
//! ```

pub mod error;
pub mod options;
pub mod value;

pub mod civil;
pub mod directive;
pub mod duration;
pub mod hijri;
pub mod locale;
pub mod parser;
pub mod presets;

mod formatter;

pub use duration::{Duration, DurationLike, Unit};
pub use error::FormatError;
pub use formatter::offset::OffsetStyle;
pub use formatter::{render, Formatter};
pub use locale::{
    Calendar, DateTimeFormatOptions, Field, Locale, LocaleData, MonthStyle, NumberingSystem,
    NumericStyle, TextStyle, ZoneNameStyle, EN_US, RU_RU,
};
pub use options::FormatOptions;
pub use parser::tokens::Token;
pub use presets::Preset;
pub use value::{DateTimeFields, DateTimeLike, ZoneInfo};

/// Format a date/time with a pattern using default options.
pub fn format_date_time<D>(dt: &D, pattern: &str) -> Result<String, FormatError>
where
    D: DateTimeLike + ?Sized,
{
    Formatter::default().format_date_time_from_string(dt, pattern)
}

/// Format a duration with a pattern using default options.
pub fn format_duration<D>(dur: &D, pattern: &str) -> Result<String, FormatError>
where
    D: DurationLike,
{
    Formatter::default().format_duration_from_string(dur, pattern)
}
