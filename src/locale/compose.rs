//! Whole-value formats for presets

use super::{Calendar, DateTimeFormatOptions, Field, Locale, MonthStyle, NumericStyle, Piece};
use super::{TextStyle, ZoneNameStyle};
use crate::civil::to_12_hour;
use crate::value::DateTimeLike;

impl Locale {
    /// Format a whole date/time according to `options`, the way the locale
    /// lays out dates, times and zone names together.
    ///
    /// This is the renderer behind macro presets such as `DATE_SHORT`.
    pub fn format_preset<D>(&self, dt: &D, options: &DateTimeFormatOptions) -> String
    where
        D: DateTimeLike + ?Sized,
    {
        log::trace!("composing {:?} for {}", options, self);

        let time = options.has_time().then(|| self.compose_time(dt, options));
        let date = (options.has_date() || time.is_none()).then(|| self.compose_date(dt, options));

        let mut out = match (date, time) {
            (Some(date), Some(time)) => {
                let separator = if matches!(options.month, Some(MonthStyle::Long)) {
                    self.data.date_time_separator_long
                } else {
                    self.data.date_time_separator
                };
                format!("{}{}{}", date, separator, time)
            }
            (Some(date), None) => date,
            (None, Some(time)) => time,
            (None, None) => String::new(),
        };

        match options.time_zone_name {
            Some(ZoneNameStyle::Short) => {
                out.push(' ');
                out.push_str(&dt.offset_name_short());
            }
            Some(ZoneNameStyle::Long) => {
                out.push(' ');
                out.push_str(&dt.offset_name_long());
            }
            None => {}
        }
        out
    }

    fn compose_date<D>(&self, dt: &D, options: &DateTimeFormatOptions) -> String
    where
        D: DateTimeLike + ?Sized,
    {
        let layouts = &self.data.date_layouts;
        let layout = if options.weekday.is_some() {
            layouts.full
        } else {
            match options.month {
                Some(MonthStyle::Long) => layouts.long,
                Some(MonthStyle::Short | MonthStyle::Narrow) => layouts.medium,
                _ => layouts.numeric,
            }
        };

        let mut out = String::new();
        for piece in layout {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Day => out.push_str(&self.piece(dt, Field::Day, day(NumericStyle::Numeric))),
                Piece::Day2 => out.push_str(&self.piece(dt, Field::Day, day(NumericStyle::TwoDigit))),
                Piece::Month => out.push_str(&self.piece(dt, Field::Month, month(MonthStyle::Numeric))),
                Piece::Month2 => {
                    out.push_str(&self.piece(dt, Field::Month, month(MonthStyle::TwoDigit)))
                }
                Piece::MonthShort => {
                    out.push_str(&self.piece(dt, Field::Month, month(MonthStyle::Short)))
                }
                Piece::MonthLong => out.push_str(&self.piece(dt, Field::Month, month(MonthStyle::Long))),
                Piece::Year => out.push_str(&self.piece(
                    dt,
                    Field::Year,
                    DateTimeFormatOptions {
                        year: Some(NumericStyle::Numeric),
                        ..DateTimeFormatOptions::EMPTY
                    },
                )),
                Piece::WeekdayLong => out.push_str(&self.piece(
                    dt,
                    Field::Weekday,
                    DateTimeFormatOptions {
                        weekday: Some(TextStyle::Long),
                        ..month(MonthStyle::Long)
                    },
                )),
            }
        }

        if matches!(self.output_calendar, Some(Calendar::Buddhist | Calendar::Islamic)) {
            out.push(' ');
            out.push_str(&self.piece(dt, Field::Era, DateTimeFormatOptions::EMPTY));
        }
        out
    }

    fn compose_time<D>(&self, dt: &D, options: &DateTimeFormatOptions) -> String
    where
        D: DateTimeLike + ?Sized,
    {
        let hour12 = options.hour12.unwrap_or(self.data.hour12);

        let mut out = if hour12 {
            let pad = if options.hour == Some(NumericStyle::TwoDigit) { 2 } else { 0 };
            self.format_number(i64::from(to_12_hour(dt.hour())), pad)
        } else {
            self.format_number(i64::from(dt.hour()), 2)
        };

        if options.minute.is_some() {
            out.push(':');
            out.push_str(&self.format_number(i64::from(dt.minute()), 2));
        }
        if options.second.is_some() {
            out.push(':');
            out.push_str(&self.format_number(i64::from(dt.second()), 2));
        }
        if hour12 {
            out.push(' ');
            out.push_str(&self.extract(dt, options, Field::DayPeriod));
        }
        out
    }

    fn piece<D>(&self, dt: &D, field: Field, options: DateTimeFormatOptions) -> String
    where
        D: DateTimeLike + ?Sized,
    {
        self.extract(dt, &options, field)
    }
}

/// Options for a day-qualified month, so names take their format form.
fn month(style: MonthStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        month: Some(style),
        day: Some(NumericStyle::Numeric),
        ..DateTimeFormatOptions::EMPTY
    }
}

fn day(style: NumericStyle) -> DateTimeFormatOptions {
    DateTimeFormatOptions {
        day: Some(style),
        ..DateTimeFormatOptions::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{DateTimeFields, ZoneInfo};

    fn sample() -> DateTimeFields {
        DateTimeFields::new(1983, 10, 14)
            .unwrap()
            .with_time(9, 30, 23, 0)
            .unwrap()
            .with_zone(ZoneInfo::named(
                "America/New_York",
                -240,
                "EDT",
                "Eastern Daylight Time",
            ))
    }

    fn opts(month: Option<MonthStyle>, hour: bool) -> DateTimeFormatOptions {
        DateTimeFormatOptions {
            year: Some(NumericStyle::Numeric),
            month,
            day: Some(NumericStyle::Numeric),
            hour: hour.then_some(NumericStyle::Numeric),
            minute: hour.then_some(NumericStyle::TwoDigit),
            ..DateTimeFormatOptions::EMPTY
        }
    }

    #[test]
    fn test_en_dates() {
        let en = Locale::en_us();
        let dt = sample();
        assert_eq!(en.format_preset(&dt, &opts(Some(MonthStyle::Numeric), false)), "10/14/1983");
        assert_eq!(en.format_preset(&dt, &opts(Some(MonthStyle::Short), false)), "Oct 14, 1983");
        assert_eq!(
            en.format_preset(&dt, &opts(Some(MonthStyle::Long), true)),
            "October 14, 1983 at 9:30 AM"
        );
    }

    #[test]
    fn test_ru_dates() {
        let ru = Locale::ru_ru();
        let dt = sample();
        assert_eq!(ru.format_preset(&dt, &opts(Some(MonthStyle::Numeric), true)), "14.10.1983, 09:30");
        assert_eq!(
            ru.format_preset(&dt, &opts(Some(MonthStyle::Long), false)),
            "14 октября 1983 г."
        );
    }

    #[test]
    fn test_time_only_with_zone() {
        let en = Locale::en_us();
        let options = DateTimeFormatOptions {
            hour: Some(NumericStyle::Numeric),
            minute: Some(NumericStyle::TwoDigit),
            hour12: Some(false),
            time_zone_name: Some(ZoneNameStyle::Long),
            ..DateTimeFormatOptions::EMPTY
        };
        assert_eq!(en.format_preset(&sample(), &options), "09:30 Eastern Daylight Time");
    }

    #[test]
    fn test_alternate_calendar_appends_era() {
        let buddhist = Locale::en_us().with_output_calendar(Calendar::Buddhist);
        assert_eq!(
            buddhist.format_preset(&sample(), &opts(Some(MonthStyle::Numeric), false)),
            "10/14/2526 BE"
        );
    }

    #[test]
    fn test_empty_options_render_numeric_date() {
        assert_eq!(
            Locale::en_us().format_preset(&sample(), &DateTimeFormatOptions::EMPTY),
            "10/14/1983"
        );
    }
}
