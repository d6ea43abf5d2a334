//! Date and time pattern formatting

use super::{render, Formatter};
use crate::directive::{lookup, Directive, Numeric};
use crate::error::FormatError;
use crate::locale::ZoneNameStyle;
use crate::parser::tokenize;
use crate::value::DateTimeLike;

impl Formatter {
    /// Format a date/time with a pattern like `yyyy-MM-dd'T'HH:mm:ss`.
    pub fn format_date_time_from_string<D>(&self, dt: &D, pattern: &str) -> Result<String, FormatError>
    where
        D: DateTimeLike + ?Sized,
    {
        let tokens = tokenize(pattern);
        render(&tokens, |token| self.resolve_date_time_token(token, dt))
    }

    /// Render a single format token against a date/time.
    ///
    /// Tokens are matched exactly, so `MMMMMM` is not a longer `MMMMM`.
    /// Unknown tokens come back unchanged, or fail in strict mode.
    pub fn resolve_date_time_token<D>(&self, token: &str, dt: &D) -> Result<String, FormatError>
    where
        D: DateTimeLike + ?Sized,
    {
        let Some(directive) = lookup(token) else {
            return self.pass_through(token);
        };

        let locale = self.locale();
        let out = match directive {
            Directive::Numeric(numeric) => self.numeric(numeric, dt),
            Directive::Offset { style, allow_z } => {
                self.format_offset(dt.offset(), *style, *allow_z, dt.is_offset_fixed())
            }
            Directive::OffsetName(ZoneNameStyle::Short) => dt.offset_name_short(),
            Directive::OffsetName(ZoneNameStyle::Long) => dt.offset_name_long(),
            Directive::ZoneName => dt.zone_name(),
            Directive::Localized { field, options } => locale.extract(dt, options, *field),
            Directive::CalendarAware {
                numeric,
                field,
                options,
            } => {
                if locale.output_calendar().is_some() {
                    locale.extract(dt, options, *field)
                } else {
                    self.numeric(numeric, dt)
                }
            }
            Directive::Macro(preset) => self.format_date_time(dt, *preset),
        };
        Ok(out)
    }

    fn numeric<D>(&self, numeric: &Numeric, dt: &D) -> String
    where
        D: DateTimeLike + ?Sized,
    {
        self.num(numeric.field.read(dt), numeric.pad)
    }
}
