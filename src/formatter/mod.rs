//! Pattern rendering engine

mod date;
mod duration;
pub mod offset;

use crate::error::FormatError;
use crate::locale::Locale;
use crate::options::FormatOptions;
use crate::parser::tokens::Token;
use crate::presets::Preset;
use crate::value::DateTimeLike;

/// Renders date/times and durations against pattern strings.
///
/// A formatter holds only its options, so it can be shared freely and reused
/// for any number of values.
///
/// # Examples
/// ```
/// use lxfmt::{DateTimeFields, FormatOptions, Formatter, Locale};
///
/// let dt = DateTimeFields::new(1983, 10, 14).unwrap();
/// let ru = Formatter::new(FormatOptions::default().with_locale(Locale::ru_ru()));
/// assert_eq!(ru.format_date_time_from_string(&dt, "d MMMM yyyy").unwrap(), "14 октября 1983");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    opts: FormatOptions,
}

impl Formatter {
    pub fn new(opts: FormatOptions) -> Self {
        Formatter { opts }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.opts
    }

    pub fn locale(&self) -> &Locale {
        &self.opts.locale
    }

    /// Render an integer through the locale, zero-padded to `min_digits`.
    pub fn num(&self, value: i64, min_digits: usize) -> String {
        self.opts.locale.format_number(value, min_digits)
    }

    /// Render a duration magnitude.
    ///
    /// With `round` set the value is rounded to an integer; otherwise up to
    /// three fraction digits are kept.
    pub fn num_f64(&self, value: f64, min_digits: usize) -> String {
        if self.opts.round {
            self.num(value.round() as i64, min_digits)
        } else {
            self.opts.locale.format_decimal(value, min_digits, 3)
        }
    }

    /// Format a whole date/time with a named preset.
    pub fn format_date_time<D>(&self, dt: &D, preset: Preset) -> String
    where
        D: DateTimeLike + ?Sized,
    {
        self.opts.locale.format_preset(dt, &preset.options())
    }

    /// Output for a token nothing recognizes.
    fn pass_through(&self, token: &str) -> Result<String, FormatError> {
        if self.opts.strict {
            return Err(FormatError::UnknownToken {
                token: token.to_string(),
            });
        }
        log::trace!("passing through unknown token '{}'", token);
        Ok(token.to_string())
    }
}

/// Concatenate a token stream, resolving each format token with `resolve`.
///
/// Literal tokens are copied as they are. The first resolver error stops
/// rendering and is returned.
pub fn render<F, E>(tokens: &[Token], mut resolve: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut out = String::new();
    for token in tokens {
        if token.is_literal() {
            out.push_str(token.text());
        } else {
            out.push_str(&resolve(token.text())?);
        }
    }
    Ok(out)
}
