//! Duration pattern formatting

use super::{render, Formatter};
use crate::duration::{DurationLike, Unit};
use crate::error::FormatError;
use crate::parser::tokenize;

impl Formatter {
    /// Format a duration with a pattern like `hh:mm:ss`.
    ///
    /// The duration is reprojected once onto the units the pattern names, in
    /// pattern order. Each unit token renders that unit's magnitude, padded to
    /// the token's length, so `hh` on one hour gives `01`.
    ///
    /// # Examples
    /// ```
    /// use lxfmt::{Duration, Formatter, Unit};
    ///
    /// let dur = Duration::new().with(Unit::Minute, 65.0);
    /// let out = Formatter::default().format_duration_from_string(&dur, "h 'hr' m 'min'");
    /// assert_eq!(out.unwrap(), "1 hr 5 min");
    /// ```
    pub fn format_duration_from_string<D>(&self, dur: &D, pattern: &str) -> Result<String, FormatError>
    where
        D: DurationLike,
    {
        let tokens = tokenize(pattern);
        let units: Vec<Unit> = tokens
            .iter()
            .filter(|token| !token.is_literal())
            .filter_map(|token| Unit::from_token(token.text()))
            .collect();
        let collapsed = dur.shift_to(&units);

        render(&tokens, |token| match Unit::from_token(token) {
            Some(unit) => Ok(self.num_f64(collapsed.get(unit), token.chars().count())),
            None => self.pass_through(token),
        })
    }
}
