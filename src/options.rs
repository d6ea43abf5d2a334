//! Formatting options and configuration.

use crate::locale::Locale;

/// Options for formatting values.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// The locale for numbers, names and preset layouts.
    pub locale: Locale,
    /// Round duration magnitudes to integers.
    pub round: bool,
    /// Fail on unknown tokens instead of emitting them verbatim.
    pub strict: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            locale: Locale::default(),
            round: true,
            strict: false,
        }
    }
}

impl FormatOptions {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
