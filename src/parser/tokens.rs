//! Token types for the pattern lexer.

/// A token in a pattern string.
///
/// A literal token carries output text verbatim. A format token is a maximal
/// run of one repeated pattern letter (`yyyy`, `ZZZ`) that a resolver turns
/// into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    literal: bool,
    text: String,
    /// Char index of the first character of the token in the pattern.
    start: usize,
}

impl Token {
    pub(crate) fn new(literal: bool, text: String, start: usize) -> Self {
        Self {
            literal,
            text,
            start,
        }
    }

    /// Returns true if this token is emitted verbatim.
    pub fn is_literal(&self) -> bool {
        self.literal
    }

    /// The token text: output text for literals, the directive run otherwise.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Char index where the token starts in the source pattern.
    ///
    /// For quoted literals this is the first character after the quote.
    pub fn start(&self) -> usize {
        self.start
    }
}
