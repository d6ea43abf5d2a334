//! Lexer for splitting pattern strings into tokens.
//!
//! The lexer is a small state machine threaded through one scan loop:
//! - the currently open repeat character, if any
//! - the text accumulated for the current token
//! - whether we are inside a single-quoted literal
//!
//! Runs of one repeated ASCII letter become format tokens (`yyyy`, `MM`).
//! Quoted text and runs of any other character become literal tokens.
//! A quote character is never emitted, and `''` does not produce a quote glyph.

use crate::parser::tokens::Token;

const QUOTE: char = '\'';

/// A lexer for pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The repeat character of the run being accumulated.
    current: Option<char>,
    /// Text of the token being accumulated.
    buffer: String,
    /// Char index where `buffer` started.
    buffer_start: usize,
    /// Whether we are currently inside a quoted literal.
    quoted: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            current: None,
            buffer: String::new(),
            buffer_start: 0,
            quoted: false,
            tokens: Vec::new(),
        }
    }

    /// Returns all tokens of the input, in scan order.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Vec<Token> {
        for (position, ch) in self.input.chars().enumerate() {
            if ch == QUOTE {
                self.flush();
                self.current = None;
                self.quoted = !self.quoted;
                // Quoted text starts after the quote itself.
                self.buffer_start = position + 1;
            } else if self.quoted {
                self.buffer.push(ch);
            } else if Some(ch) == self.current {
                self.buffer.push(ch);
            } else {
                self.flush();
                self.buffer.push(ch);
                self.buffer_start = position;
                self.current = Some(ch);
            }
        }

        if self.quoted {
            log::debug!(
                "unterminated quote in pattern {:?}; trailing text is literal",
                self.input
            );
        }
        self.flush();
        self.tokens
    }

    /// Quoted text is literal; unquoted runs are literal unless they repeat
    /// a pattern letter.
    fn pending_is_literal(&self) -> bool {
        self.quoted || !self.current.is_some_and(is_pattern_char)
    }

    /// Pushes the accumulated buffer as a token, if non-empty.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let literal = self.pending_is_literal();
        let text = std::mem::take(&mut self.buffer);
        self.tokens.push(Token::new(literal, text, self.buffer_start));
    }
}

/// Returns true if `ch` belongs to the pattern alphabet.
///
/// Every ASCII letter is reserved, including letters with no directive, so
/// that they reach the resolver (which passes them through, or rejects them
/// in strict mode).
pub fn is_pattern_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}
