//! Tokenizer for date/time and duration patterns.

pub mod lexer;
pub mod tokens;

use lexer::Lexer;
use tokens::Token;

/// Split a pattern string into literal and format tokens.
///
/// Tokenizing never fails: unknown letters become format tokens that the
/// resolvers pass through, and an unterminated quote makes the rest of the
/// pattern literal.
///
/// # Examples
/// ```
/// use lxfmt::parser::tokenize;
///
/// let tokens = tokenize("yyyy-MM-dd");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, ["yyyy", "-", "MM", "-", "dd"]);
/// assert!(tokens[1].is_literal());
/// ```
pub fn tokenize(pattern: &str) -> Vec<Token> {
    Lexer::new(pattern).tokenize()
}
