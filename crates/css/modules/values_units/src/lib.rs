//! Value syntax testers and numeric helpers shared by the palette and resolver crates.
//!
//! Each tester classifies a whole string (typically `value + unit` from a
//! utility token) against one CSS value grammar using the `cssparser`
//! tokenizer, so `4`, `-1.5`, `12px`, `50%` and `150ms` are recognized the same
//! way a stylesheet parser would see them.

#![forbid(unsafe_code)]

use cssparser::{Parser, ParserInput, Token};
use std::error::Error;
use std::fmt;

pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_7_time;
pub mod sizing;
pub mod template;

pub use chapter_4_numbers::{is_number, number_value};
pub use chapter_5_percentages::is_percentage;
pub use chapter_6_dimensions::is_length;
pub use chapter_7_time::is_time;
pub use sizing::{DEFAULT_SIZING, format_number, scale_sizing};
pub use template::substitute;

/// Parse error for the value helpers in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input did not match the expected grammar.
    UnexpectedToken,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => f.write_str("unexpected token"),
        }
    }
}

impl Error for ParseError {}

/// Run `accept` against the only token of `text`.
///
/// Returns false for empty input, surrounding whitespace, or when anything
/// follows the first token.
pub(crate) fn single_token<F>(text: &str, accept: F) -> bool
where
    F: FnOnce(&Token<'_>) -> bool,
{
    if text.is_empty() || text.trim() != text {
        return false;
    }
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let accepted = parser
        .next_including_whitespace_and_comments()
        .is_ok_and(accept);
    accepted && parser.is_exhausted()
}
