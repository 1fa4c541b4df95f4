//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::{ParseError, single_token};
use cssparser::Token;

/// Whether `text` is a plain number: optional sign, digits, optional decimal part.
///
/// Scientific notation is rejected even though the tokenizer accepts it.
pub fn is_number(text: &str) -> bool {
    if text.contains(['e', 'E']) {
        return false;
    }
    single_token(text, |token| matches!(token, Token::Number { .. }))
}

/// Numeric value of a plain number literal.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when `text` is not a plain number.
pub fn number_value(text: &str) -> Result<f64, ParseError> {
    if !is_number(text) {
        return Err(ParseError::UnexpectedToken);
    }
    text.parse::<f64>()
        .map_err(|_parse_err| ParseError::UnexpectedToken)
}
