//! CSS Values & Units Level 3 — §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::single_token;
use cssparser::Token;

/// Whether `text` is a single `<percentage>` such as `50%`.
pub fn is_percentage(text: &str) -> bool {
    single_token(text, |token| matches!(token, Token::Percentage { .. }))
}
