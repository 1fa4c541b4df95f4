//! CSS Values & Units Level 3 — §7.3 Duration units
//! Spec: <https://www.w3.org/TR/css-values-3/#time>

use crate::single_token;
use cssparser::Token;

/// Whether `text` is a single `<time>` such as `150ms` or `0.3s`.
pub fn is_time(text: &str) -> bool {
    single_token(text, |token| match token {
        Token::Dimension { unit, .. } => {
            unit.eq_ignore_ascii_case("ms") || unit.eq_ignore_ascii_case("s")
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_durations() {
        assert!(is_time("150ms"));
        assert!(is_time("0.3s"));
        assert!(!is_time("150"));
        assert!(!is_time("10px"));
    }
}
