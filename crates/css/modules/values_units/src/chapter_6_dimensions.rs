//! CSS Values & Units Level 3 — §6 Dimensions (lengths)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::single_token;
use cssparser::Token;

/// Absolute, font-relative, viewport and container length units.
const LENGTH_UNITS: [&str; 31] = [
    "px", "cm", "mm", "q", "in", "pt", "pc", "em", "rem", "ex", "rex", "ch", "rch", "lh", "rlh",
    "vw", "vh", "vmin", "vmax", "svw", "svh", "lvw", "lvh", "dvw", "dvh", "cqw", "cqh", "cqi",
    "cqb", "cqmin", "cqmax",
];

/// Whether `text` is a single `<length>` dimension such as `12px` or `1.5rem`.
///
/// Unitless numbers, including zero, are not lengths here; callers that
/// accept them check `is_number` separately.
pub fn is_length(text: &str) -> bool {
    single_token(text, |token| match token {
        Token::Dimension { unit, .. } => {
            let lower = unit.as_ref().to_ascii_lowercase();
            LENGTH_UNITS.contains(&lower.as_str())
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_lengths() {
        assert!(is_length("12px"));
        assert!(is_length("1.5rem"));
        assert!(is_length("-2em"));
        assert!(is_length("100dvh"));
        assert!(is_length("3PX"));
    }

    #[test]
    fn rejects_non_lengths() {
        assert!(!is_length("12"));
        assert!(!is_length("50%"));
        assert!(!is_length("150ms"));
        assert!(!is_length("auto"));
    }
}
