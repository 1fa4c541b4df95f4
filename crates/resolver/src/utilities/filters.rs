//! Filter and backdrop-filter utilities.

use crate::entry::lookup;
use crate::values::{color_value, is_color_token};
use crate::{Entry, FilterFunction, NamedTable, ResolveContext, Token, ValueSpec};

const BLUR_SIZES: &[(&str, &str)] = &[
    ("xs", "4px"),
    ("sm", "8px"),
    ("md", "12px"),
    ("lg", "16px"),
    ("xl", "24px"),
    ("2xl", "40px"),
    ("3xl", "64px"),
];

const DROP_SHADOW_SIZES: &[(&str, &str)] = &[
    ("xs", "0 1px 1px var(--drop-shadow-color, rgb(0 0 0 / 0.05))"),
    ("sm", "0 1px 2px var(--drop-shadow-color, rgb(0 0 0 / 0.15))"),
    ("md", "0 3px 3px var(--drop-shadow-color, rgb(0 0 0 / 0.12))"),
    ("lg", "0 4px 4px var(--drop-shadow-color, rgb(0 0 0 / 0.15))"),
    ("xl", "0 9px 7px var(--drop-shadow-color, rgb(0 0 0 / 0.1))"),
    ("2xl", "0 25px 25px var(--drop-shadow-color, rgb(0 0 0 / 0.15))"),
];

/// Size used by a bare `blur` or `drop-shadow`.
const DEFAULT_SIZE: &str = "sm";

/// Scalar filter functions, each registered as `name` and `backdrop-name`.
const FUNCTIONS: [FilterFunction; 7] = [
    FilterFunction::new("brightness", "%"),
    FilterFunction::new("contrast", "%"),
    FilterFunction::new("grayscale", "%").full_when_empty(),
    FilterFunction::new("hue-rotate", "deg"),
    FilterFunction::new("invert", "%").full_when_empty(),
    FilterFunction::new("sepia", "%").full_when_empty(),
    FilterFunction::new("saturate", "%"),
];

#[expect(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the ValueFn fn pointer type"
)]
fn blur(token: &Token<'_>, _context: &ResolveContext) -> Option<String> {
    let joined = token.joined();
    let size = if joined.is_empty() {
        DEFAULT_SIZE
    } else {
        joined.as_str()
    };
    let radius = lookup(BLUR_SIZES, size).unwrap_or(size);
    Some(format!("blur({radius})"))
}

/// Colors set `--drop-shadow-color`; anything else is a preset or a raw shadow.
#[expect(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the DeclarationFn fn pointer type"
)]
fn drop_shadow(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if token.key() == "color" || is_color_token(token) {
        return Some(format!("--drop-shadow-color: {}", color_value(token, context)));
    }
    let joined = token.joined();
    let size = if joined.is_empty() {
        DEFAULT_SIZE
    } else {
        joined.as_str()
    };
    let shadow = lookup(DROP_SHADOW_SIZES, size).unwrap_or(size);
    Some(format!("filter: drop-shadow({shadow})"))
}

pub fn table() -> NamedTable {
    let mut table = NamedTable::new("filters")
        .entry(
            "blur",
            Entry::with_value("filter", ValueSpec::Resolve(blur)),
        )
        .entry(
            "backdrop-blur",
            Entry::with_value("backdropFilter", ValueSpec::Resolve(blur)),
        )
        .entry("drop-shadow", Entry::Compute(drop_shadow))
        .entry(
            "backdrop-opacity",
            Entry::with_value(
                "backdropFilter",
                ValueSpec::Filter(FilterFunction::new("opacity", "%")),
            ),
        );
    for function in FUNCTIONS {
        table.insert(
            function.name,
            Entry::with_value("filter", ValueSpec::Filter(function)),
        );
        table.insert(
            format!("backdrop-{}", function.name),
            Entry::with_value("backdropFilter", ValueSpec::Filter(function)),
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css(utility: &str, token: &Token<'_>) -> Option<String> {
        let context = ResolveContext::default();
        table()
            .entries
            .iter()
            .find(|(name, _entry)| name == utility)
            .and_then(|(_name, entry)| entry.resolve(token, &context))
            .map(|resolved| resolved.to_css())
    }

    #[test]
    fn every_function_has_a_backdrop_twin() {
        let filters = table();
        let has = |utility: &str| filters.entries.iter().any(|(name, _entry)| name == utility);
        for function in FUNCTIONS {
            assert!(has(function.name));
            assert!(has(&format!("backdrop-{}", function.name)));
        }
        assert_eq!(filters.entries.len(), 18);
    }

    #[test]
    fn same_transform_different_property() {
        assert_eq!(
            css("brightness", &Token::new("50")),
            Some("filter: brightness(50%)".to_owned())
        );
        assert_eq!(
            css("backdrop-brightness", &Token::new("50")),
            Some("backdrop-filter: brightness(50%)".to_owned())
        );
        assert_eq!(
            css("hue-rotate", &Token::new("90")),
            Some("filter: hue-rotate(90deg)".to_owned())
        );
        assert_eq!(
            css("backdrop-opacity", &Token::new("40")),
            Some("backdrop-filter: opacity(40%)".to_owned())
        );
    }

    #[test]
    fn full_strength_when_bare() {
        assert_eq!(
            css("grayscale", &Token::empty()),
            Some("filter: grayscale(100%)".to_owned())
        );
        assert_eq!(
            css("backdrop-invert", &Token::empty()),
            Some("backdrop-filter: invert(100%)".to_owned())
        );
        assert_eq!(css("contrast", &Token::empty()), None);
    }

    #[test]
    fn blur_named_sizes() {
        assert_eq!(
            css("blur", &Token::new("2xl")),
            Some("filter: blur(40px)".to_owned())
        );
        assert_eq!(
            css("blur", &Token::empty()),
            Some("filter: blur(8px)".to_owned())
        );
        assert_eq!(
            css("backdrop-blur", &Token::new("3").with_unit("px")),
            Some("backdrop-filter: blur(3px)".to_owned())
        );
    }

    #[test]
    fn drop_shadow_color_channel() {
        assert_eq!(
            css("drop-shadow", &Token::new("md")),
            Some("filter: drop-shadow(0 3px 3px var(--drop-shadow-color, rgb(0 0 0 / 0.12)))".to_owned())
        );
        assert_eq!(
            css(
                "drop-shadow",
                &Token::new("oklch(60% 0.2 250)").with_second("30", None)
            ),
            Some("--drop-shadow-color: oklch(60% 0.2 250 / 30%)".to_owned())
        );
    }
}
