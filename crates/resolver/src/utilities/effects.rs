//! `shadow`.

use crate::entry::lookup;
use crate::values::{BOX_SHADOW_STACK, color_value, is_color_token};
use crate::{Entry, NamedTable, ResolveContext, Token};
use preset_values_units::substitute;

/// Outer shadow presets; `{0}` is the shadow layer name.
const SHADOW_SIZES: &[(&str, &str)] = &[
    ("2xs", "0 1px var(--tui-{0}-color, rgb(0 0 0 / 0.05))"),
    ("xs", "0 1px 2px 0 var(--tui-{0}-color, rgb(0 0 0 / 0.05))"),
    (
        "sm",
        "0 1px 3px 0 var(--tui-{0}-color, rgb(0 0 0 / 0.1)), 0 1px 2px -1px var(--tui-{0}-color, rgb(0 0 0 / 0.1))",
    ),
    (
        "md",
        "0 4px 6px -1px var(--tui-{0}-color, rgb(0 0 0 / 0.1)), 0 2px 4px -2px var(--tui-{0}-color, rgb(0 0 0 / 0.1))",
    ),
    (
        "lg",
        "0 10px 15px -3px var(--tui-{0}-color, rgb(0 0 0 / 0.1)), 0 4px 6px -4px var(--tui-{0}-color, rgb(0 0 0 / 0.1))",
    ),
    (
        "xl",
        "0 20px 25px -5px var(--tui-{0}-color, rgb(0 0 0 / 0.1)), 0 8px 10px -6px var(--tui-{0}-color, rgb(0 0 0 / 0.1))",
    ),
    ("2xl", "0 25px 50px -12px var(--tui-{0}-color, rgb(0 0 0 / 0.25))"),
    ("none", "0 0 #0000"),
];

const INSET_SHADOW_SIZES: &[(&str, &str)] = &[
    ("2xs", "inset 0 1px var(--tui-inset-shadow-color, rgb(0 0 0 / 0.05))"),
    ("xs", "inset 0 1px 1px var(--tui-inset-shadow-color, rgb(0 0 0 / 0.05))"),
    ("sm", "inset 0 2px 4px var(--tui-inset-shadow-color, rgb(0 0 0 / 0.05))"),
    ("none", "0 0 #0000"),
];

/// Preset used by a bare `shadow`.
const DEFAULT_SIZE: &str = "sm";

/// Preset shadow text for `size` in the given layer.
pub(crate) fn shadow_preset(size: &str, inset: bool) -> Option<String> {
    if inset {
        lookup(INSET_SHADOW_SIZES, size).map(str::to_owned)
    } else {
        lookup(SHADOW_SIZES, size).map(|template| substitute(template, "shadow"))
    }
}

/// Colors set the layer color; anything else sets the layer and re-composes
/// `box-shadow` from every layer.
#[expect(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the DeclarationFn fn pointer type"
)]
fn shadow(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    let inset = token.key() == "inset";
    let layer = if inset { "inset-shadow" } else { "shadow" };
    if is_color_token(token) {
        return Some(format!("--tui-{layer}-color: {}", color_value(token, context)));
    }
    let size = match token.value() {
        "" => DEFAULT_SIZE,
        size => size,
    };
    let value = shadow_preset(size, inset).unwrap_or_else(|| token.joined());
    Some(format!("--tui-{layer}: {value}; box-shadow: {BOX_SHADOW_STACK}"))
}

pub fn table() -> NamedTable {
    NamedTable::new("effects").entry("shadow", Entry::Compute(shadow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Declaration, parse_declarations};

    fn declarations(token: &Token<'_>) -> Vec<Declaration> {
        shadow(token, &ResolveContext::default())
            .map(|text| parse_declarations(&text))
            .unwrap_or_default()
    }

    #[test]
    fn preset_sets_layer_and_stack() {
        let resolved = declarations(&Token::new("md"));
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].property, "--tui-shadow");
        assert_eq!(
            resolved[0].value,
            "0 4px 6px -1px var(--tui-shadow-color, rgb(0 0 0 / 0.1)), 0 2px 4px -2px var(--tui-shadow-color, rgb(0 0 0 / 0.1))"
        );
        assert_eq!(
            resolved[1],
            Declaration::new("box-shadow", BOX_SHADOW_STACK)
        );
    }

    #[test]
    fn stack_lists_every_layer_in_paint_order() {
        let layers: Vec<&str> = BOX_SHADOW_STACK.split(", ").collect();
        assert_eq!(
            layers,
            [
                "var(--tui-inset-shadow)",
                "var(--tui-inset-ring-shadow)",
                "var(--tui-ring-offset-shadow)",
                "var(--tui-shadow)",
                "var(--tui-ring-shadow)",
            ]
        );
    }

    #[test]
    fn inset_presets_close_their_parentheses() {
        for (_size, preset) in INSET_SHADOW_SIZES {
            assert_eq!(preset.matches('(').count(), preset.matches(')').count());
        }
        let resolved = declarations(&Token::new("2xs").with_key("inset"));
        assert_eq!(resolved[0].property, "--tui-inset-shadow");
        assert_eq!(
            resolved[0].value,
            "inset 0 1px var(--tui-inset-shadow-color, rgb(0 0 0 / 0.05))"
        );
    }

    #[test]
    fn colors_set_the_layer_color() {
        assert_eq!(
            declarations(&Token::new("black")),
            vec![Declaration::new("--tui-shadow-color", "black")]
        );
        assert_eq!(
            declarations(&Token::new("red").with_key("inset")),
            vec![Declaration::new("--tui-inset-shadow-color", "red")]
        );
    }

    #[test]
    fn bare_shadow_uses_small_preset_and_unknown_passes_through() {
        assert_eq!(
            declarations(&Token::empty())[0].value,
            shadow_preset("sm", false).unwrap_or_default()
        );
        assert_eq!(
            declarations(&Token::new("0_0_4px_red"))[0].value,
            "0_0_4px_red"
        );
    }
}
