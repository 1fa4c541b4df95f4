//! `radius`, `border`, `outline`, `ring`, `ring-offset`.

use crate::values::{BOX_SHADOW_STACK, color_value, is_color_token, line_width};
use crate::{
    Entry, NamedTable, Properties, PropertySpec, ResolveContext, Rule, Token, ValueSpec,
    first_match,
};

const RADIUS_SIZES: &[(&str, &str)] = &[
    ("xs", "0.125rem"),
    ("sm", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("4xl", "2rem"),
];

const RADIUS_CORNERS: &[(&str, Properties)] = &[
    (
        "t",
        Properties::Many(&["borderTopLeftRadius", "borderTopRightRadius"]),
    ),
    (
        "r",
        Properties::Many(&["borderTopRightRadius", "borderBottomRightRadius"]),
    ),
    (
        "b",
        Properties::Many(&["borderBottomRightRadius", "borderBottomLeftRadius"]),
    ),
    (
        "l",
        Properties::Many(&["borderTopLeftRadius", "borderBottomLeftRadius"]),
    ),
    ("tl", Properties::One("borderTopLeftRadius")),
    ("tr", Properties::One("borderTopRightRadius")),
    ("br", Properties::One("borderBottomRightRadius")),
    ("bl", Properties::One("borderBottomLeftRadius")),
];

/// A `{name}-color` / `{name}-style` / `{name}-width` utility family.
struct LineFamily {
    name: &'static str,
    styles: &'static [&'static str],
    /// Key suffix → width property; anything else is `{name}-width`.
    sides: &'static [(&'static str, &'static str)],
}

const BORDER: LineFamily = LineFamily {
    name: "border",
    styles: &["solid", "dashed", "double", "hidden", "none", "dotted"],
    sides: &[
        ("x", "border-inline-width"),
        ("y", "border-block-width"),
        ("t", "border-top-width"),
        ("r", "border-right-width"),
        ("b", "border-bottom-width"),
        ("l", "border-left-width"),
    ],
};

const OUTLINE: LineFamily = LineFamily {
    name: "outline",
    styles: &["solid", "dashed", "double", "none", "dotted"],
    sides: &[],
};

#[derive(Clone, Copy, Debug)]
enum LinePart {
    Color,
    Style,
}

fn is_border_style(token: &Token<'_>) -> bool {
    BORDER.styles.contains(&token.value())
}

fn is_outline_style(token: &Token<'_>) -> bool {
    OUTLINE.styles.contains(&token.value())
}

const BORDER_RULES: [Rule<LinePart>; 2] = [
    Rule::new("color", is_color_token, LinePart::Color),
    Rule::new("style", is_border_style, LinePart::Style),
];

const OUTLINE_RULES: [Rule<LinePart>; 2] = [
    Rule::new("color", is_color_token, LinePart::Color),
    Rule::new("style", is_outline_style, LinePart::Style),
];

/// Color, style, or a width that also pins the style (second value, else `solid`).
fn line(
    family: &LineFamily,
    rules: &[Rule<LinePart>],
    token: &Token<'_>,
    context: &ResolveContext,
) -> String {
    let name = family.name;
    match first_match(rules, token) {
        Some(LinePart::Color) => format!("{name}-color: {}", color_value(token, context)),
        Some(LinePart::Style) => format!("{name}-style: {}", token.value()),
        None => {
            let style = match token.second_value() {
                "" => "solid",
                style => style,
            };
            let key = token.key();
            let width_property = family
                .sides
                .iter()
                .find(|(side, _property)| *side == key)
                .map_or_else(
                    || format!("{name}-width"),
                    |(_side, property)| (*property).to_owned(),
                );
            format!(
                "{name}-style: {style}; {width_property}: {}",
                line_width(token)
            )
        }
    }
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the DeclarationFn fn pointer type"
)]
fn border(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    Some(line(&BORDER, &BORDER_RULES, token, context))
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the DeclarationFn fn pointer type"
)]
fn outline(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    Some(line(&OUTLINE, &OUTLINE_RULES, token, context))
}

/// `ring` draws into `--tui-ring-shadow`, `ring` keyed `inset` into
/// `--tui-inset-ring-shadow`.
#[expect(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the DeclarationFn fn pointer type"
)]
fn ring(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    let inset = token.key() == "inset";
    let layer = if inset {
        "inset-ring-shadow"
    } else {
        "ring-shadow"
    };
    if is_color_token(token) {
        return Some(format!("--tui-{layer}-color: {}", color_value(token, context)));
    }
    let prefix = if inset { "inset " } else { "" };
    Some(format!(
        "--tui-{layer}: {prefix}0 0 0 calc({} + var(--tui-ring-offset-width, 2px)) var(--tui-{layer}-color, currentColor); box-shadow: {BOX_SHADOW_STACK}",
        line_width(token)
    ))
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the DeclarationFn fn pointer type"
)]
fn ring_offset(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if is_color_token(token) {
        return Some(format!("--tui-ring-offset-color: {}", color_value(token, context)));
    }
    Some(format!(
        "--tui-ring-offset-width: {}; --tui-ring-offset-shadow: 0 0 0 var(--tui-ring-offset-width) var(--tui-ring-offset-color)",
        line_width(token)
    ))
}

pub fn table() -> NamedTable {
    NamedTable::new("borders")
        .entry(
            "radius",
            Entry::Declare {
                property: PropertySpec::Directional {
                    base: Properties::One("borderRadius"),
                    keys: RADIUS_CORNERS,
                },
                value: ValueSpec::Alias {
                    aliases: RADIUS_SIZES,
                },
            },
        )
        .entry("border", Entry::Compute(border))
        .entry("outline", Entry::Compute(outline))
        .entry("ring", Entry::Compute(ring))
        .entry("ring-offset", Entry::Compute(ring_offset))
}
