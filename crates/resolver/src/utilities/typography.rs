//! `text`, `font`, `tracking`, `leading`, `decoration`, `underline-offset`, `indent`.

use crate::entry::lookup;
use crate::rule::keyed_only;
use crate::values::{color_value, is_color_token};
use crate::{Entry, NamedTable, ResolveContext, Rule, Token, ValueSpec, first_match};
use preset_color::is_color;
use preset_values_units::{is_length, is_number, scale_sizing};

/// Font size and default line height per named text size.
const FONT_SIZES: &[(&str, &str, &str)] = &[
    ("xs", "0.75rem", "calc(1 / 0.75)"),
    ("sm", "0.875rem", "calc(1.25 / 0.875)"),
    ("base", "1rem", "calc(1.5 / 1)"),
    ("lg", "1.125rem", "calc(1.75 / 1.125)"),
    ("xl", "1.25rem", "calc(1.75 / 1.25)"),
    ("2xl", "1.5rem", "calc(2 / 1.5)"),
    ("3xl", "1.875rem", "calc(2.25 / 1.875)"),
    ("4xl", "2.25rem", "calc(2.5 / 2.25)"),
    ("5xl", "3rem", "1"),
    ("6xl", "3.75rem", "1"),
    ("7xl", "4.5rem", "1"),
    ("8xl", "6rem", "1"),
    ("9xl", "8rem", "1"),
];

const LINE_HEIGHTS: &[(&str, &str)] = &[
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
];

const FONT_WEIGHTS: &[(&str, &str)] = &[
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

const LETTER_SPACING: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0em"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

const TEXT_ALIGN: [&str; 6] = ["center", "justify", "left", "right", "start", "end"];
const TEXT_WRAP: [&str; 4] = ["wrap", "nowrap", "balance", "pretty"];
const TEXT_OVERFLOW: [&str; 2] = ["ellipsis", "clip"];
const DECORATION_STYLES: [&str; 5] = ["solid", "dashed", "double", "dotted", "wavy"];
const DECORATION_THICKNESS: [&str; 2] = ["auto", "from-font"];

type Render = fn(&Token<'_>, &ResolveContext) -> String;

fn font_size(joined: &str) -> Option<(&'static str, &'static str)> {
    FONT_SIZES
        .iter()
        .find(|(name, _size, _line_height)| *name == joined)
        .map(|(_name, size, line_height)| (*size, *line_height))
}

/// Explicit line height from the second value, through the named aliases.
fn line_height(token: &Token<'_>) -> Option<String> {
    if token.second_value().is_empty() {
        return None;
    }
    Some(
        lookup(LINE_HEIGHTS, token.second_value())
            .map_or_else(|| token.second_joined(), str::to_owned),
    )
}

fn is_text_align(token: &Token<'_>) -> bool {
    TEXT_ALIGN.contains(&token.value())
}

fn is_text_wrap(token: &Token<'_>) -> bool {
    TEXT_WRAP.contains(&token.value())
}

fn is_text_overflow(token: &Token<'_>) -> bool {
    TEXT_OVERFLOW.contains(&token.value())
}

fn is_font_size(token: &Token<'_>) -> bool {
    let joined = token.joined();
    is_length(&joined) || font_size(&joined).is_some()
}

fn text_color(token: &Token<'_>, context: &ResolveContext) -> String {
    format!("color: {}", color_value(token, context))
}

fn text_align(token: &Token<'_>, _context: &ResolveContext) -> String {
    format!("text-align: {}", token.value())
}

fn text_wrap(token: &Token<'_>, _context: &ResolveContext) -> String {
    format!("text-wrap: {}", token.value())
}

fn text_overflow(token: &Token<'_>, _context: &ResolveContext) -> String {
    format!("text-overflow: {}", token.value())
}

/// Named sizes carry a default line height; a second value overrides it.
fn text_size(token: &Token<'_>, _context: &ResolveContext) -> String {
    let joined = token.joined();
    if let Some((size, default_line_height)) = font_size(&joined) {
        let leading = line_height(token).unwrap_or_else(|| default_line_height.to_owned());
        return format!("font-size: {size}; line-height: {leading}");
    }
    line_height(token).map_or_else(
        || format!("font-size: {joined}"),
        |leading| format!("font-size: {joined}; line-height: {leading}"),
    )
}

const TEXT_RULES: [Rule<Render>; 5] = [
    Rule::new("color", is_color_token, text_color),
    Rule::new("align", is_text_align, text_align),
    Rule::new("wrap", is_text_wrap, text_wrap),
    Rule::new("overflow", is_text_overflow, text_overflow),
    Rule::new("size", is_font_size, text_size),
];

/// Anything unrecognized is taken as a color.
fn text(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() {
        return None;
    }
    let render = first_match(&TEXT_RULES, token)
        .copied()
        .unwrap_or(text_color);
    Some(render(token, context))
}

fn is_font_weight(token: &Token<'_>) -> bool {
    let value = token.value();
    lookup(FONT_WEIGHTS, value).is_some() || is_number(value) || value.ends_with("00")
}

fn font_weight(token: &Token<'_>, _context: &ResolveContext) -> String {
    let value = token.value();
    let weight = lookup(FONT_WEIGHTS, value).unwrap_or(value);
    format!("font-weight: {weight}")
}

fn font_family(token: &Token<'_>, _context: &ResolveContext) -> String {
    format!("font-family: {}", token.value())
}

const FONT_RULES: [Rule<Render>; 2] = [
    Rule::new("weight", is_font_weight, font_weight),
    Rule::new("family", keyed_only, font_family),
];

/// Weights by name or number; anything else is a font family.
fn font(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() {
        return None;
    }
    let render = first_match(&FONT_RULES, token)
        .copied()
        .unwrap_or(font_family);
    Some(render(token, context))
}

fn leading(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    let value = token.value();
    if value.is_empty() {
        return None;
    }
    if let Some(named) = lookup(LINE_HEIGHTS, value) {
        return Some(named.to_owned());
    }
    if token.unit().is_empty() && is_number(value) {
        return Some(scale_sizing(value, "", context.sizing));
    }
    Some(token.joined())
}

fn decoration_color(token: &Token<'_>, context: &ResolveContext) -> String {
    format!("text-decoration-color: {}", color_value(token, context))
}

fn decoration_style(token: &Token<'_>, _context: &ResolveContext) -> String {
    format!("text-decoration-style: {}", token.value())
}

fn decoration_thickness(token: &Token<'_>, _context: &ResolveContext) -> String {
    let joined = token.joined();
    let thickness = if is_number(&joined) {
        format!("{}px", token.value())
    } else {
        joined
    };
    format!("text-decoration-thickness: {thickness}")
}

fn is_decoration_color(token: &Token<'_>) -> bool {
    is_color(token.value())
}

fn is_decoration_style(token: &Token<'_>) -> bool {
    DECORATION_STYLES.contains(&token.value())
}

fn is_decoration_thickness(token: &Token<'_>) -> bool {
    let joined = token.joined();
    DECORATION_THICKNESS.contains(&token.value()) || is_number(&joined) || is_length(&joined)
}

const DECORATION_RULES: [Rule<Render>; 3] = [
    Rule::new("color", is_decoration_color, decoration_color),
    Rule::new("style", is_decoration_style, decoration_style),
    Rule::new("length", is_decoration_thickness, decoration_thickness),
];

fn decoration(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() {
        return None;
    }
    let render = first_match(&DECORATION_RULES, token)
        .copied()
        .unwrap_or(decoration_color);
    Some(render(token, context))
}

fn indent(token: &Token<'_>, context: &ResolveContext) -> Option<String> {
    if token.value().is_empty() {
        return None;
    }
    Some(scale_sizing(token.value(), token.unit(), context.sizing))
}

pub fn table() -> NamedTable {
    NamedTable::new("typography")
        .entry("text", Entry::Compute(text))
        .entry("font", Entry::Compute(font))
        .entry(
            "tracking",
            Entry::with_value(
                "letterSpacing",
                ValueSpec::Alias {
                    aliases: LETTER_SPACING,
                },
            ),
        )
        .entry(
            "leading",
            Entry::with_value("lineHeight", ValueSpec::Resolve(leading)),
        )
        .entry("decoration", Entry::Compute(decoration))
        .entry(
            "underline-offset",
            Entry::template("textUnderlineOffset", "{0}px"),
        )
        .entry(
            "indent",
            Entry::with_value("textIndent", ValueSpec::Resolve(indent)),
        )
}
