//! Color primitives for the preset: color-literal testing, hex/RGB/HSL
//! conversion, output color syntax and alpha composition.
//! Spec: <https://www.w3.org/TR/css-color-4/>

#![forbid(unsafe_code)]

pub mod alpha;
pub mod format;
pub mod space;

pub use alpha::compose_alpha;
pub use format::ColorFormat;
pub use space::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hsl};

use csscolorparser::Color;

/// Keywords every color-accepting utility treats as a color.
pub const COLOR_KEYWORDS: [&str; 5] = ["inherit", "current", "black", "white", "transparent"];

/// The `current` keyword, rendered as `currentColor`.
pub const CURRENT_KEYWORD: &str = "current";

/// Functional notations that are colors even when the parser cannot evaluate them.
const COLOR_FUNCTIONS: [&str; 11] = [
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color(",
    "color-mix(",
];

/// Parse a CSS `<color>` into 8-bit RGBA channels.
///
/// Supports named colors, hex forms (`#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`),
/// and functional notations like `rgb()`/`hsl()`.
///
/// Spec: <https://www.w3.org/TR/css-color-4/#typedef-color>
#[inline]
pub fn parse_css_color(input: &str) -> Option<[u8; 4]> {
    let parsed: Color = input.parse().ok()?;
    Some(parsed.to_rgba8())
}

/// Whether `value` is a color literal: hex with `#`, a named color, or a
/// functional color notation.
///
/// Bare hex digits (`100`, `fade`) are rejected so numeric utility values
/// are never mistaken for colors.
pub fn is_color(value: &str) -> bool {
    if value.is_empty() || value.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return false;
    }
    let lower = value.to_ascii_lowercase();
    if COLOR_FUNCTIONS
        .iter()
        .any(|function| lower.starts_with(function))
        && lower.ends_with(')')
    {
        return true;
    }
    parse_css_color(value).is_some()
}

/// Whether `value` is a color literal or one of [`COLOR_KEYWORDS`].
pub fn is_color_or_keyword(value: &str) -> bool {
    COLOR_KEYWORDS.contains(&value) || is_color(value)
}
