//! Value helpers shared by the utility families.

use crate::{ResolveContext, Token};
use preset_color::{compose_alpha, is_color_or_keyword};
use preset_values_units::is_number;

/// Composite shadow referencing every shadow layer in paint order.
pub const BOX_SHADOW_STACK: &str = concat!(
    "var(--tui-inset-shadow), var(--tui-inset-ring-shadow), ",
    "var(--tui-ring-offset-shadow), var(--tui-shadow), var(--tui-ring-shadow)",
);

/// Keywords that mark a background position.
const POSITION_KEYWORDS: [&str; 5] = ["top", "bottom", "left", "right", "center"];

/// Whether the token value is a color literal or color keyword.
pub fn is_color_token(token: &Token<'_>) -> bool {
    is_color_or_keyword(token.value())
}

/// The token value as a color, with the opacity modifier spliced in.
pub fn color_value(token: &Token<'_>, context: &ResolveContext) -> String {
    compose_alpha(
        token.value(),
        token.second_value(),
        token.second_unit(),
        context.color_format,
    )
}

/// Line widths: empty means `1px`, bare numbers are pixels.
pub fn line_width(token: &Token<'_>) -> String {
    let joined = token.joined();
    if token.value().is_empty() {
        "1px".to_owned()
    } else if is_number(&joined) {
        format!("{}px", token.value())
    } else {
        joined
    }
}

/// Whether `text` contains a position keyword or a `<digits>%` / `<digits>px` run.
pub fn looks_like_position(text: &str) -> bool {
    if POSITION_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword))
    {
        return true;
    }
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(index, byte)| {
        byte.is_ascii_digit()
            && bytes
                .get(index + 1..)
                .is_some_and(|rest| rest.starts_with(b"%") || rest.starts_with(b"px"))
    })
}
