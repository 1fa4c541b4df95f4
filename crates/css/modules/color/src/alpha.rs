//! Alpha composition shared by every color-accepting utility.

use crate::{CURRENT_KEYWORD, ColorFormat};

/// Fallback unit for an opacity modifier without one.
const DEFAULT_ALPHA_UNIT: &str = "%";

/// Splice an opacity modifier into a color value.
///
/// When `value` is written in `format` with a free alpha slot, the modifier is
/// inserted before the closing parenthesis: `oklch(62% 0.2 259)` with `50`
/// becomes `oklch(62% 0.2 259 / 50%)`. Without a modifier the value is
/// returned as is. `current` renders as `currentColor`; any other value is
/// passed through untouched.
pub fn compose_alpha(
    value: &str,
    second_value: &str,
    second_unit: &str,
    format: ColorFormat,
) -> String {
    if value == CURRENT_KEYWORD {
        return "currentColor".to_owned();
    }
    if !format.accepts_alpha_slot(value) || second_value.is_empty() {
        return value.to_owned();
    }
    let body = value.strip_suffix(')').unwrap_or(value);
    let unit = if second_unit.is_empty() {
        DEFAULT_ALPHA_UNIT
    } else {
        second_unit
    };
    format!("{body} / {second_value}{unit})")
}
