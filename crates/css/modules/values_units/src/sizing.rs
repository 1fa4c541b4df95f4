//! Spacing-scale arithmetic.
//!
//! Utility numbers are steps on a spacing scale: `4` with the default
//! multiplier of `0.25` becomes `1rem`.

use crate::{is_number, number_value};

/// Default multiplier applied to numeric sizing values.
pub const DEFAULT_SIZING: f64 = 0.25;

/// Render a number the way a stylesheet expects it: no trailing `.0`, no `-0`.
pub fn format_number(number: f64) -> String {
    if number == 0.0 {
        return "0".to_owned();
    }
    format!("{number}")
}

/// Scale `value + unit` on the spacing scale when it is a plain number.
///
/// Literal `0` stays unit-less; non-numeric input is returned as `value + unit`.
pub fn scale_sizing(value: &str, unit: &str, sizing: f64) -> String {
    if value == "0" && unit.is_empty() {
        return "0".to_owned();
    }
    let joined = format!("{value}{unit}");
    if is_number(&joined)
        && let Ok(number) = number_value(&joined)
    {
        return format!("{}rem", format_number(sizing * number));
    }
    joined
}
