//! Palette ramps rendered as `values` entries in the configured color syntax.

use crate::builder::ramp;
use crate::{AdjustmentFactors, ColorInput, PaletteError, PaletteMap};
use log::debug;
use preset_color::{ColorFormat, hsl_to_rgb};

/// Base colors every preset ships with, keyed by name.
pub const DEFAULT_COLORS: [(&str, &str); 22] = [
    ("red", "#ef4444"),
    ("orange", "#f97316"),
    ("amber", "#f59e0b"),
    ("yellow", "#eab308"),
    ("lime", "#84cc16"),
    ("green", "#22c55e"),
    ("emerald", "#10b981"),
    ("teal", "#14b8a6"),
    ("cyan", "#06b6d4"),
    ("sky", "#0ea5e9"),
    ("blue", "#3b82f6"),
    ("indigo", "#6366f1"),
    ("violet", "#8b5cf6"),
    ("purple", "#a855f7"),
    ("fuchsia", "#d946ef"),
    ("pink", "#ec4899"),
    ("rose", "#f43f5e"),
    ("slate", "#64748b"),
    ("gray", "#6b7280"),
    ("zinc", "#71717a"),
    ("neutral", "#737373"),
    ("stone", "#78716c"),
];

/// Build `name-step` → color entries for [`DEFAULT_COLORS`] merged with `colors`.
///
/// Every shade is written in `format`, e.g. `blue-500` → `rgb(59 130 246)`.
/// A user color with a default name replaces the default ramp.
///
/// # Errors
/// Returns [`PaletteError::InvalidHex`] when a configured color is not a hex string.
pub fn color_library(
    colors: &ColorInput,
    format: ColorFormat,
    factors: &AdjustmentFactors,
) -> Result<PaletteMap, PaletteError> {
    let defaults: ColorInput = DEFAULT_COLORS.into_iter().collect();
    let merged = defaults.merged(colors);
    debug!(
        "[PALETTE] building {format} library for {} colors",
        merged.len()
    );
    let mut library = PaletteMap::default();
    for (color_name, hex) in merged.iter() {
        for (step, hsl) in ramp(color_name, hex, false, factors)? {
            library.push(
                format!("{color_name}-{}", step.label()),
                format.wrap(hsl_to_rgb(hsl)),
            );
        }
    }
    Ok(library)
}
