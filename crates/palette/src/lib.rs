//! Tonal shade ramps (50–950) derived from a single base color.
//!
//! [`adjust_shade`] moves one HSL color up or down the ramp, and
//! [`generate_colors`] walks the eleven steps for every configured color and
//! renders the result as CSS variables, a class string, or a name→value map.
//! [`color_library`] wraps those ramps into `values` entries for the resolver.

#![forbid(unsafe_code)]

mod builder;
mod input;
mod library;
mod shade;

pub use builder::{OutputMode, Palette, PaletteEntry, PaletteMap, PaletteOptions, generate_colors};
pub use input::ColorInput;
pub use library::{DEFAULT_COLORS, color_library};
pub use preset_color::{Hsl, Rgb};
pub use shade::{AdjustmentFactors, NEUTRAL_SATURATION, ShadeStep, adjust_shade, format_shade};

use std::error::Error;
use std::fmt;

/// Errors raised while building a palette from configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteError {
    /// A configured color is not a `#rgb`/`#rrggbb` hex string.
    InvalidHex { name: String, hex: String },
    /// An adjustment factor is zero, negative or not finite.
    InvalidFactors,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex { name, hex } => {
                write!(f, "color '{name}' has invalid hex value '{hex}'")
            }
            Self::InvalidFactors => f.write_str("adjustment factors must be finite and positive"),
        }
    }
}

impl Error for PaletteError {}
