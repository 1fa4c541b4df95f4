use preset_color::ColorFormat;
use preset_values_units::DEFAULT_SIZING;

/// Configuration every resolver reads: the spacing multiplier and the color
/// syntax whose values accept an alpha modifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveContext {
    pub sizing: f64,
    pub color_format: ColorFormat,
}

impl ResolveContext {
    pub const fn new(sizing: f64, color_format: ColorFormat) -> Self {
        Self {
            sizing,
            color_format,
        }
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self::new(DEFAULT_SIZING, ColorFormat::default())
    }
}
