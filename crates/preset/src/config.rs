//! User configuration: sizing scale, colors, color syntax, shade factors.

use crate::PresetError;
use log::{debug, warn};
use preset_color::ColorFormat;
use preset_palette::{AdjustmentFactors, ColorInput, DEFAULT_COLORS};
use preset_values_units::DEFAULT_SIZING;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Preset configuration; every field is optional in JSON.
///
/// ```json
/// { "sizing": 0.25, "colors": { "brand": "#3b82f6" }, "colorFormat": "rgb" }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Spacing multiplier: `p-4` is `4 * sizing` rem.
    pub sizing: f64,
    /// Extra palette colors; a default color name replaces its ramp.
    pub colors: ColorInput,
    #[serde(alias = "colorVariant")]
    pub color_format: ColorFormat,
    pub adjustments: AdjustmentFactors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizing: DEFAULT_SIZING,
            colors: ColorInput::new(),
            color_format: ColorFormat::default(),
            adjustments: AdjustmentFactors::default(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    /// Returns an error when the JSON is malformed or a numeric field is out of range.
    pub fn from_json_str(text: &str) -> Result<Self, PresetError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or fails [`Config::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, PresetError> {
        debug!("[CONFIG] loading {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Reject values the resolvers and the shade generator cannot work with.
    ///
    /// # Errors
    /// Returns [`PresetError::InvalidSizing`] or [`PresetError::InvalidAdjustments`].
    pub fn validate(&self) -> Result<(), PresetError> {
        if !self.sizing.is_finite() || self.sizing <= 0.0 {
            return Err(PresetError::InvalidSizing(self.sizing));
        }
        if !self.adjustments.is_valid() {
            return Err(PresetError::InvalidAdjustments);
        }
        for (name, _hex) in self.colors.iter() {
            if DEFAULT_COLORS
                .iter()
                .any(|(default_name, _default_hex)| *default_name == name)
            {
                warn!("[CONFIG] color '{name}' replaces the built-in '{name}' ramp");
            }
        }
        Ok(())
    }
}
