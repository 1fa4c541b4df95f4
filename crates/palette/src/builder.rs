//! Walks the shade steps for every configured color and renders the ramp.

use crate::shade::{AdjustmentFactors, NEUTRAL_SATURATION, ShadeStep, adjust_shade, format_shade};
use crate::{ColorInput, PaletteError};
use log::{debug, trace};
use preset_color::{Hsl, hex_to_rgb, rgb_to_hsl};
use std::vec;

/// Shape of the generated palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// One space-joined string of `[--name]-[R_G_B]` class fragments.
    ClassString,
    /// Newline-joined `--name: R G B;` declarations.
    #[default]
    CssVariables,
    /// Map of name → `R G B`.
    ValueAlias,
    /// Map of name → `var(--name)`.
    Reference,
}

impl OutputMode {
    /// Pick a mode from independent flags. Precedence: class string, CSS
    /// variables, value alias, then variable references.
    ///
    /// The alias-variable flag names the fallback and never overrides another flag.
    #[expect(
        clippy::fn_params_excessive_bools,
        reason = "mirrors the four independent configuration flags"
    )]
    pub const fn from_flags(
        is_css_var: bool,
        is_value_alias: bool,
        _is_alias_var: bool,
        is_class_string: bool,
    ) -> Self {
        if is_class_string {
            Self::ClassString
        } else if is_css_var {
            Self::CssVariables
        } else if is_value_alias {
            Self::ValueAlias
        } else {
            Self::Reference
        }
    }
}

/// Inputs of one [`generate_colors`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteOptions {
    pub colors: ColorInput,
    /// Walk the steps from 950 to 50 so the ramp inverts for dark themes.
    pub is_dark: bool,
    pub mode: OutputMode,
    /// Prepended to every generated name.
    pub prefix: String,
    pub factors: AdjustmentFactors,
}

impl PaletteOptions {
    pub fn new(colors: ColorInput) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn dark(mut self, is_dark: bool) -> Self {
        self.is_dark = is_dark;
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn factors(mut self, factors: AdjustmentFactors) -> Self {
        self.factors = factors;
        self
    }
}

/// One generated name and its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub value: String,
}

/// Generated names in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteMap {
    entries: Vec<PaletteEntry>,
}

impl PaletteMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, name: String, value: String) {
        let Some(existing) = self.entries.iter_mut().find(|entry| entry.name == name) else {
            self.entries.push(PaletteEntry { name, value });
            return;
        };
        existing.value = value;
    }
}

impl IntoIterator for PaletteMap {
    type Item = PaletteEntry;
    type IntoIter = vec::IntoIter<PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A generated palette in the shape chosen by [`OutputMode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Text(String),
    Map(PaletteMap),
}

impl Palette {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Map(_) => None,
        }
    }

    pub const fn as_map(&self) -> Option<&PaletteMap> {
        match self {
            Self::Text(_) => None,
            Self::Map(map) => Some(map),
        }
    }
}

/// Generate the 50–950 ramp for every color in `options.colors`.
///
/// Colors are processed in insertion order. Each base color is converted to
/// HSL and classified as neutral once, then every step is adjusted by its
/// position in the walk, so with `is_dark` step `950` receives the lightest
/// adjustment.
///
/// # Errors
/// Returns [`PaletteError::InvalidHex`] when a color is not a hex string, or
/// [`PaletteError::InvalidFactors`] when a factor is not a positive divisor.
pub fn generate_colors(options: &PaletteOptions) -> Result<Palette, PaletteError> {
    let prefix = options.prefix.as_str();
    let mut lines: Vec<String> = Vec::new();
    let mut map = PaletteMap::default();

    for (color_name, hex) in options.colors.iter() {
        for (step, hsl) in ramp(color_name, hex, options.is_dark, &options.factors)? {
            let value = format_shade(hsl);
            let name = format!("{prefix}{color_name}-{}", step.label());
            trace!("[PALETTE] {name} = {value}");
            match options.mode {
                OutputMode::ClassString => {
                    lines.push(format!("[--{name}]-[{}]", value.replace(' ', "_")));
                }
                OutputMode::CssVariables => lines.push(format!("--{name}: {value};")),
                OutputMode::ValueAlias => map.push(name, value),
                OutputMode::Reference => {
                    let reference = format!("var(--{name})");
                    map.push(name, reference);
                }
            }
        }
    }

    Ok(match options.mode {
        OutputMode::ClassString => Palette::Text(lines.join(" ")),
        OutputMode::CssVariables => Palette::Text(lines.join("\n")),
        OutputMode::ValueAlias | OutputMode::Reference => Palette::Map(map),
    })
}

/// Adjusted HSL for every step of one color, in walk order.
///
/// The base color is converted and classified as neutral once; each step is
/// then adjusted by its position in the walk, not by its label.
pub fn ramp(
    color_name: &str,
    hex: &str,
    is_dark: bool,
    factors: &AdjustmentFactors,
) -> Result<Vec<(ShadeStep, Hsl)>, PaletteError> {
    if !factors.is_valid() {
        return Err(PaletteError::InvalidFactors);
    }
    let rgb = hex_to_rgb(hex).ok_or_else(|| PaletteError::InvalidHex {
        name: color_name.to_owned(),
        hex: hex.to_owned(),
    })?;
    let hsl = rgb_to_hsl(rgb);
    let is_neutral = hsl.saturation < NEUTRAL_SATURATION;
    debug!(
        "[PALETTE] {color_name}: base {hex} hsl=({:.1}, {:.1}, {:.1}) neutral={is_neutral}",
        hsl.hue, hsl.saturation, hsl.lightness
    );
    let mut steps = ShadeStep::ALL;
    if is_dark {
        steps.reverse();
    }
    Ok(steps
        .into_iter()
        .enumerate()
        .map(|(ordinal, step)| (step, adjust_shade(hsl, ordinal, is_neutral, factors)))
        .collect())
}
