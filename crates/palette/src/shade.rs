//! The per-step lightness/saturation adjustment.

use preset_color::{Hsl, hsl_to_rgb};
use serde::Deserialize;

/// Saturation below which a base color is treated as neutral for its whole ramp.
pub const NEUTRAL_SATURATION: f32 = 10.0;

/// Ordinal of the base step (`500`), which is emitted unchanged.
const BASE_ORDINAL: usize = 5;

/// Lightness ceiling on the lighter side of the ramp.
const MAX_LIGHTNESS: f32 = 98.0;

/// Saturation bounds for non-neutral colors.
const MIN_SATURATION: f32 = 10.0;
const MAX_SATURATION: f32 = 100.0;

/// One of the eleven canonical ramp steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeStep {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl ShadeStep {
    /// Every step, lightest first. This order is fixed.
    pub const ALL: [Self; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// Numeric label used in generated names (`50` … `950`).
    pub const fn label(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Position in [`ShadeStep::ALL`]; `5` is the base color.
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

/// Divisors controlling how fast lightness and saturation move per step.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdjustmentFactors {
    pub lighter_lightness: f32,
    pub lighter_saturation: f32,
    pub darker_lightness: f32,
    pub darker_saturation: f32,
}

impl Default for AdjustmentFactors {
    fn default() -> Self {
        Self {
            lighter_lightness: 4.5,
            lighter_saturation: 10.0,
            darker_lightness: 6.5,
            darker_saturation: 7.0,
        }
    }
}

impl AdjustmentFactors {
    /// # Panics
    /// Panics when any factor is not a finite positive number.
    pub fn new(
        lighter_lightness: f32,
        lighter_saturation: f32,
        darker_lightness: f32,
        darker_saturation: f32,
    ) -> Self {
        let factors = Self {
            lighter_lightness,
            lighter_saturation,
            darker_lightness,
            darker_saturation,
        };
        assert!(
            factors.is_valid(),
            "adjustment factors must be finite and positive: {factors:?}"
        );
        factors
    }

    /// Whether every factor is a finite, strictly positive divisor.
    pub fn is_valid(&self) -> bool {
        [
            self.lighter_lightness,
            self.lighter_saturation,
            self.darker_lightness,
            self.darker_saturation,
        ]
        .iter()
        .all(|factor| factor.is_finite() && *factor > 0.0)
    }
}

/// Move `hsl` to the ramp position `ordinal` (0–10, 5 is the base).
///
/// Lighter steps raise lightness toward 98 and, unless `is_neutral`, lower
/// saturation with a floor of 10. Darker steps scale lightness down with no
/// floor and, unless `is_neutral`, raise saturation toward 100. Hue never
/// changes, and ordinal 5 returns the input unchanged.
///
/// # Panics
/// Panics when `factors` holds a zero, negative or non-finite divisor.
#[expect(
    clippy::suboptimal_flops,
    reason = "mul_add rounds differently and shifts the emitted channels"
)]
pub fn adjust_shade(
    hsl: Hsl,
    ordinal: usize,
    is_neutral: bool,
    factors: &AdjustmentFactors,
) -> Hsl {
    debug_assert!(ordinal <= 10, "shade ordinal out of range: {ordinal}");
    assert!(
        factors.is_valid(),
        "adjustment factors must be finite and positive: {factors:?}"
    );
    let Hsl {
        hue,
        mut saturation,
        mut lightness,
    } = hsl;
    if ordinal < BASE_ORDINAL {
        let distance = (BASE_ORDINAL - ordinal) as f32;
        let lift = distance / factors.lighter_lightness;
        let lifted = lightness + (MAX_LIGHTNESS - lightness) * lift;
        lightness = lifted.min(MAX_LIGHTNESS);
        if !is_neutral {
            let fade = distance / factors.lighter_saturation;
            let faded = saturation - saturation * fade;
            saturation = faded.max(MIN_SATURATION);
        }
    } else if ordinal > BASE_ORDINAL {
        let distance = (ordinal - BASE_ORDINAL) as f32;
        // Unclamped: with the shipped factors lightness stays above zero.
        lightness *= 1.0 - distance / factors.darker_lightness;
        if !is_neutral {
            let deepen = distance / factors.darker_saturation;
            let deepened = saturation + (MAX_SATURATION - saturation) * deepen;
            saturation = deepened.min(MAX_SATURATION);
        }
    }
    Hsl::new(hue, saturation, lightness)
}

/// Render an adjusted color as an `R G B` channel string.
pub fn format_shade(hsl: Hsl) -> String {
    hsl_to_rgb(hsl).components()
}
