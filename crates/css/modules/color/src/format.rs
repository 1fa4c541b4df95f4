//! Output color syntax selected by the preset configuration.

use crate::space::{Hsl, Rgb, rgb_to_hsl};
use serde::Deserialize;
use std::fmt;

/// Functional notation generated palette colors are written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Rgb,
    Hsl,
    #[default]
    Oklch,
}

impl ColorFormat {
    /// Function name of this syntax, e.g. `oklch`.
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        }
    }

    /// Whether `value` is written in this syntax and still has a free alpha slot:
    /// it starts with the function name, ends with `)` and has no `/`.
    pub fn accepts_alpha_slot(self, value: &str) -> bool {
        value.starts_with(self.function_name()) && value.ends_with(')') && !value.contains('/')
    }

    /// Render `rgb` in this syntax.
    pub fn wrap(self, rgb: Rgb) -> String {
        match self {
            Self::Rgb => format!("rgb({})", rgb.components()),
            Self::Hsl => {
                let Hsl {
                    hue,
                    saturation,
                    lightness,
                } = rgb_to_hsl(rgb);
                format!(
                    "hsl({} {}% {}%)",
                    round_to(hue, 1),
                    round_to(saturation, 1),
                    round_to(lightness, 1)
                )
            }
            Self::Oklch => {
                let [lightness, axis_a, axis_b, _alpha] = rgb.to_color().to_oklaba();
                let chroma = axis_a.hypot(axis_b);
                let hue = if chroma < 1e-4 {
                    0.0
                } else {
                    axis_b.atan2(axis_a).to_degrees().rem_euclid(360.0)
                };
                format!(
                    "oklch({}% {} {})",
                    round_to(lightness * 100.0, 1),
                    round_to(chroma, 3),
                    round_to(hue, 1)
                )
            }
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

/// Round to `places` decimals and drop trailing zeros.
fn round_to(number: f32, places: i32) -> String {
    let scale = 10f32.powi(places);
    let rounded = (number * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}
