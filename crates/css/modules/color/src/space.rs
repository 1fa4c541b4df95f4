//! RGB and HSL triples and the conversions between them.
//! Spec: <https://www.w3.org/TR/css-color-4/#the-hsl-notation>

use csscolorparser::Color;

/// An opaque sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Space-separated `R G B` channel string, ready to wrap in `rgb(...)`.
    pub fn components(self) -> String {
        format!("{} {} {}", self.red, self.green, self.blue)
    }

    pub(crate) fn to_color(self) -> Color {
        Color::from_rgba8(self.red, self.green, self.blue, u8::MAX)
    }
}

/// A color in HSL: hue in degrees `[0, 360)`, saturation and lightness in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Parse `#rgb`, `#rrggbb` (with or without the `#`) into channels.
///
/// Alpha digits in `#rgba`/`#rrggbbaa` forms are accepted and dropped.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.trim().trim_start_matches('#');
    if !matches!(digits.len(), 3 | 4 | 6 | 8)
        || !digits.bytes().all(|byte| byte.is_ascii_hexdigit())
    {
        return None;
    }
    let parsed: Color = format!("#{digits}").parse().ok()?;
    let [red, green, blue, _alpha] = parsed.to_rgba8();
    Some(Rgb::new(red, green, blue))
}

/// Convert channels to HSL. Achromatic colors get hue `0`.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [hue, saturation, lightness, _alpha] = rgb.to_color().to_hsla();
    let hue = if hue.is_finite() {
        hue.rem_euclid(360.0)
    } else {
        0.0
    };
    Hsl::new(hue, saturation * 100.0, lightness * 100.0)
}

/// Convert HSL back to 8-bit channels, rounding each channel.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let color = Color::from_hsla(
        hsl.hue,
        (hsl.saturation / 100.0).clamp(0.0, 1.0),
        (hsl.lightness / 100.0).clamp(0.0, 1.0),
        1.0,
    );
    let [red, green, blue, _alpha] = color.to_rgba8();
    Rgb::new(red, green, blue)
}
