use std::{fmt, str::FromStr};
use num_traits::clamp;
use serde::{Serialize, Deserialize};

use super::error::ColorError;

/// An 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from="self::_serde::ColorSource", into="self::_serde::ColorSource")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    to_channel(a as f64 * (1. - t) + b as f64 * t)
}

/// Rounds to the nearest integer and clamps into `0..=255`.
pub(crate) fn to_channel(value: f64) -> u8 {
    clamp(value.round(), 0., 255.) as u8
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue, alpha: 255 }
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Color { red, green, blue, alpha }
    }

    /// Interpolates the color channels of `start` and `end`. The result is always opaque.
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        Color::rgb(
            lerp(start.red, end.red, t),
            lerp(start.green, end.green, t),
            lerp(start.blue, end.blue, t),
        )
    }

    /// Normalized `[r, g, b, a]` for a display surface.
    ///
    /// Alpha is always `1.0`, whatever the stored alpha.
    pub fn to_surface(&self) -> [f32; 4] {
        [
            self.red as f32 / 255.,
            self.green as f32 / 255.,
            self.blue as f32 / 255.,
            1.,
        ]
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == 255
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_owned());

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

mod _serde {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum ColorSource {
        Rgb([u8; 3]),
        Rgba([u8; 4]),
        Hex(String),
    }

    impl TryFrom<ColorSource> for Color {
        type Error = ColorError;

        fn try_from(src: ColorSource) -> Result<Self, Self::Error> {
            Ok(match src {
                ColorSource::Rgb([r, g, b]) => Color::rgb(r, g, b),
                ColorSource::Rgba([r, g, b, a]) => Color::rgba(r, g, b, a),
                ColorSource::Hex(hex) => hex.parse()?,
            })
        }
    }

    impl From<Color> for ColorSource {
        fn from(color: Color) -> Self {
            if color.is_opaque() {
                ColorSource::Rgb([color.red, color.green, color.blue])
            } else {
                ColorSource::Rgba([color.red, color.green, color.blue, color.alpha])
            }
        }
    }
}
