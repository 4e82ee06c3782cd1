use serde::{Serialize, Deserialize};

use crate::{color::Color, error::PaletteError, wave::triangle};
use super::{Palette, SEGMENT_LENGTH};

pub const RAINBOW: [Color; 7] = [
    Color::rgb(255, 0, 0),
    Color::rgb(255, 127, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 255, 255),
    Color::rgb(0, 0, 255),
    Color::rgb(139, 0, 255),
];

/// Cyclic gradient through a list of anchor colors.
///
/// Each pair of neighbouring anchors gets one segment of the wave, with the last anchor
/// blending back into the first. The triangle wave runs the gradient forwards over the
/// first half of a wave length and backwards over the second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from="self::_serde::MultiColorSource", into="self::_serde::MultiColorSource")]
pub struct MultiColorPalette {
    colors: Vec<Color>,
}

impl MultiColorPalette {
    pub fn new(colors: impl IntoIterator<Item=Color>) -> Result<MultiColorPalette, PaletteError> {
        let colors: Vec<Color> = colors.into_iter().collect();

        if colors.is_empty() {
            return Err(PaletteError::NoColors)
        }

        Ok(MultiColorPalette { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Palette for MultiColorPalette {
    fn color(&self, n: f64) -> Color {
        let count = self.colors.len();
        let scaled = triangle(n, self.wave_length()) * count as f64;
        let floor = scaled.floor();

        // scaled == count at the peak of the wave, which wraps back to the first anchor
        let i = floor as usize % count;
        let next = (i + 1) % count;

        Color::lerp(self.colors[i], self.colors[next], scaled - floor)
    }

    fn wave_length(&self) -> f64 {
        self.colors.len() as f64 * SEGMENT_LENGTH
    }

    fn scale_modifier(&self) -> f64 {
        68.
    }
}

impl Default for MultiColorPalette {
    fn default() -> Self {
        MultiColorPalette { colors: RAINBOW.to_vec() }
    }
}

mod _serde {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename="MultiColorPalette")]
    pub struct MultiColorSource {
        colors: Vec<Color>,
    }

    impl TryFrom<MultiColorSource> for MultiColorPalette {
        type Error = PaletteError;

        fn try_from(src: MultiColorSource) -> Result<Self, Self::Error> {
            MultiColorPalette::new(src.colors)
        }
    }

    impl From<MultiColorPalette> for MultiColorSource {
        fn from(palette: MultiColorPalette) -> Self {
            MultiColorSource { colors: palette.colors }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let palette = MultiColorPalette::default();
        assert_eq!(palette.colors().len(), 7);
        assert_eq!(palette.colors()[6], Color::rgb(139, 0, 255));
        assert_eq!(palette.wave_length(), 1792.);
        assert_eq!(palette.scale_modifier(), 68.);
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(MultiColorPalette::new(Vec::new()), Err(PaletteError::NoColors));
        assert!(serde_json::from_str::<MultiColorPalette>(r#"{ "colors": [] }"#).is_err());
    }

    #[test]
    fn wraps_over_full_period() {
        let palette = MultiColorPalette::default();
        assert_eq!(palette.color(0.), RAINBOW[0]);
        assert_eq!(palette.color(palette.wave_length()), palette.color(0.));
        assert_eq!(palette.color(-palette.wave_length()), palette.color(0.));
    }

    #[test]
    fn visits_anchors_in_order() {
        // the rising edge passes anchor i at phase i / 3
        let palette = MultiColorPalette::new([
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(0, 0, 255),
        ]).unwrap();
        let wl = palette.wave_length();
        assert_eq!(palette.color(wl / 6.), Color::rgb(0, 255, 0));
        assert_eq!(palette.color(wl / 3.), Color::rgb(0, 0, 255));
        // the peak blends the last anchor back into the first
        assert_eq!(palette.color(wl / 2.), Color::rgb(255, 0, 0));
        assert_eq!(palette.color(wl / 24.), Color::rgb(191, 64, 0));
    }

    #[test]
    fn single_anchor_is_constant() {
        let orange = Color::rgb(255, 127, 0);
        let palette = MultiColorPalette::new([orange]).unwrap();
        for n in [0., 1., 64.5, 128., 200., -3., 1e9] {
            assert_eq!(palette.color(n), orange);
        }
    }

    #[test]
    fn output_is_opaque() {
        let palette = MultiColorPalette::new([Color::rgba(1, 2, 3, 4)]).unwrap();
        assert_eq!(palette.color(10.).alpha, 255);
    }
}
