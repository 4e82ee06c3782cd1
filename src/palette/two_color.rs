use serde::{Serialize, Deserialize};

use crate::{color::Color, error::PaletteError, wave::triangle};
use super::{Palette, SEGMENT_LENGTH};

/// Fades from `start` to `end` and back over one wave length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from="self::_serde::TwoColorSource", into="self::_serde::TwoColorSource")]
pub struct TwoColorPalette {
    start: Color,
    end: Color,
    wave_length: f64,
}

impl TwoColorPalette {
    pub fn new(start: Color, end: Color) -> Self {
        TwoColorPalette { start, end, wave_length: SEGMENT_LENGTH }
    }

    pub fn with_wave_length(
        start: Color, end: Color, wave_length: f64
    ) -> Result<TwoColorPalette, PaletteError> {
        if !wave_length.is_finite() || wave_length <= 0. {
            return Err(PaletteError::WaveLength(wave_length))
        }

        Ok(TwoColorPalette { start, end, wave_length })
    }

    pub fn start(&self) -> Color {
        self.start
    }

    pub fn end(&self) -> Color {
        self.end
    }
}

impl Palette for TwoColorPalette {
    fn color(&self, n: f64) -> Color {
        Color::lerp(self.start, self.end, triangle(n, self.wave_length))
    }

    fn wave_length(&self) -> f64 {
        self.wave_length
    }

    fn scale_modifier(&self) -> f64 {
        40.
    }
}

impl Default for TwoColorPalette {
    fn default() -> Self {
        TwoColorPalette::new(Color::WHITE, Color::BLACK)
    }
}

mod _serde {
    use super::*;

    const fn default_start() -> Color {
        Color::WHITE
    }

    const fn default_end() -> Color {
        Color::BLACK
    }

    const fn default_wave_length() -> f64 {
        SEGMENT_LENGTH
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename="TwoColorPalette")]
    pub struct TwoColorSource {
        #[serde(default="default_start")]
        start: Color,
        #[serde(default="default_end")]
        end: Color,
        #[serde(default="default_wave_length")]
        wave_length: f64,
    }

    impl TryFrom<TwoColorSource> for TwoColorPalette {
        type Error = PaletteError;

        fn try_from(src: TwoColorSource) -> Result<Self, Self::Error> {
            TwoColorPalette::with_wave_length(src.start, src.end, src.wave_length)
        }
    }

    impl From<TwoColorPalette> for TwoColorSource {
        fn from(palette: TwoColorPalette) -> Self {
            TwoColorSource {
                start: palette.start,
                end: palette.end,
                wave_length: palette.wave_length,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let palette = TwoColorPalette::default();
        assert_eq!(palette.start(), Color::WHITE);
        assert_eq!(palette.end(), Color::BLACK);
        assert_eq!(palette.wave_length(), 256.);
        assert_eq!(palette.scale_modifier(), 40.);
    }

    #[test]
    fn endpoints() {
        let palette = TwoColorPalette::default();
        assert_eq!(palette.color(0.), Color::WHITE);
        assert_eq!(palette.color(128.), Color::BLACK);
        assert_eq!(palette.color(256.), Color::WHITE);
        assert_eq!(palette.color(-128.), Color::BLACK);
    }

    #[test]
    fn midpoints_round() {
        let palette = TwoColorPalette::default();
        // t = 0.5: 255 * 0.5 = 127.5
        assert_eq!(palette.color(64.), Color::rgb(128, 128, 128));
        assert_eq!(palette.color(192.), Color::rgb(128, 128, 128));
    }

    #[test]
    fn output_is_opaque() {
        let palette = TwoColorPalette::new(Color::rgba(10, 20, 30, 0), Color::rgba(0, 0, 0, 0));
        assert_eq!(palette.color(0.), Color::rgb(10, 20, 30));
    }

    #[test]
    fn custom_wave_length() {
        let palette = TwoColorPalette::with_wave_length(
            Color::rgb(0, 0, 0), Color::rgb(200, 100, 50), 10.
        ).unwrap();
        assert_eq!(palette.color(5.), Color::rgb(200, 100, 50));
        assert_eq!(palette.color(2.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn rejects_bad_wave_length() {
        for wl in [0., -1., f64::INFINITY, f64::NAN] {
            assert!(TwoColorPalette::with_wave_length(Color::WHITE, Color::BLACK, wl).is_err());
        }
    }

    #[test]
    fn deserialize_with_defaults() {
        let palette: TwoColorPalette = serde_json::from_str(r##"{ "end": "#ff0000" }"##).unwrap();
        assert_eq!(palette.start(), Color::WHITE);
        assert_eq!(palette.end(), Color::rgb(255, 0, 0));
        assert_eq!(palette.wave_length(), 256.);

        assert!(serde_json::from_str::<TwoColorPalette>(r#"{ "wave_length": 0 }"#).is_err());
    }
}
