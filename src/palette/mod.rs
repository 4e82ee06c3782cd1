use serde::{Serialize, Deserialize};

use wavecolor_macro::palette_kind;

use super::color::Color;

mod two_color;
pub use two_color::*;

mod multi_color;
pub use multi_color::*;

mod cosine;
pub use cosine::*;

/// Wave length of a single gradient segment.
pub const SEGMENT_LENGTH: f64 = 256.;

/// A strategy mapping a scalar sample point to a color.
pub trait Palette {
    fn color(&self, n: f64) -> Color;

    /// Period of the triangle wave, or `f64::INFINITY` if inputs are used unwrapped.
    fn wave_length(&self) -> f64;

    /// Hint for how callers should scale their coordinates before sampling.
    fn scale_modifier(&self) -> f64;

    fn is_periodic(&self) -> bool {
        self.wave_length().is_finite()
    }

    /// Samples at `x * scale_modifier()`.
    fn scaled_color(&self, x: f64) -> Color {
        self.color(x * self.scale_modifier())
    }
}

/// One of the known palette strategies, tagged by [`PaletteKind`].
#[palette_kind(PaletteKind)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteVariant {
    Cosine(CosinePalette),
    TwoColor(TwoColorPalette),
    MultiColor(MultiColorPalette),
}

impl Default for PaletteKind {
    fn default() -> Self {
        PaletteKind::Cosine
    }
}

impl PaletteVariant {
    pub fn default_for(kind: PaletteKind) -> Self {
        match kind {
            PaletteKind::Cosine => CosinePalette::default().into(),
            PaletteKind::TwoColor => TwoColorPalette::default().into(),
            PaletteKind::MultiColor => MultiColorPalette::default().into(),
        }
    }
}

impl Palette for PaletteVariant {
    fn color(&self, n: f64) -> Color {
        match self {
            PaletteVariant::Cosine(p) => p.color(n),
            PaletteVariant::TwoColor(p) => p.color(n),
            PaletteVariant::MultiColor(p) => p.color(n),
        }
    }

    fn wave_length(&self) -> f64 {
        match self {
            PaletteVariant::Cosine(p) => p.wave_length(),
            PaletteVariant::TwoColor(p) => p.wave_length(),
            PaletteVariant::MultiColor(p) => p.wave_length(),
        }
    }

    fn scale_modifier(&self) -> f64 {
        match self {
            PaletteVariant::Cosine(p) => p.scale_modifier(),
            PaletteVariant::TwoColor(p) => p.scale_modifier(),
            PaletteVariant::MultiColor(p) => p.scale_modifier(),
        }
    }
}

impl From<CosinePalette> for PaletteVariant {
    fn from(p: CosinePalette) -> Self {
        PaletteVariant::Cosine(p)
    }
}

impl From<TwoColorPalette> for PaletteVariant {
    fn from(p: TwoColorPalette) -> Self {
        PaletteVariant::TwoColor(p)
    }
}

impl From<MultiColorPalette> for PaletteVariant {
    fn from(p: MultiColorPalette) -> Self {
        PaletteVariant::MultiColor(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        for kind in PaletteKind::ALL {
            assert_eq!(PaletteVariant::default_for(kind).kind(), kind);
        }
    }

    #[test]
    fn kind_names_round_trip() {
        assert_eq!(PaletteKind::TwoColor.to_string(), "two_color");
        assert_eq!("multi_color".parse::<PaletteKind>(), Ok(PaletteKind::MultiColor));
        assert!("rainbow".parse::<PaletteKind>().is_err());
        assert_eq!(serde_json::to_string(&PaletteKind::Cosine).unwrap(), r#""cosine""#);
    }

    #[test]
    fn variant_delegates() {
        let variant = PaletteVariant::default_for(PaletteKind::MultiColor);
        let palette = MultiColorPalette::default();
        assert_eq!(variant.wave_length(), palette.wave_length());
        assert_eq!(variant.scale_modifier(), 68.);
        assert_eq!(variant.color(300.), palette.color(300.));
    }

    #[test]
    fn scaled_color_applies_modifier() {
        let palette = TwoColorPalette::default();
        assert_eq!(palette.scaled_color(0.8), palette.color(32.));
        assert!(!CosinePalette::default().is_periodic());
        assert!(palette.is_periodic());
    }
}
