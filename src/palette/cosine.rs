use std::f64::consts::TAU;
use serde::{Serialize, Deserialize};

use crate::{color::{Color, to_channel}, error::PaletteError};
use super::Palette;

/// Drives each channel with its own cosine oscillator.
///
/// A channel with term `k` repeats every `k` units of input. Inputs are never wrapped, so the
/// palette reports an infinite wave length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from="self::_serde::CosineSource", into="self::_serde::CosineSource")]
pub struct CosinePalette {
    r_term: f64,
    g_term: f64,
    b_term: f64,
}

fn oscillate(n: f64, term: f64) -> u8 {
    to_channel(128. * (TAU / term * n).cos() + 128.)
}

fn check_term(term: f64) -> Result<f64, PaletteError> {
    if term.is_finite() && term != 0. {
        Ok(term)
    } else {
        Err(PaletteError::Term(term))
    }
}

impl CosinePalette {
    pub fn new(r_term: f64, g_term: f64, b_term: f64) -> Result<CosinePalette, PaletteError> {
        Ok(CosinePalette {
            r_term: check_term(r_term)?,
            g_term: check_term(g_term)?,
            b_term: check_term(b_term)?,
        })
    }

    pub fn terms(&self) -> [f64; 3] {
        [self.r_term, self.g_term, self.b_term]
    }
}

impl Palette for CosinePalette {
    fn color(&self, n: f64) -> Color {
        Color::rgb(
            oscillate(n, self.r_term),
            oscillate(n, self.g_term),
            oscillate(n, self.b_term),
        )
    }

    fn wave_length(&self) -> f64 {
        f64::INFINITY
    }

    fn scale_modifier(&self) -> f64 {
        1.
    }
}

impl Default for CosinePalette {
    fn default() -> Self {
        CosinePalette { r_term: 11., g_term: 17., b_term: 13. }
    }
}

mod _serde {
    use super::*;

    const fn default_r() -> f64 { 11. }
    const fn default_g() -> f64 { 17. }
    const fn default_b() -> f64 { 13. }

    #[derive(Serialize, Deserialize)]
    #[serde(rename="CosinePalette")]
    pub struct CosineSource {
        #[serde(default="default_r")]
        r_term: f64,
        #[serde(default="default_g")]
        g_term: f64,
        #[serde(default="default_b")]
        b_term: f64,
    }

    impl TryFrom<CosineSource> for CosinePalette {
        type Error = PaletteError;

        fn try_from(src: CosineSource) -> Result<Self, Self::Error> {
            CosinePalette::new(src.r_term, src.g_term, src.b_term)
        }
    }

    impl From<CosinePalette> for CosineSource {
        fn from(palette: CosinePalette) -> Self {
            CosineSource {
                r_term: palette.r_term,
                g_term: palette.g_term,
                b_term: palette.b_term,
            }
        }
    }
}
