//! Waveform-driven color palettes.
//!
//! A palette maps a scalar sample point (a pixel coordinate, an iteration count, a distance)
//! to a [`Color`]. The interpolating palettes run their input through a [`triangle`] wave
//! first, so colors cycle smoothly however large the input gets.
//!
//! ```
//! use wavecolor::{Palette, PaletteKind, PaletteRegistry};
//!
//! let mut registry = PaletteRegistry::new();
//! assert_eq!(registry.active().color(0.).to_string(), "#ffffff");
//!
//! registry.select(PaletteKind::MultiColor);
//! assert_eq!(registry.active().color(0.).to_string(), "#ff0000");
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod registry;
pub mod wave;

pub use color::Color;
pub use config::PaletteConfig;
pub use error::*;
pub use palette::*;
pub use registry::*;
pub use wave::triangle;
