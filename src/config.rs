use std::path::Path;
use log::info;
use serde::{Serialize, Deserialize};

use super::{
    error::*,
    palette::*,
    registry::PaletteRegistry,
};

/// Startup parameters for a [`PaletteRegistry`]. Missing sections use the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub selection: PaletteKind,
    pub cosine: CosinePalette,
    pub two_color: TwoColorPalette,
    pub multi_color: MultiColorPalette,
}

impl PaletteConfig {
    pub fn into_registry(self) -> PaletteRegistry {
        let mut registry = PaletteRegistry::with_palettes(
            self.cosine,
            self.two_color,
            self.multi_color,
        );
        registry.select(self.selection);
        registry
    }

    pub fn from_json(src: &str) -> serde_json::Result<PaletteConfig> {
        serde_json::from_str(src)
    }

    pub fn from_ron(src: &str) -> ron::error::SpannedResult<PaletteConfig> {
        ron::from_str(src)
    }

    pub fn from_yaml(src: &str) -> Result<PaletteConfig, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<PaletteConfig, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = match path.extension().ok_or(ConfigError::ExtensionError)?.to_str() {
            Some("json") => PaletteConfig::from_json(&contents)?,
            Some("ron") => PaletteConfig::from_ron(&contents)?,
            Some("yaml" | "yml") => PaletteConfig::from_yaml(&contents)?,
            _ => return Err(ConfigError::ExtensionError)
        };
        info!("loaded palette config from '{}'", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn empty_config_is_default() {
        let config = PaletteConfig::from_json("{}").unwrap();
        assert_eq!(config, PaletteConfig::default());
        assert_eq!(config.selection, PaletteKind::Cosine);
    }

    #[test]
    fn json_sections() {
        let config = PaletteConfig::from_json(r##"{
            "selection": "multi_color",
            "cosine": { "g_term": 5 },
            "multi_color": { "colors": ["#000000", [255, 255, 255]] }
        }"##).unwrap();

        assert_eq!(config.selection, PaletteKind::MultiColor);
        assert_eq!(config.cosine.terms(), [11., 5., 13.]);
        assert_eq!(config.multi_color.colors(), &[Color::BLACK, Color::WHITE]);
        assert_eq!(config.two_color, TwoColorPalette::default());
    }

    #[test]
    fn ron_sections() {
        let config = PaletteConfig::from_ron(r##"(
            selection: two_color,
            two_color: (start: "#ff0000", wave_length: 64.0),
        )"##).unwrap();

        assert_eq!(config.selection, PaletteKind::TwoColor);
        assert_eq!(config.two_color.start(), Color::rgb(255, 0, 0));
        assert_eq!(config.two_color.wave_length(), 64.);
    }

    #[test]
    fn yaml_sections() {
        let config = PaletteConfig::from_yaml(
            "selection: cosine\ncosine:\n  r_term: 3\n  b_term: 7\n"
        ).unwrap();

        assert_eq!(config.cosine.terms(), [3., 17., 7.]);
    }

    #[test]
    fn invalid_palettes_fail_to_load() {
        assert!(PaletteConfig::from_json(r#"{ "multi_color": { "colors": [] } }"#).is_err());
        assert!(PaletteConfig::from_json(r#"{ "cosine": { "r_term": 0 } }"#).is_err());
        assert!(PaletteConfig::from_json(r#"{ "selection": "rainbow" }"#).is_err());
    }

    #[test]
    fn into_registry_applies_selection() {
        let config = PaletteConfig {
            selection: PaletteKind::TwoColor,
            ..PaletteConfig::default()
        };
        let registry = config.into_registry();
        assert_eq!(registry.selection(), PaletteKind::TwoColor);
        assert_eq!(registry.active().color(128.), Color::BLACK);
    }
}
