use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("invalid hex color `{0}` (expected #rrggbb or #rrggbbaa)")]
    InvalidHex(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaletteError {
    #[error("at least one anchor color is required")]
    NoColors,
    #[error("wave length must be finite and positive, got {0}")]
    WaveLength(f64),
    #[error("oscillator term must be finite and non-zero, got {0}")]
    Term(f64),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse palette config\n{0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not parse palette config\n{0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("could not parse palette config\n{0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("failed to read config file\n{0}")]
    FileReadError(#[from] std::io::Error),
    #[error("config file does not have valid extension (must be .json, .ron or .yaml)")]
    ExtensionError,
    #[error("invalid palette, {0}")]
    PaletteError(#[from] PaletteError),
}
