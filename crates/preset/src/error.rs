use preset_palette::PaletteError;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while loading configuration or assembling a preset.
#[derive(Debug)]
pub enum PresetError {
    /// The configuration file could not be read.
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// The configuration is not valid JSON for [`crate::Config`].
    Json(serde_json::Error),
    /// `sizing` must be a finite positive multiplier.
    InvalidSizing(f64),
    /// Every adjustment factor must be a finite positive divisor.
    InvalidAdjustments,
    Palette(PaletteError),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config '{}': {source}", path.display())
            }
            Self::Json(source) => write!(f, "invalid config: {source}"),
            Self::InvalidSizing(sizing) => {
                write!(f, "sizing must be finite and positive, got {sizing}")
            }
            Self::InvalidAdjustments => write!(f, "adjustment factors must be finite and positive"),
            Self::Palette(source) => write!(f, "{source}"),
        }
    }
}

impl Error for PresetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(source) => Some(source),
            Self::Palette(source) => Some(source),
            Self::InvalidSizing(_) | Self::InvalidAdjustments => None,
        }
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source)
    }
}

impl From<PaletteError> for PresetError {
    fn from(source: PaletteError) -> Self {
        Self::Palette(source)
    }
}
