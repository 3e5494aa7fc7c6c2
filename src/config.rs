//! Interpreter configuration.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.
//!
//! ```yaml
//! canvas:
//!   width: 1024
//!   height: 768
//!   background: [255, 255, 255]
//!   pen: [0, 0, 0]
//! output:
//!   directory: renders
//! ```

#[cfg(feature = "config")]
use crate::error::{Error, Result};
use crate::color::Rgba;
use crate::scene::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "config")]
use std::path::Path;
use std::path::PathBuf;

/// Canvas settings applied when the interpreter starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct CanvasConfig {
    /// Initial width in pixels.
    #[cfg_attr(feature = "config", serde(default = "default_width"))]
    pub width: u32,

    /// Initial height in pixels.
    #[cfg_attr(feature = "config", serde(default = "default_height"))]
    pub height: u32,

    /// Background RGB color.
    #[cfg_attr(feature = "config", serde(default = "default_background"))]
    pub background: [u8; 3],

    /// Initial pen RGB color.
    #[cfg_attr(feature = "config", serde(default = "default_pen"))]
    pub pen: [u8; 3],
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}
fn default_height() -> u32 {
    DEFAULT_HEIGHT
}
fn default_background() -> [u8; 3] {
    Rgba::WHITE.to_rgb()
}
fn default_pen() -> [u8; 3] {
    Rgba::BLACK.to_rgb()
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            pen: default_pen(),
        }
    }
}

/// Where saved images go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct OutputConfig {
    /// Directory `saveCanvas` writes into; the working directory when unset.
    #[cfg_attr(feature = "config", serde(default))]
    pub directory: Option<PathBuf>,
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct Config {
    /// Canvas settings.
    #[cfg_attr(feature = "config", serde(default))]
    pub canvas: CanvasConfig,

    /// Output settings.
    #[cfg_attr(feature = "config", serde(default))]
    pub output: OutputConfig,
}

impl Config {
    /// Output directory, falling back to the current directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(feature = "config")]
impl Config {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration from file, or returns defaults if not found.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::ConfigNotFound(_)) => Self::default(),
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
