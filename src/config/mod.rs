//! Configuration file support.
//!
//! Settings are read from `~/.config/drawing/config.toml`. They cover the
//! initial surface size and the colors given to shapes created by name.
//!
//! If no config file exists, defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{ShapeConfig, SurfaceConfig};

use crate::surface::image::MAX_DIMENSION;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 1024
/// height = 768
///
/// [shapes]
/// fill_color = "#FFFFFF"
/// border_color = "black"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Drawing surface dimensions
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Default colors for shapes
    #[serde(default)]
    pub shapes: ShapeConfig,
}

impl Config {
    /// Clamps surface dimensions to 1 - 16384, logging a warning for each fix.
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_DIMENSION).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 1-{} range",
                self.surface.width,
                MAX_DIMENSION
            );
            self.surface.width = self.surface.width.clamp(1, MAX_DIMENSION);
        }

        if !(1..=MAX_DIMENSION).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 1-{} range",
                self.surface.height,
                MAX_DIMENSION
            );
            self.surface.height = self.surface.height.clamp(1, MAX_DIMENSION);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("drawing");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.surface.width, 800);
        assert_eq!(config.shapes.fill(), WHITE);
        assert_eq!(config.shapes.border(), BLACK);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [surface]
            width = 1024

            [shapes]
            fill_color = [255, 0, 0]
            "#,
        )
        .unwrap();

        assert_eq!(config.surface.width, 1024);
        assert_eq!(config.surface.height, 600);
        assert_eq!(config.shapes.fill(), RED);
        assert_eq!(config.shapes.border(), BLACK);
    }

    #[test]
    fn load_from_clamps_dimensions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[surface]\nwidth = 0\nheight = 99999").unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.surface.width, 1);
        assert_eq!(config.surface.height, MAX_DIMENSION);
    }

    #[test]
    fn load_from_reports_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[surface\nwidth = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn config_path_ends_with_crate_directory() {
        if let Ok(path) = Config::get_config_path() {
            assert!(path.ends_with("drawing/config.toml"));
        }
    }
}
