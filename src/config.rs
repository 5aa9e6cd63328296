use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::figma::ImageFormat;

/// Options for a single conversion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ConversionOptions {
    /// Width of the `.figma-container`; defaults to the root node's width.
    pub container_width: Option<f64>,
    /// Height of the `.figma-container`; defaults to the root node's height.
    pub container_height: Option<f64>,
    /// Multiplier for pixel output (container size and fixed-mode element sizes).
    pub scale_factor: f64,
    /// Express widths/heights as percentages of the root instead of pixels.
    pub enable_responsive: bool,
    pub preserve_text_effects: bool,
    /// Reserved; accepted and carried but has no effect on the output yet.
    pub optimize_output: bool,
    /// Decimal places for formatted geometry.
    pub precision: usize,
    /// Deepest node nesting accepted before the conversion fails.
    pub max_depth: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            container_width: None,
            container_height: None,
            scale_factor: 1.0,
            enable_responsive: true,
            preserve_text_effects: true,
            optimize_output: true,
            precision: 4,
            max_depth: 256,
        }
    }
}

/// Settings for the Figma REST collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FigmaSettings {
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Export scale requested for image fills.
    pub image_scale: f32,
    pub image_format: ImageFormat,
    /// Node ids per images request; batches are fetched concurrently.
    pub image_batch_size: usize,
}

impl Default for FigmaSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            image_scale: 2.0,
            image_format: ImageFormat::Png,
            image_batch_size: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub conversion: ConversionOptions,
    pub figma: FigmaSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

impl Config {
    /// Location of the per-user config file, if a home directory is known.
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(".config").join("f2h").join("config.toml"))
    }

    /// Load config from an explicit path, the central config file, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::central_config_path() {
            Some(central) if central.is_file() => Self::from_file(&central),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.conversion.validate()?;
        if self.figma.image_scale <= 0.0 || self.figma.image_scale > 4.0 {
            return Err(ConfigError::Invalid(format!(
                "figma.image_scale must be in (0, 4], got {}",
                self.figma.image_scale
            )));
        }
        if self.figma.image_batch_size == 0 {
            return Err(ConfigError::Invalid(
                "figma.image_batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl ConversionOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "conversion.scale_factor must be greater than zero, got {}",
                self.scale_factor
            )));
        }
        if self.precision > 10 {
            return Err(ConfigError::Invalid(format!(
                "conversion.precision must be at most 10, got {}",
                self.precision
            )));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "conversion.max_depth must be at least 1".to_string(),
            ));
        }
        for (label, value) in [
            ("container_width", self.container_width),
            ("container_height", self.container_height),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "conversion.{label} must be greater than zero, got {v}"
                    )));
                }
            }
        }
        Ok(())
    }
}
