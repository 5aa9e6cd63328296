use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Explicit size of the `.figma-container` wrapper, overriding the root node's own size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Error)]
pub enum ContainerParseError {
    #[error("Invalid container format: expected WIDTHxHEIGHT (e.g., 1440x900)")]
    InvalidFormat,
    #[error("Invalid width: {0}")]
    InvalidWidth(String),
    #[error("Invalid height: {0}")]
    InvalidHeight(String),
    #[error("Width must be positive")]
    ZeroWidth,
    #[error("Height must be positive")]
    ZeroHeight,
}

impl FromStr for ContainerSize {
    type Err = ContainerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            return Err(ContainerParseError::InvalidFormat);
        }

        let width: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| ContainerParseError::InvalidWidth(parts[0].to_string()))?;

        let height: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| ContainerParseError::InvalidHeight(parts[1].to_string()))?;

        if !width.is_finite() || width <= 0.0 {
            return Err(ContainerParseError::ZeroWidth);
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(ContainerParseError::ZeroHeight);
        }

        Ok(ContainerSize { width, height })
    }
}

impl std::fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
