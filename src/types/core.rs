//! Core types used throughout the f2h library.
//!
//! This module contains the fundamental data structures:
//! - [`InputKind`] - Input type classification
//! - [`Bounds`] - Element positioning in design-document coordinates

use serde::{Deserialize, Serialize};

pub use crate::container::ContainerSize;

/// Classification of an input resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Figma design URL fetched through the REST API
    Figma,
    /// Local JSON export of a node, file, or nodes response
    Json,
}

/// Rectangle bounds for a node, in the source document's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the box can act as a percentage denominator.
    pub fn has_extent(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
