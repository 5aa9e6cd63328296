//! Figma integration: raw API types, the REST client, and node classification.
//!
//! This module provides:
//! - [`FigmaClient`] - HTTP client for the Figma REST API
//! - [`classify`] - Raw API node to typed [`DesignNode`](crate::types::DesignNode)
//! - [`collect_image_node_ids`] - Ids to resolve as bitmaps before classification
//! - [`figma_to_html`] - Fetch, resolve images, classify and convert in one call
//! - API types for parsing Figma JSON responses

pub mod api_types;
pub mod client;
pub mod conversion;
pub mod pipeline;


pub use client::{FigmaAuth, FigmaClient, ImageExportOptions};
pub use conversion::{classify, collect_image_node_ids, ImageUrls};
pub use pipeline::{
    fetch_root, figma_to_html, resolve_image_urls, FigmaConvertOptions, ProgressCallback,
};

pub use api_types::{
    FigmaBoundingBox, FigmaColor, FigmaEffectData, FigmaFile, FigmaImageExport, FigmaNodeData,
    FigmaNodeWrapper, FigmaNodesResponse, FigmaPaintData, FigmaTypeStyle, FigmaVector,
    ImageFormat,
};
