//! Figma to HTML (f2h) Library
//!
//! Converts Figma design nodes into a single static HTML document whose
//! elements are absolutely positioned inside one container, with every style
//! collected into an embedded stylesheet.
//!
//! # Module Overview
//!
//! - [`figma`] - Figma REST client, raw API types, and node classification
//! - [`document`] - Local JSON exports of Figma nodes
//! - [`render`] - Position, style, tree assembly, and HTML serialization
//! - [`config`] - Conversion options and configuration file support
//! - [`types`] - Domain node tree and processed element records
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use f2h_lib::{classify, convert, document, ConversionOptions, ImageUrls};
//!
//! # fn example() -> f2h_lib::Result<()> {
//! let raw = document::load_raw_document("design.json".as_ref(), None)?;
//! let tree = classify(&raw, &ImageUrls::new());
//! let conversion = convert(&tree, &ConversionOptions::default())?;
//! println!("{}", conversion.html);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod container;
pub mod document;
pub mod error;
pub mod figma;
pub mod output;
pub mod render;
pub mod resource;
pub mod types;

pub use config::{Config, ConfigError, ConversionOptions, FigmaSettings};
pub use container::ContainerSize;
pub use error::{ErrorCategory, ErrorPayload, F2hError, Result};
pub use figma::{
    classify, collect_image_node_ids, figma_to_html, FigmaAuth, FigmaClient, FigmaConvertOptions,
    FigmaNodeData, ImageExportOptions, ImageFormat, ImageUrls, ProgressCallback,
};
pub use output::{
    ConvertOutput, ErrorOutput, F2hOutput, ImageIdsOutput, ResourceDescriptor, F2H_OUTPUT_VERSION,
};
pub use render::{
    compute_position, convert, convert_to_html, extract_styles, process_tree, Conversion,
    FontRegistry,
};
pub use resource::{parse_resource, FigmaInfo, ParsedResource, ResourceParseError};
pub use types::{DesignNode, InputKind, NodeKind, ProcessedElement};
