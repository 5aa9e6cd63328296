//! Domain tree to HTML+CSS.
//!
//! [`convert`] validates the container, walks the tree once into
//! [`ProcessedElement`](crate::types::ProcessedElement) records (position and
//! style per node, measured against the root), and serializes them into a
//! single document with an embedded stylesheet.

mod assemble;
pub mod color;
mod document;
pub mod position;
pub mod style;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::config::ConversionOptions;
use crate::error::{F2hError, Result};
use crate::types::{Bounds, ContainerSize, DesignNode, NodeKind, ProcessedElement};

pub use assemble::sanitize_id;
pub use position::compute_position;
pub use style::{extract_styles, FontRegistry};

/// Result of one conversion pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub html: String,
    /// Font families in first-use order.
    pub used_fonts: Vec<String>,
    pub container: ContainerSize,
    pub element_count: usize,
    pub image_count: usize,
    /// Images rendered without a resolved URL.
    pub placeholder_count: usize,
}

/// Convert a classified tree into an HTML document plus summary data.
pub fn convert(root: &DesignNode, options: &ConversionOptions) -> Result<Conversion> {
    validate_options(options)?;
    let root_bounds = root_container(root)?;
    let container = container_size(root_bounds, options);

    let mut assembler = assemble::Assembler::new(options, root_bounds);
    let element = assembler.assemble(root, 0)?;
    let html = document::render_document(&element, container);

    let (image_count, placeholder_count) = count_images(root);
    log::debug!(
        "converted {} elements ({} images, {} placeholders) into {} bytes",
        root.subtree_len(),
        image_count,
        placeholder_count,
        html.len()
    );

    Ok(Conversion {
        html,
        used_fonts: assembler.fonts.used_fonts(),
        container,
        element_count: root.subtree_len(),
        image_count,
        placeholder_count,
    })
}

/// Convenience wrapper returning only the document.
pub fn convert_to_html(root: &DesignNode, options: &ConversionOptions) -> Result<String> {
    convert(root, options).map(|conversion| conversion.html)
}

/// Build the element tree without serializing it.
pub fn process_tree(root: &DesignNode, options: &ConversionOptions) -> Result<ProcessedElement> {
    validate_options(options)?;
    let root_bounds = root_container(root)?;
    assemble::Assembler::new(options, root_bounds).assemble(root, 0)
}

fn validate_options(options: &ConversionOptions) -> Result<()> {
    options
        .validate()
        .map_err(|err| F2hError::config(err.to_string()))
}

/// Root bounds, which denominate every percentage; zero extent is a config error.
fn root_container(root: &DesignNode) -> Result<Bounds> {
    let bounds = root.bounds();
    if !bounds.has_extent() {
        return Err(F2hError::config(format!(
            "root container has zero extent ({}x{}); percentage geometry needs a non-zero width and height",
            bounds.width, bounds.height
        )));
    }
    Ok(bounds)
}

/// Container size in output pixels: explicit dimensions or the root's, times the scale.
fn container_size(root: Bounds, options: &ConversionOptions) -> ContainerSize {
    let scale = options.scale_factor;
    ContainerSize {
        width: options.container_width.unwrap_or(root.width) * scale,
        height: options.container_height.unwrap_or(root.height) * scale,
    }
}

fn count_images(node: &DesignNode) -> (usize, usize) {
    let own = match &node.kind {
        NodeKind::Image(image) if image.image_url.is_empty() => (1, 1),
        NodeKind::Image(_) => (1, 0),
        _ => (0, 0),
    };
    node.children.iter().map(count_images).fold(own, |acc, c| (acc.0 + c.0, acc.1 + c.1))
}
