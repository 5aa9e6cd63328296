//! Walk of the domain tree into [`ProcessedElement`] records.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::ConversionOptions;
use crate::error::{F2hError, Result};
use crate::types::{Bounds, DesignNode, ElementPosition, NodeKind, ProcessedElement, StyleMap};

use super::position::compute_position;
use super::style::{extract_styles, FontRegistry};

/// Per-conversion walk state: id allocation and the font accumulator.
pub(crate) struct Assembler<'a> {
    options: &'a ConversionOptions,
    container: Bounds,
    counter: usize,
    used_ids: HashSet<String>,
    pub(crate) fonts: FontRegistry,
}

impl<'a> Assembler<'a> {
    pub(crate) fn new(options: &'a ConversionOptions, container: Bounds) -> Self {
        Self {
            options,
            container,
            counter: 0,
            used_ids: HashSet::new(),
            fonts: FontRegistry::new(),
        }
    }

    pub(crate) fn assemble(&mut self, node: &DesignNode, depth: usize) -> Result<ProcessedElement> {
        if depth > self.options.max_depth {
            return Err(F2hError::render(format!(
                "node tree deeper than {} levels (at node {:?})",
                self.options.max_depth, node.id
            )));
        }
        self.counter += 1;

        let id = self.allocate_id(node);
        let mut styles = extract_styles(node, self.options, &mut self.fonts);
        let position = compute_position(node, self.container, self.options);
        append_position(&mut styles, &position);
        let (attributes, inner_attributes) = attributes_for(node);

        let children = node
            .children
            .iter()
            .map(|child| self.assemble(child, depth + 1))
            .collect::<Result<Vec<_>>>()?;

        Ok(ProcessedElement {
            id,
            tag: tag_for(node),
            content: node
                .as_text()
                .map(|text| text.characters.clone())
                .unwrap_or_default(),
            styles,
            position,
            classes: vec![sanitize_id(&format!(
                "figma-{}",
                node.type_name().to_lowercase()
            ))],
            attributes,
            inner_attributes,
            children,
        })
    }

    /// Sanitized `figma-{id}` token, suffixed `-2`, `-3`, ... on collision.
    fn allocate_id(&mut self, node: &DesignNode) -> String {
        let raw = if node.id.is_empty() {
            self.counter.to_string()
        } else {
            node.id.clone()
        };
        let base = sanitize_id(&format!("figma-{raw}"));

        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.used_ids.contains(&candidate) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        self.used_ids.insert(candidate.clone());
        candidate
    }
}

/// Replace every character outside `[a-zA-Z0-9_-]` with `-`.
pub fn sanitize_id(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn tag_for(node: &DesignNode) -> &'static str {
    match node.kind {
        NodeKind::Text(_) => "p",
        NodeKind::Image(_) => "img",
        NodeKind::Frame(_) | NodeKind::Generic { .. } => "div",
    }
}

/// Wrapper attributes and inner-tag attributes.
fn attributes_for(node: &DesignNode) -> (IndexMap<String, String>, IndexMap<String, String>) {
    let mut wrapper = IndexMap::new();
    let mut inner = IndexMap::new();

    if let NodeKind::Image(image) = &node.kind {
        let label = if node.name.is_empty() {
            "Image"
        } else {
            node.name.as_str()
        };
        if image.image_url.is_empty() {
            wrapper.insert("data-placeholder".to_string(), "true".to_string());
            inner.insert("alt".to_string(), format!("{label} (placeholder)"));
        } else {
            inner.insert("src".to_string(), image.image_url.clone());
            inner.insert("alt".to_string(), label.to_string());
        }
    }

    (wrapper, inner)
}

fn append_position(styles: &mut StyleMap, position: &ElementPosition) {
    styles.insert("left".to_string(), position.x.clone());
    styles.insert("top".to_string(), position.y.clone());
    styles.insert("width".to_string(), position.width.clone());
    styles.insert("height".to_string(), position.height.clone());
    if let Some(transform) = &position.transform {
        styles.insert("transform".to_string(), transform.clone());
    }
    if let Some(origin) = &position.transform_origin {
        styles.insert("transform-origin".to_string(), origin.clone());
    }
}
