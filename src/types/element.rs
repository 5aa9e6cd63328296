//! Render-time intermediate records built by the assembler.

use indexmap::IndexMap;
use serde::Serialize;

/// CSS declarations in insertion order; the order is part of the output.
pub type StyleMap = IndexMap<String, String>;

/// Computed geometry for one element, already formatted as CSS values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPosition {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedElement {
    /// Sanitized, conversion-unique token used as the CSS selector class.
    pub id: String,
    pub tag: &'static str,
    pub content: String,
    pub styles: StyleMap,
    pub position: ElementPosition,
    pub classes: Vec<String>,
    /// Attributes on the wrapper `div`.
    pub attributes: IndexMap<String, String>,
    /// Attributes on the nested semantic tag.
    pub inner_attributes: IndexMap<String, String>,
    pub children: Vec<ProcessedElement>,
}

impl ProcessedElement {
    /// Pre-order traversal of this element and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a ProcessedElement)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
