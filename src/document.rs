//! Local design documents exported from the Figma REST API.
//!
//! Accepted shapes: a bare node, a files response (`{"document": ...}`), or a
//! nodes response (`{"nodes": {"<id>": {"document": ...}}}`).

use std::path::Path;

use serde_json::Value;

use crate::error::{F2hError, Result};
use crate::figma::FigmaNodeData;

/// Read and parse a local document, optionally narrowing to one node.
pub fn load_raw_document(path: &Path, node_id: Option<&str>) -> Result<FigmaNodeData> {
    let raw = std::fs::read_to_string(path)?;
    parse_raw_document(&raw, node_id)
}

pub fn parse_raw_document(raw: &str, node_id: Option<&str>) -> Result<FigmaNodeData> {
    let value: Value = serde_json::from_str(raw)?;
    let root = unwrap_envelope(value, node_id)?;
    let root: FigmaNodeData = serde_json::from_value(root)?;

    match node_id {
        Some(id) if root.id != id => find_node(&root, id).cloned().ok_or_else(|| {
            F2hError::config(format!("node {id} not found in document"))
        }),
        _ => Ok(root),
    }
}

fn unwrap_envelope(mut value: Value, node_id: Option<&str>) -> Result<Value> {
    if let Some(nodes) = value.get_mut("nodes").and_then(Value::as_object_mut) {
        let key = match node_id {
            Some(id) if nodes.contains_key(id) => id.to_string(),
            _ => nodes
                .keys()
                .next()
                .cloned()
                .ok_or_else(|| F2hError::config("nodes response is empty"))?,
        };
        return nodes
            .remove(&key)
            .and_then(|mut wrapper| wrapper.get_mut("document").map(Value::take))
            .ok_or_else(|| F2hError::config(format!("node {key} has no document")));
    }

    if value.get("type").is_none() {
        if let Some(document) = value.get_mut("document") {
            return Ok(document.take());
        }
    }

    Ok(value)
}

/// Depth-first search for a node by id.
pub fn find_node<'a>(node: &'a FigmaNodeData, id: &str) -> Option<&'a FigmaNodeData> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_node(child, id))
}
