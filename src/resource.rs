use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

use crate::types::InputKind;

#[derive(Debug, Clone)]
pub struct ParsedResource {
    pub kind: InputKind,
    pub value: String,
    pub figma_info: Option<FigmaInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigmaInfo {
    pub file_key: String,
    pub node_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResourceParseError {
    #[error("Invalid URL '{value}': {message}. Hint: include http(s):// and ensure the URL is well-formed.")]
    InvalidUrl { value: String, message: String },
    #[error("Figma URL missing file key in '{url}'. Hint: use https://www.figma.com/file/<FILE_KEY>/... and node-id if needed.")]
    FigmaMissingFileKey { url: String },
    #[error("Not a Figma URL: '{url}'. Hint: pass a figma.com file/design link or a local .json export.")]
    NotFigma { url: String },
    #[error("Local file not found: {path}. Hint: check the path relative to the current working directory or use an absolute path.")]
    FileNotFound { path: String },
    #[error("Unsupported file extension '{extension}'. Supported document extensions: {supported}.")]
    UnsupportedExtension {
        extension: String,
        supported: String,
    },
}

const DOCUMENT_EXTENSIONS: &[&str] = &["json"];

/// Path segments that precede the file key in Figma links.
const FILE_KEY_MARKERS: &[&str] = &["file", "design", "proto"];

pub fn parse_resource(
    value: &str,
    override_type: Option<InputKind>,
) -> Result<ParsedResource, ResourceParseError> {
    match override_type {
        Some(InputKind::Figma) => {
            let info = parse_figma_url(value)?;
            Ok(ParsedResource {
                kind: InputKind::Figma,
                value: value.to_string(),
                figma_info: Some(info),
            })
        }
        Some(InputKind::Json) => parse_local_resource(value, false),
        None if value.starts_with("http://") || value.starts_with("https://") => {
            parse_url_resource(value)
        }
        None => parse_local_resource(value, true),
    }
}

fn parse_url_resource(value: &str) -> Result<ParsedResource, ResourceParseError> {
    let url = Url::parse(value).map_err(|e| ResourceParseError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    let host = url.host_str().unwrap_or("");
    if !host.contains("figma.com") {
        return Err(ResourceParseError::NotFigma {
            url: value.to_string(),
        });
    }

    let figma_info = parse_figma_url(value)?;
    Ok(ParsedResource {
        kind: InputKind::Figma,
        value: value.to_string(),
        figma_info: Some(figma_info),
    })
}

pub fn parse_figma_url(value: &str) -> Result<FigmaInfo, ResourceParseError> {
    let url = Url::parse(value).map_err(|e| ResourceParseError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    let path_segments: Vec<&str> = url.path_segments().map(|c| c.collect()).unwrap_or_default();

    let file_key = path_segments
        .iter()
        .position(|s| FILE_KEY_MARKERS.contains(s))
        .and_then(|i| path_segments.get(i + 1))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| ResourceParseError::FigmaMissingFileKey {
            url: value.to_string(),
        })?;

    // Links encode `12:34` as `12-34`.
    let node_id = url
        .query_pairs()
        .find(|(k, _)| k == "node-id")
        .map(|(_, v)| v.replace('-', ":"))
        .filter(|id| !id.is_empty());

    Ok(FigmaInfo { file_key, node_id })
}

fn parse_local_resource(
    value: &str,
    check_extension: bool,
) -> Result<ParsedResource, ResourceParseError> {
    let path = Path::new(value);

    if check_extension {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if !DOCUMENT_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ResourceParseError::UnsupportedExtension {
                extension: if extension.is_empty() {
                    "no extension".to_string()
                } else {
                    extension
                },
                supported: DOCUMENT_EXTENSIONS.join(", "),
            });
        }
    }

    let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        return Err(ResourceParseError::FileNotFound {
            path: path.to_string_lossy().into_owned(),
        });
    }

    Ok(ParsedResource {
        kind: InputKind::Json,
        value: value.to_string(),
        figma_info: None,
    })
}
