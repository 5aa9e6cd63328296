//! Fetch, resolve, classify, convert.

use std::sync::Arc;

use crate::config::ConversionOptions;
use crate::error::{F2hError, Result};
use crate::render::{convert, Conversion};

use super::api_types::FigmaNodeData;
use super::client::{FigmaClient, ImageExportOptions};
use super::conversion::{classify, collect_image_node_ids, ImageUrls};

/// Where to read the design from and how to export its images.
#[derive(Debug, Clone)]
pub struct FigmaConvertOptions {
    pub file_key: String,
    /// Subtree to convert; the whole document when absent.
    pub node_id: Option<String>,
    pub images: ImageExportOptions,
}

/// Receives human-readable progress lines.
pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Forward `message` to the callback, if any.
pub fn report(progress: &Option<ProgressCallback>, message: &str) {
    if let Some(cb) = progress {
        cb(message);
    }
}

/// Fetch the raw root: one node subtree, or the whole document.
pub async fn fetch_root(
    client: &FigmaClient,
    file_key: &str,
    node_id: Option<&str>,
) -> Result<FigmaNodeData> {
    if file_key.trim().is_empty() {
        return Err(F2hError::config("Figma file key is required"));
    }
    match node_id {
        Some(id) => client.fetch_node(file_key, id).await,
        None => client.fetch_file(file_key).await.map(|file| file.document),
    }
}

/// Resolve bitmap URLs for every image-like node under `root`.
///
/// Export failures degrade to an empty map so detected images render as
/// placeholders instead of failing the conversion.
pub async fn resolve_image_urls(
    client: &FigmaClient,
    file_key: &str,
    root: &FigmaNodeData,
    options: ImageExportOptions,
    progress: &Option<ProgressCallback>,
) -> ImageUrls {
    let ids = collect_image_node_ids(root);
    if ids.is_empty() {
        return ImageUrls::new();
    }

    report(progress, &format!("Exporting {} image node(s)...", ids.len()));
    match client.resolve_image_urls(file_key, &ids, options).await {
        Ok(urls) => {
            log::debug!("resolved {} of {} image urls", urls.len(), ids.len());
            urls
        }
        Err(err) => {
            log::warn!("image export failed, rendering placeholders instead: {err}");
            report(progress, "Image export failed; using placeholders");
            ImageUrls::new()
        }
    }
}

/// Full Figma-to-HTML pass for library callers.
pub async fn figma_to_html(
    client: &FigmaClient,
    options: &FigmaConvertOptions,
    conversion: &ConversionOptions,
    progress: Option<ProgressCallback>,
) -> Result<Conversion> {
    report(&progress, "Fetching Figma document...");
    let root = fetch_root(client, &options.file_key, options.node_id.as_deref()).await?;
    log::debug!(
        "fetched node {} ({}) from file {}",
        root.id,
        root.node_type,
        options.file_key
    );

    let image_urls =
        resolve_image_urls(client, &options.file_key, &root, options.images, &progress).await;

    report(&progress, "Rendering HTML...");
    let tree = classify(&root, &image_urls);
    convert(&tree, conversion)
}
