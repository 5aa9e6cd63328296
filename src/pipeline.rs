use std::path::{Path, PathBuf};

use f2h_lib::document::load_raw_document;
use f2h_lib::figma::pipeline::report;
use f2h_lib::figma::{fetch_root, resolve_image_urls};
use f2h_lib::types::InputKind;
use f2h_lib::{
    F2hError, FigmaAuth, FigmaClient, FigmaNodeData, FigmaSettings, ImageExportOptions, ImageUrls,
    ParsedResource,
};

use crate::progress::ProgressCallback;

/// Raw design root plus the bitmap URLs resolved for it.
#[derive(Debug)]
pub struct LoadedDesign {
    pub root: FigmaNodeData,
    pub image_urls: ImageUrls,
}

/// Load the raw design for a parsed resource.
///
/// `node_id` overrides the node named in a Figma URL. Image URLs are only
/// requested from Figma when `resolve_images` is set; local exports never
/// carry them, so their images render as placeholders.
pub async fn load_design(
    resource: &ParsedResource,
    node_id: Option<&str>,
    settings: &FigmaSettings,
    resolve_images: bool,
    progress: Option<ProgressCallback>,
) -> Result<LoadedDesign, F2hError> {
    match resource.kind {
        InputKind::Json => {
            report(&progress, &format!("Reading {}...", resource.value));
            let root = load_raw_document(Path::new(&resource.value), node_id)?;
            Ok(LoadedDesign {
                root,
                image_urls: ImageUrls::new(),
            })
        }
        InputKind::Figma => {
            let figma_info = resource
                .figma_info
                .as_ref()
                .ok_or_else(|| F2hError::Config("Missing Figma file key".to_string()))?;
            let node_id = node_id.or(figma_info.node_id.as_deref());

            if let Some(mock_path) = mock_document_path() {
                report(
                    &progress,
                    &format!("Using mock Figma document {}", mock_path.display()),
                );
                let root = load_raw_document(&mock_path, node_id)?;
                return Ok(LoadedDesign {
                    root,
                    image_urls: ImageUrls::new(),
                });
            }

            let auth = FigmaAuth::from_env().ok_or_else(|| {
                F2hError::Config(
                    "Figma token missing; set FIGMA_TOKEN or FIGMA_OAUTH_TOKEN".to_string(),
                )
            })?;
            let client = FigmaClient::with_timeout(auth, settings.timeout)?;

            report(&progress, "Fetching Figma document...");
            let root = fetch_root(&client, &figma_info.file_key, node_id).await?;

            let image_urls = if resolve_images {
                let options = ImageExportOptions {
                    scale: settings.image_scale,
                    format: settings.image_format,
                    batch_size: settings.image_batch_size,
                };
                resolve_image_urls(&client, &figma_info.file_key, &root, options, &progress).await
            } else {
                ImageUrls::new()
            };

            Ok(LoadedDesign { root, image_urls })
        }
    }
}

/// Local stand-in for the Figma API, used by offline runs and tests.
fn mock_document_path() -> Option<PathBuf> {
    std::env::var("F2H_MOCK_FIGMA_DOCUMENT")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}
