//! HTTP client for the Figma REST API.

use std::collections::HashMap;
use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
#[cfg(test)]
use reqwest::header::HeaderMap;
use reqwest::{header::RETRY_AFTER, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::api_types::{FigmaFile, FigmaImageExport, FigmaNodeData, FigmaNodesResponse, ImageFormat};
use crate::error::{F2hError, Result};

const DEFAULT_BASE_URL: &str = "https://api.figma.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_CONCURRENT_EXPORTS: usize = 4;

#[derive(Debug, Clone)]
pub enum FigmaAuth {
    PersonalAccessToken(String),
    OAuthToken(String),
}

impl FigmaAuth {
    pub fn from_env() -> Option<Self> {
        if let Ok(token) = std::env::var("FIGMA_TOKEN") {
            if !token.is_empty() {
                return Some(Self::PersonalAccessToken(token));
            }
        }

        if let Ok(token) = std::env::var("FIGMA_OAUTH_TOKEN") {
            if !token.is_empty() {
                return Some(Self::OAuthToken(token));
            }
        }

        None
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            FigmaAuth::PersonalAccessToken(token) => builder.header("X-FIGMA-TOKEN", token),
            FigmaAuth::OAuthToken(token) => builder.bearer_auth(token),
        }
    }

    #[cfg(test)]
    fn apply_to_header_map(&self, headers: &mut HeaderMap) {
        match self {
            FigmaAuth::PersonalAccessToken(token) => {
                headers.insert("X-FIGMA-TOKEN", token.parse().unwrap());
            }
            FigmaAuth::OAuthToken(token) => {
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    format!("Bearer {token}").parse().unwrap(),
                );
            }
        }
    }
}

/// Export parameters for the images endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ImageExportOptions {
    pub scale: f32,
    pub format: ImageFormat,
    /// Node ids per request.
    pub batch_size: usize,
}

impl Default for ImageExportOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            format: ImageFormat::Png,
            batch_size: 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: Client,
    auth: FigmaAuth,
    base_url: Url,
}

impl FigmaClient {
    pub fn new(auth: FigmaAuth) -> Result<Self> {
        Self::with_base_url_and_timeout(auth, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(auth: FigmaAuth, timeout: Duration) -> Result<Self> {
        Self::with_base_url_and_timeout(auth, DEFAULT_BASE_URL, timeout)
    }

    pub fn with_base_url_and_timeout(
        auth: FigmaAuth,
        base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(F2hError::Network)?;

        Ok(Self {
            http,
            auth,
            base_url,
        })
    }

    pub async fn fetch_file(&self, file_key: &str) -> Result<FigmaFile> {
        let url = self.endpoint(&format!("/v1/files/{file_key}"))?;
        let req = self.authed(self.http.get(url));
        self.send_json(req).await
    }

    pub async fn fetch_nodes(
        &self,
        file_key: &str,
        node_ids: &[String],
    ) -> Result<FigmaNodesResponse> {
        validate_node_ids(node_ids, "fetching nodes from Figma")?;

        let mut url = self.endpoint(&format!("/v1/files/{file_key}/nodes"))?;
        url.query_pairs_mut().append_pair("ids", &node_ids.join(","));
        let req = self.authed(self.http.get(url));
        self.send_json(req).await
    }

    /// Fetch one node's document subtree.
    pub async fn fetch_node(&self, file_key: &str, node_id: &str) -> Result<FigmaNodeData> {
        let mut resp = self.fetch_nodes(file_key, &[node_id.to_string()]).await?;
        resp.nodes
            .remove(node_id)
            .flatten()
            .map(|wrapper| wrapper.document)
            .ok_or_else(|| {
                F2hError::figma_api(None, format!("Node {node_id} not found in Figma response"))
            })
    }

    /// Export one batch of nodes; ids Figma could not render are omitted.
    pub async fn export_images(
        &self,
        file_key: &str,
        node_ids: &[String],
        options: ImageExportOptions,
    ) -> Result<HashMap<String, String>> {
        validate_node_ids(node_ids, "exporting Figma images")?;
        validate_scale(options.scale)?;

        let mut url = self.endpoint(&format!("/v1/images/{file_key}"))?;
        url.query_pairs_mut()
            .append_pair("ids", &node_ids.join(","))
            .append_pair("scale", &options.scale.to_string())
            .append_pair("format", options.format.as_str());

        let req = self.authed(self.http.get(url));
        let export: FigmaImageExport = self.send_json(req).await?;
        if let Some(err) = export.err.filter(|e| !e.is_empty()) {
            return Err(F2hError::figma_api(None, err));
        }

        Ok(export
            .images
            .into_iter()
            .filter_map(|(id, url)| url.filter(|u| !u.is_empty()).map(|u| (id, u)))
            .collect())
    }

    /// Export any number of nodes, splitting them into concurrently fetched batches.
    pub async fn resolve_image_urls(
        &self,
        file_key: &str,
        node_ids: &[String],
        options: ImageExportOptions,
    ) -> Result<HashMap<String, String>> {
        if node_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let batch_size = options.batch_size.max(1);
        let batches: Vec<HashMap<String, String>> = stream::iter(node_ids.chunks(batch_size))
            .map(|chunk| self.export_images(file_key, chunk, options))
            .buffer_unordered(MAX_CONCURRENT_EXPORTS)
            .try_collect()
            .await?;

        Ok(batches.into_iter().flatten().collect())
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        self.auth.apply(builder)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(F2hError::InvalidUrl)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(F2hError::Network)?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body).map_err(F2hError::Serialization);
        }

        Err(F2hError::figma_api(
            Some(status),
            error_message(status, &body, retry_after.as_deref()),
        ))
    }
}

fn validate_node_ids(node_ids: &[String], context: &str) -> Result<()> {
    if node_ids.is_empty() {
        return Err(F2hError::Config(format!(
            "node_ids cannot be empty when {context}"
        )));
    }
    Ok(())
}

fn validate_scale(scale: f32) -> Result<()> {
    if scale <= 0.0 {
        return Err(F2hError::Config(
            "scale must be greater than zero for Figma exports".into(),
        ));
    }
    Ok(())
}

fn error_message(status: StatusCode, body: &str, retry_after: Option<&str>) -> String {
    let fallback = format!("Figma API returned status {}", status.as_u16());
    let parsed = serde_json::from_str::<Value>(body).ok();
    let from_body = parsed
        .as_ref()
        .and_then(|value| value.get("err").or_else(|| value.get("error")))
        .and_then(Value::as_str)
        .map(str::to_owned);

    match (status, retry_after, from_body) {
        (StatusCode::TOO_MANY_REQUESTS, Some(retry), Some(msg)) => {
            format!("{msg} (rate limited, retry after {retry}s)")
        }
        (StatusCode::TOO_MANY_REQUESTS, Some(retry), None) => {
            format!("rate limited by Figma API, retry after {retry}s")
        }
        (_, _, Some(msg)) => msg,
        _ => fallback,
    }
}
