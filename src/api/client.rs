//! HTTP client for the resolver backend

use crate::api::models::{DownloadLink, ErrorBody, VideoInfo};
use crate::utils::VidfetchError;
use tracing::debug;

/// Shown when the metadata endpoint fails without a usable error body.
const INFO_FAILURE_MESSAGE: &str = "Failed to fetch video info";

/// Shown when the download endpoint returns a non-success status.
const DOWNLOAD_FAILURE_MESSAGE: &str = "Download failed to start";

/// Client for the two resolver endpoints.
///
/// Cheap to clone; the inner `reqwest::Client` is shared. No request
/// timeouts are configured.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch metadata for the video at `url`.
    ///
    /// Non-success responses surface the backend's `detail` text when the
    /// body carries one, otherwise a generic message.
    pub async fn video_info(&self, url: &str) -> Result<VideoInfo, VidfetchError> {
        debug!(url = %url, "requesting video info");

        let response = self
            .http
            .get(self.endpoint("/api/info"))
            .query(&[("url", url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = error_detail(response.bytes().await.ok().as_deref());
            return Err(VidfetchError::Backend(
                detail.unwrap_or_else(|| INFO_FAILURE_MESSAGE.to_string()),
            ));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Resolve a direct download link for `format_id` of the video at `url`.
    ///
    /// Returns `Ok(None)` when the backend answers successfully but without
    /// a link; empty strings count as absent.
    pub async fn download_link(
        &self,
        url: &str,
        format_id: &str,
    ) -> Result<Option<String>, VidfetchError> {
        debug!(url = %url, format_id = %format_id, "requesting download link");

        let response = self
            .http
            .get(self.endpoint("/api/download"))
            .query(&[("url", url), ("format_id", format_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(VidfetchError::Backend(DOWNLOAD_FAILURE_MESSAGE.to_string()));
        }

        let body = response.bytes().await?;
        let link: DownloadLink = serde_json::from_slice(&body)?;
        Ok(link.direct_url.filter(|direct| !direct.is_empty()))
    }

    /// Fetch and decode the thumbnail image at `url`.
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<image::DynamicImage, VidfetchError> {
        let response = self.http.get(url).send().await?;
        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

/// Pull a non-empty `detail` field out of an error response body, if any.
fn error_detail(body: Option<&[u8]>) -> Option<String> {
    body.and_then(|bytes| serde_json::from_slice::<ErrorBody>(bytes).ok())
        .map(|body| body.detail)
        .filter(|detail| !detail.is_empty())
}
