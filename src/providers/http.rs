use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::app_config::BackendConfig;
use crate::errors::FrameError;
use crate::model::{FrameData, Timestamp, VideoData};
use crate::providers::FrameSource;

/// Client for the frame extraction backend.
///
/// Routes:
/// - `GET video/duration/?video_id=<id>` returns `VideoData`
/// - `GET media/video/frame/<HH:MM:SS>/?video_id=<id>` returns `FrameData`
#[derive(Debug, Clone)]
pub struct HttpFrameSource {
    /// Base URL, always ending in `/`
    base_url: Url,
    client: Client,
    /// Retries for connection failures and timeouts only
    max_retries: u32,
    /// Base backoff, doubled on each retry
    backoff_base_ms: u64,
}

impl HttpFrameSource {
    /// Create a client for `endpoint` with default timeout and no retries
    pub fn new(endpoint: &str) -> Result<Self, FrameError> {
        Self::with_settings(endpoint, Duration::from_secs(30), 0, 1000)
    }

    /// Create a client from the backend section of the configuration
    pub fn from_config(config: &BackendConfig) -> Result<Self, FrameError> {
        Self::with_settings(
            &config.endpoint,
            Duration::from_secs(config.timeout_secs),
            config.max_retries,
            config.retry_backoff_ms,
        )
    }

    fn with_settings(
        endpoint: &str,
        timeout: Duration,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, FrameError> {
        let base_url = normalize_base_url(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FrameError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            client,
            max_retries,
            backoff_base_ms,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the duration route for a video
    pub fn duration_url(&self, video_id: &str) -> Result<Url, FrameError> {
        self.route("video/duration/", video_id)
    }

    /// URL of the frame route for a video and timestamp
    pub fn frame_url(&self, video_id: &str, timestamp: &Timestamp) -> Result<Url, FrameError> {
        self.route(
            &format!("media/video/frame/{}/", timestamp.to_clock_string()),
            video_id,
        )
    }

    fn route(&self, path: &str, video_id: &str) -> Result<Url, FrameError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| FrameError::RequestFailed(format!("Invalid route '{}': {}", path, e)))?;
        url.query_pairs_mut().append_pair("video_id", video_id);
        Ok(url)
    }

    /// GET `url`, retrying connection failures with exponential backoff
    async fn get(&self, url: Url) -> Result<(u16, String), FrameError> {
        let mut attempt = 0;

        loop {
            debug!("GET {} (attempt {})", url, attempt + 1);

            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().await.map_err(|e| {
                        FrameError::RequestFailed(format!("Failed to read response body: {}", e))
                    })?;
                    return Ok((status, body));
                }
                Err(e) if (e.is_connect() || e.is_timeout()) && attempt < self.max_retries => {
                    let delay_ms = self.backoff_base_ms.saturating_mul(1u64 << attempt.min(16));
                    warn!(
                        "Frame backend unreachable ({}), retrying in {}ms ({}/{})",
                        e,
                        delay_ms,
                        attempt + 1,
                        self.max_retries
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    attempt += 1;
                }
                Err(e) if e.is_connect() || e.is_timeout() => {
                    return Err(FrameError::ConnectionError(e.to_string()));
                }
                Err(e) => return Err(FrameError::RequestFailed(e.to_string())),
            }
        }
    }
}

#[async_trait]
impl FrameSource for HttpFrameSource {
    async fn fetch_video_data(&self, video_id: &str) -> Result<VideoData, FrameError> {
        let url = self.duration_url(video_id)?;
        let (status, body) = self.get(url).await?;
        parse_video_data(status, &body)
    }

    async fn fetch_frame(&self, video_id: &str, timestamp: &Timestamp) -> Result<FrameData, FrameError> {
        let url = self.frame_url(video_id, timestamp)?;
        let (status, body) = self.get(url).await?;
        parse_frame_data(status, &body)
    }
}

/// Parse and normalize the configured endpoint so relative joins append
fn normalize_base_url(endpoint: &str) -> Result<Url, FrameError> {
    let mut url = Url::parse(endpoint.trim())
        .map_err(|e| FrameError::RequestFailed(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Turn a non-success response into an `ApiError`, using the backend's
/// `{"error": "..."}` message when present
fn api_error(status: u16, body: &str) -> FrameError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect());

    FrameError::ApiError {
        status_code: status,
        message,
    }
}

pub(crate) fn parse_video_data(status: u16, body: &str) -> Result<VideoData, FrameError> {
    if !(200..300).contains(&status) {
        return Err(api_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| FrameError::ParseError(e.to_string()))
}

pub(crate) fn parse_frame_data(status: u16, body: &str) -> Result<FrameData, FrameError> {
    if !(200..300).contains(&status) {
        return Err(api_error(status, body));
    }
    let frame: FrameData = serde_json::from_str(body).map_err(|e| FrameError::ParseError(e.to_string()))?;

    if frame.is_ocr_failure() {
        return Err(FrameError::Rejected(frame));
    }
    Ok(frame)
}
