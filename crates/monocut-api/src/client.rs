// crates/monocut-api/src/client.rs
//
// Blocking, typed wrapper over the backend's JSON endpoints.
// Call it from a worker thread, never from the UI thread. See worker.rs.
//
//   GET  /api/health         → HealthCheckResponse
//   GET  /api/ffmpeg/check   → FfmpegStatus
//   POST /api/media/import   → ImportVideoResponse
//   GET  /api/media/list     → Vec<MediaAsset>
//   GET  /api/media/{id}     → MediaAsset

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use ureq::http::Response;
use ureq::{Agent, Body};

use monocut_core::media_types::{
    ErrorBody, FfmpegStatus, HealthCheckResponse, ImportVideoRequest, ImportVideoResponse, MediaAsset,
};

use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Clone)]
pub struct ApiClient {
    agent:  Agent,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        // Non-2xx statuses come back as responses so the `detail` body can be read.
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────────────

    pub fn health_check(&self) -> Result<HealthCheckResponse, ApiError> {
        self.get_json("/api/health")
    }

    /// True only when the backend answers and reports `status == "ok"`.
    pub fn is_backend_online(&self) -> bool {
        matches!(self.health_check(), Ok(resp) if resp.status == "ok")
    }

    pub fn check_ffmpeg(&self) -> Result<FfmpegStatus, ApiError> {
        self.get_json("/api/ffmpeg/check")
    }

    pub fn import_videos(&self, file_paths: &[String]) -> Result<ImportVideoResponse, ApiError> {
        let body = ImportVideoRequest { file_paths: file_paths.to_vec() };
        self.post_json("/api/media/import", &body)
    }

    pub fn list_media_assets(&self) -> Result<Vec<MediaAsset>, ApiError> {
        self.get_json("/api/media/list")
    }

    pub fn get_media_asset(&self, id: &str) -> Result<MediaAsset, ApiError> {
        self.get_json(&format!("/api/media/{}", encode_path_segment(id)))
    }

    // ── Plumbing ─────────────────────────────────────────────────────────────

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        debug!(%url, "GET");
        let resp = self.agent
            .get(url.as_str())
            .header("Accept", "application/json")
            .call()
            .map_err(|e| {
                warn!(%url, error = %e, "request failed");
                ApiError::transport(e)
            })?;
        read_json(resp, &url)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.config.url(path);
        debug!(%url, "POST");
        let resp = self.agent
            .post(url.as_str())
            .header("Accept", "application/json")
            .send_json(body)
            .map_err(|e| {
                warn!(%url, error = %e, "request failed");
                ApiError::transport(e)
            })?;
        read_json(resp, &url)
    }
}

fn read_json<T: DeserializeOwned>(mut resp: Response<Body>, url: &str) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp.body_mut().read_to_string().map_err(ApiError::transport)?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|b| b.detail_text().map(str::to_string));
        warn!(url, status = status.as_u16(), detail = ?detail, "backend returned an error");
        return Err(ApiError::Status { status: status.as_u16(), detail });
    }

    serde_json::from_str(&text).map_err(|e| {
        warn!(url, error = %e, "unexpected response body");
        ApiError::decode(format!("Invalid response from {url}: {e}"))
    })
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_pass_through() {
        let id = "3f2a9c1e-8b7d-4e5f-9a0b-1c2d3e4f5a6b";
        assert_eq!(encode_path_segment(id), id);
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_path_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(encode_path_segment("素"), "%E7%B4%A0");
    }
}
