// crates/monocut-core/src/media_types.rs
//
// Types that cross the HTTP boundary between the backend and MonoCut.
// Field names match the backend's JSON exactly; no serde renames.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width:  u32,
    pub height: u32,
}

/// One imported video file, as described by the backend.
/// Identity is `id`; every other field is informational.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id:          String,
    pub file_name:   String,
    pub file_path:   String,
    /// Seconds.
    pub duration:    f64,
    pub resolution:  Resolution,
    pub frame_rate:  f64,
    /// Bytes.
    pub file_size:   u64,
    pub has_audio:   bool,
    /// Paths or URLs, in display order. Older backends omit the field.
    #[serde(default)]
    pub thumbnails:  Vec<String>,
    pub create_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportVideoRequest {
    pub file_paths: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportVideoResponse {
    pub success: bool,
    pub assets:  Vec<MediaAsset>,
    /// Validation or partial-failure text. May be present on `success: true`.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status:  String,
    pub message: String,
}

/// Reply of `GET /api/ffmpeg/check`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FfmpegStatus {
    pub installed: bool,
    pub message:   String,
}

/// Body of a non-2xx response. `detail` is usually a string, but validation
/// failures carry a list of objects. Keep it untyped and let the caller decide.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The detail text when it is a non-blank string.
    pub fn detail_text(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Liveness of the backend as last observed by a health check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online,
    Offline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_without_thumbnails_field_decodes() {
        let json = r#"{
            "id": "a1", "file_name": "clip.mp4", "file_path": "/v/clip.mp4",
            "duration": 12.5, "resolution": {"width": 1920, "height": 1080},
            "frame_rate": 29.97, "file_size": 2048, "has_audio": true,
            "create_time": "2024-05-01T10:00:00"
        }"#;
        let asset: MediaAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, "a1");
        assert_eq!(asset.resolution, Resolution { width: 1920, height: 1080 });
        assert!(asset.thumbnails.is_empty());
    }

    #[test]
    fn import_response_message_is_optional() {
        let resp: ImportVideoResponse =
            serde_json::from_str(r#"{"success": true, "assets": []}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, None);
    }

    #[test]
    fn error_body_detail_text() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "素材不存在"}"#).unwrap();
        assert_eq!(body.detail_text(), Some("素材不存在"));

        let blank: ErrorBody = serde_json::from_str(r#"{"detail": "   "}"#).unwrap();
        assert_eq!(blank.detail_text(), None);

        let list: ErrorBody =
            serde_json::from_str(r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#).unwrap();
        assert_eq!(list.detail_text(), None);

        let missing: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.detail_text(), None);
    }
}
