// crates/monocut-core/src/view.rs
//
// Display strings derived from state. Everything here is a pure function of
// its arguments and is recomputed every frame; nothing is cached.

use std::path::Path;

use crate::helpers::fixed::to_fixed;
use crate::helpers::size::format_file_size;
use crate::helpers::time::{format_duration, format_timecode};
use crate::media_types::{BackendStatus, MediaAsset};
use crate::registry::AssetRegistry;

pub const ZERO_TIMECODE: &str = "00:00:00";
pub const PLACEHOLDER:   &str = "-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyRow {
    pub label: &'static str,
    pub value: String,
}

/// Inspector rows for the selected asset, or the fixed placeholder set.
pub fn property_rows(selected: Option<&MediaAsset>) -> [PropertyRow; 4] {
    let (duration, range, resolution, frame_rate) = match selected {
        None => (
            ZERO_TIMECODE.to_string(),
            format!("{ZERO_TIMECODE} - {ZERO_TIMECODE}"),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ),
        Some(asset) => {
            let tc = format_timecode(asset.duration);
            (
                tc.clone(),
                format!("{ZERO_TIMECODE} - {tc}"),
                format!("{}x{}", asset.resolution.width, asset.resolution.height),
                format!("{} fps", to_fixed(asset.frame_rate, 2)),
            )
        }
    };

    [
        PropertyRow { label: "时长",      value: duration },
        PropertyRow { label: "入点/出点", value: range },
        PropertyRow { label: "分辨率",    value: resolution },
        PropertyRow { label: "帧率",      value: frame_rate },
    ]
}

/// Transport readout: playhead is always at zero, the right side is the clip length.
pub fn progress_time(selected: Option<&MediaAsset>) -> String {
    let total = selected
        .map(|a| format_timecode(a.duration))
        .unwrap_or_else(|| ZERO_TIMECODE.to_string());
    format!("{ZERO_TIMECODE} / {total}")
}

pub fn preview_hint(selected: Option<&MediaAsset>) -> String {
    match selected {
        Some(asset) => format!("已选素材：{} · {}", asset.file_name, format_duration(asset.duration)),
        None        => "播放速率 1.0x | 代理模式：关闭".to_string(),
    }
}

pub fn library_summary(registry: &AssetRegistry) -> String {
    format!(
        "共 {} 个素材 · 合计 {}",
        registry.len(),
        format_file_size(registry.total_file_size()),
    )
}

/// Strings shown on one library card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardMeta {
    pub badge:      String,
    pub resolution: String,
    pub detail:     String,
}

pub fn card_meta(asset: &MediaAsset) -> CardMeta {
    CardMeta {
        badge:      format_duration(asset.duration),
        resolution: format!("{}x{}", asset.resolution.width, asset.resolution.height),
        detail:     format!("{} fps · {}", to_fixed(asset.frame_rate, 0), format_file_size(asset.file_size)),
    }
}

pub fn backend_status_label(status: BackendStatus) -> &'static str {
    match status {
        BackendStatus::Checking => "检查中...",
        BackendStatus::Online   => "在线",
        BackendStatus::Offline  => "离线",
    }
}

/// Turn a thumbnail reference from the backend into an image URI.
///
/// URIs with a scheme pass through, absolute filesystem paths become
/// `file://` URIs, and anything else is treated as relative to the backend.
pub fn thumbnail_uri(reference: &str, base_url: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    let lower = reference.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("file://") {
        return Some(reference.to_string());
    }
    if Path::new(reference).is_absolute() {
        return Some(format!("file://{}", reference.replace('\\', "/")));
    }
    Some(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        reference.trim_start_matches('/'),
    ))
}
