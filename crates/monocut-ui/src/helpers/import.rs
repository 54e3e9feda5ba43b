// crates/monocut-ui/src/helpers/import.rs
//
// Where import paths come from.
//
//   pick_video_files()     native multi-select dialog; always yields real paths
//   dropped_file_paths()   files dropped on the window, run through the tiered
//                          resolver with the last picker directory as bridge
//
// Both return the strings that go into `file_paths` on the wire.

use std::path::{Path, PathBuf};

use monocut_core::path_resolve::{resolve_file_path, DirectoryBridge, FileHandle, HostBridge, ResolvedPath};
use rfd::FileDialog;
use tracing::{debug, warn};

/// Extensions the backend accepts.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "flv"];

/// What the native picker produced.
pub struct PickedFiles {
    pub paths:     Vec<String>,
    /// Parent directory of the first pick, remembered for later drops.
    pub directory: Option<PathBuf>,
}

/// Blocks until the dialog closes. An empty `paths` means the user cancelled.
pub fn pick_video_files(start_dir: Option<&Path>) -> PickedFiles {
    let mut dialog = FileDialog::new()
        .set_title("导入素材")
        .add_filter("视频", VIDEO_EXTENSIONS);
    if let Some(dir) = start_dir.filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }

    let picked = dialog.pick_files().unwrap_or_default();
    let directory = picked.first().and_then(|p| p.parent()).map(Path::to_path_buf);

    PickedFiles {
        paths: picked
            .into_iter()
            .map(|p| ResolvedPath::Direct(p).into_wire())
            .collect(),
        directory,
    }
}

/// A file dropped onto the window. Native drops carry a path; drops from a
/// sandboxed source may only carry a name.
pub struct DroppedHandle<'a>(pub &'a egui::DroppedFile);

impl FileHandle for DroppedHandle<'_> {
    fn direct_path(&self) -> Option<PathBuf> {
        self.0.path.clone()
    }

    fn name(&self) -> String {
        if !self.0.name.is_empty() {
            return self.0.name.clone();
        }
        self.0
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub fn dropped_file_paths(files: &[egui::DroppedFile], last_dir: Option<&Path>) -> Vec<String> {
    let bridge = last_dir.map(DirectoryBridge::new);
    let bridge_ref: Option<&dyn HostBridge> = bridge.as_ref().map(|b| b as &dyn HostBridge);

    files
        .iter()
        .filter_map(|file| {
            let handle = DroppedHandle(file);
            let resolved = resolve_file_path(&handle, bridge_ref);
            if resolved.is_degraded() {
                warn!(name = %handle.name(), "dropped file has no usable path; sending bare name");
            }
            let wire = resolved.into_wire();
            if wire.is_empty() {
                debug!("dropped entry without path or name skipped");
                return None;
            }
            Some(wire)
        })
        .collect()
}
