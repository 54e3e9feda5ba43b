// crates/monocut-core/src/path_resolve.rs
//
// Turning a user-chosen file into the path string the backend expects.
//
// Tiers, first success wins:
//   1. the handle carries a filesystem path itself
//   2. a host bridge can map the handle to a path
//   3. the bare file name (degraded, usually not absolute)
//
// The backend resolves relative names against its own working directory, so a
// tier-3 result often fails there. Callers get `ResolvedPath::BareName` and can
// warn before posting it.

use std::path::{Path, PathBuf};

/// A file the user picked or dropped, as seen by the UI layer.
pub trait FileHandle {
    /// A filesystem path, when the runtime exposes one.
    fn direct_path(&self) -> Option<PathBuf>;
    /// Display name; always available.
    fn name(&self) -> String;
}

/// Privileged lookup that can recover a path the handle does not expose.
pub trait HostBridge {
    fn path_for_file(&self, file: &dyn FileHandle) -> Option<PathBuf>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedPath {
    Direct(PathBuf),
    Bridged(PathBuf),
    /// Only the file name was available.
    BareName(String),
}

impl ResolvedPath {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ResolvedPath::BareName(_))
    }

    /// The string posted in `file_paths`.
    pub fn into_wire(self) -> String {
        match self {
            ResolvedPath::Direct(p) | ResolvedPath::Bridged(p) => p.to_string_lossy().into_owned(),
            ResolvedPath::BareName(name) => name,
        }
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

pub fn resolve_file_path(file: &dyn FileHandle, bridge: Option<&dyn HostBridge>) -> ResolvedPath {
    if let Some(path) = non_empty(file.direct_path()) {
        return ResolvedPath::Direct(path);
    }
    if let Some(path) = non_empty(bridge.and_then(|b| b.path_for_file(file))) {
        return ResolvedPath::Bridged(path);
    }
    ResolvedPath::BareName(file.name())
}

/// Resolves a bare name against a directory the user already picked from,
/// when a file of that name exists there.
#[derive(Clone, Debug)]
pub struct DirectoryBridge {
    root: PathBuf,
}

impl DirectoryBridge {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl HostBridge for DirectoryBridge {
    fn path_for_file(&self, file: &dyn FileHandle) -> Option<PathBuf> {
        let name = file.name();
        // Only plain file names; anything with separators is not ours to guess.
        let file_name = Path::new(&name).file_name()?;
        if file_name != name.as_str() {
            return None;
        }
        let candidate = self.root.join(file_name);
        candidate.is_file().then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct Handle {
        path: Option<PathBuf>,
        name: &'static str,
    }

    impl FileHandle for Handle {
        fn direct_path(&self) -> Option<PathBuf> { self.path.clone() }
        fn name(&self) -> String { self.name.to_string() }
    }

    struct FixedBridge(Option<PathBuf>);

    impl HostBridge for FixedBridge {
        fn path_for_file(&self, _file: &dyn FileHandle) -> Option<PathBuf> { self.0.clone() }
    }

    #[test]
    fn direct_path_wins() {
        let file   = Handle { path: Some("/videos/a.mp4".into()), name: "a.mp4" };
        let bridge = FixedBridge(Some("/elsewhere/a.mp4".into()));
        assert_eq!(
            resolve_file_path(&file, Some(&bridge)),
            ResolvedPath::Direct("/videos/a.mp4".into()),
        );
    }

    #[test]
    fn bridge_used_when_handle_has_no_path() {
        let file   = Handle { path: None, name: "a.mp4" };
        let bridge = FixedBridge(Some("/bridged/a.mp4".into()));
        let resolved = resolve_file_path(&file, Some(&bridge));
        assert_eq!(resolved, ResolvedPath::Bridged("/bridged/a.mp4".into()));
        assert!(!resolved.is_degraded());
    }

    #[test]
    fn empty_results_fall_through_to_name() {
        let file   = Handle { path: Some(PathBuf::new()), name: "a.mp4" };
        let bridge = FixedBridge(Some(PathBuf::new()));
        let resolved = resolve_file_path(&file, Some(&bridge));
        assert!(resolved.is_degraded());
        assert_eq!(resolved.into_wire(), "a.mp4");
    }

    #[test]
    fn no_bridge_means_bare_name() {
        let file = Handle { path: None, name: "clip.mov" };
        assert_eq!(resolve_file_path(&file, None), ResolvedPath::BareName("clip.mov".into()));
    }

    #[test]
    fn directory_bridge_finds_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clip.mp4"), b"not really a video").unwrap();
        let bridge = DirectoryBridge::new(dir.path());

        let hit = Handle { path: None, name: "clip.mp4" };
        assert_eq!(
            resolve_file_path(&hit, Some(&bridge)),
            ResolvedPath::Bridged(dir.path().join("clip.mp4")),
        );

        let miss = Handle { path: None, name: "other.mp4" };
        assert!(resolve_file_path(&miss, Some(&bridge)).is_degraded());
    }

    #[test]
    fn directory_bridge_ignores_names_with_separators() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("clip.mp4"), b"x").unwrap();
        let bridge = DirectoryBridge::new(dir.path());

        let nested = Handle { path: None, name: "sub/clip.mp4" };
        assert_eq!(bridge.path_for_file(&nested), None);
    }
}
