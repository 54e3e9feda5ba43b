// crates/monocut-core/src/commands.rs
//
// Every user action in MonoCut is expressed as an EditorCommand.
// Panels push these; app.rs processes them after the UI pass.
// Any panel that wants the import flow pushes RequestImport; the picker
// itself lives in one place, in app.rs.

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    // ── Import ───────────────────────────────────────────────────────────────
    /// Open the native file picker and import whatever the user chooses.
    RequestImport,
    /// Post already-resolved paths to the backend. Ignored while an import is
    /// in flight or when the list is empty.
    ImportPaths(Vec<String>),

    // ── Library ──────────────────────────────────────────────────────────────
    /// Re-fetch the authoritative asset list.
    RefreshLibrary,
    /// Re-fetch a single asset's metadata and replace it in place.
    RefreshAsset(String),
    SelectAsset(Option<String>),
    DismissNotice,

    // ── Backend ──────────────────────────────────────────────────────────────
    RetryHealthCheck,
}
