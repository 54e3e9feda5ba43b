// crates/monocut-core/src/state.rs
// Runtime application state. No egui, no network handles.
// Results from the backend land here through the finish_* methods; panels
// read it and never write to it directly.

use std::path::PathBuf;
use uuid::Uuid;

use crate::media_types::{BackendStatus, FfmpegStatus, HealthCheckResponse, ImportVideoResponse, MediaAsset};
use crate::registry::AssetRegistry;

pub const OFFLINE_MESSAGE: &str = "无法连接后端服务，请先启动 FastAPI 服务";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Non-fatal: results were still applied.
    Warning,
    Error,
}

/// The single inline message under the library summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryNotice {
    pub kind: NoticeKind,
    pub text: String,
}

impl LibraryNotice {
    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Handed out by `begin_import`; the caller posts `file_paths` and reports
/// back with `job_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportTicket {
    pub job_id:     Uuid,
    pub file_paths: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub registry:        AssetRegistry,
    pub backend_status:  BackendStatus,
    pub backend_message: String,
    /// Last FFmpeg report from the backend; None until checked.
    pub ffmpeg:          Option<FfmpegStatus>,
    /// Id of the running import request. Some(_) is the in-flight flag:
    /// the import button stays disabled until the matching result arrives.
    pub import_job:      Option<Uuid>,
    /// True until the first list fetch resolves.
    pub library_loading: bool,
    /// Bumped whenever an import or refresh changes the registry. A list
    /// request remembers the value so an older snapshot cannot undo it.
    pub local_epoch:     u64,
    pub notice:          Option<LibraryNotice>,
    /// Directory of the last native pick. Persisted by the UI.
    pub last_import_dir: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            registry:        AssetRegistry::new(),
            backend_status:  BackendStatus::Checking,
            backend_message: String::new(),
            ffmpeg:          None,
            import_job:      None,
            library_loading: true,
            local_epoch:     0,
            notice:          None,
            last_import_dir: None,
        }
    }
}

impl AppState {
    pub fn import_in_flight(&self) -> bool {
        self.import_job.is_some()
    }

    pub fn selected_asset(&self) -> Option<&MediaAsset> {
        self.registry.selected_asset()
    }

    // ── Import ───────────────────────────────────────────────────────────────

    /// Claim the in-flight flag for an import of `paths`.
    /// Returns None, touching nothing, when there is nothing to import or
    /// another import is still running.
    pub fn begin_import(&mut self, paths: Vec<String>) -> Option<ImportTicket> {
        if paths.is_empty() || self.import_in_flight() {
            return None;
        }
        let job_id = Uuid::new_v4();
        self.import_job = Some(job_id);
        self.notice     = None;
        Some(ImportTicket { job_id, file_paths: paths })
    }

    /// Apply the outcome of an import request.
    /// Results for a job other than the current one are dropped.
    pub fn finish_import(&mut self, job_id: Uuid, outcome: Result<ImportVideoResponse, String>) -> bool {
        if self.import_job != Some(job_id) {
            return false;
        }
        self.import_job = None;

        match outcome {
            Ok(resp) => {
                if !resp.assets.is_empty() {
                    self.registry.apply_import(&resp.assets);
                    self.local_epoch += 1;
                }
                let message = resp.message.filter(|m| !m.trim().is_empty());
                self.notice = match (resp.success, message) {
                    (true,  Some(m)) => Some(LibraryNotice::warning(m)),
                    (true,  None)    => None,
                    (false, Some(m)) => Some(LibraryNotice::error(m)),
                    (false, None)    => Some(LibraryNotice::error("导入失败")),
                };
            }
            Err(msg) => {
                self.notice = Some(LibraryNotice::error(format!("导入失败：{msg}")));
            }
        }
        true
    }

    // ── Library ──────────────────────────────────────────────────────────────

    /// Stamp for a list request about to be sent.
    pub fn begin_list(&self) -> u64 {
        self.local_epoch
    }

    /// Apply a list snapshot requested at `epoch`. A snapshot older than the
    /// latest import or refresh is merged under the local entries instead of
    /// replacing them.
    pub fn finish_list(&mut self, epoch: u64, outcome: Result<Vec<MediaAsset>, String>) {
        self.library_loading = false;
        match outcome {
            Ok(items) if epoch == self.local_epoch => self.registry.replace_all(items),
            Ok(items) => self.registry.absorb_snapshot(items),
            Err(msg)  => {
                self.notice = Some(LibraryNotice::error(format!("获取素材列表失败：{msg}")));
            }
        }
    }

    pub fn finish_refresh(&mut self, outcome: Result<MediaAsset, String>) {
        match outcome {
            Ok(asset) => {
                self.registry.upsert(asset);
                self.local_epoch += 1;
            }
            Err(msg)  => {
                self.notice = Some(LibraryNotice::error(format!("刷新素材失败：{msg}")));
            }
        }
    }

    pub fn select_asset(&mut self, id: Option<&str>) -> bool {
        self.registry.select(id)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ── Backend ──────────────────────────────────────────────────────────────

    pub fn begin_health_check(&mut self) {
        self.backend_status = BackendStatus::Checking;
    }

    pub fn finish_health_check(&mut self, outcome: Result<HealthCheckResponse, String>) {
        match outcome {
            Ok(resp) => {
                self.backend_status  = BackendStatus::Online;
                self.backend_message = resp.message;
            }
            Err(_) => {
                self.backend_status  = BackendStatus::Offline;
                self.backend_message = OFFLINE_MESSAGE.to_string();
                self.ffmpeg          = None;
            }
        }
    }

    pub fn finish_ffmpeg_check(&mut self, outcome: Result<FfmpegStatus, String>) {
        self.ffmpeg = outcome.ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::asset;

    fn response(assets: Vec<MediaAsset>, message: Option<&str>) -> ImportVideoResponse {
        ImportVideoResponse { success: true, assets, message: message.map(str::to_string) }
    }

    #[test]
    fn empty_selection_does_nothing() {
        let mut state = AppState::default();
        state.registry.replace_all(vec![asset("a")]);
        state.notice = Some(LibraryNotice::error("old"));

        assert_eq!(state.begin_import(Vec::new()), None);
        assert!(!state.import_in_flight());
        assert_eq!(state.notice, Some(LibraryNotice::error("old")));
        assert_eq!(state.registry.len(), 1);
    }

    #[test]
    fn second_import_rejected_while_in_flight() {
        let mut state = AppState::default();
        let ticket = state.begin_import(vec!["/a.mp4".into()]).unwrap();
        assert!(state.import_in_flight());
        assert_eq!(ticket.file_paths, ["/a.mp4"]);

        assert_eq!(state.begin_import(vec!["/b.mp4".into()]), None);
        assert_eq!(state.import_job, Some(ticket.job_id));
    }

    #[test]
    fn begin_import_clears_previous_notice() {
        let mut state = AppState::default();
        state.notice = Some(LibraryNotice::error("导入失败：x"));
        state.begin_import(vec!["/a.mp4".into()]).unwrap();
        assert_eq!(state.notice, None);
    }

    #[test]
    fn successful_import_merges_selects_and_releases_flag() {
        let mut state = AppState::default();
        state.registry.replace_all(vec![asset("old")]);
        let ticket = state.begin_import(vec!["/n.mp4".into()]).unwrap();

        assert!(state.finish_import(ticket.job_id, Ok(response(vec![asset("n1"), asset("n2")], None))));
        assert!(!state.import_in_flight());
        assert_eq!(state.registry.len(), 3);
        assert_eq!(state.registry.selected_id(), Some("n1"));
        assert_eq!(state.notice, None);
    }

    #[test]
    fn partial_success_message_is_a_warning() {
        let mut state = AppState::default();
        let ticket = state.begin_import(vec!["/a.mp4".into(), "/b.txt".into()]).unwrap();
        let msg = "部分文件导入失败: b.txt: 不支持的格式 .txt";

        state.finish_import(ticket.job_id, Ok(response(vec![asset("a")], Some(msg))));
        assert_eq!(state.notice, Some(LibraryNotice::warning(msg)));
        assert_eq!(state.registry.len(), 1);
    }

    #[test]
    fn failed_import_releases_flag_and_reports() {
        let mut state = AppState::default();
        state.registry.replace_all(vec![asset("keep")]);
        let ticket = state.begin_import(vec!["/a.mp4".into()]).unwrap();

        state.finish_import(ticket.job_id, Err("timeout: global".into()));
        assert!(!state.import_in_flight());
        assert_eq!(state.notice, Some(LibraryNotice::error("导入失败：timeout: global")));
        assert_eq!(state.registry.len(), 1);

        // Retry is possible right away.
        assert!(state.begin_import(vec!["/a.mp4".into()]).is_some());
    }

    #[test]
    fn stale_job_result_is_ignored() {
        let mut state = AppState::default();
        let ticket = state.begin_import(vec!["/a.mp4".into()]).unwrap();

        assert!(!state.finish_import(Uuid::new_v4(), Ok(response(vec![asset("x")], None))));
        assert!(state.import_in_flight());
        assert!(state.registry.is_empty());

        assert!(state.finish_import(ticket.job_id, Ok(response(vec![], None))));
    }

    #[test]
    fn unsuccessful_response_without_message() {
        let mut state = AppState::default();
        let ticket = state.begin_import(vec!["/a.mp4".into()]).unwrap();
        let resp = ImportVideoResponse { success: false, assets: vec![], message: None };
        state.finish_import(ticket.job_id, Ok(resp));
        assert_eq!(state.notice, Some(LibraryNotice::error("导入失败")));
    }

    #[test]
    fn list_failure_keeps_assets_and_stops_loading() {
        let mut state = AppState::default();
        assert!(state.library_loading);
        state.finish_list(0, Ok(vec![asset("a")]));
        assert!(!state.library_loading);

        state.finish_list(0, Err("connection refused".into()));
        assert_eq!(state.registry.len(), 1);
        assert_eq!(
            state.notice,
            Some(LibraryNotice::error("获取素材列表失败：connection refused")),
        );
    }

    #[test]
    fn list_requested_before_import_keeps_imported_asset() {
        let mut state = AppState::default();
        state.finish_list(state.begin_list(), Ok(vec![asset("a")]));

        let list_epoch = state.begin_list();
        let ticket = state.begin_import(vec!["/v/n.mp4".into()]).unwrap();
        state.finish_import(ticket.job_id, Ok(response(vec![asset("n")], None)));

        // Snapshot served before the import committed.
        state.finish_list(list_epoch, Ok(vec![asset("a")]));
        let ids: Vec<&str> = state.registry.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["n", "a"]);
        assert_eq!(state.registry.selected_id(), Some("n"));

        // A list requested afterwards is authoritative again.
        state.finish_list(state.begin_list(), Ok(vec![asset("a"), asset("n")]));
        let ids: Vec<&str> = state.registry.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a", "n"]);
    }

    #[test]
    fn refresh_replaces_in_place() {
        let mut state = AppState::default();
        state.finish_list(0, Ok(vec![asset("a"), asset("b")]));
        let mut b = asset("b");
        b.duration = 42.0;
        state.finish_refresh(Ok(b));
        assert_eq!(state.registry.assets()[1].duration, 42.0);

        state.finish_refresh(Err("素材不存在".into()));
        assert_eq!(state.notice, Some(LibraryNotice::error("刷新素材失败：素材不存在")));
    }

    #[test]
    fn health_check_transitions() {
        let mut state = AppState::default();
        assert_eq!(state.backend_status, BackendStatus::Checking);

        state.finish_health_check(Err("connection refused".into()));
        assert_eq!(state.backend_status, BackendStatus::Offline);
        assert_eq!(state.backend_message, OFFLINE_MESSAGE);

        state.begin_health_check();
        assert_eq!(state.backend_status, BackendStatus::Checking);

        state.finish_health_check(Ok(HealthCheckResponse {
            status:  "ok".into(),
            message: "Backend is running".into(),
        }));
        assert_eq!(state.backend_status, BackendStatus::Online);
        assert_eq!(state.backend_message, "Backend is running");
    }

    #[test]
    fn going_offline_forgets_ffmpeg_status() {
        let mut state = AppState::default();
        state.finish_ffmpeg_check(Ok(FfmpegStatus { installed: true, message: "FFmpeg已安装".into() }));
        assert!(state.ffmpeg.is_some());
        state.finish_health_check(Err("down".into()));
        assert_eq!(state.ffmpeg, None);
    }
}
