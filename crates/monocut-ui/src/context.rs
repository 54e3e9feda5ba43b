// crates/monocut-ui/src/context.rs
//
// AppContext owns the runtime handles that are NOT part of persisted state.
// MonoCutApp holds one of these plus an AppState and its panels.

use monocut_api::{ApiResult, ApiWorker};
use monocut_core::media_types::BackendStatus;
use monocut_core::state::AppState;
use tracing::{debug, info, warn};

pub struct AppContext {
    pub api: ApiWorker,
}

impl AppContext {
    pub fn new(api: ApiWorker) -> Self {
        Self { api }
    }

    /// Startup sequence: health check and the initial list fetch.
    /// The FFmpeg check follows once the health check comes back online.
    pub fn start(&self, state: &mut AppState) {
        state.begin_health_check();
        self.api.health_check();
        self.api.list_media_assets(state.begin_list());
    }

    pub fn retry_health_check(&self, state: &mut AppState) {
        state.begin_health_check();
        self.api.health_check();
    }

    /// Drain the ApiWorker result channel into state.
    /// Called once per frame before the panels draw.
    pub fn ingest_api_results(&mut self, state: &mut AppState) {
        while let Ok(result) = self.api.rx.try_recv() {
            match result {
                ApiResult::Health(outcome) => {
                    let was = state.backend_status;
                    state.finish_health_check(outcome);
                    if state.backend_status == BackendStatus::Online {
                        if was != BackendStatus::Online {
                            info!("backend online");
                        }
                        self.api.check_ffmpeg();
                    } else {
                        warn!("backend offline");
                    }
                }
                ApiResult::Ffmpeg(outcome) => {
                    if let Ok(status) = &outcome {
                        if !status.installed {
                            warn!(message = %status.message, "backend reports FFmpeg missing");
                        }
                    }
                    state.finish_ffmpeg_check(outcome);
                }
                ApiResult::Imported { job_id, outcome } => {
                    match &outcome {
                        Ok(resp) => info!(%job_id, imported = resp.assets.len(), success = resp.success, "import finished"),
                        Err(msg) => warn!(%job_id, error = %msg, "import failed"),
                    }
                    if !state.finish_import(job_id, outcome) {
                        debug!(%job_id, "stale import result ignored");
                    }
                }
                ApiResult::Listed { epoch, outcome } => {
                    match &outcome {
                        Ok(items) => debug!(count = items.len(), "library listed"),
                        Err(msg)  => warn!(error = %msg, "library list failed"),
                    }
                    if epoch != state.local_epoch {
                        debug!(epoch, current = state.local_epoch, "list predates a local change, merging");
                    }
                    state.finish_list(epoch, outcome);
                }
                ApiResult::Refreshed(outcome) => {
                    if let Err(msg) = &outcome {
                        warn!(error = %msg, "asset refresh failed");
                    }
                    state.finish_refresh(outcome);
                }
            }
        }
    }
}
