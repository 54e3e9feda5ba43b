// crates/monocut-api/src/worker.rs
//
// ApiWorker: runs every backend request off the UI thread.
// All public API that monocut-ui calls lives here.
//
// Each request gets its own short-lived thread; the blocking ApiClient call
// happens there and the outcome comes back on `rx`. The UI drains `rx` once
// per frame (AppContext::ingest_api_results). Errors are already normalized
// to display text before they cross the channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use monocut_core::media_types::{FfmpegStatus, HealthCheckResponse, ImportVideoResponse, MediaAsset};
use monocut_core::state::ImportTicket;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Outcomes sent from request threads to the UI.
#[derive(Debug)]
pub enum ApiResult {
    Health    (Result<HealthCheckResponse, String>),
    Ffmpeg    (Result<FfmpegStatus, String>),
    Imported  { job_id: Uuid, outcome: Result<ImportVideoResponse, String> },
    Listed    { epoch: u64, outcome: Result<Vec<MediaAsset>, String> },
    Refreshed (Result<MediaAsset, String>),
}

/// Called after every result is queued, so an idle UI wakes up to drain it.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct ApiWorker {
    pub rx:   Receiver<ApiResult>,
    tx:       Sender<ApiResult>,
    client:   ApiClient,
    waker:    Waker,
    shutdown: Arc<AtomicBool>,
}

impl ApiWorker {
    pub fn new(client: ApiClient, waker: Waker) -> Self {
        // Unbounded: a spawn-failure report must always fit.
        let (tx, rx) = unbounded();
        info!(base_url = client.base_url(), "api worker ready");
        Self {
            rx,
            tx,
            client,
            waker,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn health_check(&self) {
        self.spawn(
            "health",
            |c| ApiResult::Health(c.health_check().map_err(normalize)),
            |msg| ApiResult::Health(Err(msg)),
        );
    }

    pub fn check_ffmpeg(&self) {
        self.spawn(
            "ffmpeg",
            |c| ApiResult::Ffmpeg(c.check_ffmpeg().map_err(normalize)),
            |msg| ApiResult::Ffmpeg(Err(msg)),
        );
    }

    pub fn import_videos(&self, ticket: ImportTicket) {
        let ImportTicket { job_id, file_paths } = ticket;
        info!(%job_id, files = file_paths.len(), "import requested");
        self.spawn(
            "import",
            move |c| ApiResult::Imported {
                job_id,
                outcome: c.import_videos(&file_paths).map_err(normalize),
            },
            move |msg| ApiResult::Imported { job_id, outcome: Err(msg) },
        );
    }

    /// `epoch` comes from `AppState::begin_list` and is echoed back.
    pub fn list_media_assets(&self, epoch: u64) {
        self.spawn(
            "list",
            move |c| ApiResult::Listed { epoch, outcome: c.list_media_assets().map_err(normalize) },
            move |msg| ApiResult::Listed { epoch, outcome: Err(msg) },
        );
    }

    pub fn refresh_asset(&self, id: String) {
        self.spawn(
            "refresh",
            move |c| ApiResult::Refreshed(c.get_media_asset(&id).map_err(normalize)),
            |msg| ApiResult::Refreshed(Err(msg)),
        );
    }

    /// Stop delivering results. Requests already on the wire run to
    /// completion (bounded by the client timeout) and are discarded.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Run `request` on a fresh thread. `failed` builds the result reported
    /// when the thread cannot be started, so callers waiting on an outcome
    /// (the import in-flight flag in particular) are always released.
    fn spawn<F, E>(&self, label: &'static str, request: F, failed: E)
    where
        F: FnOnce(&ApiClient) -> ApiResult + Send + 'static,
        E: FnOnce(String) -> ApiResult,
    {
        if self.shutdown.load(Ordering::SeqCst) {
            debug!(label, "worker shut down, request dropped");
            return;
        }
        let client   = self.client.clone();
        let tx       = self.tx.clone();
        let waker    = Arc::clone(&self.waker);
        let shutdown = Arc::clone(&self.shutdown);

        let spawned = thread::Builder::new()
            .name(format!("api-{label}"))
            .spawn(move || {
                let result = request(&client);
                if shutdown.load(Ordering::SeqCst) {
                    return;
                }
                if tx.send(result).is_ok() {
                    waker();
                }
            });

        if let Err(e) = spawned {
            warn!(label, error = %e, "could not spawn request thread");
            self.report(label, failed(e.to_string()));
        }
    }

    /// Queue a result from the calling thread.
    fn report(&self, label: &'static str, result: ApiResult) {
        match self.tx.send(result) {
            Ok(())  => (self.waker)(),
            Err(_)  => error!(label, "result channel closed, failure report lost"),
        }
    }
}

fn normalize(err: ApiError) -> String {
    err.user_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use crate::config::ApiConfig;

    fn idle_worker(woke: Arc<AtomicUsize>) -> ApiWorker {
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"));
        ApiWorker::new(client, Arc::new(move || {
            woke.fetch_add(1, Ordering::SeqCst);
        }))
    }

    #[test]
    fn failure_reports_survive_a_backlog() {
        let woke = Arc::new(AtomicUsize::new(0));
        let worker = idle_worker(Arc::clone(&woke));

        // Nobody drains rx while these pile up.
        for _ in 0..200 {
            worker.report("list", ApiResult::Listed { epoch: 0, outcome: Err("busy".into()) });
        }
        let job_id = Uuid::new_v4();
        worker.report("import", ApiResult::Imported { job_id, outcome: Err("spawn failed".into()) });

        let results: Vec<ApiResult> = worker.rx.try_iter().collect();
        assert_eq!(results.len(), 201);
        assert!(matches!(
            results.last(),
            Some(ApiResult::Imported { job_id: id, outcome: Err(_) }) if *id == job_id
        ));
        assert_eq!(woke.load(Ordering::SeqCst), 201);
    }
}
