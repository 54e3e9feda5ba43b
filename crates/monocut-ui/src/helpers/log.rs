// crates/monocut-ui/src/helpers/log.rs
//
// Logging setup for the binary.
//
// Release builds on Windows run with `windows_subsystem = "windows"`, so there
// is no console to read stderr from. Every event also goes to a file in the
// OS temp dir, which is visible regardless of launch mode.
//
// File: %TEMP%\monocut.log (or $TMPDIR/monocut.log), append-only.
// Level: `info` unless RUST_LOG says otherwise, e.g. RUST_LOG=monocut_api=debug.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "monocut.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging() {
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(cfg!(debug_assertions));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    match installed {
        Ok(())  => { let _ = LOG_GUARD.set(guard); }
        // No subscriber of ours to report through.
        Err(e)  => eprintln!("[log] subscriber not installed: {e}"),
    }
}
