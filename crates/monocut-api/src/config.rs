// crates/monocut-api/src/config.rs
//
// Backend location and request timeout, read once from the environment.
//
//   MONOCUT_BACKEND_URL            default http://127.0.0.1:8000
//   MONOCUT_REQUEST_TIMEOUT_SECS   default 30

use std::time::Duration;

pub const DEFAULT_BASE_URL:     &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64  = 30;

pub const ENV_BASE_URL: &str = "MONOCUT_BACKEND_URL";
pub const ENV_TIMEOUT:  &str = "MONOCUT_REQUEST_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// No trailing slash.
    pub base_url: String,
    /// Applies to the whole request, connect through body.
    pub timeout:  Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout:  Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(ENV_BASE_URL)
            .map(|v| normalize_base_url(&v))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = lookup(ENV_TIMEOUT)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self { base_url, timeout }
    }

    /// Absolute URL for an API path such as `/api/health`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
