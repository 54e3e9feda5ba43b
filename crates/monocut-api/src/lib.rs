// crates/monocut-api/src/lib.rs
//
// HTTP boundary to the media backend. No egui dependency; monocut-ui talks
// to it through ApiWorker's result channel only.

pub mod client;
pub mod config;
pub mod error;
pub mod worker;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{extract_error_message, ApiError, UNKNOWN_ERROR};
pub use worker::{ApiResult, ApiWorker};
