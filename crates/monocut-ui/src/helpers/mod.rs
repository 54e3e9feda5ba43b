pub mod import;
pub mod log;
