// crates/monocut-core/src/lib.rs
//
// Pure application data for MonoCut: no egui, no network, no threads.
// Both monocut-api and monocut-ui build on these types.

pub mod commands;
pub mod helpers;
pub mod media_types;
pub mod path_resolve;
pub mod registry;
pub mod state;
pub mod view;
