//! Remap API Server module
//!
//! HTTP front end for the remapping pipeline.
//! Run with `excel-remap serve` or `remap-server`.

pub mod handlers;
pub mod server;

pub use server::{router, run_api_server, ApiConfig, AppState};
