//! MWU Core - Client logic for Mozzi Wavetable Uploader
//!
//! This crate contains file intake, the session state machine and the calls
//! to the conversion server, with zero UI dependencies.

pub mod api;
pub mod config;
pub mod identifier;
pub mod intake;
pub mod logging;
pub mod models;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
