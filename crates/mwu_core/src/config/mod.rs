//! Configuration management for Mozzi Wavetable Uploader.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults for every missing key
//!
//! Only client configuration lives here. Upload and generation state is
//! held in memory for the lifetime of the window and never written out.
//!
//! # Example
//!
//! ```no_run
//! use mwu_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Server: {}", config.settings().server.base_url);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{IntakeSettings, LoggingSettings, ServerSettings, Settings, UiSettings};
