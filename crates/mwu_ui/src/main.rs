//! Mozzi Wavetable Uploader - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - HTTP client construction
//! - Application launch

use std::path::PathBuf;

use anyhow::Context;
use iced::Size;

use mwu_core::api::ApiClient;
use mwu_core::config::ConfigManager;
use mwu_core::logging::init_tracing;

mod app;
mod handlers;
mod pages;
mod theme;
mod widgets;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> anyhow::Result<()> {
    let mut config_manager = ConfigManager::new(default_config_path());

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    init_tracing(config_manager.settings().logging.level);

    tracing::info!("Mozzi Wavetable Uploader starting");
    tracing::info!("Config: {}", config_manager.path().display());
    tracing::info!("Core version: {}", mwu_core::version());

    let settings = config_manager.settings().clone();
    let client = ApiClient::new(&settings.server).context("Failed to build HTTP client")?;
    tracing::info!("Server: {}", client.base_url());

    iced::application(
        move || App::new(settings.clone(), client.clone()),
        App::update,
        App::view,
    )
    .title("Mozzi Wavetable Uploader")
    .subscription(App::subscription)
    .window_size(Size::new(920.0, 780.0))
    .run()?;

    Ok(())
}
