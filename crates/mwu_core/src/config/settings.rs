//! Settings struct with TOML-based sections.

use serde::{Deserialize, Serialize};

use crate::intake::MAX_FILE_SIZE;
use crate::logging::LogLevel;
use crate::models::SamplingRate;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Conversion server connection.
    #[serde(default)]
    pub server: ServerSettings,

    /// File intake limits.
    #[serde(default)]
    pub intake: IntakeSettings,

    /// Interaction timing and defaults.
    #[serde(default)]
    pub ui: UiSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the conversion server lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Conversion of a large file can take a while.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Limits applied before anything is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSettings {
    /// Largest accepted file in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

fn default_max_file_size() -> u64 {
    MAX_FILE_SIZE
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

/// Interaction defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Sampling rate selected at startup.
    #[serde(default)]
    pub default_sampling_rate: SamplingRate,

    /// How long a Copy button shows "Copied!".
    #[serde(default = "default_copy_ack_millis")]
    pub copy_ack_millis: u64,

    /// Window for collecting the per-file drop events of one drop gesture.
    #[serde(default = "default_drop_settle_millis")]
    pub drop_settle_millis: u64,
}

fn default_copy_ack_millis() -> u64 {
    1000
}

fn default_drop_settle_millis() -> u64 {
    60
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_sampling_rate: SamplingRate::default(),
            copy_ack_millis: default_copy_ack_millis(),
            drop_settle_millis: default_drop_settle_millis(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
}
