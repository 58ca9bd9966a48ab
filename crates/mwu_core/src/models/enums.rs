//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Output sampling rate passed to `sox -r` and to the wavetable generator.
///
/// Mozzi runs its audio engine at 16384 Hz by default and 32768 Hz in HiFi
/// mode; 8192 Hz halves table size for small flash budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SamplingRate {
    #[serde(rename = "8192")]
    Hz8192,
    #[default]
    #[serde(rename = "16384")]
    Hz16384,
    #[serde(rename = "32768")]
    Hz32768,
}

impl SamplingRate {
    /// All selectable rates, in display order.
    pub const ALL: &'static [SamplingRate] =
        &[SamplingRate::Hz8192, SamplingRate::Hz16384, SamplingRate::Hz32768];

    pub fn hz(self) -> u32 {
        match self {
            SamplingRate::Hz8192 => 8192,
            SamplingRate::Hz16384 => 16384,
            SamplingRate::Hz32768 => 32768,
        }
    }

    /// Value sent in form fields and JSON bodies.
    pub fn as_form_value(self) -> String {
        self.hz().to_string()
    }
}

impl std::fmt::Display for SamplingRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Hz", self.hz())
    }
}
