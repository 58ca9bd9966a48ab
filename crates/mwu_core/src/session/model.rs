//! Session state model

use std::collections::HashMap;
use std::time::Duration;

use crate::config::Settings;
use crate::identifier::PrefixStatus;
use crate::models::{ErrorReport, GenerationItem, SamplingRate, UploadReceipt};

/// Identifies one batch of uploads. Results tagged with an older id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BatchId(pub u64);

impl BatchId {
    pub fn next(self) -> Self {
        BatchId(self.0 + 1)
    }
}

/// Upload progress of one accepted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Converting,
    Done(UploadReceipt),
    Failed(ErrorReport),
}

/// One line of the upload list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEntry {
    pub file_name: String,
    pub status: EntryStatus,
}

/// What the generation area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationDisplay {
    #[default]
    Hidden,
    Results(Vec<GenerationItem>),
    Error(ErrorReport),
}

/// Window state
#[derive(Debug, Clone)]
pub struct UiState {
    // Limits and timings
    pub max_file_size_bytes: u64,
    pub copy_ack: Duration,

    // Intake
    pub drop_highlighted: bool,
    pub batch: BatchId,
    pub entries: Vec<UploadEntry>,
    pub file_list_visible: bool,

    // Generation inputs
    pub prefix: String,
    pub prefix_enabled: bool,
    pub sampling_rate: SamplingRate,

    // Generation
    pub batch_has_success: bool,
    pub generating: bool,
    pub generation: GenerationDisplay,

    /// Artifacts currently acknowledging a copy, with the token of the
    /// timer that will clear them.
    pub(crate) copied: HashMap<usize, u64>,
    pub(crate) next_token: u64,
}

impl UiState {
    pub fn new(max_file_size_bytes: u64, sampling_rate: SamplingRate, copy_ack: Duration) -> Self {
        Self {
            max_file_size_bytes,
            copy_ack,
            drop_highlighted: false,
            batch: BatchId::default(),
            entries: Vec::new(),
            file_list_visible: false,
            prefix: String::new(),
            prefix_enabled: false,
            sampling_rate,
            batch_has_success: false,
            generating: false,
            generation: GenerationDisplay::Hidden,
            copied: HashMap::new(),
            next_token: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.intake.max_file_size_bytes,
            settings.ui.default_sampling_rate,
            Duration::from_millis(settings.ui.copy_ack_millis),
        )
    }

    pub fn prefix_status(&self) -> PrefixStatus {
        PrefixStatus::of(&self.prefix)
    }

    /// Generate needs a converted file in this batch, a usable prefix and no
    /// generation already running.
    pub fn can_generate(&self) -> bool {
        self.batch_has_success && self.prefix_status().is_usable() && !self.generating
    }

    /// Artifact at `index` of the current results, if it has header text.
    pub(crate) fn artifact_content(&self, index: usize) -> Option<(&str, &str)> {
        let GenerationDisplay::Results(items) = &self.generation else {
            return None;
        };
        match items.get(index)? {
            GenerationItem::Artifact(artifact) => artifact
                .header_content
                .as_deref()
                .map(|content| (artifact.output_file.as_str(), content)),
            GenerationItem::Failed { .. } => None,
        }
    }

    pub fn is_copy_acknowledged(&self, index: usize) -> bool {
        self.copied.contains_key(&index)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
