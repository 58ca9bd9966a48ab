//! Session messages (events) and effects

use std::path::PathBuf;
use std::time::Duration;

use super::model::BatchId;
use crate::intake::{CandidateFile, Notice};
use crate::models::{GenerationOutcome, SamplingRate, UploadOutcome};

/// Events fed into `UiState::update`.
#[derive(Debug, Clone)]
pub enum SessionMsg {
    // === Drop zone ===
    /// Files are being dragged over the window
    DragEntered,
    /// Drag left the window without dropping
    DragLeft,

    // === Intake ===
    /// One picked or dropped batch
    FilesSelected(Vec<CandidateFile>),

    // === Inputs ===
    PrefixEdited(String),
    SamplingRateSelected(SamplingRate),

    // === Upload responses ===
    UploadFinished {
        batch: BatchId,
        entry: usize,
        outcome: UploadOutcome,
    },

    // === Generation ===
    /// Generate button pressed
    GenerateRequested,
    GenerationFinished {
        batch: BatchId,
        outcome: GenerationOutcome,
    },

    // === Artifact actions ===
    CopyRequested(usize),
    CopySucceeded(usize),
    CopyFailed(usize, String),
    /// Timer for a "Copied!" acknowledgement ran out
    CopyAckExpired { artifact: usize, token: u64 },
    DownloadRequested(usize),
    /// Save dialog finished: saved path, `None` if cancelled, or an error
    DownloadFinished(Result<Option<PathBuf>, String>),
}

/// One upload to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub batch: BatchId,
    pub entry: usize,
    pub file: CandidateFile,
    pub output_prefix: String,
    pub sampling_rate: SamplingRate,
}

/// The generation call to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub batch: BatchId,
    pub output_prefix: String,
    pub sampling_rate: SamplingRate,
}

/// Side effects requested by the reducer, executed by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking message
    Notify(Notice),
    Upload(UploadRequest),
    Generate(GenerateRequest),
    CopyToClipboard { artifact: usize, content: String },
    /// Send `CopyAckExpired` after `after`
    ExpireCopyAck {
        artifact: usize,
        token: u64,
        after: Duration,
    },
    /// Ask where to save `content`, suggesting `file_name`
    SaveArtifact { file_name: String, content: String },
}
