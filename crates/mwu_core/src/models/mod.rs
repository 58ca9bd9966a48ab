//! Data models for Mozzi Wavetable Uploader.
//!
//! - Sampling rate selection
//! - Upload and generation outcomes as the UI consumes them
//! - Wire formats of the `/upload` and `/generate` endpoints

mod enums;
mod outcomes;
mod wire;

pub use enums::SamplingRate;
pub use outcomes::{
    ErrorReport, GeneratedArtifact, GenerationItem, GenerationOutcome, UploadOutcome,
    UploadReceipt,
};
pub use wire::{GenerateBody, GenerateResponse, GenerateResultItem, UploadResponse};
