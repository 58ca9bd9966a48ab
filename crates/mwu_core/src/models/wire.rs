//! JSON bodies exchanged with the conversion server.
//!
//! Every response field is optional on the wire; the conversions below decide
//! which shape a response has. Empty strings count as absent.

use serde::{Deserialize, Serialize};

use super::enums::SamplingRate;
use super::outcomes::{
    ErrorReport, GeneratedArtifact, GenerationItem, GenerationOutcome, UploadOutcome,
    UploadReceipt,
};

/// Response of `POST /upload`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    pub filepath: Option<String>,
    pub original_filename: Option<String>,
    pub sox_output: Option<String>,
    pub raw_filepath: Option<String>,
    pub error: Option<String>,
    pub details: Option<String>,
}

impl UploadResponse {
    /// Interpret the response. `None` if it is neither a success nor an error.
    ///
    /// `fallback_name` is used when the server omits `original_filename`.
    pub fn into_outcome(self, fallback_name: &str) -> Option<UploadOutcome> {
        if let Some(saved_path) = non_empty(self.filepath) {
            return Some(UploadOutcome::Success(UploadReceipt {
                original_filename: non_empty(self.original_filename)
                    .unwrap_or_else(|| fallback_name.to_string()),
                saved_path,
                raw_path: non_empty(self.raw_filepath),
                conversion_log: non_empty(self.sox_output),
            }));
        }

        non_empty(self.error).map(|message| {
            UploadOutcome::Failure(ErrorReport::new(message, non_empty(self.details)))
        })
    }
}

/// Request body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateBody {
    pub output_prefix: String,
    pub sampling_rate: SamplingRate,
}

/// Response of `POST /generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    pub success: Option<bool>,
    #[serde(default)]
    pub results: Vec<GenerateResultItem>,
    pub error: Option<String>,
    pub details: Option<String>,
}

/// One entry of `results`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResultItem {
    pub output_file: Option<String>,
    pub raw_file: Option<String>,
    pub char2mozzi_output: Option<String>,
    pub h_file_content: Option<String>,
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Interpret the response. `None` if it is neither a success nor an error.
    pub fn into_outcome(self) -> Option<GenerationOutcome> {
        if self.success == Some(true) {
            let items = self
                .results
                .into_iter()
                .map(GenerateResultItem::into_item)
                .collect();
            return Some(GenerationOutcome::Success(items));
        }

        non_empty(self.error).map(|message| {
            GenerationOutcome::Failure(ErrorReport::new(message, non_empty(self.details)))
        })
    }
}

impl GenerateResultItem {
    fn into_item(self) -> GenerationItem {
        if let Some(message) = non_empty(self.error) {
            return GenerationItem::Failed { message };
        }
        GenerationItem::Artifact(GeneratedArtifact {
            output_file: self.output_file.unwrap_or_default(),
            source_file: self.raw_file.unwrap_or_default(),
            generator_log: non_empty(self.char2mozzi_output),
            header_content: non_empty(self.h_file_content),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
