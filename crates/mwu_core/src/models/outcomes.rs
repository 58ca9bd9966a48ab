//! Outcomes of the two server calls, as the session state consumes them.

/// Message plus optional detail, rendered as an error block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    pub detail: Option<String>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            message: message.into(),
            detail,
        }
    }
}

/// What the server reported for a successfully converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub original_filename: String,
    /// Where the server stored the uploaded file.
    pub saved_path: String,
    /// Where `sox` wrote the raw conversion, if reported.
    pub raw_path: Option<String>,
    /// `sox` console output, if any.
    pub conversion_log: Option<String>,
}

/// Result of uploading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success(UploadReceipt),
    Failure(ErrorReport),
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success(_))
    }
}

/// One generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Name of the generated header, also the default download name.
    pub output_file: String,
    /// Raw file the header was generated from.
    pub source_file: String,
    /// Generator console output, if any.
    pub generator_log: Option<String>,
    /// Header text, if the generator produced a file.
    pub header_content: Option<String>,
}

/// One entry of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationItem {
    Artifact(GeneratedArtifact),
    /// The server could not process one raw file but carried on with the rest.
    Failed { message: String },
}

/// Result of one `/generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success(Vec<GenerationItem>),
    Failure(ErrorReport),
}
