//! Render-ready projection of `UiState`.
//!
//! The UI draws exactly what `UiState::view` returns; no widget reads the
//! state directly.

use super::model::{EntryStatus, GenerationDisplay, UiState, UploadEntry};
use crate::models::{ErrorReport, GenerationItem, SamplingRate};

pub const GENERATE_LABEL: &str = "Generate";
pub const GENERATING_LABEL: &str = "Generating...";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const PREFIX_ERROR_TEXT: &str =
    "Must start with a letter or underscore and contain only letters, digits and underscores";

/// Everything the window shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub drop_highlighted: bool,
    /// `None` until the first batch with accepted files.
    pub entries: Option<Vec<EntryView>>,
    pub prefix: PrefixView,
    pub sampling_rate: SamplingRate,
    pub generate: ButtonView,
    pub results: ResultsPanel,
    /// Header panels; empty when the artifact panel is hidden.
    pub artifacts: Vec<ArtifactView>,
}

/// One upload list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub summary: String,
    /// Bold suffix naming the raw file.
    pub raw_note: Option<String>,
    /// Preformatted block: conversion log or error detail.
    pub detail: Option<String>,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixView {
    pub text: String,
    pub enabled: bool,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

/// Generation results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsPanel {
    Hidden,
    Lines(Vec<ResultLine>),
    Error(ErrorBlock),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLine {
    Generated {
        text: String,
        log: Option<String>,
    },
    Failed(String),
}

/// Red block with a bold message and optional monospaced detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBlock {
    pub message: String,
    pub detail: Option<String>,
}

impl From<&ErrorReport> for ErrorBlock {
    fn from(report: &ErrorReport) -> Self {
        Self {
            message: report.message.clone(),
            detail: report.detail.clone(),
        }
    }
}

/// One generated header with its actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactView {
    /// Index into the generation results, used by copy and download.
    pub index: usize,
    pub title: String,
    pub content: String,
    pub copy_label: &'static str,
}

impl UiState {
    pub fn view(&self) -> SessionView {
        let status = self.prefix_status();

        SessionView {
            drop_highlighted: self.drop_highlighted,
            entries: self
                .file_list_visible
                .then(|| self.entries.iter().map(entry_view).collect()),
            prefix: PrefixView {
                text: self.prefix.clone(),
                enabled: self.prefix_enabled,
                error: status.shows_error().then_some(PREFIX_ERROR_TEXT),
            },
            sampling_rate: self.sampling_rate,
            generate: ButtonView {
                label: if self.generating {
                    GENERATING_LABEL
                } else {
                    GENERATE_LABEL
                },
                enabled: self.can_generate(),
            },
            results: self.results_panel(),
            artifacts: self.artifact_views(),
        }
    }

    fn results_panel(&self) -> ResultsPanel {
        match &self.generation {
            GenerationDisplay::Hidden => ResultsPanel::Hidden,
            GenerationDisplay::Error(report) => ResultsPanel::Error(report.into()),
            GenerationDisplay::Results(items) => ResultsPanel::Lines(
                items
                    .iter()
                    .map(|item| match item {
                        GenerationItem::Artifact(artifact) => ResultLine::Generated {
                            text: format!(
                                "Generated: {} from {}",
                                artifact.output_file, artifact.source_file
                            ),
                            log: artifact.generator_log.clone(),
                        },
                        GenerationItem::Failed { message } => ResultLine::Failed(message.clone()),
                    })
                    .collect(),
            ),
        }
    }

    fn artifact_views(&self) -> Vec<ArtifactView> {
        let GenerationDisplay::Results(items) = &self.generation else {
            return Vec::new();
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                GenerationItem::Artifact(artifact) => {
                    artifact.header_content.as_ref().map(|content| ArtifactView {
                        index,
                        title: artifact.output_file.clone(),
                        content: content.clone(),
                        copy_label: if self.is_copy_acknowledged(index) {
                            COPIED_LABEL
                        } else {
                            COPY_LABEL
                        },
                    })
                }
                GenerationItem::Failed { .. } => None,
            })
            .collect()
    }
}

fn entry_view(entry: &UploadEntry) -> EntryView {
    match &entry.status {
        EntryStatus::Converting => EntryView {
            summary: format!("{}: converting...", entry.file_name),
            raw_note: None,
            detail: None,
            is_error: false,
        },
        EntryStatus::Done(receipt) => EntryView {
            summary: format!(
                "Original: {}, Saved as: {}",
                receipt.original_filename, receipt.saved_path
            ),
            raw_note: receipt
                .raw_path
                .as_ref()
                .map(|raw| format!(" -> RAW file: {raw}")),
            detail: receipt.conversion_log.clone(),
            is_error: false,
        },
        EntryStatus::Failed(report) => EntryView {
            summary: format!("Error uploading {}: {}", entry.file_name, report.message),
            raw_note: None,
            detail: report.detail.clone(),
            is_error: true,
        },
    }
}
