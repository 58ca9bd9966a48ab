//! Session reducer

use super::messages::{Effect, GenerateRequest, SessionMsg, UploadRequest};
use super::model::{BatchId, EntryStatus, GenerationDisplay, UiState, UploadEntry};
use crate::identifier::sanitize;
use crate::intake::{classify, CandidateFile, Notice, SUPPORTED_EXTENSIONS};
use crate::models::{GenerationOutcome, UploadOutcome};

/// Notice raised when Generate is pressed with an empty prefix.
pub const PREFIX_REQUIRED: &str = "Please enter an output prefix";

const CLIPBOARD_FAILED: &str = "Failed to copy to clipboard";

impl UiState {
    /// Apply one message and return the effects the UI must run.
    pub fn update(&mut self, msg: SessionMsg) -> Vec<Effect> {
        match msg {
            SessionMsg::DragEntered => {
                self.drop_highlighted = true;
                Vec::new()
            }
            SessionMsg::DragLeft => {
                self.drop_highlighted = false;
                Vec::new()
            }
            SessionMsg::FilesSelected(files) => self.select_files(files),
            SessionMsg::PrefixEdited(text) => {
                if self.prefix_enabled {
                    self.prefix = text;
                }
                Vec::new()
            }
            SessionMsg::SamplingRateSelected(rate) => {
                self.sampling_rate = rate;
                Vec::new()
            }
            SessionMsg::UploadFinished {
                batch,
                entry,
                outcome,
            } => {
                self.finish_upload(batch, entry, outcome);
                Vec::new()
            }
            SessionMsg::GenerateRequested => self.request_generation(),
            SessionMsg::GenerationFinished { batch, outcome } => {
                self.finish_generation(batch, outcome);
                Vec::new()
            }
            SessionMsg::CopyRequested(artifact) => self
                .artifact_content(artifact)
                .map(|(_, content)| Effect::CopyToClipboard {
                    artifact,
                    content: content.to_string(),
                })
                .into_iter()
                .collect(),
            SessionMsg::CopySucceeded(artifact) => self.acknowledge_copy(artifact),
            SessionMsg::CopyFailed(artifact, error) => {
                tracing::warn!("Copy of artifact {} failed: {}", artifact, error);
                vec![Effect::Notify(Notice::new("Clipboard", CLIPBOARD_FAILED))]
            }
            SessionMsg::CopyAckExpired { artifact, token } => {
                if self.copied.get(&artifact) == Some(&token) {
                    self.copied.remove(&artifact);
                }
                Vec::new()
            }
            SessionMsg::DownloadRequested(artifact) => self
                .artifact_content(artifact)
                .map(|(file_name, content)| Effect::SaveArtifact {
                    file_name: file_name.to_string(),
                    content: content.to_string(),
                })
                .into_iter()
                .collect(),
            SessionMsg::DownloadFinished(result) => match result {
                Ok(Some(path)) => {
                    tracing::info!("Saved header to {}", path.display());
                    Vec::new()
                }
                Ok(None) => {
                    tracing::debug!("Save dialog cancelled");
                    Vec::new()
                }
                Err(error) => {
                    tracing::error!("Saving header failed: {}", error);
                    vec![Effect::Notify(Notice::new(
                        "Download failed",
                        format!("Failed to save file: {error}"),
                    ))]
                }
            },
        }
    }

    /// Classify a batch, reset the panels and start one upload per accepted file.
    fn select_files(&mut self, files: Vec<CandidateFile>) -> Vec<Effect> {
        self.drop_highlighted = false;
        if files.is_empty() {
            return Vec::new();
        }

        let report = classify(files, self.max_file_size_bytes, SUPPORTED_EXTENSIONS);
        let notices = report.notices(self.max_file_size_bytes, SUPPORTED_EXTENSIONS);

        let mut effects = Vec::new();

        if let Some(first) = report.accepted.first() {
            self.prefix = sanitize(&first.name);
            self.prefix_enabled = true;
            self.start_batch();

            for (entry, file) in report.accepted.into_iter().enumerate() {
                self.entries.push(UploadEntry {
                    file_name: file.name.clone(),
                    status: EntryStatus::Converting,
                });
                effects.push(Effect::Upload(UploadRequest {
                    batch: self.batch,
                    entry,
                    file,
                    output_prefix: self.prefix.clone(),
                    sampling_rate: self.sampling_rate,
                }));
            }
            tracing::info!(
                "Batch {} started with {} file(s)",
                self.batch.0,
                self.entries.len()
            );
        } else {
            self.prefix.clear();
            self.prefix_enabled = false;
        }

        // Notices come first so they show before the uploads report back
        let mut ordered: Vec<Effect> = notices.into_iter().map(Effect::Notify).collect();
        ordered.append(&mut effects);
        ordered
    }

    /// New batch id, with the previous list and generation display dropped.
    fn start_batch(&mut self) {
        self.batch = self.batch.next();
        self.entries.clear();
        self.file_list_visible = true;
        self.batch_has_success = false;
        self.generation = GenerationDisplay::Hidden;
        self.copied.clear();
    }

    fn finish_upload(&mut self, batch: BatchId, entry: usize, outcome: UploadOutcome) {
        if batch != self.batch {
            tracing::debug!(
                "Ignoring upload result for batch {} (current {})",
                batch.0,
                self.batch.0
            );
            return;
        }
        let Some(slot) = self.entries.get_mut(entry) else {
            tracing::warn!("Upload result for unknown entry {}", entry);
            return;
        };

        slot.status = match outcome {
            UploadOutcome::Success(receipt) => {
                self.batch_has_success = true;
                EntryStatus::Done(receipt)
            }
            UploadOutcome::Failure(report) => EntryStatus::Failed(report),
        };
    }

    fn request_generation(&mut self) -> Vec<Effect> {
        if self.generating {
            return Vec::new();
        }
        if self.prefix.is_empty() {
            return vec![Effect::Notify(Notice::new("Output prefix", PREFIX_REQUIRED))];
        }
        if !self.can_generate() {
            tracing::debug!("Generate requested while unavailable");
            return Vec::new();
        }

        self.generating = true;
        vec![Effect::Generate(GenerateRequest {
            batch: self.batch,
            output_prefix: self.prefix.clone(),
            sampling_rate: self.sampling_rate,
        })]
    }

    fn finish_generation(&mut self, batch: BatchId, outcome: GenerationOutcome) {
        self.generating = false;

        if batch != self.batch {
            tracing::debug!("Discarding generation result from batch {}", batch.0);
            return;
        }

        self.copied.clear();
        self.generation = match outcome {
            GenerationOutcome::Success(items) => GenerationDisplay::Results(items),
            GenerationOutcome::Failure(report) => GenerationDisplay::Error(report),
        };
    }

    fn acknowledge_copy(&mut self, artifact: usize) -> Vec<Effect> {
        self.next_token += 1;
        let token = self.next_token;
        self.copied.insert(artifact, token);

        vec![Effect::ExpireCopyAck {
            artifact,
            token,
            after: self.copy_ack,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::MAX_FILE_SIZE;
    use crate::models::{
        ErrorReport, GeneratedArtifact, GenerationItem, SamplingRate, UploadReceipt,
    };
    use std::path::PathBuf;
    use std::time::Duration;

    fn state() -> UiState {
        UiState::new(MAX_FILE_SIZE, SamplingRate::Hz16384, Duration::from_secs(1))
    }

    fn file(name: &str, size: u64) -> CandidateFile {
        CandidateFile::new(name, size, PathBuf::from("/music").join(name))
    }

    fn receipt(name: &str) -> UploadReceipt {
        UploadReceipt {
            original_filename: name.to_string(),
            saved_path: format!("uploads/{name}"),
            raw_path: Some(format!("uploads/{name}.raw")),
            conversion_log: None,
        }
    }

    fn artifact(name: &str, content: Option<&str>) -> GenerationItem {
        GenerationItem::Artifact(GeneratedArtifact {
            output_file: format!("{name}.h"),
            source_file: format!("{name}.raw"),
            generator_log: None,
            header_content: content.map(str::to_string),
        })
    }

    fn uploads(effects: &[Effect]) -> Vec<&UploadRequest> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Upload(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    /// State with one converted upload in the current batch.
    fn ready(name: &str) -> UiState {
        let mut state = state();
        state.update(SessionMsg::FilesSelected(vec![file(name, 10)]));
        state.update(SessionMsg::UploadFinished {
            batch: state.batch,
            entry: 0,
            outcome: UploadOutcome::Success(receipt(name)),
        });
        state
    }

    #[test]
    fn accepted_batch_derives_prefix_and_starts_uploads() {
        let mut state = state();
        let effects = state.update(SessionMsg::FilesSelected(vec![
            file("My Song! 01.mp3", 10),
            file("other.wav", 10),
        ]));

        assert_eq!(state.prefix, "My_Song__01");
        assert!(state.prefix_enabled);
        assert!(state.file_list_visible);

        let requests = uploads(&effects);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].entry, 0);
        assert_eq!(requests[1].file.name, "other.wav");
        assert!(requests.iter().all(|r| r.output_prefix == "My_Song__01"));
        assert!(state
            .entries
            .iter()
            .all(|e| e.status == EntryStatus::Converting));
    }

    #[test]
    fn rejected_files_notify_once_per_category_before_uploads() {
        let mut state = state();
        let effects = state.update(SessionMsg::FilesSelected(vec![
            file("big.wav", MAX_FILE_SIZE + 1),
            file("huge.wav", MAX_FILE_SIZE * 2),
            file("a.txt", 1),
            file("ok.wav", 1),
        ]));

        assert_eq!(effects.len(), 3);
        assert!(matches!(&effects[0], Effect::Notify(n) if n.title == "Files too large"));
        assert!(matches!(&effects[1], Effect::Notify(n) if n.title == "Unsupported file types"));
        assert!(matches!(&effects[2], Effect::Upload(r) if r.file.name == "ok.wav"));
    }

    #[test]
    fn batch_without_accepted_files_clears_and_disables_prefix() {
        let mut state = ready("kick.wav");
        let effects = state.update(SessionMsg::FilesSelected(vec![file("notes.txt", 1)]));

        assert_eq!(effects.len(), 1);
        assert!(state.prefix.is_empty());
        assert!(!state.prefix_enabled);
        assert!(!state.can_generate());
    }

    #[test]
    fn prefix_edits_are_validated_live() {
        let mut state = ready("kick.wav");
        assert!(state.can_generate());

        state.update(SessionMsg::PrefixEdited("2cool".into()));
        assert!(state.prefix_status().shows_error());
        assert!(!state.can_generate());

        state.update(SessionMsg::PrefixEdited("cool2".into()));
        assert!(state.can_generate());

        state.update(SessionMsg::PrefixEdited(String::new()));
        assert!(!state.prefix_status().shows_error());
        assert!(!state.can_generate());
    }

    #[test]
    fn prefix_edits_ignored_while_field_disabled() {
        let mut state = state();
        state.update(SessionMsg::PrefixEdited("kick".into()));
        assert!(state.prefix.is_empty());
    }

    #[test]
    fn out_of_order_uploads_update_only_their_own_entry() {
        let mut state = state();
        state.update(SessionMsg::FilesSelected(vec![
            file("kick.wav", 1),
            file("snare.wav", 1),
        ]));
        let batch = state.batch;

        state.update(SessionMsg::UploadFinished {
            batch,
            entry: 1,
            outcome: UploadOutcome::Failure(ErrorReport::new("sox failed", None)),
        });
        assert_eq!(state.entries[0].status, EntryStatus::Converting);
        assert!(matches!(state.entries[1].status, EntryStatus::Failed(_)));
        assert!(!state.can_generate());

        state.update(SessionMsg::UploadFinished {
            batch,
            entry: 0,
            outcome: UploadOutcome::Success(receipt("kick.wav")),
        });
        assert_eq!(
            state.entries[0].status,
            EntryStatus::Done(receipt("kick.wav"))
        );
        assert!(matches!(state.entries[1].status, EntryStatus::Failed(_)));
        assert!(state.can_generate());
    }

    #[test]
    fn later_failure_does_not_revoke_generate() {
        let mut state = state();
        state.update(SessionMsg::FilesSelected(vec![file("a.wav", 1), file("b.wav", 1)]));
        let batch = state.batch;
        state.update(SessionMsg::UploadFinished {
            batch,
            entry: 0,
            outcome: UploadOutcome::Success(receipt("a.wav")),
        });
        state.update(SessionMsg::UploadFinished {
            batch,
            entry: 1,
            outcome: UploadOutcome::Failure(ErrorReport::new("bad", None)),
        });
        assert!(state.can_generate());
    }

    #[test]
    fn stale_upload_results_are_ignored() {
        let mut state = state();
        state.update(SessionMsg::FilesSelected(vec![file("old.wav", 1)]));
        let old = state.batch;
        state.update(SessionMsg::FilesSelected(vec![file("new.wav", 1)]));

        state.update(SessionMsg::UploadFinished {
            batch: old,
            entry: 0,
            outcome: UploadOutcome::Success(receipt("old.wav")),
        });
        assert_eq!(state.entries[0].file_name, "new.wav");
        assert_eq!(state.entries[0].status, EntryStatus::Converting);
        assert!(!state.batch_has_success);
    }

    #[test]
    fn empty_prefix_notifies_without_request() {
        let mut state = ready("kick.wav");
        state.update(SessionMsg::PrefixEdited(String::new()));

        let effects = state.update(SessionMsg::GenerateRequested);
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::new("Output prefix", PREFIX_REQUIRED))]
        );
        assert!(!state.generating);
    }

    #[test]
    fn generation_disables_button_until_finished() {
        let mut state = ready("kick.wav");

        let effects = state.update(SessionMsg::GenerateRequested);
        assert!(matches!(&effects[..], [Effect::Generate(r)] if r.output_prefix == "kick"));
        assert!(state.generating);
        assert!(!state.can_generate());

        // A second press while in flight does nothing
        assert!(state.update(SessionMsg::GenerateRequested).is_empty());

        state.update(SessionMsg::GenerationFinished {
            batch: state.batch,
            outcome: GenerationOutcome::Failure(ErrorReport::new(
                "An error occurred during generation",
                Some("connection refused".into()),
            )),
        });
        assert!(!state.generating);
        assert!(state.can_generate());
    }

    #[test]
    fn generation_failure_replaces_previous_results() {
        let mut state = ready("kick.wav");
        state.update(SessionMsg::GenerationFinished {
            batch: state.batch,
            outcome: GenerationOutcome::Success(vec![artifact("kick", Some("x"))]),
        });

        state.update(SessionMsg::GenerationFinished {
            batch: state.batch,
            outcome: GenerationOutcome::Failure(ErrorReport::new("bad state", None)),
        });
        assert_eq!(
            state.generation,
            GenerationDisplay::Error(ErrorReport::new("bad state", None))
        );
    }

    #[test]
    fn new_batch_hides_previous_generation() {
        let mut state = ready("kick.wav");
        state.update(SessionMsg::GenerationFinished {
            batch: state.batch,
            outcome: GenerationOutcome::Success(vec![artifact("kick", Some("x"))]),
        });
        state.update(SessionMsg::CopySucceeded(0));

        state.update(SessionMsg::FilesSelected(vec![file("snare.wav", 1)]));
        assert_eq!(state.generation, GenerationDisplay::Hidden);
        assert!(!state.is_copy_acknowledged(0));
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].file_name, "snare.wav");
    }

    #[test]
    fn stale_generation_only_restores_button() {
        let mut state = ready("kick.wav");
        state.update(SessionMsg::GenerateRequested);
        let old = state.batch;
        state.update(SessionMsg::FilesSelected(vec![file("snare.wav", 1)]));

        state.update(SessionMsg::GenerationFinished {
            batch: old,
            outcome: GenerationOutcome::Success(vec![artifact("kick", Some("x"))]),
        });
        assert!(!state.generating);
        assert_eq!(state.generation, GenerationDisplay::Hidden);
    }

    #[test]
    fn copy_and_download_only_for_artifacts_with_content() {
        let mut state = ready("kick.wav");
        state.update(SessionMsg::GenerationFinished {
            batch: state.batch,
            outcome: GenerationOutcome::Success(vec![
                artifact("kick", Some("const int8_t kick[] = {};")),
                artifact("empty", None),
                GenerationItem::Failed {
                    message: "Error processing x.raw".into(),
                },
            ]),
        });

        assert_eq!(
            state.update(SessionMsg::CopyRequested(0)),
            vec![Effect::CopyToClipboard {
                artifact: 0,
                content: "const int8_t kick[] = {};".into(),
            }]
        );
        assert_eq!(
            state.update(SessionMsg::DownloadRequested(0)),
            vec![Effect::SaveArtifact {
                file_name: "kick.h".into(),
                content: "const int8_t kick[] = {};".into(),
            }]
        );
        assert!(state.update(SessionMsg::CopyRequested(1)).is_empty());
        assert!(state.update(SessionMsg::DownloadRequested(2)).is_empty());
        assert!(state.update(SessionMsg::CopyRequested(9)).is_empty());
    }

    #[test]
    fn copy_acknowledgement_expires_with_latest_token_only() {
        let mut state = ready("kick.wav");

        let first = state.update(SessionMsg::CopySucceeded(0));
        let second = state.update(SessionMsg::CopySucceeded(0));
        let token_of = |effects: &[Effect]| match effects {
            [Effect::ExpireCopyAck { token, after, .. }] => {
                assert_eq!(*after, Duration::from_secs(1));
                *token
            }
            other => panic!("unexpected effects {other:?}"),
        };
        let (first, second) = (token_of(&first[..]), token_of(&second[..]));

        state.update(SessionMsg::CopyAckExpired {
            artifact: 0,
            token: first,
        });
        assert!(state.is_copy_acknowledged(0));

        state.update(SessionMsg::CopyAckExpired {
            artifact: 0,
            token: second,
        });
        assert!(!state.is_copy_acknowledged(0));
    }

    #[test]
    fn clipboard_and_save_failures_raise_notices() {
        let mut state = state();
        assert_eq!(
            state.update(SessionMsg::CopyFailed(0, "no display".into())),
            vec![Effect::Notify(Notice::new("Clipboard", CLIPBOARD_FAILED))]
        );
        assert!(matches!(
            &state.update(SessionMsg::DownloadFinished(Err("read-only".into())))[..],
            [Effect::Notify(n)] if n.message == "Failed to save file: read-only"
        ));
        assert!(state
            .update(SessionMsg::DownloadFinished(Ok(None)))
            .is_empty());
    }

    #[test]
    fn drag_highlight_follows_drag_and_drop() {
        let mut state = state();
        state.update(SessionMsg::DragEntered);
        assert!(state.drop_highlighted);
        state.update(SessionMsg::DragLeft);
        assert!(!state.drop_highlighted);

        state.update(SessionMsg::DragEntered);
        state.update(SessionMsg::FilesSelected(vec![file("a.wav", 1)]));
        assert!(!state.drop_highlighted);
    }

    #[test]
    fn sampling_rate_flows_into_requests() {
        let mut state = state();
        state.update(SessionMsg::SamplingRateSelected(SamplingRate::Hz32768));
        let effects = state.update(SessionMsg::FilesSelected(vec![file("a.wav", 1)]));
        assert_eq!(uploads(&effects)[0].sampling_rate, SamplingRate::Hz32768);
    }
}
