//! File intake: deciding which picked or dropped files get uploaded.
//!
//! A batch of candidates is split into three disjoint sets. The size check
//! runs first, so a file that is both too large and of the wrong type is
//! reported as too large.

mod candidate;
mod dropped;
mod paths;

pub use candidate::{describe_paths, CandidateFile};
pub use dropped::DropCollector;
pub use paths::{clean_dropped_path, paths_from_text};

/// Extensions `sox` is expected to read.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    ".wav", ".aiff", ".aif", ".flac", ".mp3", ".ogg", ".m4a", ".wma", ".au", ".snd",
];

/// Default upload limit, matching the server's request size cap.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Result of classifying one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeReport {
    pub accepted: Vec<CandidateFile>,
    pub oversized: Vec<CandidateFile>,
    pub unsupported: Vec<CandidateFile>,
}

/// Blocking message for the user, one per rejected category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Lowercased extension including the dot.
///
/// A name without a dot is treated as if the whole name were the extension,
/// so `"wav"` yields `".wav"`.
pub fn extension_of(name: &str) -> String {
    let tail = match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => name,
    };
    format!(".{}", tail.to_lowercase())
}

/// Split `files` into accepted, oversized and unsupported sets.
pub fn classify(
    files: Vec<CandidateFile>,
    max_size_bytes: u64,
    allowed_extensions: &[&str],
) -> IntakeReport {
    let mut report = IntakeReport::default();

    for file in files {
        if file.size > max_size_bytes {
            report.oversized.push(file);
        } else if allowed_extensions.contains(&extension_of(&file.name).as_str()) {
            report.accepted.push(file);
        } else {
            report.unsupported.push(file);
        }
    }

    tracing::debug!(
        accepted = report.accepted.len(),
        oversized = report.oversized.len(),
        unsupported = report.unsupported.len(),
        "Classified batch"
    );

    report
}

impl IntakeReport {
    /// Notices for the rejected files, oversized first.
    pub fn notices(&self, max_size_bytes: u64, allowed_extensions: &[&str]) -> Vec<Notice> {
        let mut notices = Vec::new();

        if !self.oversized.is_empty() {
            let files = self
                .oversized
                .iter()
                .map(|f| format!("{} ({})", f.name, format_megabytes(f.size)))
                .collect::<Vec<_>>()
                .join(", ");
            notices.push(Notice::new(
                "Files too large",
                format!(
                    "Files too large (max {}): {}",
                    format_limit(max_size_bytes),
                    files
                ),
            ));
        }

        if !self.unsupported.is_empty() {
            let files = self
                .unsupported
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            notices.push(Notice::new(
                "Unsupported file types",
                format!(
                    "Unsupported file types detected: {}\nSupported formats: {}",
                    files,
                    allowed_extensions.join(", ")
                ),
            ));
        }

        notices
    }
}

const MIB: f64 = 1024.0 * 1024.0;

/// Megabytes rounded to one decimal, halves away from zero.
fn round_tenths(mb: f64) -> f64 {
    (mb * 10.0).round() / 10.0
}

fn format_megabytes(bytes: u64) -> String {
    format!("{:.1}MB", round_tenths(bytes as f64 / MIB))
}

fn format_limit(bytes: u64) -> String {
    let mb = bytes as f64 / MIB;
    if mb.fract() == 0.0 {
        format!("{mb:.0}MB")
    } else {
        format!("{:.1}MB", round_tenths(mb))
    }
}
