//! Candidate files picked or dropped by the user.

use std::path::{Path, PathBuf};

/// A file offered for upload. Only lives until it is classified and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// File name as shown to the user and sent to the server.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Location on disk, read when the upload starts.
    pub path: PathBuf,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            size,
            path: path.into(),
        }
    }

    /// MIME type guessed from the file name.
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

/// Build candidates from paths, in the given order.
///
/// Paths that are not readable regular files are skipped with a warning.
pub async fn describe_paths(paths: Vec<PathBuf>) -> Vec<CandidateFile> {
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {
                files.push(CandidateFile::new(display_name(&path), meta.len(), path));
            }
            Ok(_) => {
                tracing::warn!("Skipping {}: not a regular file", path.display());
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
            }
        }
    }

    files
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn describe_paths_reads_sizes_and_skips_missing() {
        let dir = tempdir().unwrap();
        let wav = dir.path().join("kick.wav");
        fs::write(&wav, vec![0u8; 1234]).unwrap();
        let missing = dir.path().join("gone.wav");

        let files = describe_paths(vec![wav.clone(), missing, dir.path().to_path_buf()]).await;

        assert_eq!(files, vec![CandidateFile::new("kick.wav", 1234, wav)]);
    }

    #[test]
    fn mime_type_follows_extension() {
        let file = CandidateFile::new("tone.wav", 1, "/tmp/tone.wav");
        assert!(file.mime_type().starts_with("audio/"));
        let unknown = CandidateFile::new("blob.zzz", 1, "/tmp/blob.zzz");
        assert_eq!(unknown.mime_type(), "application/octet-stream");
    }
}
