//! Collecting the files of one drop gesture.
//!
//! The window reports each dropped file as its own event. They are gathered
//! here and flushed as one batch once the drop has settled.

use std::path::PathBuf;

/// Paths dropped since the last flush.
#[derive(Debug, Default)]
pub struct DropCollector {
    pending: Vec<PathBuf>,
}

impl DropCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dropped path.
    ///
    /// Returns `true` for the first path of a gesture, which is when the
    /// caller should schedule a flush.
    pub fn push(&mut self, path: PathBuf) -> bool {
        let first = self.pending.is_empty();
        self.pending.push(path);
        first
    }

    /// Everything collected so far, in drop order. Leaves the collector empty.
    pub fn take(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.pending)
    }
}
