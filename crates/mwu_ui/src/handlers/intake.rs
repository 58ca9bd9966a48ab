//! File intake handlers: browsing, pasting and dropping.

use std::path::PathBuf;
use std::time::Duration;

use iced::Task;

use mwu_core::intake::{describe_paths, paths_from_text, SUPPORTED_EXTENSIONS};
use mwu_core::session::SessionMsg;

use crate::app::{App, Message};

impl App {
    /// Browse for audio files.
    pub fn browse_files(&self) -> Task<Message> {
        let extensions: Vec<&'static str> = SUPPORTED_EXTENSIONS
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_title("Select Audio Files")
                    .add_filter("Audio Files", &extensions[..])
                    .add_filter("All Files", &["*"])
                    .pick_files()
                    .await
                    .map(|files| files.into_iter().map(|f| f.path().to_path_buf()).collect())
                    .unwrap_or_default()
            },
            Message::PathsChosen,
        )
    }

    /// Take file paths or `file://` URIs from the clipboard.
    pub fn paste_files(&mut self) -> Task<Message> {
        let native = self
            .native_clipboard()
            .and_then(|clipboard| match clipboard.get_text() {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::debug!("Native clipboard read failed: {}", e);
                    None
                }
            });

        match native {
            Some(text) => self.describe_chosen(paths_from_text(&text)),
            None => iced::clipboard::read().map(|text| {
                Message::PathsChosen(text.map(|t| paths_from_text(&t)).unwrap_or_default())
            }),
        }
    }

    /// Stat the chosen paths and hand them to the session as one batch.
    pub fn describe_chosen(&self, paths: Vec<PathBuf>) -> Task<Message> {
        if paths.is_empty() {
            return Task::none();
        }
        tracing::debug!("Describing {} chosen path(s)", paths.len());

        Task::perform(describe_paths(paths), |files| {
            Message::Session(SessionMsg::FilesSelected(files))
        })
    }

    /// Collect one dropped file. The first of a gesture schedules a flush.
    pub fn handle_file_dropped(&mut self, path: PathBuf) -> Task<Message> {
        if !self.pending_drop.push(path) {
            return Task::none();
        }

        let settle = Duration::from_millis(self.settings.ui.drop_settle_millis);
        Task::perform(tokio::time::sleep(settle), |_| Message::FlushDroppedFiles)
    }

    pub fn flush_dropped_files(&mut self) -> Task<Message> {
        let paths = self.pending_drop.take();
        tracing::info!("{} file(s) dropped", paths.len());
        self.describe_chosen(paths)
    }
}
