//! Generated header actions: copy and download.

use std::path::PathBuf;

use iced::Task;

use mwu_core::session::SessionMsg;

use crate::app::{App, Message};

impl App {
    /// Open the native clipboard on first use.
    pub fn native_clipboard(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => tracing::warn!("Native clipboard unavailable: {}", e),
            }
        }
        self.clipboard.as_mut()
    }

    /// Copy header text, native clipboard first, window clipboard second.
    pub fn copy_to_clipboard(&mut self, artifact: usize, content: String) -> Task<Message> {
        if let Some(clipboard) = self.native_clipboard() {
            match clipboard.set_text(content.as_str()) {
                Ok(()) => {
                    tracing::debug!("Copied artifact {} with the native clipboard", artifact);
                    return Task::done(Message::Session(SessionMsg::CopySucceeded(artifact)));
                }
                Err(e) => {
                    tracing::warn!("Native clipboard write failed, falling back: {}", e);
                    self.clipboard = None;
                }
            }
        }

        window_clipboard_copy(artifact, content)
    }
}

/// Write through iced and read back to confirm the write took.
fn window_clipboard_copy(artifact: usize, content: String) -> Task<Message> {
    iced::clipboard::write::<Message>(content.clone()).chain(iced::clipboard::read().map(
        move |read_back| {
            let msg = if read_back.as_deref() == Some(content.as_str()) {
                SessionMsg::CopySucceeded(artifact)
            } else {
                SessionMsg::CopyFailed(
                    artifact,
                    "window clipboard did not keep the text".to_string(),
                )
            };
            Message::Session(msg)
        },
    ))
}

/// Ask for a location and write the header there.
pub fn save_artifact(file_name: String, content: String) -> Task<Message> {
    Task::perform(save_to_chosen_path(file_name, content), |result| {
        Message::Session(SessionMsg::DownloadFinished(result))
    })
}

async fn save_to_chosen_path(
    file_name: String,
    content: String,
) -> Result<Option<PathBuf>, String> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("Save Header")
        .set_file_name(file_name)
        .add_filter("C Header", &["h"])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    tokio::fs::write(&path, content)
        .await
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(Some(path))
}
