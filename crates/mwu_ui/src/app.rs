//! Main application module for Mozzi Wavetable Uploader.
//!
//! Window state lives in `mwu_core::session::UiState`. This module routes
//! iced messages into it and turns the effects it returns into tasks.

use std::path::PathBuf;

use iced::{event, window, Element, Event, Subscription, Task};

use mwu_core::api::ApiClient;
use mwu_core::config::Settings;
use mwu_core::intake::DropCollector;
use mwu_core::session::{SessionMsg, UiState};

use crate::pages;

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the session reducer
    Session(SessionMsg),

    // File intake
    BrowseFiles,
    PasteFiles,
    PathsChosen(Vec<PathBuf>),

    // Window file events
    FileHovered,
    FileDropped(PathBuf),
    FilesHoveredLeft,
    FlushDroppedFiles,

    // Internal
    SessionOpened(Result<(), String>),
    NoticesClosed,
}

/// Main application state.
pub struct App {
    pub state: UiState,
    pub client: ApiClient,
    pub settings: Settings,

    /// Native clipboard, opened on first use and dropped after a failure.
    pub clipboard: Option<arboard::Clipboard>,

    /// Paths dropped in the current gesture, flushed as one batch.
    pub pending_drop: DropCollector,
}

impl App {
    pub fn new(settings: Settings, client: ApiClient) -> (Self, Task<Message>) {
        let app = Self {
            state: UiState::from_settings(&settings),
            client,
            settings,
            clipboard: None,
            pending_drop: DropCollector::new(),
        };
        let open = app.open_session();
        (app, open)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Session(msg) => self.dispatch(msg),

            Message::BrowseFiles => self.browse_files(),
            Message::PasteFiles => self.paste_files(),
            Message::PathsChosen(paths) => self.describe_chosen(paths),

            Message::FileHovered => {
                if self.state.drop_highlighted {
                    Task::none()
                } else {
                    self.dispatch(SessionMsg::DragEntered)
                }
            }
            Message::FileDropped(path) => self.handle_file_dropped(path),
            Message::FilesHoveredLeft => self.dispatch(SessionMsg::DragLeft),
            Message::FlushDroppedFiles => self.flush_dropped_files(),

            Message::SessionOpened(result) => {
                if let Err(e) = result {
                    tracing::error!("Could not open a session with {}: {}", self.client.base_url(), e);
                }
                Task::none()
            }
            Message::NoticesClosed => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::main_window::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            _ => None,
        })
    }
}
