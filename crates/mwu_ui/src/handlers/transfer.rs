//! Server calls: session, uploads and generation.

use iced::Task;

use mwu_core::api;
use mwu_core::session::{GenerateRequest, SessionMsg, UploadRequest};

use crate::app::{App, Message};

impl App {
    /// Load the index page once so later requests share a server session.
    pub fn open_session(&self) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move { client.open_session().await.map_err(|e| e.detail()) },
            Message::SessionOpened,
        )
    }

    /// Upload one file. Every upload of a batch runs as its own task.
    pub fn start_upload(&self, request: UploadRequest) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                let outcome = api::upload(
                    &client,
                    &request.file,
                    &request.output_prefix,
                    request.sampling_rate,
                )
                .await;
                SessionMsg::UploadFinished {
                    batch: request.batch,
                    entry: request.entry,
                    outcome,
                }
            },
            Message::Session,
        )
    }

    pub fn start_generation(&self, request: GenerateRequest) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                let outcome =
                    api::generate(&client, &request.output_prefix, request.sampling_rate).await;
                SessionMsg::GenerationFinished {
                    batch: request.batch,
                    outcome,
                }
            },
            Message::Session,
        )
    }
}
