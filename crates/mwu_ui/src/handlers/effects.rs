//! Session dispatch and effect execution.

use std::time::Duration;

use iced::Task;

use mwu_core::session::{Effect, SessionMsg};

use super::artifacts::save_artifact;
use super::notify::show_notices;
use crate::app::{App, Message};

impl App {
    /// Feed one message to the reducer and run what it asks for.
    pub fn dispatch(&mut self, msg: SessionMsg) -> Task<Message> {
        let effects = self.state.update(msg);
        self.run_effects(effects)
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let mut notices = Vec::new();
        let mut tasks = Vec::new();

        for effect in effects {
            match effect {
                Effect::Notify(notice) => notices.push(notice),
                Effect::Upload(request) => tasks.push(self.start_upload(request)),
                Effect::Generate(request) => tasks.push(self.start_generation(request)),
                Effect::CopyToClipboard { artifact, content } => {
                    tasks.push(self.copy_to_clipboard(artifact, content))
                }
                Effect::ExpireCopyAck {
                    artifact,
                    token,
                    after,
                } => tasks.push(expire_after(artifact, token, after)),
                Effect::SaveArtifact { file_name, content } => {
                    tasks.push(save_artifact(file_name, content))
                }
            }
        }

        // All notices of one update go through a single task so they open in order
        if !notices.is_empty() {
            tasks.insert(0, show_notices(notices));
        }

        Task::batch(tasks)
    }
}

fn expire_after(artifact: usize, token: u64, after: Duration) -> Task<Message> {
    Task::perform(tokio::time::sleep(after), move |_| {
        Message::Session(SessionMsg::CopyAckExpired { artifact, token })
    })
}
