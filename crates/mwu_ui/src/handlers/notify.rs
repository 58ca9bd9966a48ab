//! Blocking notices.

use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use mwu_core::intake::Notice;

use crate::app::Message;

/// Show `notices` one after another, each waiting for the previous to close.
pub fn show_notices(notices: Vec<Notice>) -> Task<Message> {
    Task::perform(
        async move {
            for notice in notices {
                tracing::info!("{}: {}", notice.title, notice.message);
                AsyncMessageDialog::new()
                    .set_level(MessageLevel::Warning)
                    .set_title(notice.title)
                    .set_description(notice.message)
                    .set_buttons(MessageButtons::Ok)
                    .show()
                    .await;
            }
        },
        |_| Message::NoticesClosed,
    )
}
