//! Red error block and preformatted text.

use iced::widget::{column, container, text};
use iced::{font, Background, Border, Element, Font, Length, Theme};

use mwu_core::session::ErrorBlock;

use crate::app::Message;
use crate::theme::{colors, font as size, spacing};

/// Bold message with the detail, if any, in a monospaced block below.
pub fn error_block<'a>(block: ErrorBlock) -> Element<'a, Message> {
    let mut content = column![text(block.message)
        .size(size::NORMAL)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(colors::ERROR_TEXT)]
    .spacing(spacing::SM);

    if let Some(detail) = block.detail {
        content = content.push(
            text(detail)
                .size(size::SM)
                .font(Font::MONOSPACE)
                .color(colors::ERROR_TEXT),
        );
    }

    container(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::ERROR_BG)),
            border: Border {
                color: colors::ERROR_BORDER,
                width: 1.0,
                radius: 5.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Monospaced text on a grey panel, for tool output.
pub fn preformatted<'a>(body: String) -> Element<'a, Message> {
    container(text(body).size(size::SM).font(Font::MONOSPACE))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::LOG_BG)),
            border: Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
