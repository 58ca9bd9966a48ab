//! Drop target that also opens the file picker when clicked.

use iced::widget::{column, container, mouse_area, text};
use iced::{Alignment, Background, Border, Element, Length, Theme};

use crate::app::Message;
use crate::theme::{colors, font, spacing};

/// Create the drop zone.
///
/// # Arguments
/// * `highlighted` - Whether files are hovering over the window
/// * `hint` - Accepted formats and size limit
pub fn drop_zone<'a>(highlighted: bool, hint: String) -> Element<'a, Message> {
    let content = column![
        text("Drag & drop audio files here, or click to browse")
            .size(font::LG)
            .color(colors::TEXT_PRIMARY),
        text(hint).size(font::SM).color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    let zone = container(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(if highlighted {
                colors::DROP_ZONE_ACTIVE
            } else {
                colors::DROP_ZONE
            })),
            border: Border {
                color: if highlighted {
                    colors::DROP_BORDER_ACTIVE
                } else {
                    colors::DROP_BORDER
                },
                width: 2.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        });

    mouse_area(zone).on_press(Message::BrowseFiles).into()
}
