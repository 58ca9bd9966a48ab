//! Main window view.
//!
//! Drop zone, upload list, generation controls, results and the generated
//! headers. Everything shown comes from `UiState::view`.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Theme};

use mwu_core::intake::SUPPORTED_EXTENSIONS;
use mwu_core::models::SamplingRate;
use mwu_core::session::{
    ArtifactView, EntryView, PrefixView, ResultLine, ResultsPanel, SessionMsg, SessionView,
    COPIED_LABEL,
};

use crate::app::{App, Message};
use crate::theme::{colors, font, spacing};
use crate::widgets::{drop_zone, error_block, preformatted};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let SessionView {
        drop_highlighted,
        entries,
        prefix,
        sampling_rate,
        generate,
        results,
        artifacts,
    } = app.state.view();

    let mut content = column![
        text("Mozzi Wavetable Uploader").size(font::HEADER),
        drop_zone(drop_highlighted, intake_hint(app.state.max_file_size_bytes)),
        intake_buttons(),
    ]
    .spacing(spacing::MD);

    if let Some(entries) = entries {
        content = content.push(file_list(entries));
    }

    content = content.push(generation_controls(
        prefix,
        sampling_rate,
        generate.label,
        generate.enabled,
    ));

    match results {
        ResultsPanel::Hidden => {}
        ResultsPanel::Lines(lines) => content = content.push(result_lines(lines)),
        ResultsPanel::Error(block) => {
            content = content.push(section("Generation Results", error_block(block)))
        }
    }

    if !artifacts.is_empty() {
        content = content.push(artifact_panel(artifacts));
    }

    container(scrollable(content.padding(spacing::LG)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn intake_hint(max_file_size_bytes: u64) -> String {
    let megabytes = max_file_size_bytes as f64 / (1024.0 * 1024.0);
    format!(
        "{} (max {}MB each)",
        SUPPORTED_EXTENSIONS.join(" "),
        megabytes
    )
}

/// Browse and paste buttons under the drop zone.
fn intake_buttons<'a>() -> Element<'a, Message> {
    row![
        button(text("Browse...").size(font::NORMAL))
            .on_press(Message::BrowseFiles)
            .padding([spacing::SM, spacing::LG]),
        button(text("Paste files").size(font::NORMAL))
            .on_press(Message::PasteFiles)
            .padding([spacing::SM, spacing::LG]),
    ]
    .spacing(spacing::SM)
    .into()
}

/// Titled section.
fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    column![text(title).size(font::LG), body]
        .spacing(spacing::SM)
        .into()
}

fn file_list<'a>(entries: Vec<EntryView>) -> Element<'a, Message> {
    let list = entries
        .into_iter()
        .fold(column![].spacing(spacing::SM), |list, entry| {
            list.push(entry_row(entry))
        });

    section("Uploaded Files", list.into())
}

fn entry_row<'a>(entry: EntryView) -> Element<'a, Message> {
    let summary_color = if entry.is_error {
        colors::ERROR_INLINE
    } else {
        colors::TEXT_PRIMARY
    };

    let mut line = row![text(entry.summary)
        .size(font::NORMAL)
        .color(summary_color)]
    .spacing(spacing::XS);
    if let Some(raw_note) = entry.raw_note {
        line = line.push(text(raw_note).size(font::NORMAL).font(bold()));
    }

    let mut item = column![line].spacing(spacing::XS);
    if let Some(detail) = entry.detail {
        item = item.push(preformatted(detail));
    }
    item.into()
}

fn generation_controls<'a>(
    prefix: PrefixView,
    sampling_rate: SamplingRate,
    label: &'static str,
    enabled: bool,
) -> Element<'a, Message> {
    let mut prefix_input = text_input("Output prefix", &prefix.text)
        .width(Length::Fixed(260.0))
        .padding(spacing::SM);
    if prefix.enabled {
        prefix_input =
            prefix_input.on_input(|value| Message::Session(SessionMsg::PrefixEdited(value)));
    }

    let mut prefix_row = row![text("Output prefix:").size(font::NORMAL), prefix_input]
        .spacing(spacing::SM)
        .align_y(Alignment::Center);
    if let Some(error) = prefix.error {
        prefix_row = prefix_row.push(text(error).size(font::SM).color(colors::ERROR_INLINE));
    }

    let rate_row = row![
        text("Sampling rate:").size(font::NORMAL),
        pick_list(SamplingRate::ALL, Some(sampling_rate), |rate| {
            Message::Session(SessionMsg::SamplingRateSelected(rate))
        })
        .text_size(font::NORMAL),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    let generate_button = button(text(label).size(font::NORMAL))
        .on_press_maybe(enabled.then_some(Message::Session(SessionMsg::GenerateRequested)))
        .padding([spacing::SM, spacing::XL]);

    column![prefix_row, rate_row, generate_button]
        .spacing(spacing::MD)
        .into()
}

fn result_lines<'a>(lines: Vec<ResultLine>) -> Element<'a, Message> {
    let list = lines
        .into_iter()
        .fold(column![].spacing(spacing::MD), |list, line| {
            list.push(result_item(line))
        });

    section("Generation Results", list.into())
}

fn result_item<'a>(line: ResultLine) -> Element<'a, Message> {
    let body: Element<'a, Message> = match line {
        ResultLine::Generated { text: summary, log } => {
            let mut item = column![text(summary).size(font::NORMAL).font(bold())]
                .spacing(spacing::SM);
            if let Some(log) = log {
                item = item.push(preformatted(log));
            }
            item.into()
        }
        ResultLine::Failed(message) => text(message)
            .size(font::NORMAL)
            .color(colors::ERROR_INLINE)
            .into(),
    };

    container(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::SUCCESS_BG)),
            border: Border {
                color: colors::SUCCESS_BORDER,
                width: 1.0,
                radius: 5.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn artifact_panel<'a>(artifacts: Vec<ArtifactView>) -> Element<'a, Message> {
    let list = artifacts
        .into_iter()
        .fold(column![].spacing(spacing::XL), |list, artifact| {
            list.push(artifact_item(artifact))
        });

    section("Generated Headers", list.into())
}

fn artifact_item<'a>(artifact: ArtifactView) -> Element<'a, Message> {
    let copy_color = if artifact.copy_label == COPIED_LABEL {
        colors::COPIED
    } else {
        colors::COPY
    };

    let header = row![
        action_button(
            "Download",
            colors::DOWNLOAD,
            Message::Session(SessionMsg::DownloadRequested(artifact.index)),
        ),
        action_button(
            artifact.copy_label,
            copy_color,
            Message::Session(SessionMsg::CopyRequested(artifact.index)),
        ),
        text(artifact.title).size(font::LG).color(colors::TEXT_PRIMARY),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    let code = container(
        scrollable(
            text(artifact.content)
                .size(font::SM)
                .font(Font::MONOSPACE)
                .color(colors::TEXT_PRIMARY),
        )
        .height(Length::Fixed(360.0)),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(colors::CODE_BG)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    });

    column![header, code].spacing(spacing::SM).into()
}

/// Small filled button with white text.
fn action_button<'a>(label: &'a str, fill: Color, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(font::SM))
        .on_press(on_press)
        .padding([spacing::XS, spacing::LG])
        .style(move |_theme: &Theme, status| button::Style {
            background: Some(Background::Color(match status {
                button::Status::Hovered | button::Status::Pressed => darken(fill),
                _ => fill,
            })),
            text_color: Color::WHITE,
            border: Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn darken(color: Color) -> Color {
    Color::from_rgb(color.r * 0.85, color.g * 0.85, color.b * 0.85)
}

fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    }
}
