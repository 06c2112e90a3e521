//! Result card for a resolved video

use iced::widget::image::Handle as ImageHandle;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::api::models::VideoInfo;
use crate::gui::app::Message;
use crate::gui::components::format_selector::{format_selector, FormatOption};
use crate::gui::theme;
use crate::utils::format_duration;

const PREVIEW_WIDTH: f32 = 192.0;
const PREVIEW_HEIGHT: f32 = 108.0;

/// Card showing the resolved video with its format picker and download
/// button. Only rendered once a search has completed successfully.
pub fn result_card(
    video: &VideoInfo,
    options: &[FormatOption],
    selected: Option<&FormatOption>,
    thumbnail: Option<&ImageHandle>,
) -> Element<'static, Message> {
    let preview: Element<'static, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(PREVIEW_WIDTH))
            .into(),
        None => container(
            text("No preview")
                .size(14)
                .style(iced::theme::Text::Color(theme::TEXT_MUTED)),
        )
        .width(Length::Fixed(PREVIEW_WIDTH))
        .height(Length::Fixed(PREVIEW_HEIGHT))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(
            theme::PreviewPlaceholder,
        )))
        .into(),
    };

    let details = column![
        text(video.title.clone())
            .size(20)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        text(format!("Duration: {}", format_duration(video.duration)))
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
    ]
    .spacing(8);

    let header = row![preview, details]
        .spacing(16)
        .align_items(Alignment::Start);

    let actions = row![
        format_selector(options, selected),
        Space::with_width(Length::Fill),
        button(text("Download").size(16))
            .on_press_maybe(selected.map(|_| Message::DownloadPressed))
            .padding([12, 28])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    container(column![header, actions].spacing(20))
        .padding(24)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::CardContainer,
        )))
        .into()
}
