//! Main view implementation

use iced::widget::image::Handle as ImageHandle;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length};

use crate::api::models::VideoInfo;
use crate::gui::app::Message;
use crate::gui::components::{result_card, url_input, FormatOption};
use crate::gui::theme;

/// Create the main view
pub fn main_view(
    url_value: &str,
    is_loading: bool,
    error: Option<&str>,
    video: Option<&VideoInfo>,
    format_options: &[FormatOption],
    selected_format: Option<&FormatOption>,
    thumbnail: Option<&ImageHandle>,
) -> Element<'static, Message> {
    // Hero input section
    let hero_section = container(
        column![
            text("Download Video")
                .size(30)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
            url_input(
                url_value,
                Message::UrlInputChanged,
                Message::SearchPressed,
                Message::PasteFromClipboard,
                Message::ClearUrlInput,
                error,
            ),
            row![
                Space::with_width(Length::Fill),
                button(text(if is_loading { "Searching..." } else { "Search" }).size(16))
                    .on_press_maybe(if is_loading {
                        None
                    } else {
                        Some(Message::SearchPressed)
                    })
                    .padding([12, 28])
                    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            ],
        ]
        .spacing(20),
    )
    .padding(32)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::CardContainer,
    )));

    let mut page = column![
        text("Vidfetch")
            .size(22)
            .style(iced::theme::Text::Color(theme::TEAL_600)),
        hero_section,
    ]
    .spacing(24)
    .width(Length::Fill);

    // Result section, hidden until a search succeeds
    if let Some(video) = video {
        page = page.push(result_card(video, format_options, selected_format, thumbnail));
    }

    container(scrollable(page.padding([24, 32, 32, 32])))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::PageContainer,
        )))
        .into()
}
