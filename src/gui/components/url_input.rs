//! URL input component

use iced::widget::{button, column, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

use crate::gui::app::Message;
use crate::gui::theme;

/// URL field with paste and clear buttons.
///
/// Submitting the field (Enter) triggers `on_submit`; the error region
/// below the row is only rendered while a message is present, and the
/// field border switches to the error style at the same time.
pub fn url_input(
    value: &str,
    on_change: impl Fn(String) -> Message + 'static,
    on_submit: Message,
    on_paste: Message,
    on_clear: Message,
    error_message: Option<&str>,
) -> Element<'static, Message> {
    let input_row = row![
        text_input("Paste video URL here...", value)
            .on_input(on_change)
            .on_submit(on_submit)
            .padding(15)
            .width(Length::Fill)
            .style(if error_message.is_some() {
                iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
            } else {
                iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
            }),
        tooltip(
            button(text("Paste").size(14))
                .on_press(on_paste)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(on_clear)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    match error_message {
        Some(error) => column![
            input_row,
            text(error.to_string())
                .size(14)
                .style(iced::theme::Text::Color(theme::DANGER)),
        ]
        .spacing(8)
        .into(),
        None => input_row.into(),
    }
}
