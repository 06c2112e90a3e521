//! Format selection list

use std::collections::HashSet;
use std::fmt;

use iced::widget::pick_list;
use iced::{Element, Length};

use crate::api::models::Format;
use crate::gui::app::Message;

/// One selectable entry of the displayed format list.
///
/// `label` is the deduplication key; `format_id` is what the download
/// request actually carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOption {
    pub label: String,
    pub format_id: String,
    pub ext: String,
}

impl fmt::Display for FormatOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label, self.ext)
    }
}

/// Build the displayed format list from the backend's format sequence.
///
/// Labels come from the resolution, falling back to `"<ext> (<format_id>)"`
/// when the resolution is absent or empty. At most one entry per distinct
/// label; the first format encountered wins. No quality ranking between
/// formats sharing a label is applied yet.
pub fn build_format_options(formats: &[Format]) -> Vec<FormatOption> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();

    for format in formats {
        let label = match format.resolution.as_deref().filter(|r| !r.is_empty()) {
            Some(resolution) => resolution.to_string(),
            None => format!("{} ({})", format.ext, format.format_id),
        };

        if seen.insert(label.clone()) {
            options.push(FormatOption {
                label,
                format_id: format.format_id.clone(),
                ext: format.ext.clone(),
            });
        }
    }

    options
}

/// Render the pick list over the deduplicated options.
pub fn format_selector(
    options: &[FormatOption],
    selected: Option<&FormatOption>,
) -> Element<'static, Message> {
    pick_list(options.to_vec(), selected.cloned(), Message::FormatSelected)
        .placeholder("No formats available")
        .text_size(14)
        .padding([10, 14])
        .width(Length::Fixed(260.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(resolution: Option<&str>, ext: &str, format_id: &str) -> Format {
        Format {
            format_id: format_id.to_string(),
            ext: ext.to_string(),
            resolution: resolution.map(str::to_string),
            filesize: None,
            url: None,
            vcodec: None,
            acodec: None,
        }
    }

    #[test]
    fn first_format_wins_per_label() {
        let formats = vec![
            format(Some("1080p"), "mp4", "1"),
            format(Some("1080p"), "webm", "2"),
            format(None, "mp4", "3"),
        ];

        let options = build_format_options(&formats);

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].to_string(), "1080p [mp4]");
        assert_eq!(options[0].format_id, "1");
        assert_eq!(options[1].to_string(), "mp4 (3) [mp4]");
        assert_eq!(options[1].format_id, "3");
    }

    #[test]
    fn empty_resolution_falls_back_to_ext_and_id() {
        let options = build_format_options(&[format(Some(""), "m4a", "140")]);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "m4a (140)");
        assert_eq!(options[0].to_string(), "m4a (140) [m4a]");
    }

    #[test]
    fn original_order_is_kept() {
        let formats = vec![
            format(Some("360p"), "mp4", "18"),
            format(Some("720p"), "mp4", "22"),
            format(Some("144p"), "3gp", "17"),
        ];

        let labels: Vec<String> = build_format_options(&formats)
            .into_iter()
            .map(|option| option.label)
            .collect();

        assert_eq!(labels, ["360p", "720p", "144p"]);
    }

    #[test]
    fn no_formats_yield_no_options() {
        assert!(build_format_options(&[]).is_empty());
    }
}
