//! Main GUI application

use crate::api::models::VideoInfo;
use crate::api::ApiClient;
use crate::gui::components::{build_format_options, FormatOption};
use crate::gui::views::main_view;
use crate::utils::config::AppSettings;
use iced::widget::image::Handle as ImageHandle;
use iced::{Application, Command, Element, Theme};
use tracing::{info, warn};

/// Main application state
///
/// The current `VideoInfo` lives here for exactly one search: it is
/// dropped the moment the next search starts. Nothing is shared or
/// persisted outside this struct.
pub struct VidfetchApp {
    client: ApiClient,

    // UI state
    url_input: String,
    is_loading: bool,
    error: Option<String>,

    // Result of the last completed search
    current_video: Option<VideoInfo>,
    format_options: Vec<FormatOption>,
    selected_format: Option<FormatOption>,
    thumbnail: Option<ImageHandle>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    SearchPressed,
    PasteFromClipboard,
    ClearUrlInput,

    // Metadata request cycle
    InfoFetched(Result<VideoInfo, String>),
    ThumbnailFetched(Option<ImageHandle>),

    // Download request cycle
    FormatSelected(FormatOption),
    DownloadPressed,
    DownloadResolved(Result<Option<String>, String>),
}

impl VidfetchApp {
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            client: ApiClient::new(&settings.server_url),
            url_input: String::new(),
            is_loading: false,
            error: None,
            current_video: None,
            format_options: Vec::new(),
            selected_format: None,
            thumbnail: None,
        }
    }

    /// The (video URL, format id) pair a download request would carry, if
    /// one can be issued at all.
    fn download_request(&self) -> Option<(String, String)> {
        let video = self.current_video.as_ref()?;
        let format = self.selected_format.as_ref()?;
        Some((video.original_url.clone(), format.format_id.clone()))
    }
}

impl Application for VidfetchApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(flags: AppSettings) -> (Self, Command<Message>) {
        (Self::with_settings(flags), Command::none())
    }

    fn title(&self) -> String {
        String::from("Vidfetch - Universal Video Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                Command::none()
            }

            Message::SearchPressed => {
                let url = self.url_input.trim().to_string();
                if url.is_empty() {
                    return Command::none();
                }

                // A new search drops the previous result, error and
                // thumbnail before the request goes out.
                self.is_loading = true;
                self.error = None;
                self.current_video = None;
                self.format_options.clear();
                self.selected_format = None;
                self.thumbnail = None;

                info!(url = %url, "fetching video info");
                let client = self.client.clone();
                Command::perform(
                    async move { client.video_info(&url).await.map_err(|e| e.to_string()) },
                    Message::InfoFetched,
                )
            }

            Message::PasteFromClipboard => {
                match clipboard_text() {
                    Ok(content) => self.url_input = content,
                    Err(e) => warn!("Failed to paste from clipboard: {}", e),
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                Command::none()
            }

            // Metadata request cycle
            Message::InfoFetched(result) => {
                // The request cycle is over on both arms.
                self.is_loading = false;

                match result {
                    Ok(video) => {
                        self.format_options = build_format_options(&video.formats);
                        self.selected_format = self.format_options.first().cloned();

                        let thumbnail_url =
                            video.thumbnail.clone().filter(|url| !url.is_empty());
                        self.current_video = Some(video);

                        match thumbnail_url {
                            Some(url) => {
                                let client = self.client.clone();
                                Command::perform(
                                    async move { load_thumbnail(client, url).await },
                                    Message::ThumbnailFetched,
                                )
                            }
                            None => Command::none(),
                        }
                    }
                    Err(message) => {
                        self.error = Some(message);
                        Command::none()
                    }
                }
            }

            Message::ThumbnailFetched(handle) => {
                self.thumbnail = handle;
                Command::none()
            }

            // Download request cycle
            Message::FormatSelected(option) => {
                self.selected_format = Some(option);
                Command::none()
            }

            Message::DownloadPressed => {
                if let Some((url, format_id)) = self.download_request() {
                    info!(url = %url, format_id = %format_id, "requesting download link");
                    let client = self.client.clone();
                    Command::perform(
                        async move {
                            client
                                .download_link(&url, &format_id)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        Message::DownloadResolved,
                    )
                } else {
                    Command::none()
                }
            }

            Message::DownloadResolved(result) => {
                match result {
                    Ok(Some(link)) => {
                        info!(link = %link, "opening direct link");
                        if let Err(e) = open::that(&link) {
                            warn!("Failed to open direct link: {}", e);
                        }
                    }
                    Ok(None) => {
                        // Backend answered without a link; nothing to open.
                    }
                    Err(message) => show_download_error(&message),
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(
            &self.url_input,
            self.is_loading,
            self.error.as_deref(),
            self.current_video.as_ref(),
            &self.format_options,
            self.selected_format.as_ref(),
            self.thumbnail.as_ref(),
        )
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Fetch a thumbnail and convert it into a widget handle.
async fn load_thumbnail(client: ApiClient, url: String) -> Option<ImageHandle> {
    match client.fetch_thumbnail(&url).await {
        Ok(image) => {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            Some(ImageHandle::from_pixels(width, height, rgba.into_raw()))
        }
        Err(e) => {
            warn!("Failed to load thumbnail from {}: {}", url, e);
            None
        }
    }
}

/// Read text from the system clipboard.
fn clipboard_text() -> Result<String, String> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| format!("Failed to access clipboard: {}", e))?;

    clipboard
        .get_text()
        .map_err(|e| format!("Failed to read clipboard: {}", e))
}

/// Show a download failure in a blocking error dialog.
fn show_download_error(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Download error")
        .set_description(&format!("Error: {}", message))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Format;

    fn app() -> VidfetchApp {
        VidfetchApp::with_settings(AppSettings::default())
    }

    fn sample_format(resolution: Option<&str>, ext: &str, format_id: &str) -> Format {
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

    fn sample_video() -> VideoInfo {
        VideoInfo {
            id: "vid123".to_string(),
            title: "Sample Video".to_string(),
            thumbnail: None,
            duration: Some(65),
            original_url: "https://example.com/watch?v=vid123".to_string(),
            formats: vec![
                sample_format(Some("1080p"), "mp4", "137"),
                sample_format(None, "m4a", "140"),
            ],
        }
    }

    #[test]
    fn blank_url_is_a_no_op() {
        let mut app = app();
        app.url_input = "   ".to_string();

        let _ = app.update(Message::SearchPressed);

        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert!(app.current_video.is_none());
    }

    #[test]
    fn search_enters_loading_and_drops_previous_state() {
        let mut app = app();
        let _ = app.update(Message::InfoFetched(Ok(sample_video())));
        app.error = Some("stale error".to_string());
        app.url_input = " https://example.com/watch?v=next ".to_string();

        let _ = app.update(Message::SearchPressed);

        assert!(app.is_loading);
        assert!(app.error.is_none());
        assert!(app.current_video.is_none());
        assert!(app.format_options.is_empty());
        assert!(app.selected_format.is_none());
    }

    #[test]
    fn loading_ends_on_success_and_result_is_shown() {
        let mut app = app();
        app.is_loading = true;

        let _ = app.update(Message::InfoFetched(Ok(sample_video())));

        assert!(!app.is_loading);
        assert!(app.current_video.is_some());
        assert_eq!(app.format_options.len(), 2);
        assert_eq!(
            app.selected_format.as_ref().map(|f| f.format_id.as_str()),
            Some("137")
        );
    }

    #[test]
    fn loading_ends_on_failure_and_detail_is_shown_verbatim() {
        let mut app = app();
        app.is_loading = true;

        let _ = app.update(Message::InfoFetched(Err("not found".to_string())));

        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some("not found"));
        assert!(app.current_video.is_none());
    }

    #[test]
    fn download_needs_a_stored_video() {
        let app = app();
        assert!(app.download_request().is_none());
    }

    #[test]
    fn download_uses_original_url_and_selected_format() {
        let mut app = app();
        let _ = app.update(Message::InfoFetched(Ok(sample_video())));
        let second = app.format_options[1].clone();
        let _ = app.update(Message::FormatSelected(second));

        let (url, format_id) = app.download_request().expect("request pair");
        assert_eq!(url, "https://example.com/watch?v=vid123");
        assert_eq!(format_id, "140");
    }

    #[test]
    fn typing_does_not_touch_the_error_region() {
        let mut app = app();
        app.error = Some("not found".to_string());

        let _ = app.update(Message::UrlInputChanged("https://example.com".to_string()));

        assert_eq!(app.error.as_deref(), Some("not found"));
    }
}
