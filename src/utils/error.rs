//! Error handling for Vidfetch

use thiserror::Error;

/// Main error type for Vidfetch
#[derive(Debug, Error)]
pub enum VidfetchError {
    /// Message extracted from the backend's error body; displayed to the
    /// user verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
