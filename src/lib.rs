//! Vidfetch library

pub mod api;
pub mod gui;
pub mod utils;

// Re-export main types for easier use
pub use api::{ApiClient, DownloadLink, Format, VideoInfo};
pub use gui::{Message, VidfetchApp};
pub use utils::{AppSettings, VidfetchError};
