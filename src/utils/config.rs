//! Application configuration

/// Default address of the resolver backend.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the resolver backend
    pub server_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}
