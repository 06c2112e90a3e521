//! Data structures for the backend API

use serde::{Deserialize, Serialize};

/// Video metadata returned by `GET /api/info`.
///
/// Held by the controller for the lifetime of one search and replaced
/// wholesale on the next one; individual fields are never patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    /// Canonical source URL, echoed back when requesting a download link.
    pub original_url: String,
    #[serde(default)]
    pub formats: Vec<Format>,
}

/// One downloadable variant of a video.
///
/// `format_id` is opaque and unique within a `VideoInfo`. Everything past
/// the first three fields is carried through untouched for display or
/// debugging; the controller never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Format {
    pub format_id: String,
    pub ext: String,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
}

/// Body of a successful `GET /api/download` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadLink {
    #[serde(default)]
    pub direct_url: Option<String>,
}

/// Error body the backend attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_info_tolerates_missing_optionals() {
        let info: VideoInfo = serde_json::from_str(
            r#"{"id":"abc","title":"Clip","original_url":"https://example.com/v/abc"}"#,
        )
        .expect("minimal body should parse");

        assert_eq!(info.title, "Clip");
        assert!(info.thumbnail.is_none());
        assert!(info.duration.is_none());
        assert!(info.formats.is_empty());
    }

    #[test]
    fn format_keeps_passthrough_fields() {
        let format: Format = serde_json::from_str(
            r#"{"format_id":"22","ext":"mp4","resolution":"720p","filesize":1024,"vcodec":"avc1","acodec":"mp4a"}"#,
        )
        .expect("full format should parse");

        assert_eq!(format.format_id, "22");
        assert_eq!(format.resolution.as_deref(), Some("720p"));
        assert_eq!(format.filesize, Some(1024));
        assert_eq!(format.vcodec.as_deref(), Some("avc1"));
    }

    #[test]
    fn download_link_may_omit_direct_url() {
        let link: DownloadLink = serde_json::from_str("{}").expect("empty body should parse");
        assert!(link.direct_url.is_none());
    }
}
