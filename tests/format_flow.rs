//! End-to-end flow from a backend metadata body to the displayed format
//! list, without a GUI.

use vidfetch::api::VideoInfo;
use vidfetch::gui::components::build_format_options;
use vidfetch::utils::format_duration;

const INFO_BODY: &str = r#"{
    "id": "abc123",
    "title": "Launch Highlights",
    "thumbnail": "https://img.example/abc123.jpg",
    "duration": 3661,
    "original_url": "https://example.com/watch?v=abc123",
    "formats": [
        {"format_id": "1", "ext": "mp4", "resolution": "1080p"},
        {"format_id": "2", "ext": "webm", "resolution": "1080p"},
        {"format_id": "3", "ext": "mp4", "resolution": null}
    ]
}"#;

#[test]
fn metadata_body_becomes_a_deduplicated_format_list() {
    let info: VideoInfo = serde_json::from_str(INFO_BODY).expect("body should parse");
    let options = build_format_options(&info.formats);

    // The second 1080p entry is suppressed; the first one keeps its id.
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].to_string(), "1080p [mp4]");
    assert_eq!(options[0].format_id, "1");
    assert_eq!(options[1].to_string(), "mp4 (3) [mp4]");
    assert_eq!(options[1].format_id, "3");
}

#[test]
fn duration_label_matches_the_card() {
    let info: VideoInfo = serde_json::from_str(INFO_BODY).expect("body should parse");
    assert_eq!(format_duration(info.duration), "61:01");
}
