use std::sync::LazyLock;

use regex::Regex;

// Matches the two supported URL shapes, `youtube.com/watch?v=<id>`
// and `youtu.be/<id>`.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]+)")
        .expect("Invalid video id pattern")
});

/// Extract the video identifier from a YouTube URL
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?enablejsapi=1")
}

/// Watch URL that starts playback at `seconds` when given
pub fn watch_url(video_id: &str, seconds: Option<f64>) -> String {
    match seconds {
        Some(s) => format!("https://youtu.be/{video_id}?t={}", s.floor() as u64),
        None => format!("https://youtu.be/{video_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_extracts_id_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abc_-123&t=42s"),
            Some("abc_-123")
        );
    }

    #[test]
    fn it_extracts_id_from_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/xyz987"), Some("xyz987"));
    }

    #[test]
    fn it_rejects_unknown_shapes() {
        for url in [
            "",
            "not a url",
            "https://vimeo.com/12345",
            "https://www.youtube.com/channel/UC123",
            "https://www.youtube.com/watch?list=PL1",
            "https://youtu.be/",
        ] {
            assert_eq!(extract_video_id(url), None, "{url}");
        }
    }

    #[test]
    fn it_builds_watch_url_at_position() {
        assert_eq!(watch_url("abc", Some(330.9)), "https://youtu.be/abc?t=330");
        assert_eq!(watch_url("abc", None), "https://youtu.be/abc");
    }
}
