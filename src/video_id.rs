/// Video identifier extraction from watch-page URLs
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const VIDEO_ID_LEN: usize = 11;

/// Matches `https://[www.]youtube.com/watch?v=<11 chars>` where the id is the
/// first query parameter and ends the query value.
static WATCH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^https://(?:www\.)?youtube\.com/watch\?v=([A-Za-z0-9_-]{{{}}})(?:[&#].*)?$",
        VIDEO_ID_LEN
    ))
    .expect("watch URL pattern is valid")
});

/// An 11-character video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video identifier from a watch-page URL
///
/// Returns `None` for any other page. That is an ordinary outcome (the popup
/// was opened somewhere else), so it is only logged at debug level.
///
/// Examples:
/// - https://www.youtube.com/watch?v=dQw4w9WgXcQ → dQw4w9WgXcQ
/// - https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s → dQw4w9WgXcQ
/// - https://www.youtube.com/shorts/dQw4w9WgXcQ → None
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let id = WATCH_URL
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_string()));

    if id.is_none() {
        log::debug!("Not a watch page: {}", url);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> Option<String> {
        extract_video_id(url).map(|v| v.as_str().to_string())
    }

    #[test]
    fn test_extract_video_id_basic() {
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
        assert_eq!(id("https://youtube.com/watch?v=dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_extract_video_id_with_extra_params() {
        assert_eq!(id("https://www.youtube.com/watch?v=a_b-C1d2E3f&t=42s"), Some("a_b-C1d2E3f".to_string()));
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ#comments"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_extract_video_id_wrong_scheme_or_host() {
        assert_eq!(id("http://www.youtube.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(id("https://m.youtube.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(id("https://www.youtube.com.evil.test/watch?v=dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_extract_video_id_wrong_path_or_param() {
        assert_eq!(id("https://www.youtube.com/shorts/dQw4w9WgXcQ"), None);
        assert_eq!(id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ"), None);
        assert_eq!(id("https://www.youtube.com/"), None);
    }

    #[test]
    fn test_extract_video_id_wrong_length_or_alphabet() {
        assert_eq!(id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQX"), None);
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgX.Q"), None);
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcé"), None);
    }

    #[test]
    fn test_extract_video_id_edge_cases() {
        assert_eq!(id(""), None);
        assert_eq!(id("chrome://extensions"), None);
        assert_eq!(id("  https://www.youtube.com/watch?v=dQw4w9WgXcQ  "), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_video_id_display() {
        let video = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(video.to_string(), "dQw4w9WgXcQ");
        assert_eq!(video.as_str().len(), VIDEO_ID_LEN);
    }
}
