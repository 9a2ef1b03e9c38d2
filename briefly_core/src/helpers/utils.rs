use regex::Regex;

/// Host markers a submitted URL must contain.
pub const VIDEO_HOST_MARKERS: &[&str] = &["youtube.com", "youtu.be"];

pub fn is_supported_video_url(url: &str) -> bool {
    VIDEO_HOST_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Pull the first URL out of pasted text. A markdown link yields its target;
/// otherwise a plain http(s) URL is taken as is.
pub fn extract_url(text: &str) -> Option<String> {
    let re_url = Regex::new(r"\[[^\]]+\]\(([^)\s]+)\)|(https?://[^\s<>()\[\]]+)").ok()?;
    let captures = re_url.captures(text)?;

    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|mat| mat.as_str().to_string())
}
