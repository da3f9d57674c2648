/*!
 * Video identifier extraction from pasted links.
 *
 * Supported shapes:
 * - `youtube.com/watch?...v=<id>` (the `v` parameter may follow others)
 * - `youtube.com/embed/<id>`, `/v/<id>`, `/e/<id>`
 * - `youtube.com/<segment>/<path>/<id>`
 * - `youtu.be/<id>`
 *
 * The `youtube-nocookie.com` host is accepted wherever `youtube.com` is.
 * This is a syntactic match only; nothing checks that the video exists.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a video identifier
pub const VIDEO_ID_LEN: usize = 11;

static VIDEO_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube(?:-nocookie)?\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .expect("video id pattern is valid")
});

/// Extract the 11-character video identifier from a link.
///
/// Returns the leftmost match, or `None` when the string is not a supported
/// link. The returned slice borrows from `link`.
pub fn extract_video_id(link: &str) -> Option<&str> {
    VIDEO_ID_PATTERN
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// True when `link` contains a supported video identifier
pub fn is_supported_link(link: &str) -> bool {
    extract_video_id(link).is_some()
}
