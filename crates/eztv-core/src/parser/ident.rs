//! Episode identifier and quality extraction from free-text labels.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::types::DEFAULT_QUALITY;

static EPISODE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"S[0-9]{2}E[0-9]{2}").expect("episode id pattern is valid"));

static QUALITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{3,4}p").expect("quality pattern is valid"));

/// First `SxxExx` token in the label, or `""` if there is none.
///
/// Matching is case sensitive and takes exactly two digits on each side;
/// nothing is padded or normalized.
///
/// # Examples
/// ```
/// use eztv_core::parser::extract_episode_id;
///
/// assert_eq!(extract_episode_id("Lost S03E11 720p HDTV"), "S03E11");
/// assert_eq!(extract_episode_id("Lost s03e11"), "");
/// ```
pub fn extract_episode_id(label: &str) -> &str {
    EPISODE_ID_RE.find(label).map_or("", |m| m.as_str())
}

/// First resolution token (three or four digits then `p`), or `""`.
///
/// # Examples
/// ```
/// use eztv_core::parser::extract_quality;
///
/// assert_eq!(extract_quality("Lost S03E11 1080p WEB"), "1080p");
/// assert_eq!(extract_quality("Lost S03E11 HDTV"), "");
/// ```
pub fn extract_quality(label: &str) -> &str {
    QUALITY_RE.find(label).map_or("", |m| m.as_str())
}

/// Quality label for a listing entry, falling back to `hdtv`.
pub fn quality_or_default(label: &str) -> &str {
    match extract_quality(label) {
        "" => DEFAULT_QUALITY,
        quality => quality,
    }
}

/// Episode identifier and quality label for a listing entry.
pub fn episode_key(label: &str) -> (&str, &str) {
    (extract_episode_id(label), quality_or_default(label))
}
