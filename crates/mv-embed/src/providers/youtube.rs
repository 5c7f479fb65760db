//! YouTube URL extraction
//!
//! Accepts `youtube.com` (any subdomain) and `youtu.be`. Id extraction
//! order follows YouTube's public URL shapes: short-link path, `v` query
//! parameter, `/shorts/` / `/embed/` / `/live/` prefixes, then a bare
//! id-shaped first segment.

use super::Extraction;
use crate::descriptor::{EmbedDescriptor, DEFAULT_ASPECT};
use crate::locator::Locator;

pub(crate) fn is_youtube_host(locator: &Locator) -> bool {
    locator.host_within("youtube.com") || locator.host == "youtu.be"
}

pub(crate) fn extract(locator: &Locator) -> Extraction {
    let id = match video_id(locator) {
        Some(id) => id,
        None => return Extraction::Fallback,
    };

    let source = format!(
        "https://www.youtube.com/embed/{}?rel=0&modestbranding=1",
        id
    );
    Extraction::Embed(EmbedDescriptor::iframe(
        "youtube",
        source,
        DEFAULT_ASPECT,
        false,
        &locator.raw,
    ))
}

fn video_id(locator: &Locator) -> Option<&str> {
    if locator.host == "youtu.be" {
        return locator.segment(0).filter(|s| !s.is_empty());
    }

    if let Some(id) = locator.param("v").filter(|v| !v.is_empty()) {
        return Some(id);
    }

    let first = locator.segment(0)?;
    if matches!(first, "shorts" | "embed" | "live") {
        if let Some(second) = locator.segment(1) {
            return Some(second);
        }
        return None;
    }

    if is_id_shaped(first) {
        return Some(first);
    }
    None
}

/// YouTube video ids are at least 6 chars of `[A-Za-z0-9_-]`.
fn is_id_shaped(segment: &str) -> bool {
    segment.len() >= 6
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
