//! Twitch URL extraction
//!
//! Twitch's embed security policy requires every player URL to carry a
//! `parent` query parameter naming the embedding domain; each URL built
//! here appends it exactly once.

use super::{encode, Extraction};
use crate::config::EMBED_HOST;
use crate::descriptor::{EmbedDescriptor, DEFAULT_ASPECT};
use crate::locator::Locator;

pub(crate) fn is_clip_host(locator: &Locator) -> bool {
    locator.host == "clips.twitch.tv"
}

pub(crate) fn is_twitch_host(locator: &Locator) -> bool {
    locator.host_within("twitch.tv")
}

/// Direct clip host: the slug is the first path segment.
pub(crate) fn extract_clip_host(locator: &Locator) -> Extraction {
    match locator.segment(0) {
        Some(slug) => Extraction::Embed(clip_descriptor(slug, &locator.raw)),
        None => Extraction::Fallback,
    }
}

/// Channel pages, `/clip/` paths, `?clip=` params, and `/videos/` VODs.
pub(crate) fn extract(locator: &Locator) -> Extraction {
    // /{channel}/clip/{slug}
    if let Some(slug) = path_clip_slug(locator) {
        return Extraction::Embed(clip_descriptor(slug, &locator.raw));
    }

    if let Some(slug) = locator.param("clip").filter(|s| !s.is_empty()) {
        return Extraction::Embed(clip_descriptor(slug, &locator.raw));
    }

    if locator.segment(0) == Some("videos") {
        if let Some(id) = locator.segment(1) {
            let source = format!(
                "https://player.twitch.tv/?video={}&parent={}",
                encode(id),
                encode(EMBED_HOST)
            );
            return Extraction::Embed(player_descriptor("twitch-vod", source, &locator.raw));
        }
        return Extraction::Fallback;
    }

    match locator.segment(0) {
        Some(channel) => {
            let source = format!(
                "https://player.twitch.tv/?channel={}&parent={}",
                encode(channel),
                encode(EMBED_HOST)
            );
            Extraction::Embed(player_descriptor("twitch", source, &locator.raw))
        }
        None => Extraction::Fallback,
    }
}

fn path_clip_slug(locator: &Locator) -> Option<&str> {
    let clip_at = locator
        .path_segments
        .iter()
        .position(|segment| segment == "clip")?;
    locator.segment(clip_at + 1)
}

fn clip_descriptor(slug: &str, raw: &str) -> EmbedDescriptor {
    let source = format!(
        "https://clips.twitch.tv/embed?clip={}&parent={}",
        encode(slug),
        encode(EMBED_HOST)
    );
    player_descriptor("twitch-clip", source, raw)
}

fn player_descriptor(provider: &str, source: String, raw: &str) -> EmbedDescriptor {
    EmbedDescriptor::iframe(provider, source, DEFAULT_ASPECT, false, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::resolve_url;

    fn parent_count(source: &str) -> usize {
        source.matches("parent=").count()
    }

    #[test]
    fn test_channel_url() {
        let d = resolve_url("https://www.twitch.tv/somechannel").unwrap();
        assert_eq!(d.provider, "twitch");
        assert_eq!(
            d.source,
            format!(
                "https://player.twitch.tv/?channel=somechannel&parent={}",
                EMBED_HOST
            )
        );
    }

    #[test]
    fn test_vod_url() {
        let d = resolve_url("https://www.twitch.tv/videos/123456789").unwrap();
        assert_eq!(d.provider, "twitch-vod");
        assert!(d.source.starts_with("https://player.twitch.tv/?video=123456789"));
    }

    #[test]
    fn test_clip_path() {
        let d = resolve_url("https://www.twitch.tv/somechannel/clip/FunnySlug-abc").unwrap();
        assert_eq!(d.provider, "twitch-clip");
        assert!(d.source.contains("clip=FunnySlug-abc"));
    }

    #[test]
    fn test_clip_query_param() {
        let d = resolve_url("https://www.twitch.tv/somechannel?clip=QuerySlug").unwrap();
        assert_eq!(d.provider, "twitch-clip");
        assert!(d.source.contains("clip=QuerySlug"));
    }

    #[test]
    fn test_clip_host() {
        let d = resolve_url("https://clips.twitch.tv/DirectSlug").unwrap();
        assert_eq!(d.provider, "twitch-clip");
        assert!(d.source.contains("clip=DirectSlug"));
    }

    #[test]
    fn test_parent_appears_exactly_once_everywhere() {
        for input in [
            "https://www.twitch.tv/somechannel",
            "https://twitch.tv/videos/123456789",
            "https://www.twitch.tv/ch/clip/Slug",
            "https://www.twitch.tv/ch?clip=Slug",
            "https://clips.twitch.tv/Slug",
            "https://m.twitch.tv/somechannel",
        ] {
            let d = resolve_url(input).unwrap();
            assert_eq!(parent_count(&d.source), 1, "input: {}", input);
            assert!(d.source.contains(EMBED_HOST), "input: {}", input);
        }
    }

    #[test]
    fn test_bare_host_falls_back() {
        let d = resolve_url("https://www.twitch.tv/").unwrap();
        assert_eq!(d.provider, "generic");
    }

    #[test]
    fn test_subdomain_matches() {
        let d = resolve_url("https://go.twitch.tv/somechannel").unwrap();
        assert_eq!(d.provider, "twitch");
    }
}
