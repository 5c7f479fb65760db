//! Known embed source shapes
//!
//! Static classification table for opaque fragment sources: when a pasted
//! snippet's media element doesn't match a structured convention, its
//! `src`/`data` attribute is matched against these substrings to pick a
//! provider tag and default layout. Scanned in order, first hit wins, so
//! narrower needles sit above broader ones for the same host.

/// One known embed URL shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourcePattern {
    /// Lowercase substring looked for in the source URL
    pub needle: &'static str,
    /// Stable provider tag
    pub provider: &'static str,
    /// Default aspect ratio (width / height)
    pub aspect: f32,
    /// Whether the frame should allow scrolling
    pub scrollable: bool,
}

const fn pat(
    needle: &'static str,
    provider: &'static str,
    aspect: f32,
    scrollable: bool,
) -> SourcePattern {
    SourcePattern {
        needle,
        provider,
        aspect,
        scrollable,
    }
}

const WIDE: f32 = 16.0 / 9.0;
const CARD: f32 = 4.0 / 5.0;
const PORTRAIT: f32 = 9.0 / 16.0;
const PAGE: f32 = 0.77;

/// Ordered table of known embed source shapes.
pub const SOURCE_PATTERNS: &[SourcePattern] = &[
    // Video players
    pat("youtube.com/embed", "youtube", WIDE, false),
    pat("youtube-nocookie.com", "youtube", WIDE, false),
    pat("youtube.com/live_chat", "youtube-chat", 0.5, true),
    pat("clips.twitch.tv", "twitch-clip", WIDE, false),
    pat("twitch.tv/embed", "twitch-chat", 0.5, true),
    pat("player.twitch.tv", "twitch", WIDE, false),
    pat("player.kick.com", "kick", WIDE, false),
    pat("player.vimeo.com", "vimeo", WIDE, false),
    pat("rumble.com/embed", "rumble", WIDE, false),
    pat("dailymotion.com/embed", "dailymotion", WIDE, false),
    pat("dailymotion.com", "dailymotion", WIDE, false),
    pat("streamable.com", "streamable", WIDE, false),
    pat("odysee.com/$/embed", "odysee", WIDE, false),
    pat("bitchute.com/embed", "bitchute", WIDE, false),
    pat("loom.com/embed", "loom", WIDE, false),
    pat("wistia.net", "wistia", WIDE, false),
    pat("fast.wistia.com", "wistia", WIDE, false),
    pat("play.vidyard.com", "vidyard", WIDE, false),
    pat("players.brightcove.net", "brightcove", WIDE, false),
    pat("cdn.jwplayer.com", "jwplayer", WIDE, false),
    pat("iframe.mediadelivery.net", "bunny", WIDE, false),
    pat("cloudflarestream.com", "cloudflare-stream", WIDE, false),
    pat("drive.google.com", "google-drive", WIDE, false),
    pat("archive.org/embed", "archive", WIDE, false),
    pat("ted.com/talks", "ted", WIDE, false),
    pat("facebook.com/plugins/video", "facebook", WIDE, false),
    // Audio and podcasts
    pat("open.spotify.com/embed", "spotify", 2.0, false),
    pat("w.soundcloud.com/player", "soundcloud", 3.0, false),
    pat("bandcamp.com/embeddedplayer", "bandcamp", 1.0, false),
    pat("embed.podcasts.apple.com", "apple-podcasts", 2.3, false),
    pat("podcasts.apple.com", "apple-podcasts", 2.3, false),
    pat("embed.music.apple.com", "apple-music", 2.3, false),
    pat("mixcloud.com/widget", "mixcloud", 2.5, false),
    pat("widget.deezer.com", "deezer", 2.0, false),
    pat("music.amazon", "amazon-music", 2.0, false),
    pat("castbox.fm", "castbox", 2.5, false),
    pat("buzzsprout.com", "buzzsprout", 2.5, false),
    pat("anchor.fm", "anchor", 2.5, false),
    pat("omny.fm", "omny", 2.5, false),
    pat("widget.spreaker.com", "spreaker", 2.0, false),
    pat("tunein.com/embed", "tunein", 2.5, false),
    pat("iheart.com", "iheart", 2.0, false),
    pat("open.spotify.com", "spotify", 2.0, false),
    pat("soundcloud.com", "soundcloud", 3.0, false),
    // Social
    pat("platform.twitter.com", "twitter", CARD, true),
    pat("twitframe.com", "twitter", CARD, true),
    pat("instagram.com", "instagram", CARD, true),
    pat("tiktok.com", "tiktok", PORTRAIT, true),
    pat("embed.reddit.com", "reddit", CARD, true),
    pat("redditmedia.com", "reddit", CARD, true),
    pat("reddit.com", "reddit", CARD, true),
    pat("facebook.com/plugins/post", "facebook-post", CARD, true),
    pat("embed.bsky.app", "bluesky", CARD, true),
    pat("bsky.app", "bluesky", CARD, true),
    pat("threads.net", "threads", CARD, true),
    pat("tumblr.com", "tumblr", CARD, true),
    pat("linkedin.com/embed", "linkedin", CARD, true),
    pat("linkedin.com", "linkedin", CARD, true),
    pat("mastodon.social", "mastodon", CARD, true),
    pat("assets.pinterest.com", "pinterest", 0.7, true),
    pat("pinterest.com", "pinterest", 0.7, true),
    pat("giphy.com/embed", "giphy", 1.0, false),
    pat("giphy.com", "giphy", 1.0, false),
    pat("tenor.com/embed", "tenor", 1.0, false),
    pat("imgur.com", "imgur", 1.0, true),
    pat("flickr.com", "flickr", 4.0 / 3.0, false),
    // Code, design, productivity
    pat("codepen.io", "codepen", 1.6, true),
    pat("jsfiddle.net", "jsfiddle", 1.6, true),
    pat("codesandbox.io", "codesandbox", 1.6, true),
    pat("stackblitz.com", "stackblitz", 1.6, true),
    pat("replit.com", "replit", 1.6, true),
    pat("glitch.com/embed", "glitch", 1.6, true),
    pat("observablehq.com", "observable", 1.3, true),
    pat("figma.com/embed", "figma", WIDE, false),
    pat("canva.com/design", "canva", WIDE, false),
    pat("miro.com/app/embed", "miro", WIDE, true),
    pat("sketchfab.com/models", "sketchfab", WIDE, false),
    pat("calendar.google.com", "google-calendar", 4.0 / 3.0, true),
    pat("docs.google.com", "google-docs", PAGE, true),
    pat("airtable.com/embed", "airtable", 4.0 / 3.0, true),
    pat("notion.site", "notion", PAGE, true),
    pat("trello.com", "trello", 0.7, true),
    pat("slides.com", "slides", WIDE, false),
    pat("speakerdeck.com", "speakerdeck", 4.0 / 3.0, false),
    pat("slideshare.net", "slideshare", 1.25, false),
    pat("prezi.com/embed", "prezi", WIDE, false),
    pat("scribd.com/embeds", "scribd", PAGE, true),
    pat("issuu.com", "issuu", 1.4, false),
    // Maps
    pat("google.com/maps", "google-maps", 4.0 / 3.0, false),
    pat("openstreetmap.org/export/embed", "openstreetmap", 4.0 / 3.0, false),
    // Chat widgets
    pat("discord.com/widget", "discord", 0.5, true),
    pat("discordapp.com/widget", "discord", 0.5, true),
    pat("restream.io/chat", "restream-chat", 0.5, true),
];

/// Classify an opaque embed source URL against the pattern table
///
/// Comparison is case-insensitive; returns the first matching entry.
pub fn classify_source(source: &str) -> Option<&'static SourcePattern> {
    let lower = source.to_ascii_lowercase();
    SOURCE_PATTERNS
        .iter()
        .find(|pattern| lower.contains(pattern.needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_video_players() {
        let p = classify_source("https://www.youtube.com/embed/abc123").unwrap();
        assert_eq!(p.provider, "youtube");
        assert!((p.aspect - 16.0 / 9.0).abs() < 0.001);
        assert!(!p.scrollable);

        let p = classify_source("https://rumble.com/embed/v71i3ym/").unwrap();
        assert_eq!(p.provider, "rumble");
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let p = classify_source("HTTPS://PLAYER.VIMEO.COM/video/1").unwrap();
        assert_eq!(p.provider, "vimeo");
    }

    #[test]
    fn test_narrow_needles_win_over_broad() {
        // clips.twitch.tv must not classify as the chat widget
        let p = classify_source("https://clips.twitch.tv/embed?clip=x").unwrap();
        assert_eq!(p.provider, "twitch-clip");

        // plugin post URL is facebook-post, not facebook video
        let p = classify_source("https://www.facebook.com/plugins/post.php?href=x").unwrap();
        assert_eq!(p.provider, "facebook-post");
    }

    #[test]
    fn test_audio_shapes_are_wide_and_short() {
        for src in [
            "https://open.spotify.com/embed/track/xyz",
            "https://w.soundcloud.com/player/?url=abc",
            "https://widget.deezer.com/widget/dark/playlist/1",
        ] {
            let p = classify_source(src).unwrap();
            assert!(p.aspect > 1.78, "src: {}", src);
        }
    }

    #[test]
    fn test_social_shapes_are_vertical() {
        for src in [
            "https://platform.twitter.com/embed/Tweet.html?id=1",
            "https://www.tiktok.com/embed/v2/123",
            "https://embed.reddit.com/r/rust/comments/abc",
        ] {
            let p = classify_source(src).unwrap();
            assert!(p.aspect < 1.0, "src: {}", src);
            assert!(p.scrollable, "src: {}", src);
        }
    }

    #[test]
    fn test_unknown_source_is_none() {
        assert!(classify_source("https://intranet.example.com/player").is_none());
    }

    #[test]
    fn test_all_aspects_positive() {
        for pattern in SOURCE_PATTERNS {
            assert!(pattern.aspect > 0.0, "needle: {}", pattern.needle);
        }
    }

    #[test]
    fn test_needles_are_lowercase() {
        for pattern in SOURCE_PATTERNS {
            assert_eq!(
                pattern.needle,
                pattern.needle.to_ascii_lowercase(),
                "needle: {}",
                pattern.needle
            );
        }
    }
}
