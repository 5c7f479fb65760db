//! Provider resolution
//!
//! An ordered table of provider matchers, each pairing a host predicate
//! with an extraction function. Matching is first-match-wins, so more
//! specific hosts (`clips.twitch.tv`) sit above broader ones
//! (`*.twitch.tv`). A matched provider that cannot extract an id degrades
//! to the generic fallback rather than erroring.

pub mod facebook;
pub mod patterns;
mod social;
mod twitch;
mod video;
mod youtube;

use crate::descriptor::EmbedDescriptor;
use crate::error::ResolveError;
use crate::locator::Locator;

/// Outcome of one provider's extraction attempt
pub(crate) enum Extraction {
    /// A fully resolved descriptor
    Embed(EmbedDescriptor),
    /// The host matched but no embeddable id was found
    Fallback,
    /// The provider refuses this input form
    Reject(ResolveError),
}

/// One entry in the provider table: host predicate plus extractor
pub(crate) struct ProviderMatcher {
    /// Stable provider tag (diagnostic; descriptors carry their own)
    pub id: &'static str,
    /// Host predicate
    pub matches: fn(&Locator) -> bool,
    /// Extraction function, run only when `matches` returns true
    pub extract: fn(&Locator) -> Extraction,
}

/// Ordered provider table. Specific hosts before broad ones.
pub(crate) const MATCHERS: &[ProviderMatcher] = &[
    ProviderMatcher {
        id: "twitch-clip",
        matches: twitch::is_clip_host,
        extract: twitch::extract_clip_host,
    },
    ProviderMatcher {
        id: "twitch",
        matches: twitch::is_twitch_host,
        extract: twitch::extract,
    },
    ProviderMatcher {
        id: "youtube",
        matches: youtube::is_youtube_host,
        extract: youtube::extract,
    },
    ProviderMatcher {
        id: "kick",
        matches: video::is_kick_host,
        extract: video::extract_kick,
    },
    ProviderMatcher {
        id: "vimeo",
        matches: video::is_vimeo_host,
        extract: video::extract_vimeo,
    },
    ProviderMatcher {
        id: "twitter",
        matches: social::is_twitter_host,
        extract: social::extract_twitter,
    },
    ProviderMatcher {
        id: "facebook",
        matches: facebook::is_facebook_host,
        extract: facebook::extract,
    },
    ProviderMatcher {
        id: "rumble",
        matches: video::is_rumble_host,
        extract: video::reject_rumble,
    },
];

/// Resolve a raw pasted URL into an embed descriptor
///
/// Unparseable input and unmatched hosts become the generic fallback;
/// the only error is an explicit provider rejection.
pub fn resolve_url(raw: &str) -> Result<EmbedDescriptor, ResolveError> {
    let raw = raw.trim();
    resolve_locator(Locator::parse(raw).as_ref(), raw)
}

/// Resolve an already-parsed locator (or `None` for unparseable input)
pub fn resolve_locator(
    locator: Option<&Locator>,
    raw: &str,
) -> Result<EmbedDescriptor, ResolveError> {
    let locator = match locator {
        Some(l) => l,
        None => return Ok(EmbedDescriptor::generic(raw)),
    };

    for matcher in MATCHERS {
        if !(matcher.matches)(locator) {
            continue;
        }
        return match (matcher.extract)(locator) {
            Extraction::Embed(descriptor) => Ok(descriptor),
            Extraction::Fallback => Ok(EmbedDescriptor::generic(raw)),
            Extraction::Reject(err) => Err(err),
        };
    }

    // Secondary providers: the URL itself is the iframe source, with
    // provider tag and layout defaults taken from the shape table.
    if let Some(pattern) = patterns::classify_source(raw) {
        return Ok(EmbedDescriptor::iframe(
            pattern.provider,
            raw,
            pattern.aspect,
            pattern.scrollable,
            raw,
        ));
    }

    Ok(EmbedDescriptor::generic(raw))
}

/// Percent-encode a value for a query-string position.
pub(crate) fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
