//! X/Twitter URL extraction
//!
//! Tweet permalinks become the platform's own embed page; anything else
//! on a Twitter host is wrapped by a third-party iframe service so the
//! content still renders. Twitter content uses a vertical-biased 4:5
//! aspect reflecting its card layout.

use super::{encode, Extraction};
use crate::descriptor::EmbedDescriptor;
use crate::locator::Locator;

/// Width / height for Twitter-family cards.
pub(crate) const TWITTER_ASPECT: f32 = 4.0 / 5.0;

/// Minimum digit count for a real tweet status id.
const MIN_STATUS_DIGITS: usize = 10;

pub(crate) fn is_twitter_host(locator: &Locator) -> bool {
    locator.host_within("twitter.com") || locator.host_within("x.com")
}

pub(crate) fn extract_twitter(locator: &Locator) -> Extraction {
    let source = match status_id(locator) {
        Some(id) => format!(
            "https://platform.twitter.com/embed/Tweet.html?id={}&theme=dark&hideThread=true",
            id
        ),
        None => format!("https://twitframe.com/show?url={}", encode(&locator.raw)),
    };

    Extraction::Embed(EmbedDescriptor::iframe(
        "twitter",
        source,
        TWITTER_ASPECT,
        true,
        &locator.raw,
    ))
}

/// Scan path segments for `status`/`statuses` followed by a numeric id.
fn status_id(locator: &Locator) -> Option<&str> {
    let segments = &locator.path_segments;
    for (i, segment) in segments.iter().enumerate() {
        if segment != "status" && segment != "statuses" {
            continue;
        }
        if let Some(next) = segments.get(i + 1) {
            if next.len() >= MIN_STATUS_DIGITS && next.chars().all(|c| c.is_ascii_digit()) {
                return Some(next);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::resolve_url;

    #[test]
    fn test_tweet_permalink() {
        let d = resolve_url("https://x.com/someuser/status/1234567890123456789").unwrap();
        assert_eq!(d.provider, "twitter");
        assert_eq!(
            d.source,
            "https://platform.twitter.com/embed/Tweet.html?id=1234567890123456789&theme=dark&hideThread=true"
        );
        assert!((d.aspect_ratio - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_legacy_statuses_path() {
        let d = resolve_url("https://twitter.com/u/statuses/9876543210").unwrap();
        assert!(d.source.contains("id=9876543210"));
    }

    #[test]
    fn test_short_id_uses_wrapper() {
        // 5 digits is not a status id
        let input = "https://x.com/u/status/12345";
        let d = resolve_url(input).unwrap();
        assert_eq!(d.provider, "twitter");
        assert!(d.source.starts_with("https://twitframe.com/show?url="));
        assert!(d.source.contains(&encode(input)));
    }

    #[test]
    fn test_profile_url_uses_wrapper() {
        let d = resolve_url("https://twitter.com/someuser").unwrap();
        assert_eq!(d.provider, "twitter");
        assert!(d.source.starts_with("https://twitframe.com/show?url="));
    }

    #[test]
    fn test_non_numeric_status_uses_wrapper() {
        let d = resolve_url("https://x.com/u/status/not-a-number-id").unwrap();
        assert!(d.source.starts_with("https://twitframe.com/show"));
    }

    #[test]
    fn test_aspect_is_vertical_biased() {
        let d = resolve_url("https://x.com/u/status/1234567890123456789").unwrap();
        assert!(d.aspect_ratio < 1.0);
    }
}
