//! Facebook URL handling and plugin URL construction
//!
//! Facebook's plugin URL requires an exact pixel width at request time,
//! so a descriptor for Facebook content seeds the iframe with a
//! placeholder and carries a re-layout policy. After a resize settles the
//! canvas requeries the live width and reissues the plugin URL through
//! [`plugin_url`].

use super::{encode, Extraction};
use crate::descriptor::{EmbedDescriptor, RelayoutPolicy, DEFAULT_ASPECT};
use crate::locator::Locator;

/// Seed source rendered until the first width-aware re-layout fires.
pub const PLACEHOLDER_SOURCE: &str = "about:blank";

/// Requested widths snap to this grid to avoid re-requesting the plugin
/// for every pixel of drag.
pub const WIDTH_STEP: f32 = 30.0;

pub(crate) fn is_facebook_host(locator: &Locator) -> bool {
    locator.host_within("facebook.com") || locator.host == "fb.watch"
}

pub(crate) fn extract(locator: &Locator) -> Extraction {
    Extraction::Embed(
        EmbedDescriptor::iframe(
            "facebook",
            PLACEHOLDER_SOURCE,
            DEFAULT_ASPECT,
            false,
            &locator.raw,
        )
        .with_relayout(RelayoutPolicy::FacebookPlugin {
            href: locator.raw.clone(),
        }),
    )
}

/// Build the width-quantized plugin URL for a settled container size
///
/// Video content goes through `video.php`, everything else through
/// `post.php`. Width snaps to the nearest [`WIDTH_STEP`] multiple.
pub fn plugin_url(href: &str, width: f32, height: f32) -> String {
    let snapped = snap_width(width);
    let endpoint = if is_video_href(href) {
        "video.php"
    } else {
        "post.php"
    };
    format!(
        "https://www.facebook.com/plugins/{}?href={}&width={}&height={}&show_text=false",
        endpoint,
        encode(href),
        snapped,
        height.max(1.0).round() as u32,
    )
}

/// Snap a pixel width to the nearest [`WIDTH_STEP`] multiple, minimum one step.
pub fn snap_width(width: f32) -> u32 {
    let steps = (width / WIDTH_STEP).round().max(1.0);
    (steps * WIDTH_STEP) as u32
}

fn is_video_href(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    lower.contains("/videos/") || lower.contains("fb.watch") || lower.contains("/watch")
}
