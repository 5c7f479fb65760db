//! Kick, Vimeo, and Rumble URL handling

use super::{encode, Extraction};
use crate::descriptor::{EmbedDescriptor, DEFAULT_ASPECT};
use crate::error::ResolveError;
use crate::locator::Locator;

pub(crate) fn is_kick_host(locator: &Locator) -> bool {
    locator.host_within("kick.com")
}

/// kick.com/{channel} -> Kick's dedicated player host.
pub(crate) fn extract_kick(locator: &Locator) -> Extraction {
    match locator.segment(0) {
        Some(channel) => {
            let source = format!("https://player.kick.com/{}", encode(channel));
            Extraction::Embed(EmbedDescriptor::iframe(
                "kick",
                source,
                DEFAULT_ASPECT,
                false,
                &locator.raw,
            ))
        }
        None => Extraction::Fallback,
    }
}

pub(crate) fn is_vimeo_host(locator: &Locator) -> bool {
    locator.host == "vimeo.com" || locator.host == "player.vimeo.com"
}

/// vimeo.com/{numeric id} -> player URL; player URLs pass through as-is.
pub(crate) fn extract_vimeo(locator: &Locator) -> Extraction {
    if locator.host == "player.vimeo.com" {
        return Extraction::Embed(EmbedDescriptor::iframe(
            "vimeo",
            &locator.raw,
            DEFAULT_ASPECT,
            false,
            &locator.raw,
        ));
    }

    match locator.segment(0) {
        Some(id) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => {
            let source = format!("https://player.vimeo.com/video/{}", id);
            Extraction::Embed(EmbedDescriptor::iframe(
                "vimeo",
                source,
                DEFAULT_ASPECT,
                false,
                &locator.raw,
            ))
        }
        _ => Extraction::Fallback,
    }
}

pub(crate) fn is_rumble_host(locator: &Locator) -> bool {
    locator.host_within("rumble.com")
}

/// Rumble page URLs cannot be turned into a working player URL; the user
/// is asked for the official embed code, which the fragment path accepts.
pub(crate) fn reject_rumble(_locator: &Locator) -> Extraction {
    Extraction::Reject(ResolveError::Unsupported {
        provider: "rumble",
        reason: "paste the official embed code instead",
    })
}
