//! Resolved embed descriptor
//!
//! The sole data handed back to rendering and clipboard collaborators.
//! Created once by the resolver and never mutated; a new user action
//! produces a new descriptor.

use serde::{Deserialize, Serialize};

/// Default intrinsic aspect ratio (width / height) for video embeds.
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// How the source value should be rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// `source` is a URL for a configured iframe
    IframeSrc,
    /// `source` is a sanitized HTML fragment injected directly
    RawHtml,
}

/// Post-creation re-layout behavior required by a provider
///
/// Facebook's plugin URL bakes an exact pixel width into the request, so
/// its windows must reissue the source after every resize settles. All
/// other providers keep their source for the window's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelayoutPolicy {
    /// No re-layout after resize
    #[default]
    None,
    /// Reissue the Facebook plugin URL with the settled container width
    FacebookPlugin {
        /// Canonical content URL passed as the plugin `href`
        href: String,
    },
}

impl RelayoutPolicy {
    /// Check whether this policy requires resize-settle notifications
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, RelayoutPolicy::None)
    }
}

/// Normalized result of resolving a user-supplied URL or HTML fragment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbedDescriptor {
    /// Stable provider tag, e.g. `"youtube"`, `"twitch-clip"`, `"generic"`
    pub provider: String,
    /// How `source` should be rendered
    pub kind: SourceKind,
    /// Iframe URL or sanitized HTML fragment
    pub source: String,
    /// Intrinsic aspect ratio (width / height), always positive
    pub aspect_ratio: f32,
    /// Whether the embedded frame should allow scrolling
    pub scrollable: bool,
    /// The user's input, verbatim; what copy-back returns
    pub original_input: String,
    /// Post-resize re-layout requirement
    #[serde(default, skip_serializing_if = "relayout_is_none")]
    pub relayout: RelayoutPolicy,
}

fn relayout_is_none(policy: &RelayoutPolicy) -> bool {
    !policy.is_active()
}

impl EmbedDescriptor {
    /// Create an iframe-sourced descriptor
    pub fn iframe(
        provider: &str,
        source: impl Into<String>,
        aspect_ratio: f32,
        scrollable: bool,
        original_input: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.to_string(),
            kind: SourceKind::IframeSrc,
            source: source.into(),
            aspect_ratio: sanitize_aspect(aspect_ratio),
            scrollable,
            original_input: original_input.into(),
            relayout: RelayoutPolicy::None,
        }
    }

    /// Create a raw-HTML descriptor
    pub fn raw_html(
        provider: &str,
        source: impl Into<String>,
        aspect_ratio: f32,
        scrollable: bool,
        original_input: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.to_string(),
            kind: SourceKind::RawHtml,
            source: source.into(),
            aspect_ratio: sanitize_aspect(aspect_ratio),
            scrollable,
            original_input: original_input.into(),
            relayout: RelayoutPolicy::None,
        }
    }

    /// Generic fallback: the raw text becomes a scrollable 16:9 iframe
    pub fn generic(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self::iframe("generic", raw.clone(), DEFAULT_ASPECT, true, raw)
    }

    /// Attach a re-layout policy
    pub fn with_relayout(mut self, relayout: RelayoutPolicy) -> Self {
        self.relayout = relayout;
        self
    }

    /// Replace the verbatim original input (fragment paths resolve a
    /// canonical URL but must copy back the full pasted markup)
    pub fn with_original_input(mut self, original: impl Into<String>) -> Self {
        self.original_input = original.into();
        self
    }
}

/// Invalid or non-positive ratios fall back to 16:9.
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        DEFAULT_ASPECT
    }
}
