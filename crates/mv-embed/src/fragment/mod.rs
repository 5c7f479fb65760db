//! HTML fragment extraction
//!
//! Pasted embed codes arrive as markup rather than URLs. Extraction
//! first tries to recover the canonical content URL from structured
//! conventions (classed blockquotes, data-attributed containers, the
//! Facebook plugin iframe) and re-resolves it through the provider
//! table. Fragments without a recoverable URL are kept as sanitized raw
//! HTML, classified by the shape of their first media element.

mod scan;
mod structured;

use serde::{Deserialize, Serialize};

use crate::descriptor::{EmbedDescriptor, DEFAULT_ASPECT};
use crate::error::ResolveError;
use crate::locator::Locator;
use crate::providers::{patterns, resolve_url};

use scan::{parse_dimension, scan_tags, strip_scripts, Tag};

/// Elements treated as embedded media when a fragment is kept raw.
const MEDIA_ELEMENTS: &[&str] = &["iframe", "embed", "video", "object", "audio"];

/// Presentation rule for one media element in a raw fragment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleRule {
    /// Stretch to the window's content box
    FillContainer,
    /// Letterbox within the content box instead of cropping
    FitContain,
    /// Force native playback controls on
    ShowControls,
}

/// One rule applied to one media element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDirective {
    /// Index of the media element, in document order
    pub element: usize,
    pub rule: StyleRule,
}

/// Result of fragment extraction: a descriptor plus presentation rules
/// for the media elements the raw fragment contains (empty when the
/// fragment resolved to a canonical URL).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FragmentOutcome {
    pub descriptor: EmbedDescriptor,
    pub styles: Vec<StyleDirective>,
}

impl FragmentOutcome {
    fn resolved(descriptor: EmbedDescriptor) -> Self {
        Self {
            descriptor,
            styles: Vec::new(),
        }
    }
}

/// Extract an embed descriptor from pasted text
///
/// Absolute URLs delegate to [`resolve_url`]; everything else goes
/// through structured recognition and falls back to sanitized raw HTML.
/// Whatever the path, the descriptor's `original_input` is the pasted
/// text verbatim.
pub fn extract_fragment(input: &str) -> Result<FragmentOutcome, ResolveError> {
    let trimmed = input.trim();

    if structured::is_http_url(trimmed) {
        return Ok(FragmentOutcome::resolved(resolve_url(trimmed)?));
    }

    let stripped = strip_scripts(trimmed);
    let tags = scan_tags(&stripped);

    // Structured conventions carry the canonical content URL
    for (index, tag) in tags.iter().enumerate() {
        if tag.is_end {
            continue;
        }
        let url = structured::quote_url(&tags, index).or_else(|| structured::marker_url(tag));
        if let Some(url) = url {
            let descriptor = resolve_url(&url)?.with_original_input(trimmed);
            return Ok(FragmentOutcome::resolved(descriptor));
        }
    }

    // Facebook plugin iframes embed the content URL as an href parameter
    if let Some(href) = facebook_plugin_href(&tags) {
        let descriptor = resolve_url(&href)?.with_original_input(trimmed);
        return Ok(FragmentOutcome::resolved(descriptor));
    }

    let media: Vec<&Tag> = tags
        .iter()
        .filter(|t| !t.is_end && MEDIA_ELEMENTS.contains(&t.name.as_str()))
        .collect();

    if media.is_empty() {
        return Ok(FragmentOutcome {
            descriptor: EmbedDescriptor::raw_html(
                "generic",
                stripped.clone(),
                DEFAULT_ASPECT,
                true,
                trimmed,
            ),
            styles: Vec::new(),
        });
    }

    // Opaque media: classify the first element's source and keep the
    // sanitized markup as-is
    let first = media[0];
    let source = media_source(first);
    let pattern = source.and_then(patterns::classify_source);

    let (provider, mut aspect, scrollable) = match pattern {
        Some(p) => (p.provider, p.aspect, p.scrollable),
        None => ("generic", DEFAULT_ASPECT, false),
    };

    if let Some(ratio) = dimension_aspect(first) {
        aspect = ratio;
    }

    let styles = media
        .iter()
        .enumerate()
        .flat_map(|(element, tag)| {
            let mut rules = vec![StyleDirective {
                element,
                rule: StyleRule::FillContainer,
            }];
            if tag.name == "video" || tag.name == "audio" {
                rules.push(StyleDirective {
                    element,
                    rule: StyleRule::FitContain,
                });
                rules.push(StyleDirective {
                    element,
                    rule: StyleRule::ShowControls,
                });
            }
            rules
        })
        .collect();

    Ok(FragmentOutcome {
        descriptor: EmbedDescriptor::raw_html(provider, stripped.clone(), aspect, scrollable, trimmed),
        styles,
    })
}

/// The `href` parameter of the first Facebook plugin iframe, if any.
fn facebook_plugin_href(tags: &[Tag]) -> Option<String> {
    tags.iter()
        .filter(|t| !t.is_end && t.name == "iframe")
        .find_map(|tag| {
            let src = tag.attr("src")?;
            if !src.to_ascii_lowercase().contains("facebook.com/plugins/") {
                return None;
            }
            let locator = Locator::parse(src)?;
            locator
                .param("href")
                .filter(|href| structured::is_http_url(href))
                .map(str::to_string)
        })
}

/// Source URL attribute for a media element (`data` for `<object>`).
fn media_source(tag: &Tag) -> Option<&str> {
    match tag.name.as_str() {
        "object" => tag.attr("data"),
        _ => tag.attr("src"),
    }
}

/// Aspect ratio from numeric `width`/`height` attributes, if both parse.
/// Percentage values say nothing about intrinsic shape and are ignored.
fn dimension_aspect(tag: &Tag) -> Option<f32> {
    let pixel = |name: &str| {
        tag.attr(name)
            .filter(|v| !v.contains('%'))
            .and_then(parse_dimension)
    };
    let width = pixel("width")?;
    let height = pixel("height")?;
    if height > 0.0 && width > 0.0 {
        Some(width / height)
    } else {
        None
    }
}
