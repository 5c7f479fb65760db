//! Structured embed conventions
//!
//! Most platforms ship embed codes as a marker element carrying the
//! canonical content URL: a classed `<blockquote>` (Twitter, Instagram,
//! TikTok, ...) or a data-attributed `<div>` (Facebook, Pinterest, ...).
//! Recognition pulls that URL back out and re-runs it through the
//! provider resolver, which preserves identity across copy/paste
//! round-trips.

use super::scan::Tag;

/// A classed block-quote convention
pub(crate) struct QuoteConvention {
    /// Class token identifying the platform
    pub class: &'static str,
    /// Attributes holding the canonical URL, tried in order before the
    /// `cite` attribute and the first child anchor
    pub url_attrs: &'static [&'static str],
}

pub(crate) const QUOTE_CONVENTIONS: &[QuoteConvention] = &[
    QuoteConvention {
        class: "twitter-tweet",
        url_attrs: &[],
    },
    QuoteConvention {
        class: "instagram-media",
        url_attrs: &["data-instgrm-permalink"],
    },
    QuoteConvention {
        class: "tiktok-embed",
        url_attrs: &["cite"],
    },
    QuoteConvention {
        class: "reddit-embed-bq",
        url_attrs: &[],
    },
    QuoteConvention {
        class: "reddit-card",
        url_attrs: &[],
    },
    QuoteConvention {
        // data-bluesky-uri holds an at:// URI; the anchor has the web URL
        class: "bluesky-embed",
        url_attrs: &[],
    },
    QuoteConvention {
        class: "text-post-media",
        url_attrs: &["data-text-post-permalink"],
    },
    QuoteConvention {
        class: "tumblr-post",
        url_attrs: &["data-href"],
    },
    QuoteConvention {
        class: "mastodon-embed",
        url_attrs: &["data-embed-url"],
    },
    QuoteConvention {
        class: "linkedin-embed",
        url_attrs: &["data-url"],
    },
];

/// A data-attributed container convention
pub(crate) struct MarkerConvention {
    /// Required class token, if any
    pub class: Option<&'static str>,
    /// Attribute carrying the URL or id
    pub attr: &'static str,
    /// When set, `{}` is replaced with the attribute value to build the
    /// canonical URL; otherwise the attribute value is the URL itself
    pub template: Option<&'static str>,
}

pub(crate) const MARKER_CONVENTIONS: &[MarkerConvention] = &[
    MarkerConvention {
        class: Some("fb-video"),
        attr: "data-href",
        template: None,
    },
    MarkerConvention {
        class: Some("fb-video"),
        attr: "data-uri",
        template: None,
    },
    MarkerConvention {
        class: Some("fb-post"),
        attr: "data-href",
        template: None,
    },
    MarkerConvention {
        class: Some("fb-post"),
        attr: "data-uri",
        template: None,
    },
    MarkerConvention {
        class: None,
        attr: "data-pin-id",
        template: Some("https://assets.pinterest.com/ext/embed.html?id={}"),
    },
    MarkerConvention {
        class: None,
        attr: "data-soundcloud-url",
        template: None,
    },
    MarkerConvention {
        class: None,
        attr: "data-youtube-id",
        template: Some("https://youtu.be/{}"),
    },
    MarkerConvention {
        class: None,
        attr: "data-giphy-id",
        template: Some("https://giphy.com/embed/{}"),
    },
];

/// Canonical URL for a structured block-quote, if `tag` matches one.
pub(crate) fn quote_url(tags: &[Tag], index: usize) -> Option<String> {
    let tag = &tags[index];
    if tag.name != "blockquote" && tag.name != "div" {
        return None;
    }

    let convention = QUOTE_CONVENTIONS
        .iter()
        .find(|c| tag.has_class(c.class))?;

    for attr in convention.url_attrs {
        if let Some(value) = tag.attr(attr).filter(|v| is_http_url(v)) {
            return Some(value.to_string());
        }
    }
    if let Some(cite) = tag.attr("cite").filter(|v| is_http_url(v)) {
        return Some(cite.to_string());
    }
    child_anchor_href(tags, index)
}

/// Canonical URL for a data-attributed container, if `tag` matches one.
pub(crate) fn marker_url(tag: &Tag) -> Option<String> {
    for convention in MARKER_CONVENTIONS {
        if let Some(class) = convention.class {
            if !tag.has_class(class) {
                continue;
            }
        }
        let value = match tag.attr(convention.attr) {
            Some(v) => v,
            None => continue,
        };
        return Some(match convention.template {
            Some(template) => template.replace("{}", value),
            None => {
                if !is_http_url(value) {
                    continue;
                }
                value.to_string()
            }
        });
    }

    // Spotify URIs carry no scheme-relative URL; expand spotify:kind:id
    if let Some(uri) = tag.attr("data-spotify-uri") {
        let mut parts = uri.split(':');
        if parts.next() == Some("spotify") {
            if let (Some(kind), Some(id)) = (parts.next(), parts.next()) {
                return Some(format!("https://open.spotify.com/embed/{}/{}", kind, id));
            }
        }
    }

    None
}

/// First `<a href>` inside the element opened at `index`.
fn child_anchor_href(tags: &[Tag], index: usize) -> Option<String> {
    let open = &tags[index];
    let mut depth = 0_i32;

    for tag in &tags[index + 1..] {
        if tag.name == open.name {
            if tag.is_end {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            } else if !tag.self_closing {
                depth += 1;
            }
            continue;
        }
        if tag.name == "a" && !tag.is_end {
            if let Some(href) = tag.attr("href").filter(|v| is_http_url(v)) {
                return Some(href.to_string());
            }
        }
    }
    None
}

pub(crate) fn is_http_url(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
