//! Parsed URL locator
//!
//! Structural form of a pasted URL used by the provider matchers. Host
//! comparison throughout the resolver is case-insensitive with mobile
//! prefixes stripped, so `https://m.youtube.com/...` and
//! `https://www.youtube.com/...` resolve identically.

use url::Url;

/// Mobile/desktop host prefixes that never change provider identity.
const HOST_PREFIXES: [&str; 3] = ["www.", "m.", "mobile."];

/// Parsed structural representation of a URL
#[derive(Clone, Debug, PartialEq)]
pub struct Locator {
    /// URL scheme (lowercased by the parser)
    pub scheme: String,
    /// Host with `www.` / `m.` / `mobile.` stripped, lowercased
    pub host: String,
    /// Non-empty path segments in order
    pub path_segments: Vec<String>,
    /// Query parameters in document order
    pub query: Vec<(String, String)>,
    /// The original input, verbatim
    pub raw: String,
}

impl Locator {
    /// Parse a raw string into a locator
    ///
    /// Returns `None` when the input is not a syntactically valid absolute
    /// URL with a host. Never panics; callers fall back to generic
    /// treatment of the raw text.
    pub fn parse(raw: &str) -> Option<Self> {
        let parsed = Url::parse(raw).ok()?;
        let host = parsed.host_str()?;

        let mut host = host.to_ascii_lowercase();
        for prefix in HOST_PREFIXES {
            if let Some(stripped) = host.strip_prefix(prefix) {
                host = stripped.to_string();
                break;
            }
        }

        let path_segments = parsed
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();

        let query = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Some(Self {
            scheme: parsed.scheme().to_string(),
            host,
            path_segments,
            query,
            raw: raw.to_string(),
        })
    }

    /// First value of a query parameter, if present
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Path segment by index
    #[inline]
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.path_segments.get(index).map(|s| s.as_str())
    }

    /// Check whether the host equals `domain` or is a subdomain of it
    pub fn host_within(&self, domain: &str) -> bool {
        self.host == domain
            || self
                .host
                .strip_suffix(domain)
                .is_some_and(|rest| rest.ends_with('.'))
    }
}
