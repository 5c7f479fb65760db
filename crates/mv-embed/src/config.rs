//! Compile-time embed host configuration
//!
//! Twitch's embed contract requires every player URL to carry a `parent`
//! query parameter naming the domain that hosts the embedding page.

/// Domain hosting the MultiView canvas, used as the Twitch `parent` value.
pub const EMBED_HOST: &str = "bigstrib.github.io";

/// Full origin of the hosting page, for providers that want a referrer URL.
pub const EMBED_ORIGIN: &str = "https://bigstrib.github.io";
