//! Embed resolution engine for the MultiView canvas
//!
//! Turns an arbitrary pasted URL or HTML snippet into a renderable
//! [`EmbedDescriptor`]: a normalized source reference, an intrinsic aspect
//! ratio, and scroll behavior. The two entry points are
//! [`resolve_url`] for plain URLs and [`extract_fragment`] for pasted
//! embed markup.

mod config;
mod descriptor;
mod error;
mod fragment;
mod locator;
mod providers;

pub use config::{EMBED_HOST, EMBED_ORIGIN};
pub use descriptor::{EmbedDescriptor, RelayoutPolicy, SourceKind, DEFAULT_ASPECT};
pub use error::ResolveError;
pub use fragment::{extract_fragment, FragmentOutcome, StyleDirective, StyleRule};
pub use locator::Locator;
pub use providers::facebook;
pub use providers::patterns::{classify_source, SourcePattern, SOURCE_PATTERNS};
pub use providers::{resolve_locator, resolve_url};
