//! Version-aware URL resolution layer
//!
//! This module holds the actual logic of the crate: loading the version
//! manifest, deriving the current page's resource subpath, and deciding,
//! per version, whether the equivalent resource exists or the link should
//! fall back to that version's index page.
//!
//! # Modules
//!
//! - [`manifest`]: manifest fetching and the ordered label→segment mapping
//! - [`subpath`]: current-subpath extraction from the page URL
//! - [`prober`]: single-resource existence probe with index fallback
//! - [`links`]: concurrent fan-out of probes into resolved links
//! - [`error`]: error types for manifest loading

pub mod error;
pub mod links;
pub mod manifest;
pub mod prober;
pub mod subpath;

pub use error::ManifestError;
pub use links::{ResolvedLink, resolve_links};
pub use manifest::{VersionManifest, fetch_manifest};
pub use prober::{HttpProber, Prober};
pub use subpath::current_subpath;
