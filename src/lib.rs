//! Version dropdown menu builder for multi-version documentation sites
//!
//! Given a JSON manifest mapping version labels to version path segments,
//! a target base URL, and trigger text, this crate resolves one link per
//! documented version, preferring the version-equivalent of the current
//! page and falling back to that version's index page, and appends the
//! assembled dropdown menu to the page's navigation header.

pub mod config;
pub mod menu;
pub mod resolve;
