//! Per-version link resolution
//!
//! Fans out one probe per manifest entry and joins all of them before
//! returning, so the menu never displays a partially resolved version set.

use futures::future::join_all;

use crate::resolve::manifest::VersionManifest;
use crate::resolve::prober::Prober;

/// A resolved menu entry: display label and link target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Version label from the manifest key
    pub label: String,
    /// Target URL, either the version-equivalent resource or the
    /// version's fallback index page
    pub href: String,
}

/// Resolves one link per manifest entry, in manifest order.
///
/// The base URL of each version is `target_base` concatenated with its
/// version segment, without a separator; an empty segment therefore probes
/// directly under `target_base`. Probes run concurrently and are all
/// awaited before any result is returned.
pub async fn resolve_links(
    prober: &dyn Prober,
    manifest: &VersionManifest,
    target_base: &str,
    subpath: &str,
) -> Vec<ResolvedLink> {
    let probes = manifest.iter().map(|(label, segment)| async move {
        let base_url = format!("{}{}", target_base, segment);
        let href = prober.resolve_href(&base_url, subpath).await;
        ResolvedLink {
            label: label.clone(),
            href,
        }
    });

    join_all(probes).await
}
