//! Version manifest fetching and parsing

use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::resolve::error::ManifestError;

/// Mapping from version label to version path segment, e.g.
/// `{"latest": "", "v1.0": "v1.0"}`. Iteration order follows the
/// manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct VersionManifest(IndexMap<String, String>);

impl VersionManifest {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over (label, version segment) pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for VersionManifest {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fetches and parses the version manifest.
///
/// Any valid JSON object is accepted; there is no schema versioning.
/// A non-2xx status or a body that is not a JSON object is an error.
pub async fn fetch_manifest(client: &Client, url: &str) -> Result<VersionManifest, ManifestError> {
    debug!("Fetching version manifest: {}", url);

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(ManifestError::InvalidResponse(format!(
            "manifest fetch returned status {}",
            response.status()
        )));
    }

    let manifest: VersionManifest = response
        .json()
        .await
        .map_err(|e| ManifestError::InvalidResponse(e.to_string()))?;

    debug!("Found {} versions in manifest", manifest.len());

    Ok(manifest)
}
