use serde::Deserialize;
use std::time::Duration;

// =============================================================================
// Menu constants
// =============================================================================

/// Trigger text shown when the version manifest cannot be loaded
pub const NOT_FOUND_TEXT: &str = "Other Versions Not Found";

/// Page a version link falls back to when the exact resource does not exist
pub const FALLBACK_PAGE: &str = "index.html";

/// Class name of the navigation header element the menu is appended to
pub const NAV_HEADER_CLASS: &str = "navheader";

/// Path tokens recognized as the root of the documentation tree.
/// The subpath of the current page is everything after the first of these.
pub const DEFAULT_ROOT_MARKERS: &[&str] = &["_site", "array_api"];

/// Menu configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Tokens marking the documentation root in the current URL
    pub root_markers: Vec<String>,
    /// Per-probe timeout in milliseconds. None means no timeout beyond
    /// what the HTTP client itself enforces.
    pub probe_timeout_ms: Option<u64>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            root_markers: DEFAULT_ROOT_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            probe_timeout_ms: None,
        }
    }
}

impl MenuConfig {
    /// Returns the probe timeout as a Duration, if configured.
    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn menu_config_from_empty_object_uses_defaults() {
        let result = serde_json::from_value::<MenuConfig>(json!({})).unwrap();

        assert_eq!(result, MenuConfig::default());
        assert_eq!(result.root_markers, vec!["_site", "array_api"]);
        assert_eq!(result.probe_timeout(), None);
    }

    #[test]
    fn menu_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<MenuConfig>(json!({
            "probeTimeoutMs": 5000
        }))
        .unwrap();

        assert_eq!(result.probe_timeout(), Some(Duration::from_millis(5000)));
        assert_eq!(result.root_markers, MenuConfig::default().root_markers);
    }

    #[test]
    fn menu_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<MenuConfig>(json!({
            "rootMarkers": ["docs"],
            "probeTimeoutMs": 1000
        }))
        .unwrap();

        assert_eq!(
            result,
            MenuConfig {
                root_markers: vec!["docs".to_string()],
                probe_timeout_ms: Some(1000),
            }
        );
    }
}
