//! Current-subpath extraction
//!
//! Derives the resource subpath of the current page relative to its version
//! root. Pure string transformation; no network or page access.

/// Extracts the resource subpath from the current URL.
///
/// Splits the URL on the first occurrence of any root marker, then drops the
/// first two path segments after it (the current version's own root prefix).
/// Returns an empty string when no marker is present or when fewer than two
/// segments follow it.
///
/// For `https://host/docs/_site/2021.12/api/foo.html` with marker `_site`,
/// the segments after the marker are `["", "2021.12", "api", "foo.html"]`
/// and the subpath is `api/foo.html`.
pub fn current_subpath(current_url: &str, root_markers: &[String]) -> String {
    let Some((pos, marker)) = root_markers
        .iter()
        .filter_map(|m| current_url.find(m.as_str()).map(|pos| (pos, m)))
        .min_by_key(|(pos, _)| *pos)
    else {
        return String::new();
    };

    let after = &current_url[pos + marker.len()..];
    after.split('/').skip(2).collect::<Vec<_>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn markers(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[rstest]
    #[case(
        "https://data-apis.org/_site/2021.12/api/foo.html",
        &["_site"],
        "api/foo.html"
    )]
    #[case(
        "https://data-apis.org/array_api/latest/extensions/linalg.html",
        &["_site", "array_api"],
        "extensions/linalg.html"
    )]
    #[case("https://data-apis.org/other/page.html", &["_site"], "")]
    #[case("https://data-apis.org/_site/2021.12", &["_site"], "")]
    #[case("https://data-apis.org/_site", &["_site"], "")]
    fn current_subpath_extracts_path_after_version_root(
        #[case] url: &str,
        #[case] tokens: &[&str],
        #[case] expected: &str,
    ) {
        assert_eq!(current_subpath(url, &markers(tokens)), expected);
    }

    #[test]
    fn current_subpath_uses_leftmost_marker_when_several_match() {
        let url = "https://host/_site/array_api/api/foo.html";
        // "_site" occurs before "array_api"; everything after "_site" counts
        assert_eq!(
            current_subpath(url, &markers(&["array_api", "_site"])),
            "api/foo.html"
        );
    }

    #[test]
    fn current_subpath_keeps_nested_segments_intact() {
        let url = "https://host/_site/draft/api/signatures/constants.html";
        assert_eq!(
            current_subpath(url, &markers(&["_site"])),
            "api/signatures/constants.html"
        );
    }

    #[test]
    fn current_subpath_is_empty_for_empty_marker_set() {
        assert_eq!(current_subpath("https://host/_site/v/a.html", &[]), "");
    }
}
