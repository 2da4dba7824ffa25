//! Path decomposition helpers.

/// Split a pathname into its cumulative prefixes, shortest first.
///
/// `/a/b/c` becomes `["/a", "/a/b", "/a/b/c"]`. Empty segments are dropped,
/// so `/` and `""` produce nothing.
pub fn url_to_list(url: &str) -> Vec<String> {
    let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();
    (1..=segments.len())
        .map(|end| format!("/{}", segments[..end].join("/")))
        .collect()
}

/// Returns true for absolute `http://` or `https://` links.
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Normalize a menu path into a link target.
///
/// Anything starting with `http` is passed through; everything else gets a
/// leading `/` and runs of slashes collapsed to one.
pub fn normalize_link(path: Option<&str>) -> String {
    let path = path.unwrap_or_default();
    if path.starts_with("http") {
        return path.to_string();
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for c in std::iter::once('/').chain(path.chars()) {
        if c == '/' && normalized.ends_with('/') {
            continue;
        }
        normalized.push(c);
    }
    normalized
}
