//! Navigation path helpers.
//!
//! Navigation targets arrive as whatever the address bar or a link holds:
//! a path, optionally followed by a query string and a fragment. Routing
//! decisions are made on the path alone.

/// Returns the path portion of a navigation target, dropping any
/// `?query` and `#fragment`.
#[must_use]
pub fn path_only(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    &target[..end]
}

/// Drops a single trailing slash from a non-root path.
#[must_use]
pub fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

/// Returns true if the target is an absolute in-app path.
#[must_use]
pub fn is_absolute(target: &str) -> bool {
    target.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_only_strips_query_and_fragment() {
        assert_eq!(path_only("/poem/42?tab=notes"), "/poem/42");
        assert_eq!(path_only("/guide#top"), "/guide");
        assert_eq!(path_only("/a?b#c"), "/a");
        assert_eq!(path_only("/analysis"), "/analysis");
    }

    #[test]
    fn trailing_slash_is_trimmed_except_root() {
        assert_eq!(trim_trailing_slash("/guide/"), "/guide");
        assert_eq!(trim_trailing_slash("/guide"), "/guide");
        assert_eq!(trim_trailing_slash("/"), "/");
    }

    #[test]
    fn absolute_paths() {
        assert!(is_absolute("/"));
        assert!(!is_absolute("login"));
        assert!(!is_absolute(""));
    }
}
