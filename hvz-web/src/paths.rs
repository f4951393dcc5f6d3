//! Helpers for building in-site URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/hvz` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn route_href(path: &str) -> String {
    route_href_with_base(path, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/hvz` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn route_href_with_base(path: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else if rel.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{route_href, router_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(route_href("resources"), "/resources");
        assert_eq!(route_href("/resources"), "/resources");
        assert_eq!(route_href("/"), "/");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::route_href_with_base("/resources", "/hvz"),
            "/hvz/resources"
        );
        assert_eq!(super::route_href_with_base("/", "/hvz/"), "/hvz/");
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/hvz/"),
            Some(String::from("/hvz"))
        );
    }
}
