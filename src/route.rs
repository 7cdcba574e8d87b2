//! Site route helpers: slug paths, pagination sizes, and URL handling.

use thiserror::Error;
use url::Url;

/// Posts shown per blog index page.
pub const POSTS_PER_PAGE: usize = 12;

/// Customer stories shown per index page.
pub const CUSTOMER_STORIES_PER_PAGE: usize = 9;

/// URL resolution errors.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("invalid URL: cannot resolve `{path}` against `{origin}`")]
    InvalidUrl { path: String, origin: String },
}

/// Route for a blog post slug (`/blog/<slug>`).
pub fn post_slug_path(slug: &str) -> String {
    format!("/blog/{slug}")
}

/// Route for a customer story slug (`/customers/<slug>`).
pub fn customer_story_slug_path(slug: &str) -> String {
    format!("/customers/{slug}")
}

/// True iff `s` parses as an absolute URL with scheme `http` or `https`.
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Resolve `path` against the site origin to an absolute URL string.
///
/// The origin comes from site configuration, not from this crate.
pub fn canonical_url(path: &str, site_origin: &str) -> Result<String, UrlError> {
    let invalid = || UrlError::InvalidUrl {
        path: path.to_string(),
        origin: site_origin.to_string(),
    };

    let base = Url::parse(site_origin).map_err(|_| invalid())?;
    let resolved = base.join(path).map_err(|_| invalid())?;
    Ok(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_paths() {
        assert_eq!(post_slug_path("my-post"), "/blog/my-post");
        assert_eq!(customer_story_slug_path("acme"), "/customers/acme");
    }

    #[test]
    fn test_page_sizes() {
        assert_eq!(POSTS_PER_PAGE, 12);
        assert_eq!(CUSTOMER_STORIES_PER_PAGE, 9);
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/blog/post"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("ftp://x.com"));
        assert!(!is_valid_url("/blog/post"));
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            canonical_url("/blog/my-post", "https://example.com").unwrap(),
            "https://example.com/blog/my-post"
        );
        assert_eq!(
            canonical_url("about", "https://example.com/docs/").unwrap(),
            "https://example.com/docs/about"
        );
    }

    #[test]
    fn test_canonical_url_absolute_path_wins() {
        assert_eq!(
            canonical_url("https://other.com/x", "https://example.com").unwrap(),
            "https://other.com/x"
        );
    }

    #[test]
    fn test_canonical_url_invalid_origin() {
        let err = canonical_url("/blog/x", "not an origin").unwrap_err();
        assert!(matches!(err, UrlError::InvalidUrl { .. }));
    }
}
