//! Strict slug generation for URL paths and heading anchors.

use deunicode::deunicode;

/// Generate a URL-safe slug from arbitrary text.
///
/// Transliterates Unicode to ASCII (English-style), lowercases, and keeps
/// only alphanumerics; every other run of characters collapses to a single
/// `-`. Leading and trailing separators are never produced, so the function
/// is idempotent: `slugify(slugify(s)) == slugify(s)`.
///
/// # Examples
///
/// ```
/// use blogtext::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("My API (v2)!"), "my-api-v2");
/// assert_eq!(slugify("Æther über Paris"), "aether-uber-paris");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
