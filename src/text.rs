//! Small text formatting helpers.

use std::borrow::Cow;

/// Default truncation length for summaries and meta descriptions.
pub const DEFAULT_TRIM_LENGTH: usize = 160;

/// Truncate text to `max_length` characters, ellipsis included.
///
/// Text at or under the limit is borrowed unchanged; longer text is cut to
/// `max_length - 3` characters with `"..."` appended, so the result never
/// exceeds `max_length`.
pub fn trim_text(text: &str, max_length: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_length {
        return Cow::Borrowed(text);
    }

    let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
    Cow::Owned(format!("{cut}..."))
}

/// Uppercase initials from a full name.
///
/// Takes the first letter of the first space-separated token, plus the
/// first letter of the last token when more than one is present.
///
/// # Examples
///
/// ```
/// use blogtext::get_initials;
///
/// assert_eq!(get_initials("John Smith"), "JS");
/// assert_eq!(get_initials("Prince"), "P");
/// ```
pub fn get_initials(full_name: &str) -> String {
    let names: Vec<&str> = full_name.split(' ').collect();
    let mut initials = String::new();

    if let Some(first) = names.first().and_then(|name| name.chars().next()) {
        initials.extend(first.to_uppercase());
    }
    if names.len() > 1 {
        if let Some(last) = names.last().and_then(|name| name.chars().next()) {
            initials.extend(last.to_uppercase());
        }
    }

    initials
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_long_text() {
        let long = "a".repeat(200);
        let trimmed = trim_text(&long, 160);
        assert_eq!(trimmed.chars().count(), 160);
        assert!(trimmed.ends_with("..."));
        assert_eq!(&trimmed[..157], "a".repeat(157));
    }

    #[test]
    fn test_trim_short_text_borrows() {
        let trimmed = trim_text("short", 160);
        assert!(matches!(trimmed, Cow::Borrowed("short")));
    }

    #[test]
    fn test_trim_exact_length_unchanged() {
        let exact = "b".repeat(160);
        assert_eq!(trim_text(&exact, 160), exact);
    }

    #[test]
    fn test_trim_multibyte() {
        let long = "é".repeat(200);
        let trimmed = trim_text(&long, 10);
        assert_eq!(trimmed.chars().count(), 10);
        assert!(trimmed.ends_with("..."));
    }

    #[test]
    fn test_initials_two_names() {
        assert_eq!(get_initials("John Smith"), "JS");
    }

    #[test]
    fn test_initials_single_name() {
        assert_eq!(get_initials("Prince"), "P");
    }

    #[test]
    fn test_initials_middle_names_skipped() {
        assert_eq!(get_initials("Ada King Lovelace"), "AL");
    }

    #[test]
    fn test_initials_empty() {
        assert_eq!(get_initials(""), "");
    }
}
