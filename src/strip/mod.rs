//! Markdown-to-plaintext stripping.
//!
//! The stripper runs an explicit, ordered pipeline of named rewrite rules
//! (see [`rules`]); each rule is a pure `&str -> String` step over the
//! previous rule's output, and order matters. A rule failure does not
//! propagate: the pipeline stops and reports the text accumulated so far.

mod rules;

use serde::{Deserialize, Serialize};

/// Options controlling which strip rules run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripOptions {
    /// Strip leading list markers (`*`, `-`, `+`, `1.`)
    pub strip_list_leaders: bool,
    /// Replace stripped list markers with a `•` placeholder
    pub list_unicode_char: bool,
    /// Handle GitHub-flavored Markdown (fences, strikethrough)
    pub gfm: bool,
    /// Keep image alt text in place of the image
    pub use_img_alt_text: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            strip_list_leaders: true,
            list_unicode_char: true,
            gfm: true,
            use_img_alt_text: true,
        }
    }
}

/// Result of running the strip pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripOutcome {
    /// Every rule applied cleanly.
    Complete(String),
    /// A rule failed; `text` holds the rewrites accumulated before it.
    Partial {
        text: String,
        failed_rule: &'static str,
    },
}

impl StripOutcome {
    /// The stripped text, complete or not.
    pub fn into_text(self) -> String {
        match self {
            Self::Complete(text) | Self::Partial { text, .. } => text,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Strip Markdown formatting with default options.
///
/// Never fails: if a rule errors, a warning is logged and the partially
/// transformed text is returned as-is.
///
/// # Example
///
/// ```
/// use blogtext::strip_markdown;
///
/// assert_eq!(strip_markdown("![alt](img.png)"), "alt");
/// ```
pub fn strip_markdown(text: &str) -> String {
    match strip_markdown_with(text, &StripOptions::default()) {
        StripOutcome::Complete(text) => text,
        StripOutcome::Partial { text, failed_rule } => {
            log::warn!("markdown strip degraded: rule `{failed_rule}` failed");
            text
        }
    }
}

/// Strip Markdown formatting, reporting whether every rule applied.
pub fn strip_markdown_with(text: &str, options: &StripOptions) -> StripOutcome {
    run_pipeline(text, options, rules::PIPELINE)
}

fn run_pipeline(text: &str, options: &StripOptions, pipeline: &[rules::Rule]) -> StripOutcome {
    let mut text = text.to_string();

    for rule in pipeline {
        if !(rule.enabled)(options) {
            continue;
        }
        match (rule.apply)(&text, options) {
            Ok(next) => text = next,
            Err(_) => {
                return StripOutcome::Partial {
                    text,
                    failed_rule: rule.name,
                };
            }
        }
    }

    StripOutcome::Complete(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_emphasis() {
        let out = strip_markdown("# Title\n\nSome **bold** and _italic_ text.");
        assert!(
            out.contains("Title Some bold and italic text."),
            "got {out:?}"
        );
    }

    #[test]
    fn test_image_keeps_alt_text() {
        assert_eq!(strip_markdown("![alt](img.png)"), "alt");
    }

    #[test]
    fn test_image_without_alt_text_option() {
        let options = StripOptions {
            use_img_alt_text: false,
            ..StripOptions::default()
        };
        let out = strip_markdown_with("![alt](img.png)", &options);
        assert_eq!(out.into_text(), "");
    }

    #[test]
    fn test_links_keep_text() {
        let out = strip_markdown("see [the docs](https://example.com) here");
        assert_eq!(out, "see the docs here");
    }

    #[test]
    fn test_gfm_strikethrough() {
        assert_eq!(strip_markdown("~~gone~~ kept"), "gone kept");
    }

    #[test]
    fn test_gfm_disabled_keeps_strikethrough_markers() {
        let options = StripOptions {
            gfm: false,
            ..StripOptions::default()
        };
        let out = strip_markdown_with("~~gone~~", &options).into_text();
        assert!(out.contains("~~"));
    }

    #[test]
    fn test_list_leaders_get_bullet() {
        let out = strip_markdown("* one\n* two");
        assert!(out.contains("\u{2022} one"), "got {out:?}");
        assert!(out.contains("\u{2022} two"), "got {out:?}");
    }

    #[test]
    fn test_list_leaders_removed_without_bullet() {
        let options = StripOptions {
            list_unicode_char: false,
            ..StripOptions::default()
        };
        let out = strip_markdown_with("- item", &options).into_text();
        assert_eq!(out, "item");
    }

    #[test]
    fn test_inline_code_and_fences() {
        assert_eq!(strip_markdown("run `cargo test` now"), "run cargo test now");
        let out = strip_markdown("```\nlet x = 1;\n```\n");
        assert!(out.contains("let x = 1;"), "got {out:?}");
    }

    #[test]
    fn test_html_tags_removed() {
        assert_eq!(strip_markdown("a <br> b <span>c</span>"), "a b c");
    }

    #[test]
    fn test_blockquotes() {
        assert_eq!(strip_markdown("> quoted"), "quoted");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(strip_markdown(""), "");
        assert_eq!(strip_markdown("  \n\t "), " ");
        assert_eq!(strip_markdown("a\n\n\n\nb"), "a b");
    }

    #[test]
    fn test_unbalanced_markdown_tolerated() {
        // Mechanical rewrites; no panic, no error.
        let out = strip_markdown("**unclosed [link(oops ~~");
        assert!(strip_markdown_with(&out, &StripOptions::default()).is_complete());
    }

    #[test]
    fn test_failing_rule_reports_partial() {
        fn boom(_: &str, _: &StripOptions) -> anyhow::Result<String> {
            anyhow::bail!("boom")
        }

        let pipeline = [
            rules::Rule {
                name: "uppercase",
                enabled: |_| true,
                apply: |text, _| Ok(text.to_uppercase()),
            },
            rules::Rule {
                name: "boom",
                enabled: |_| true,
                apply: boom,
            },
        ];

        let outcome = run_pipeline("abc", &StripOptions::default(), &pipeline);
        assert_eq!(
            outcome,
            StripOutcome::Partial {
                text: "ABC".to_string(),
                failed_rule: "boom",
            }
        );
        assert!(!outcome.is_complete());
        assert_eq!(outcome.into_text(), "ABC");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: StripOptions = serde_json::from_str("{\"gfm\": false}").unwrap();
        assert!(!options.gfm);
        assert!(options.strip_list_leaders);
        assert!(options.list_unicode_char);
        assert!(options.use_img_alt_text);
    }
}
