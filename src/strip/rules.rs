//! The ordered rewrite rules of the strip pipeline.
//!
//! Rule order is load-bearing: `#` characters are dropped before the ATX
//! header cleanup runs, emphasis runs twice to catch nested markers, and
//! the whitespace collapse must come last. Patterns are precompiled in
//! `LazyLock` statics and applied mechanically; malformed Markdown is not
//! an error condition.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use super::StripOptions;

/// Placeholder bullet for stripped list leaders.
const BULLET: &str = "\u{2022}";

/// A single named rewrite step.
pub(super) struct Rule {
    pub name: &'static str,
    /// Whether the rule runs under the given options.
    pub enabled: fn(&StripOptions) -> bool,
    pub apply: fn(&str, &StripOptions) -> Result<String>,
}

/// The pipeline, in application order.
pub(super) const PIPELINE: &[Rule] = &[
    Rule {
        name: "horizontal-rules",
        enabled: always,
        apply: strip_horizontal_rules,
    },
    Rule {
        name: "list-leaders",
        enabled: |options| options.strip_list_leaders,
        apply: strip_list_leaders,
    },
    Rule {
        name: "setext-underlines",
        enabled: if_gfm,
        apply: strip_setext_underlines,
    },
    Rule {
        name: "tilde-fences",
        enabled: if_gfm,
        apply: strip_tilde_fences,
    },
    Rule {
        name: "strikethrough",
        enabled: if_gfm,
        apply: strip_strikethrough,
    },
    Rule {
        name: "backtick-fence-lines",
        enabled: if_gfm,
        apply: strip_backtick_fence_lines,
    },
    Rule {
        name: "hash-characters",
        enabled: always,
        apply: strip_hash_characters,
    },
    Rule {
        name: "html-tags",
        enabled: always,
        apply: strip_html_tags,
    },
    Rule {
        name: "setext-leftovers",
        enabled: always,
        apply: strip_setext_leftovers,
    },
    Rule {
        name: "footnote-references",
        enabled: always,
        apply: strip_footnote_references,
    },
    Rule {
        name: "footnote-definitions",
        enabled: always,
        apply: strip_footnote_definitions,
    },
    Rule {
        name: "images",
        enabled: always,
        apply: strip_images,
    },
    Rule {
        name: "inline-links",
        enabled: always,
        apply: strip_inline_links,
    },
    Rule {
        name: "blockquotes",
        enabled: always,
        apply: strip_blockquotes,
    },
    Rule {
        name: "reference-link-definitions",
        enabled: always,
        apply: strip_reference_link_definitions,
    },
    Rule {
        name: "atx-headers",
        enabled: always,
        apply: strip_atx_headers,
    },
    Rule {
        name: "emphasis",
        enabled: always,
        apply: strip_emphasis,
    },
    // Second pass catches double/nested emphasis the first pass exposed.
    Rule {
        name: "nested-emphasis",
        enabled: always,
        apply: strip_emphasis,
    },
    Rule {
        name: "code-fences",
        enabled: always,
        apply: strip_code_fences,
    },
    Rule {
        name: "inline-code",
        enabled: always,
        apply: strip_inline_code,
    },
    Rule {
        name: "blank-lines",
        enabled: always,
        apply: collapse_blank_lines,
    },
    Rule {
        name: "whitespace",
        enabled: always,
        apply: collapse_whitespace,
    },
];

fn always(_: &StripOptions) -> bool {
    true
}

fn if_gfm(options: &StripOptions) -> bool {
    options.gfm
}

/// Lines made purely of 3+ `-`/`*`/`_`, optionally whitespace-separated.
fn strip_horizontal_rules(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^([-*_]\s*?){3,}\s*$").unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

/// Leading list markers (`*`, `-`, `+`, `1.`), bullet-replaced or dropped.
fn strip_list_leaders(text: &str, options: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^([\s\t]*)([*+-]|\d+\.)\s+").unwrap());
    let replacement = if options.list_unicode_char {
        format!("{BULLET} $1")
    } else {
        "$1".to_string()
    };
    Ok(RE.replace_all(text, replacement.as_str()).into_owned())
}

/// Setext-style `==` underline runs following a newline.
fn strip_setext_underlines(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n={2,}").unwrap());
    Ok(RE.replace_all(text, "\n").into_owned())
}

/// `~~~` fenced code-block delimiter lines.
fn strip_tilde_fences(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~{3}.*\n").unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

fn strip_strikethrough(text: &str, _: &StripOptions) -> Result<String> {
    Ok(text.replace("~~", ""))
}

/// ``` fenced code-block delimiter lines.
fn strip_backtick_fence_lines(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("`{3}.*\n").unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

/// Every `#` character; later ATX cleanup only sweeps leftover whitespace.
fn strip_hash_characters(text: &str, _: &StripOptions) -> Result<String> {
    Ok(text.replace('#', ""))
}

fn strip_html_tags(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

/// Remaining setext underlines occupying a whole line.
fn strip_setext_leftovers(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[=-]{2,}\s*$").unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

/// Footnote references (`[^1]`) and their inline definitions.
fn strip_footnote_references(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)\[\^.+?\](: .*?$)?").unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

/// `[label]: target` definition lines.
fn strip_footnote_definitions(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)\s{0,2}\[.*?\]: .*?$").unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

/// Image syntax, keeping the alt text when configured to.
fn strip_images(text: &str, options: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[(.*?)\][\[(].*?[\])]").unwrap());
    let replacement = if options.use_img_alt_text { "$1" } else { "" };
    Ok(RE.replace_all(text, replacement).into_owned())
}

/// Inline and reference-style links, keeping the link text.
fn strip_inline_links(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\][\[(].*?[\])]").unwrap());
    Ok(RE.replace_all(text, "$1").into_owned())
}

fn strip_blockquotes(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s{0,3}>\s?").unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

/// Indented `[label]: target "title"` reference definitions.
fn strip_reference_link_definitions(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"(?m)^\s{1,2}\[(.*?)\]: (\S+)( ".*?")?\s*$"#).unwrap());
    Ok(RE.replace_all(text, "").into_owned())
}

/// ATX header prefixes and per-line trailing whitespace.
fn strip_atx_headers(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^(\n)?\s*#{1,6}\s+| *(\n)?\s*#* *(\n)?\s*$").unwrap());
    Ok(RE.replace_all(text, "$1$2$3").into_owned())
}

/// Emphasis runs of 1-3 `*`/`_` around non-space-delimited text.
///
/// Longest delimiters first, so `**bold**` is not half-eaten by the
/// single-`*` pattern.
fn strip_emphasis(text: &str, _: &StripOptions) -> Result<String> {
    static RES: LazyLock<[Regex; 6]> = LazyLock::new(|| {
        [
            Regex::new(r"\*{3}(\S.*?\S?)\*{3}").unwrap(),
            Regex::new(r"_{3}(\S.*?\S?)_{3}").unwrap(),
            Regex::new(r"\*{2}(\S.*?\S?)\*{2}").unwrap(),
            Regex::new(r"_{2}(\S.*?\S?)_{2}").unwrap(),
            Regex::new(r"\*(\S.*?\S?)\*").unwrap(),
            Regex::new(r"_(\S.*?\S?)_").unwrap(),
        ]
    });

    let mut text = text.to_string();
    for re in RES.iter() {
        text = re.replace_all(&text, "$1").into_owned();
    }
    Ok(text)
}

/// Triple-backtick code fences on a single line, keeping inner content.
fn strip_code_fences(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("`{3,}(.*?)`{3,}").unwrap());
    Ok(RE.replace_all(text, "$1").into_owned())
}

/// Single-backtick inline code spans, keeping inner content.
fn strip_inline_code(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("`(.+?)`").unwrap());
    Ok(RE.replace_all(text, "$1").into_owned())
}

/// 3+ consecutive newlines become exactly two.
fn collapse_blank_lines(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
    Ok(RE.replace_all(text, "\n\n").into_owned())
}

/// All remaining whitespace runs (newlines included) become one space.
fn collapse_whitespace(text: &str, _: &StripOptions) -> Result<String> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
    Ok(RE.replace_all(text, " ").into_owned())
}
