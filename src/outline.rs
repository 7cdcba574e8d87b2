//! Table-of-contents extraction and heading demotion.
//!
//! Works on raw ATX headings (`# `, `## `, `### `) line by line; setext
//! headings and levels deeper than 3 are ignored for TOC purposes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::slug::slugify;

/// ATX heading of level 1-3: leading hashes, one whitespace, title.
static RE_TOC_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3})\s(.*)").unwrap());

/// Level-1 ATX heading at the start of a line.
static RE_H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s").unwrap());

/// ATX heading of level 1-5 (level 6 has nowhere to demote to).
static RE_DEMOTABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,5}\s").unwrap());

/// A heading extracted from Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading level (1-3)
    pub level: u8,
    /// URL-safe anchor id, the slug of `title`
    pub id: String,
    /// Heading text without the `#` prefix
    pub title: String,
}

/// A top-level table-of-contents entry.
///
/// `heading` is `None` only for the synthetic container created when a
/// level-3 heading appears before any level-1/2 heading; such a container
/// serializes as `{"children": [...]}` with no heading fields of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    #[serde(flatten)]
    pub heading: Option<Heading>,
    /// Nested level-3 headings, in source order
    pub children: Vec<Heading>,
}

/// Extract a nested outline of level 1-3 ATX headings.
///
/// Level-1/2 headings become top-level entries; each level-3 heading is
/// attached to the most recent top-level entry, or to a synthetic
/// container when none exists yet. Headings keep source order; duplicate
/// titles (and therefore duplicate ids) are allowed.
pub fn extract_headings(markdown: &str) -> Vec<OutlineEntry> {
    let mut outline: Vec<OutlineEntry> = Vec::new();

    for line in markdown.lines() {
        let Some(caps) = RE_TOC_HEADING.captures(line) else {
            continue;
        };
        let level = caps[1].len() as u8;
        let title = caps[2].to_string();
        let heading = Heading {
            level,
            id: slugify(&title),
            title,
        };

        match (heading.level, outline.last_mut()) {
            (1 | 2, _) => outline.push(OutlineEntry {
                heading: Some(heading),
                children: Vec::new(),
            }),
            (_, Some(parent)) => parent.children.push(heading),
            (_, None) => outline.push(OutlineEntry {
                heading: None,
                children: vec![heading],
            }),
        }
    }

    outline
}

/// Demote every level 1-5 ATX heading by one level, but only when the
/// text contains a level-1 heading; otherwise return it unchanged.
pub fn demote_headings(markdown: &str) -> String {
    if !RE_H1.is_match(markdown) {
        return markdown.to_string();
    }
    RE_DEMOTABLE.replace_all(markdown, "#$0").into_owned()
}
