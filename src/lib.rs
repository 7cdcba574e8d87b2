//! Blogtext - text and Markdown helpers for blog-style content.
//!
//! A small library of pure, stateless transformations used when rendering
//! blog posts and customer stories:
//!
//! - `strip` - Markdown-to-plaintext stripping (ordered rule pipeline)
//! - `outline` - table-of-contents extraction and heading demotion
//! - `slug` - strict URL slug generation
//! - `route` - slug paths, pagination sizes, URL validation/canonicalization
//! - `date` - post date parsing and display formatting
//! - `cta` - call-to-action tag injection
//! - `text` - truncation and initials
//!
//! Every function is synchronous and side-effect-free (the stripper's
//! degraded-result warning aside), so concurrent callers need no
//! coordination.

pub mod cta;
pub mod date;
pub mod outline;
pub mod route;
pub mod slug;
pub mod strip;
pub mod text;

pub use cta::{CTA_TAG_1, CTA_TAG_2, inject_call_to_action};
pub use date::format_post_date;
pub use outline::{Heading, OutlineEntry, demote_headings, extract_headings};
pub use route::{
    CUSTOMER_STORIES_PER_PAGE, POSTS_PER_PAGE, UrlError, canonical_url, customer_story_slug_path,
    is_valid_url, post_slug_path,
};
pub use slug::slugify;
pub use strip::{StripOptions, StripOutcome, strip_markdown, strip_markdown_with};
pub use text::{DEFAULT_TRIM_LENGTH, get_initials, trim_text};
