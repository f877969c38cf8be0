// src/checker/markdown.rs
// =============================================================================
// This module extracts link targets from Markdown text.
//
// We deliberately use a plain regular expression instead of a full Markdown
// parser: every `[label](target)` construct in the text counts, including
// ones inside code blocks and image syntax `![alt](target)`.
//
// Rust concepts:
// - LazyLock: a value that is built the first time it is used
// - Iterators: captures_iter() walks every match in order
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// `[`, anything (non-greedy) up to `]`, then `(`, anything (non-greedy) up to `)`.
// Both groups are non-greedy so two links on the same line stay separate.
// `.` does not match a newline, so a link never spans lines.
static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[.*?\]\((.*?)\)").expect("inline link pattern is valid")
});

// Extracts every inline link target from Markdown text
//
// Parameters:
//   markdown: the markdown text to scan (borrowed as &str)
//
// Returns: Vec<String> with one entry per link, in order of appearance.
// Duplicates are kept.
//
// Example input:
//   "See [guide](./guide.md) and [Rust](https://www.rust-lang.org)"
//
// Example output:
//   vec!["./guide.md", "https://www.rust-lang.org"]
pub fn extract_markdown_links(markdown: &str) -> Vec<String> {
    INLINE_LINK
        .captures_iter(markdown)
        .filter_map(|caps| caps.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}
