// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts link targets from markdown text
// - resolve: Classifies targets and computes the path they point at
// - local: Checks whether local targets exist on disk
//
// This file (mod.rs) ties the three stages together into
// check_markdown_file(), which the rest of the application calls.
// =============================================================================

mod local;
mod markdown;
mod resolve;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use local::{check_links, LinkStatus};
pub use markdown::extract_markdown_links;
pub use resolve::base_dir_of;

// One broken link, as reported to the user
#[derive(Debug, Clone, Serialize)]
pub struct BrokenLink {
    /// The link exactly as written (fragment and query included)
    pub link: String,
    /// The path that was looked for
    pub resolved: PathBuf,
}

// Everything we learned from checking one document
#[derive(Debug, Clone, Serialize)]
pub struct BrokenLinkReport {
    /// The markdown file that was scanned
    pub file: PathBuf,
    /// How many link targets were found
    pub links_found: usize,
    /// How many of them were local and went through an existence check
    pub local_checked: usize,
    /// Local links whose target is missing, in document order
    pub broken: Vec<BrokenLink>,
}

impl BrokenLinkReport {
    /// True when no broken links were found
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}

// Reads a markdown file and checks every relative link in it
//
// Parameters:
//   path: the markdown file (must already be known to exist)
//
// Returns: the report, or an error if the file can't be read as UTF-8 text
pub fn check_markdown_file(path: &Path) -> Result<BrokenLinkReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let content = normalize_newlines(&raw);

    // Anchor the document directory once so every resolved path is absolute
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let base_dir = cwd.join(base_dir_of(path));

    let links = extract_markdown_links(&content);
    info!(file = %path.display(), links = links.len(), "scanning markdown file");

    let links_found = links.len();
    let results = check_links(links, &base_dir);

    let local_checked = results.iter().filter(|r| r.resolved().is_some()).count();
    let broken: Vec<BrokenLink> = results
        .into_iter()
        .filter_map(|r| match r.status {
            LinkStatus::Broken(resolved) => Some(BrokenLink { link: r.link, resolved }),
            _ => None,
        })
        .collect();

    for entry in &broken {
        warn!(link = %entry.link, resolved = %entry.resolved.display(), "broken link");
    }

    Ok(BrokenLinkReport {
        file: path.to_path_buf(),
        links_found,
        local_checked,
        broken,
    })
}

// Turns "\r\n" and lone "\r" into "\n", the way a text-mode read does
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
