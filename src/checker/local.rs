// src/checker/local.rs
// =============================================================================
// This module checks whether local link targets exist on disk.
//
// Key functionality:
// - Classifies every extracted target (external / anchor / local)
// - Runs exactly one existence test per local target
// - Records a result for every target, in document order
//
// Rust concepts:
// - Enums: To represent the outcome of each check
// - Iterators: map() over the targets keeps their order
// - Path::exists(): follows symlinks and treats errors as "missing"
// =============================================================================

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::resolve::{classify, resolve, LinkKind};

// Represents the status of a link after checking
//
// Local links carry the path that was looked for, so a broken link can
// never be reported without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// Local target exists (file, directory, or symlink to one)
    Ok(PathBuf),
    /// Local target does not exist
    Broken(PathBuf),
    /// External URL, not checked
    SkippedExternal,
    /// Same-document anchor, not checked
    SkippedAnchor,
}

// Represents the result of checking a single link
#[derive(Debug, Clone, Serialize)]
pub struct LinkCheckResult {
    /// The link exactly as written in the document
    pub link: String,
    /// The status of the link
    pub status: LinkStatus,
}

impl LinkCheckResult {
    /// Where the link points on disk (only for local links)
    pub fn resolved(&self) -> Option<&Path> {
        match &self.status {
            LinkStatus::Ok(path) | LinkStatus::Broken(path) => Some(path),
            LinkStatus::SkippedExternal | LinkStatus::SkippedAnchor => None,
        }
    }
}

// Checks every link target found in one document
//
// Parameters:
//   links: raw targets in document order
//   base_dir: the directory of the document they came from
//
// Returns one result per target, in the same order.
pub fn check_links(links: Vec<String>, base_dir: &Path) -> Vec<LinkCheckResult> {
    links
        .into_iter()
        .map(|link| check_single_link(link, base_dir))
        .collect()
}

// Checks a single link target
fn check_single_link(link: String, base_dir: &Path) -> LinkCheckResult {
    let kind = classify(&link);

    // Only local links resolve to a path, so only they reach the filesystem
    let status = match resolve(&link, base_dir) {
        Some(path) if path.exists() => LinkStatus::Ok(path),
        Some(path) => LinkStatus::Broken(path),
        None if kind == LinkKind::External => LinkStatus::SkippedExternal,
        None => LinkStatus::SkippedAnchor,
    };

    debug!(link = %link, ?kind, ?status, "checked link");

    LinkCheckResult { link, status }
}
