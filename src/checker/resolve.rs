// src/checker/resolve.rs
// =============================================================================
// This module decides what kind of link a target is and, for links that
// point at local files, works out which path on disk they refer to.
//
// Everything here is pure: no filesystem access happens in this file.
//
// Rust concepts:
// - Enums: LinkKind is exactly one of three cases
// - Option<T>: resolve() returns None when no check is needed
// - Path components: we walk a path piece by piece to normalize it
// =============================================================================

use std::path::{Component, Path, PathBuf};

// The three kinds of link target we care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Starts with http:// or https:// (never checked)
    External,
    /// Starts with # and points inside the same document (never checked)
    Anchor,
    /// Anything else: a path relative to the document's directory
    Local,
}

// Classifies a raw link target
//
// The rules are applied in order, so "#http://x" is an anchor and
// "./http://x" is a local path.
pub fn classify(target: &str) -> LinkKind {
    if target.starts_with("http://") || target.starts_with("https://") {
        LinkKind::External
    } else if target.starts_with('#') {
        LinkKind::Anchor
    } else {
        LinkKind::Local
    }
}

// Removes the `#fragment` and then the `?query` part of a target
//
// The fragment is cut first. Whatever remains is then cut at its first `?`.
//
// Example:
//   "guide.md?v=2#intro" -> "guide.md"
//   "guide.md#a?b"       -> "guide.md"
pub fn strip_decorations(target: &str) -> &str {
    let without_fragment = target.split('#').next().unwrap_or(target);
    without_fragment.split('?').next().unwrap_or(without_fragment)
}

// Returns the directory a document lives in
//
// A bare file name ("README.md") has an empty parent, which means the
// current working directory once joined.
pub fn base_dir_of(document: &Path) -> &Path {
    document.parent().unwrap_or_else(|| Path::new(""))
}

// Computes the path a link target points at
//
// Parameters:
//   target: the raw link target, exactly as written in the document
//   base_dir: the document's directory (absolute in normal use)
//
// Returns: None for external links and anchors, otherwise the stripped
// target joined onto base_dir with `.` and `..` folded away.
// An absolute target replaces base_dir entirely.
pub fn resolve(target: &str, base_dir: &Path) -> Option<PathBuf> {
    match classify(target) {
        LinkKind::External | LinkKind::Anchor => None,
        LinkKind::Local => Some(normalize(&base_dir.join(strip_decorations(target)))),
    }
}

// Lexically normalizes a path, without touching the filesystem
//
// `..` removes the previous component; at the root it is dropped.
// A relative path keeps leading `..` components it cannot fold.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not canonicalize()?
//    - Path::canonicalize() asks the filesystem and fails for missing paths
//    - We need a path for missing files too, so we fold `..` ourselves
//
// 2. What does Path::join do with an absolute path?
//    - "/repo/docs".join("/tmp/x") is "/tmp/x": the absolute side wins
//
// 3. Why return &str from strip_decorations?
//    - The stripped target is always a prefix of the input
//    - Borrowing a slice avoids allocating a new String
// -----------------------------------------------------------------------------
