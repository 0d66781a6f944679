//! Records produced while walking a tree

use std::path::PathBuf;

use super::utils::{connector, format_size};

/// Content substituted for files that cannot be read.
pub const UNREADABLE_PLACEHOLDER: &str = "Unable to read file content";

/// Extension tag used together with the placeholder.
pub const FALLBACK_EXTENSION: &str = "text";

/// One filesystem item visited during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub path: PathBuf,
    /// `/`-separated path relative to the traversal root.
    pub relative_path: String,
    /// Directory, or a symlink resolving to one.
    pub is_dir: bool,
    /// Regular file, or a symlink resolving to one. FIFOs, sockets, devices
    /// and broken links are neither `is_dir` nor `is_file`.
    pub is_file: bool,
    pub is_symlink: bool,
    /// Size of the resolved target. For directories this is the directory
    /// inode size, not a sum of children.
    pub size: u64,
}

impl TreeEntry {
    /// Only real directories are expanded; symlinked ones are listed as leaves.
    pub fn descends(&self) -> bool {
        self.is_dir && !self.is_symlink
    }

    /// Render this entry as a single tree line (without trailing newline).
    pub fn tree_line(&self, prefix: &str, is_last: bool, show_size: bool) -> String {
        let mut line = String::with_capacity(prefix.len() + self.name.len() + 16);
        line.push_str(prefix);
        line.push_str(connector(is_last));
        line.push_str(&self.name);
        if self.is_dir {
            line.push('/');
        }
        if show_size {
            line.push_str(" (");
            line.push_str(&format_size(self.size));
            line.push(')');
        }
        line
    }
}

/// Captured text of one listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub relative_path: String,
    pub content: String,
    /// Used as the fence language in markdown output.
    pub extension: String,
}

impl FileContent {
    pub fn new(relative_path: String, content: String, extension: String) -> Self {
        Self {
            relative_path,
            content,
            extension,
        }
    }

    /// Placeholder record for a file whose contents could not be read.
    pub fn unreadable(relative_path: String) -> Self {
        Self {
            relative_path,
            content: UNREADABLE_PLACEHOLDER.to_string(),
            extension: FALLBACK_EXTENSION.to_string(),
        }
    }
}

/// Result of a tree walk: rendered lines plus any collected file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    pub lines: Vec<String>,
    pub contents: Vec<FileContent>,
}

impl TreeListing {
    /// Tree lines joined with trailing newlines.
    pub fn tree_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
