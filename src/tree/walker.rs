//! TreeWalker - renders the directory tree and collects file contents

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};

use super::config::WalkerConfig;
use super::filter::IgnoreMatcher;
use super::traversal::BaseTraversal;
use super::types::{FileContent, TreeEntry, TreeListing};
use super::utils::{child_prefix, file_extension};

/// Tree walker that builds the full listing in memory.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: IgnoreMatcher,
}

impl TreeWalker {
    /// Create a walker, compiling the default and configured ignore patterns.
    pub fn new(config: WalkerConfig) -> io::Result<Self> {
        let filter = IgnoreMatcher::new(&config.ignore_patterns)?;
        debug!("{} ignore patterns in effect", filter.pattern_count());
        Ok(Self::with_filter(config, filter))
    }

    pub fn with_filter(config: WalkerConfig, filter: IgnoreMatcher) -> Self {
        Self { config, filter }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn walk(&self, root: &Path) -> io::Result<TreeListing> {
        let traversal = BaseTraversal::new(root, &self.config, &self.filter);
        let mut listing = TreeListing::default();
        self.walk_dir(&traversal, root, "", 0, &mut listing)?;
        debug!(
            "Walked {}: {} lines, {} content records",
            root.display(),
            listing.lines.len(),
            listing.contents.len()
        );
        Ok(listing)
    }

    fn walk_dir(
        &self,
        traversal: &BaseTraversal<'_>,
        dir: &Path,
        prefix: &str,
        depth: usize,
        listing: &mut TreeListing,
    ) -> io::Result<()> {
        if !traversal.lists_depth(depth) {
            return Ok(());
        }

        let entries = traversal.read_entries(dir, depth)?;
        let total = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == total;
            listing
                .lines
                .push(entry.tree_line(prefix, is_last, self.config.show_size));

            if entry.descends() {
                let new_prefix = child_prefix(prefix, is_last);
                self.walk_dir(traversal, &entry.path, &new_prefix, depth + 1, listing)?;
            } else if !entry.is_dir && self.config.include_contents {
                listing.contents.push(read_content(&entry));
            }
        }

        Ok(())
    }
}

/// Read a listed file's text. Failures turn into the placeholder record.
///
/// Only regular files are opened; pipes, sockets, devices and broken links
/// get the placeholder without a read, since opening a FIFO blocks.
fn read_content(entry: &TreeEntry) -> FileContent {
    if !entry.is_file {
        warn!("Not a regular file, skipping read: {}", entry.path.display());
        return FileContent::unreadable(entry.relative_path.clone());
    }
    match fs::read(&entry.path) {
        Ok(bytes) => FileContent::new(
            entry.relative_path.clone(),
            String::from_utf8_lossy(&bytes).into_owned(),
            file_extension(&entry.name),
        ),
        Err(e) => {
            warn!("Unable to read {}: {}", entry.path.display(), e);
            FileContent::unreadable(entry.relative_path.clone())
        }
    }
}
