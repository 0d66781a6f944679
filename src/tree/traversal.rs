//! Common traversal logic shared by the tree walker and the stats collector.
//!
//! Both passes read directories through `BaseTraversal`, which is what keeps
//! the statistics consistent with the rendered tree.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use super::config::WalkerConfig;
use super::filter::IgnoreMatcher;
use super::types::TreeEntry;
use super::utils::{relative_path, with_path};

pub struct BaseTraversal<'a> {
    pub root: &'a Path,
    pub config: &'a WalkerConfig,
    pub filter: &'a IgnoreMatcher,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(root: &'a Path, config: &'a WalkerConfig, filter: &'a IgnoreMatcher) -> Self {
        Self {
            root,
            config,
            filter,
        }
    }

    /// Check whether entries of a directory at `depth` are listed at all
    pub fn lists_depth(&self, depth: usize) -> bool {
        self.config.lists_depth(depth)
    }

    /// Read, filter, and sort the entries of `dir`.
    ///
    /// Directories come first, then everything else, each group ordered by
    /// name case-insensitively (ties broken on the exact name). Symlinks are
    /// classified and sized by their target; broken links fall back to the
    /// link itself. Any listing or stat failure is returned with the path
    /// attached.
    pub fn read_entries(&self, dir: &Path, depth: usize) -> io::Result<Vec<TreeEntry>> {
        debug!("Reading {} (depth {})", dir.display(), depth);

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(dir).map_err(|e| with_path(e, dir))? {
            let dir_entry = dir_entry.map_err(|e| with_path(e, dir))?;
            let path = dir_entry.path();
            let rel = relative_path(self.root, &path);

            let link_meta = fs::symlink_metadata(&path).map_err(|e| with_path(e, &path))?;
            let is_symlink = link_meta.file_type().is_symlink();
            let meta = if is_symlink {
                fs::metadata(&path).unwrap_or(link_meta)
            } else {
                link_meta
            };

            if self.filter.is_ignored(&rel, meta.is_dir()) {
                debug!("Ignoring {}", rel);
                continue;
            }

            entries.push(TreeEntry {
                name: dir_entry.file_name().to_string_lossy().to_string(),
                path,
                relative_path: rel,
                is_dir: meta.is_dir(),
                is_file: meta.is_file(),
                is_symlink,
                size: meta.len(),
            });
        }

        entries.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| compare_names(&a.name, &b.name))
        });
        Ok(entries)
    }
}

/// Case-insensitive name order, falling back to the exact name for ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
