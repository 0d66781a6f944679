//! Directory statistics collection
//!
//! Statistics are gathered by a second walk over the same root, through the
//! same `BaseTraversal` rules the tree walker uses, so the totals always
//! describe the tree that was rendered.

use std::io;
use std::path::Path;

use log::debug;

use crate::tree::{BaseTraversal, IgnoreMatcher, WalkerConfig};

/// Collected statistics about a directory tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Total number of files
    pub files: usize,
    /// Total number of directories (the root itself is not counted)
    pub directories: usize,
    /// Sum of file sizes in bytes; directories contribute nothing
    pub total_size: u64,
}

/// Statistics collector that accumulates data during tree traversal.
#[derive(Debug, Default)]
pub struct StatsCollector {
    stats: DirectoryStats,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file in the statistics.
    pub fn record_file(&mut self, size: u64) {
        self.stats.files += 1;
        self.stats.total_size += size;
    }

    /// Record a directory in the statistics.
    pub fn record_directory(&mut self) {
        self.stats.directories += 1;
    }

    /// Finalize and return the collected statistics.
    pub fn finalize(self) -> DirectoryStats {
        self.stats
    }
}

/// Walk `root` and count files, directories and total file size.
///
/// Uses the same ignore rules and depth limit as `TreeWalker` for the same
/// config. Any listing or stat failure aborts with the underlying error.
pub fn collect_stats(root: &Path, config: &WalkerConfig) -> io::Result<DirectoryStats> {
    let filter = IgnoreMatcher::new(&config.ignore_patterns)?;
    let traversal = BaseTraversal::new(root, config, &filter);
    let mut collector = StatsCollector::new();

    collect_dir(&traversal, root, 0, &mut collector)?;

    let stats = collector.finalize();
    debug!(
        "Stats for {}: {} files, {} directories, {} bytes",
        root.display(),
        stats.files,
        stats.directories,
        stats.total_size
    );
    Ok(stats)
}

fn collect_dir(
    traversal: &BaseTraversal<'_>,
    dir: &Path,
    depth: usize,
    collector: &mut StatsCollector,
) -> io::Result<()> {
    if !traversal.lists_depth(depth) {
        return Ok(());
    }

    for entry in traversal.read_entries(dir, depth)? {
        if entry.is_dir {
            collector.record_directory();
            if entry.descends() {
                collect_dir(traversal, &entry.path, depth + 1, collector)?;
            }
        } else {
            collector.record_file(entry.size);
        }
    }

    Ok(())
}
