//! treedoc - document a directory tree as markdown or plain text

pub mod generate;
pub mod logging;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use generate::{GenerateConfig, generate_document};
pub use output::{DocumentOutput, MarkdownFormatter, OutputFormat, TextFormatter, render_document};
pub use stats::{DirectoryStats, StatsCollector, collect_stats};
pub use tree::{FileContent, IgnoreMatcher, TreeEntry, TreeListing, TreeWalker, WalkerConfig};
