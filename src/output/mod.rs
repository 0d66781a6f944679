//! Document formatting
//!
//! This module assembles the final document from a `TreeListing` and
//! `DirectoryStats`:
//! - `markdown` - headings and fenced blocks
//! - `text` - plain sections with `--- path ---` separators
//! - `config` - the `OutputFormat` selector

mod config;
mod markdown;
mod text;
mod utils;

pub use config::OutputFormat;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
pub use utils::stats_lines;

use crate::stats::DirectoryStats;
use crate::tree::{FileContent, TreeListing};

/// Sink for the sections of a generated document, written in order:
/// tree, contents, statistics.
pub trait DocumentOutput {
    fn write_tree(&mut self, tree: &str);

    /// Write the file contents section. Nothing is written for an empty slice.
    fn write_contents(&mut self, contents: &[FileContent]);

    fn write_stats(&mut self, stats: &DirectoryStats);

    fn into_output(self) -> String;
}

/// Assemble a document with the given formatter.
pub fn write_document<O: DocumentOutput>(
    mut output: O,
    listing: &TreeListing,
    stats: &DirectoryStats,
) -> String {
    output.write_tree(&listing.tree_text());
    output.write_contents(&listing.contents);
    output.write_stats(stats);
    output.into_output()
}

/// Render a document in the selected format.
pub fn render_document(
    format: OutputFormat,
    listing: &TreeListing,
    stats: &DirectoryStats,
) -> String {
    match format {
        OutputFormat::Markdown => write_document(MarkdownFormatter::new(), listing, stats),
        OutputFormat::Text => write_document(TextFormatter::new(), listing, stats),
    }
}
