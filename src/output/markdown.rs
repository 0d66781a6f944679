//! Markdown output formatting
//!
//! This module provides `MarkdownFormatter` which wraps the tree, file
//! contents and statistics in headings and fenced code blocks.

use crate::stats::DirectoryStats;
use crate::tree::FileContent;

use super::DocumentOutput;
use super::utils::stats_lines;

/// Markdown document formatter.
pub struct MarkdownFormatter {
    output: String,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        let mut output = String::new();
        output.push_str("# Project Structure\n\n");
        Self { output }
    }

    /// Get the formatted output string.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentOutput for MarkdownFormatter {
    fn write_tree(&mut self, tree: &str) {
        self.output.push_str("## Directory Tree\n\n");
        self.output.push_str("```text\n");
        self.output.push_str(tree);
        self.output.push_str("```\n\n");
    }

    fn write_contents(&mut self, contents: &[FileContent]) {
        if contents.is_empty() {
            return;
        }
        self.output.push_str("## File Contents\n\n");
        for file in contents {
            self.output.push_str("### ");
            self.output.push_str(&file.relative_path);
            self.output.push_str("\n\n```");
            self.output.push_str(&file.extension);
            self.output.push('\n');
            self.output.push_str(&file.content);
            self.output.push_str("\n```\n\n");
        }
    }

    fn write_stats(&mut self, stats: &DirectoryStats) {
        self.output.push_str("## Project Statistics\n\n");
        self.output.push_str("```text\n");
        for line in stats_lines(stats) {
            self.output.push_str(&line);
            self.output.push('\n');
        }
        self.output.push_str("```\n");
    }

    fn into_output(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> DirectoryStats {
        DirectoryStats {
            files: 1,
            directories: 1,
            total_size: 5,
        }
    }

    #[test]
    fn test_markdown_tree_only() {
        let mut formatter = MarkdownFormatter::new();
        formatter.write_tree("├── a/\n└── b.txt\n");
        formatter.write_contents(&[]);
        formatter.write_stats(&stats());

        assert_eq!(
            formatter.into_output(),
            "# Project Structure\n\n\
             ## Directory Tree\n\n\
             ```text\n├── a/\n└── b.txt\n```\n\n\
             ## Project Statistics\n\n\
             ```text\nTotal Files: 1\nTotal Directories: 1\nTotal Size: 5 B\n```\n"
        );
    }

    #[test]
    fn test_markdown_file_section() {
        let mut formatter = MarkdownFormatter::new();
        formatter.write_contents(&[FileContent::new(
            "src/main.rs".to_string(),
            "fn main() {}".to_string(),
            "rs".to_string(),
        )]);

        let output = formatter.output();
        assert!(output.contains("## File Contents\n\n"));
        assert!(
            output.contains("### src/main.rs\n\n```rs\nfn main() {}\n```\n\n"),
            "file should be fenced with its extension: {}",
            output
        );
    }

    #[test]
    fn test_markdown_placeholder_uses_text_fence() {
        let mut formatter = MarkdownFormatter::new();
        formatter.write_contents(&[FileContent::unreadable("secret.bin".to_string())]);

        assert!(formatter
            .output()
            .contains("### secret.bin\n\n```text\nUnable to read file content\n```"));
    }

    #[test]
    fn test_markdown_no_contents_heading_when_empty() {
        let mut formatter = MarkdownFormatter::new();
        formatter.write_contents(&[]);
        assert!(!formatter.output().contains("File Contents"));
    }
}
