//! Plain text output formatting

use crate::stats::DirectoryStats;
use crate::tree::FileContent;

use super::DocumentOutput;
use super::utils::stats_lines;

/// Plain text document formatter: no headings, no fences.
#[derive(Default)]
pub struct TextFormatter {
    output: String,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl DocumentOutput for TextFormatter {
    fn write_tree(&mut self, tree: &str) {
        self.output.push_str(tree);
    }

    fn write_contents(&mut self, contents: &[FileContent]) {
        if contents.is_empty() {
            return;
        }
        self.output.push_str("\nFile Contents:\n\n");
        for file in contents {
            self.output.push_str("--- ");
            self.output.push_str(&file.relative_path);
            self.output.push_str(" ---\n");
            self.output.push_str(&file.content);
            self.output.push_str("\n\n");
        }
    }

    fn write_stats(&mut self, stats: &DirectoryStats) {
        self.output.push_str("\nProject Statistics:\n");
        for line in stats_lines(stats) {
            self.output.push_str(&line);
            self.output.push('\n');
        }
    }

    fn into_output(self) -> String {
        self.output
    }
}
