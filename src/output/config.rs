//! Output configuration types

use clap::ValueEnum;

/// Style of the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown with headings and fenced blocks
    #[default]
    #[value(name = "md")]
    Markdown,
    /// Plain text without fencing
    #[value(name = "txt")]
    Text,
}

impl OutputFormat {
    /// File extension conventionally used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
        }
    }

    /// Output file written when no `--output` is given.
    pub fn default_file_name(self) -> String {
        format!("output.{}", self.extension())
    }
}
