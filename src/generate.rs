//! The generation pipeline: walk, collect statistics, render.

use std::io;
use std::path::Path;

use log::info;

use crate::output::{OutputFormat, render_document};
use crate::stats::collect_stats;
use crate::tree::{TreeWalker, WalkerConfig};

/// Everything needed to produce one document.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub walker: WalkerConfig,
    pub format: OutputFormat,
}

/// Build the complete document for `root` in memory.
///
/// Unreadable file contents become placeholders; any directory listing or
/// stat failure is returned as an error and no document is produced.
pub fn generate_document(root: &Path, config: &GenerateConfig) -> io::Result<String> {
    info!("Walking {}", root.display());
    let walker = TreeWalker::new(config.walker.clone())?;
    let listing = walker.walk(root)?;

    info!("Collecting statistics");
    let stats = collect_stats(root, walker.config())?;

    info!("Rendering {:?} document", config.format);
    Ok(render_document(config.format, &listing, &stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn sample_tree() -> TestTree {
        let tree = TestTree::new();
        tree.add_dir("a");
        tree.add_file("b.txt", "hello");
        tree.add_file(".git/config", "[core]");
        tree
    }

    #[test]
    fn test_structure_markdown() {
        let tree = sample_tree();
        let doc = generate_document(tree.path(), &GenerateConfig::default()).unwrap();

        assert_eq!(
            doc,
            "# Project Structure\n\n\
             ## Directory Tree\n\n\
             ```text\n├── a/\n└── b.txt\n```\n\n\
             ## Project Statistics\n\n\
             ```text\nTotal Files: 1\nTotal Directories: 1\nTotal Size: 5 B\n```\n"
        );
    }

    #[test]
    fn test_structure_with_code_text() {
        let tree = sample_tree();
        let config = GenerateConfig {
            walker: WalkerConfig {
                include_contents: true,
                ..Default::default()
            },
            format: OutputFormat::Text,
        };
        let doc = generate_document(tree.path(), &config).unwrap();

        assert_eq!(
            doc,
            "├── a/\n└── b.txt\n\
             \nFile Contents:\n\n\
             --- b.txt ---\nhello\n\n\
             \nProject Statistics:\n\
             Total Files: 1\nTotal Directories: 1\nTotal Size: 5 B\n"
        );
    }

    #[test]
    fn test_contents_not_collected_for_structure() {
        let tree = sample_tree();
        let config = GenerateConfig {
            format: OutputFormat::Text,
            ..Default::default()
        };
        let doc = generate_document(tree.path(), &config).unwrap();
        assert!(!doc.contains("File Contents"));
        assert!(!doc.contains("hello"));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let tree = sample_tree();
        tree.add_file("src/lib.rs", "pub fn f() {}");
        let config = GenerateConfig {
            walker: WalkerConfig {
                include_contents: true,
                show_size: true,
                ..Default::default()
            },
            format: OutputFormat::Markdown,
        };
        let first = generate_document(tree.path(), &config).unwrap();
        let second = generate_document(tree.path(), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_pattern_fails_before_walking() {
        let tree = sample_tree();
        let config = GenerateConfig {
            walker: WalkerConfig {
                ignore_patterns: vec!["[".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let err = generate_document(tree.path(), &config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
