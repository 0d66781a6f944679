//! Shared helpers for document formatters

use crate::stats::DirectoryStats;
use crate::tree::format_size;

/// The three statistics lines, in the fixed order used by every format.
pub fn stats_lines(stats: &DirectoryStats) -> [String; 3] {
    [
        format!("Total Files: {}", stats.files),
        format!("Total Directories: {}", stats.directories),
        format!("Total Size: {}", format_size(stats.total_size)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_lines_order() {
        let stats = DirectoryStats {
            files: 12,
            directories: 3,
            total_size: 2048,
        };
        assert_eq!(
            stats_lines(&stats),
            [
                "Total Files: 12".to_string(),
                "Total Directories: 3".to_string(),
                "Total Size: 2.0 KB".to_string(),
            ]
        );
    }
}
