//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
///
/// The same config drives both the tree listing and the statistics pass,
/// so both see identical ignore rules and depth limits.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Collect the text of every listed file.
    pub include_contents: bool,
    /// Extra glob patterns, added on top of the built-in defaults.
    pub ignore_patterns: Vec<String>,
    /// Deepest directory whose entries are listed (root = 0). `None` is unbounded.
    pub max_depth: Option<usize>,
    pub show_size: bool,
}

impl WalkerConfig {
    /// Check whether the entries of a directory at `depth` should be listed.
    pub fn lists_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_by_default() {
        let config = WalkerConfig::default();
        assert!(config.lists_depth(0));
        assert!(config.lists_depth(1000));
    }

    #[test]
    fn test_depth_limit_is_inclusive() {
        let config = WalkerConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        assert!(config.lists_depth(0));
        assert!(config.lists_depth(1));
        assert!(!config.lists_depth(2));
    }
}
