//! Glob-based ignore filtering for tree walking

use std::io;

use glob::Pattern;

/// Patterns that are always ignored: dependency, VCS and build output
/// directories, OS metadata files and logs.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "node_modules/**",
    ".git/**",
    "dist/**",
    "build/**",
    ".DS_Store",
    "*.log",
];

/// A single compiled ignore pattern.
#[derive(Debug, Clone)]
struct IgnoreRule {
    pattern: Pattern,
    /// Stem of a `dir/**` pattern, matched against directories only.
    dir_stem: Option<Pattern>,
    /// Pattern has no `/`, so it also matches bare file names at any depth.
    match_name: bool,
}

impl IgnoreRule {
    fn new(raw: &str) -> Result<Self, glob::PatternError> {
        let dir_stem = match raw.strip_suffix("/**") {
            Some(stem) if !stem.is_empty() => Some(Pattern::new(stem)?),
            _ => None,
        };
        Ok(Self {
            pattern: Pattern::new(raw)?,
            dir_stem,
            match_name: !raw.contains('/'),
        })
    }

    fn matches(&self, relative_path: &str, name: &str, is_dir: bool) -> bool {
        if self.pattern.matches(relative_path) {
            return true;
        }
        if self.match_name && self.pattern.matches(name) {
            return true;
        }
        if let Some(stem) = self.dir_stem.as_ref().filter(|_| is_dir) {
            if stem.matches(relative_path) {
                return true;
            }
            if !stem.as_str().contains('/') && stem.matches(name) {
                return true;
            }
        }
        false
    }
}

/// Decides whether a path relative to the traversal root is excluded.
///
/// Built once per run from the defaults plus user patterns; the walker and
/// the statistics collector each build one from the same `WalkerConfig`.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    rules: Vec<IgnoreRule>,
}

impl IgnoreMatcher {
    /// Compile the default patterns followed by `extra`. Duplicates are dropped.
    pub fn new(extra: &[String]) -> io::Result<Self> {
        let mut seen: Vec<&str> = Vec::new();
        let all = DEFAULT_IGNORE_PATTERNS
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str));

        let mut rules = Vec::new();
        for raw in all {
            if seen.contains(&raw) {
                continue;
            }
            seen.push(raw);
            let rule = IgnoreRule::new(raw).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid ignore pattern '{}': {}", raw, e),
                )
            })?;
            rules.push(rule);
        }

        Ok(Self { rules })
    }

    /// Check a `/`-separated path relative to the root. `dir/**` patterns
    /// only exclude the named entry itself when it is a directory.
    pub fn is_ignored(&self, relative_path: &str, is_dir: bool) -> bool {
        let name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        self.rules
            .iter()
            .any(|rule| rule.matches(relative_path, name, is_dir))
    }

    /// Number of distinct patterns in effect.
    pub fn pattern_count(&self) -> usize {
        self.rules.len()
    }
}
