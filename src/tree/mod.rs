//! Directory tree walking logic
//!
//! `TreeWalker` renders the sorted, filtered, depth-limited tree and
//! optionally collects file contents. `BaseTraversal` holds the directory
//! reading rules it shares with the statistics pass.

mod config;
mod filter;
mod traversal;
mod types;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::{DEFAULT_IGNORE_PATTERNS, IgnoreMatcher};
pub use traversal::BaseTraversal;
pub use types::{FALLBACK_EXTENSION, FileContent, TreeEntry, TreeListing, UNREADABLE_PLACEHOLDER};
pub use utils::{file_extension, format_size, relative_path};
pub use walker::TreeWalker;
