//! Path resolution utilities for CLI commands
//!
//! Provides shared helpers for consistent path resolution across commands.

use std::env;
use std::path::PathBuf;

/// Resolve the root path for store discovery.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
///
/// This is the standard pattern used across all weft commands that need
/// to discover a store from the filesystem.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
