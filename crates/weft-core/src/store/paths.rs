//! Store path constants and discovery

use std::path::{Path, PathBuf};

use crate::error::{Result, WeftError};

/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".weft";

/// Visible store directory name
pub const VISIBLE_STORE_DIR: &str = "weft";

/// Pages subdirectory
pub const PAGES_DIR: &str = "pages";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Find a store by walking up from the given directory.
///
/// Checks each ancestor for `.weft/` first, then `weft/`.
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        // Check for default hidden store
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        // Check for visible store
        let visible_path = current.join(VISIBLE_STORE_DIR);
        if visible_path.is_dir() {
            return Ok(visible_path);
        }

        // Move up to parent directory
        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                // Reached filesystem root
                return Err(WeftError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
