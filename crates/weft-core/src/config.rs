//! Store configuration for weft
//!
//! Configuration is stored in `.weft/config.toml` at the store root.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeftError};
use crate::id::IdScheme;

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Default number of related pages to show
pub const DEFAULT_RELATED_LIMIT: usize = 10;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// ID generation scheme
    #[serde(default)]
    pub id_scheme: IdScheme,

    /// Space new pages land in when none is given
    #[serde(default = "default_space")]
    pub default_space: String,

    /// Related-page lookup configuration
    #[serde(default)]
    pub related: RelatedConfig,

    /// Display names for spaces, keyed by space key
    #[serde(default)]
    pub spaces: HashMap<String, String>,
}

/// Configuration for related-page lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Maximum number of related pages to return (default 10)
    #[serde(default = "default_related_limit")]
    pub limit: usize,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_space() -> String {
    "main".to_string()
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: default_version(),
            id_scheme: IdScheme::default(),
            default_space: default_space(),
            related: RelatedConfig::default(),
            spaces: HashMap::new(),
        }
    }
}

impl Default for RelatedConfig {
    fn default() -> Self {
        RelatedConfig {
            limit: default_related_limit(),
        }
    }
}

impl StoreConfig {
    /// Resolve a space key to its display name
    /// Returns: configured display name, or the key itself if none is set
    pub fn space_display_name(&self, key: &str) -> String {
        self.spaces
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Set a display name for a space
    pub fn set_space_display_name(&mut self, key: String, name: String) {
        self.spaces.insert(key, name);
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WeftError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
