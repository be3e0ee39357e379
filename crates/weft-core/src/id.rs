//! Page ID generation for weft
//!
//! Page IDs use the `pg-` prefix with an adaptive-length hash suffix by
//! default: `pg-a1b2`, `pg-f14c3`, `pg-3e7a5b`. Short when the store is
//! small, longer only when a shorter candidate would collide.
//!
//! Alternate schemes:
//! - `ulid`: time-ordered ULID identifiers
//! - `timestamp`: simple timestamp-based IDs

use std::collections::HashSet;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, WeftError};

/// ID generation scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// Hash-based IDs (default): `pg-<hex>`
    #[default]
    Hash,
    /// ULID-based IDs: `pg-<ulid>`
    Ulid,
    /// Timestamp-based IDs: `pg-<timestamp>`
    Timestamp,
}

impl FromStr for IdScheme {
    type Err = WeftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hash" => Ok(IdScheme::Hash),
            "ulid" => Ok(IdScheme::Ulid),
            "timestamp" => Ok(IdScheme::Timestamp),
            other => Err(WeftError::UsageError(format!(
                "unknown ID scheme: {} (expected: hash, ulid, or timestamp)",
                other
            ))),
        }
    }
}

/// Page ID with the `pg-` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(String);

impl PageId {
    /// The standard ID prefix
    pub const PREFIX: &'static str = "pg-";

    /// Minimum hash length (4 hex chars)
    pub const MIN_HASH_LEN: usize = 4;

    /// Maximum hash length (64 hex chars for SHA256)
    pub const MAX_HASH_LEN: usize = 64;

    /// Create a new PageId from a raw string (with validation)
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(PageId(id))
    }

    /// Create a PageId without validation (internal use only)
    fn new_unchecked(id: String) -> Self {
        PageId(id)
    }

    /// Validate an ID string
    fn validate(id: &str) -> Result<()> {
        if !id.starts_with(Self::PREFIX) {
            return Err(WeftError::InvalidPageId { id: id.to_string() });
        }

        let suffix = &id[Self::PREFIX.len()..];
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_alphanumeric()) {
            return Err(WeftError::InvalidPageId { id: id.to_string() });
        }

        Ok(())
    }

    /// Get the ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the suffix (part after `pg-`)
    pub fn suffix(&self) -> &str {
        &self.0[Self::PREFIX.len()..]
    }

    /// Generate a new hash-based ID.
    ///
    /// Uses adaptive length based on existing IDs to minimize collisions
    /// while keeping IDs short.
    pub fn generate_hash(title: &str, existing_ids: &HashSet<String>) -> Self {
        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or(0);
        let input = format!("{}:{}:{}", title, timestamp, jitter());

        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        let full_hex = hex::encode(hasher.finalize());

        let mut len = Self::MIN_HASH_LEN;
        loop {
            let candidate = format!("{}{}", Self::PREFIX, &full_hex[..len]);
            if !existing_ids.contains(&candidate) || len >= Self::MAX_HASH_LEN {
                return PageId::new_unchecked(candidate);
            }
            len += 1;
        }
    }

    /// Generate a new ULID-based ID
    pub fn generate_ulid() -> Self {
        let ulid = ulid::Ulid::new();
        PageId::new_unchecked(format!(
            "{}{}",
            Self::PREFIX,
            ulid.to_string().to_lowercase()
        ))
    }

    /// Generate a new timestamp-based ID
    pub fn generate_timestamp() -> Self {
        let ts = Utc::now().format("%Y%m%d%H%M%S").to_string();
        PageId::new_unchecked(format!("{}{}", Self::PREFIX, ts))
    }

    /// Generate a new ID using the specified scheme
    pub fn generate(scheme: IdScheme, title: &str, existing_ids: &HashSet<String>) -> Self {
        match scheme {
            IdScheme::Hash => Self::generate_hash(title, existing_ids),
            IdScheme::Ulid => Self::generate_ulid(),
            IdScheme::Timestamp => Self::generate_timestamp(),
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Mix nanoseconds into the hash input so same-title pages created in the
/// same instant still diverge
fn jitter() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_nanos() as u64 ^ (duration.as_secs() * 1_000_000_007)
}

/// Generate a slug from a title
pub fn slugify(title: &str) -> String {
    slug::slugify(title)
}

/// Generate a filename from ID and title
///
/// Format: `<id>-<slug(title)>.md`
/// Example: `pg-a1b2-deployment-checklist.md`
pub fn filename(id: &PageId, title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{}.md", id)
    } else {
        format!("{}-{}.md", id, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_validation() {
        assert!(PageId::new("pg-a1b2").is_ok());
        assert!(PageId::new("pg-f14c3").is_ok());
        assert!(PageId::new("pg-01j5kzqm1234").is_ok());

        assert!(PageId::new("invalid").is_err());
        assert!(PageId::new("pg-").is_err());
        assert!(PageId::new("pg-has space").is_err());
        assert!(PageId::new("").is_err());
    }

    #[test]
    fn test_generate_hash_id() {
        let existing = HashSet::new();
        let id = PageId::generate_hash("Test Title", &existing);
        assert!(id.as_str().starts_with("pg-"));
        assert!(id.suffix().len() >= PageId::MIN_HASH_LEN);
    }

    #[test]
    fn test_generate_hash_avoids_collisions() {
        let id = PageId::generate_hash("Test Title", &HashSet::new());
        // A generated id must never equal a member of the existing set
        let taken = format!("pg-{}", &id.suffix()[..PageId::MIN_HASH_LEN]);
        let mut existing = HashSet::new();
        existing.insert(taken);
        let fresh = PageId::generate_hash("Test Title", &existing);
        assert!(!existing.contains(fresh.as_str()));
    }

    #[test]
    fn test_generate_ulid() {
        let id = PageId::generate_ulid();
        assert!(id.as_str().starts_with("pg-"));
        assert_eq!(id.suffix().len(), 26); // ULID is 26 chars
    }

    #[test]
    fn test_id_scheme_parsing() {
        assert_eq!("hash".parse::<IdScheme>().unwrap(), IdScheme::Hash);
        assert_eq!("ULID".parse::<IdScheme>().unwrap(), IdScheme::Ulid);
        assert_eq!(
            "timestamp".parse::<IdScheme>().unwrap(),
            IdScheme::Timestamp
        );
        assert!("uuid".parse::<IdScheme>().is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Deployment Checklist"), "deployment-checklist");
        assert_eq!(slugify("Test!@#$%"), "test");
    }

    #[test]
    fn test_filename() {
        let id = PageId::new("pg-a1b2").unwrap();
        assert_eq!(filename(&id, "Hello World"), "pg-a1b2-hello-world.md");
        assert_eq!(filename(&id, ""), "pg-a1b2.md");
    }
}
