//! Error types and exit codes for weft
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, invalid frontmatter, etc.)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, invalid frontmatter (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during weft operations
#[derive(Error, Debug)]
pub enum WeftError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, records, or html)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid related-page limit: {limit} (must be a positive integer)")]
    InvalidLimit { limit: usize },

    #[error("invalid label {name:?}: {reason}")]
    InvalidLabel { name: String, reason: String },

    #[error("invalid page id: {id}")]
    InvalidPageId { id: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("page not found: {id}")]
    PageNotFound { id: String },

    #[error("invalid frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("related-page lookup unavailable: {reason}")]
    LabelIndexUnavailable { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WeftError {
    /// Create an error for an invalid label name
    pub fn invalid_label(name: &str, reason: impl Into<String>) -> Self {
        WeftError::InvalidLabel {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        WeftError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Wrap a label lookup failure as the single "ranking unavailable" kind.
    ///
    /// There is no safe partial result when a per-label fetch fails, so the
    /// whole ranking call fails with this one variant and is not retried.
    pub fn ranking_unavailable(cause: impl std::fmt::Display) -> Self {
        WeftError::LabelIndexUnavailable {
            reason: cause.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            WeftError::UnknownFormat(_)
            | WeftError::UsageError(_)
            | WeftError::InvalidLimit { .. }
            | WeftError::InvalidLabel { .. }
            | WeftError::InvalidPageId { .. } => ExitCode::Usage,

            // Data/store errors
            WeftError::StoreNotFound { .. }
            | WeftError::InvalidStore { .. }
            | WeftError::PageNotFound { .. }
            | WeftError::InvalidFrontmatter { .. }
            | WeftError::AlreadyExists { .. } => ExitCode::Data,

            // Generic failures
            WeftError::LabelIndexUnavailable { .. }
            | WeftError::Io(_)
            | WeftError::Yaml(_)
            | WeftError::Json(_)
            | WeftError::Toml(_)
            | WeftError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WeftError::UnknownFormat(_) => "unknown_format",
            WeftError::UsageError(_) => "usage_error",
            WeftError::InvalidLimit { .. } => "invalid_limit",
            WeftError::InvalidLabel { .. } => "invalid_label",
            WeftError::InvalidPageId { .. } => "invalid_page_id",
            WeftError::StoreNotFound { .. } => "store_not_found",
            WeftError::InvalidStore { .. } => "invalid_store",
            WeftError::PageNotFound { .. } => "page_not_found",
            WeftError::InvalidFrontmatter { .. } => "invalid_frontmatter",
            WeftError::AlreadyExists { .. } => "already_exists",
            WeftError::LabelIndexUnavailable { .. } => "label_index_unavailable",
            WeftError::Io(_) => "io_error",
            WeftError::Yaml(_) => "yaml_error",
            WeftError::Json(_) => "json_error",
            WeftError::Toml(_) => "toml_error",
            WeftError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for weft operations
pub type Result<T> = std::result::Result<T, WeftError>;
