//! Label model for weft
//!
//! Labels are the categorization tags pages carry and the signal the
//! related-page ranking runs on. A label is stored and compared in its
//! normalized form (trimmed, lowercased); the normalized name is the
//! label's identity, so two labels are equal exactly when their
//! normalized names are.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, WeftError};

/// Pattern a normalized label name must match: leading alphanumeric, then
/// alphanumerics and a small set of separators. No whitespace, no uppercase.
const LABEL_PATTERN: &str = r"^[a-z0-9][a-z0-9_+.-]*$";

/// Maximum length of a normalized label name
const MAX_LABEL_LEN: usize = 255;

/// A page label, held in normalized form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// Create a label from raw user input, normalizing and validating it
    pub fn new(name: &str) -> Result<Self> {
        let normalized = name.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(WeftError::invalid_label(name, "label is empty"));
        }
        if normalized.len() > MAX_LABEL_LEN {
            return Err(WeftError::invalid_label(
                name,
                format!("label exceeds {} characters", MAX_LABEL_LEN),
            ));
        }

        let re = Regex::new(LABEL_PATTERN)
            .map_err(|e| WeftError::Other(format!("failed to compile label pattern: {}", e)))?;
        if !re.is_match(&normalized) {
            return Err(WeftError::invalid_label(
                name,
                "labels may contain only lowercase letters, digits, and _ + . - \
                 (no spaces), and must start with a letter or digit",
            ));
        }

        Ok(Label(normalized))
    }

    /// The normalized label name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// URL path where pages carrying this label are browsable
    pub fn url_path(&self) -> String {
        format!("/labels/{}", self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Labels serialize as plain strings so frontmatter stays ordinary YAML:
//   labels:
//     - deployment
//     - runbook
impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Label::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        assert_eq!(Label::new("deployment").unwrap().name(), "deployment");
        assert_eq!(Label::new("how-to").unwrap().name(), "how-to");
        assert_eq!(Label::new("v2.1").unwrap().name(), "v2.1");
        assert_eq!(Label::new("c++").unwrap().name(), "c++");
        assert_eq!(Label::new("team_docs").unwrap().name(), "team_docs");
        assert_eq!(Label::new("2024").unwrap().name(), "2024");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Label::new("  Deployment ").unwrap().name(), "deployment");
        assert_eq!(Label::new("HOW-TO").unwrap().name(), "how-to");
    }

    #[test]
    fn test_equality_is_on_normalized_form() {
        assert_eq!(Label::new("Runbook").unwrap(), Label::new("runbook").unwrap());
        assert_ne!(Label::new("runbook").unwrap(), Label::new("runbooks").unwrap());
    }

    #[test]
    fn test_invalid_labels() {
        assert!(Label::new("").is_err());
        assert!(Label::new("   ").is_err());
        assert!(Label::new("has space").is_err());
        assert!(Label::new("-leading-dash").is_err());
        assert!(Label::new("emoji🎉").is_err());
    }

    #[test]
    fn test_url_path() {
        assert_eq!(Label::new("runbook").unwrap().url_path(), "/labels/runbook");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let label = Label::new("deployment").unwrap();
        let yaml = serde_yaml::to_string(&label).unwrap();
        assert_eq!(yaml.trim(), "deployment");

        let parsed: Label = serde_yaml::from_str("Deployment").unwrap();
        assert_eq!(parsed, label);

        let invalid: std::result::Result<Label, _> = serde_yaml::from_str("\"has space\"");
        assert!(invalid.is_err());
    }
}
