//! Construction-time configuration errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rule or variant table definitions that violate the table invariants.
///
/// These are reported once, when a table is built. Resolution against a valid table never fails.
pub enum TableError {
    /// The table has no rules or entries at all.
    #[error("table has no entries")]
    EmptyTable,
    /// A rule table does not end with an always-matching rule.
    #[error("rule table has no fallback rule")]
    MissingFallback,
    /// An always-matching rule appears before the last position.
    #[error("fallback rule at index {index} is not the last rule")]
    FallbackNotLast {
        /// Position of the misplaced fallback rule.
        index: usize,
    },
    /// More than one always-matching rule was declared.
    #[error("rule table declares {count} fallback rules")]
    DuplicateFallback {
        /// Number of fallback rules found.
        count: usize,
    },
    /// A "no status" rule was declared after a marker rule.
    #[error("absent-status rule at index {index} follows a marker rule")]
    AbsentRuleAfterMarker {
        /// Position of the misplaced absent-status rule.
        index: usize,
    },
    /// A marker rule with an empty marker would match every status.
    #[error("marker rule at index {index} has an empty marker")]
    EmptyMarker {
        /// Position of the offending rule.
        index: usize,
    },
    /// The declared default key has no entry in the variant table.
    #[error("variant table has no entry for declared default `{key}`")]
    MissingDefault {
        /// Token of the declared default key.
        key: String,
    },
    /// The same key was supplied twice.
    #[error("variant table defines `{key}` more than once")]
    DuplicateKey {
        /// Token of the duplicated key.
        key: String,
    },
}

#[derive(Debug, Error)]
/// Failures while loading or applying a theme configuration document.
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid TOML for [`crate::ThemeConfig`].
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A `[colors]` key does not name a known color class.
    #[error("unknown color class `{0}` in theme config")]
    UnknownColor(String),
}
