//! Error types for registry operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::ValueKind;

/// Errors that can occur when querying or mutating the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A key is absent from the registry entirely.
    #[error("key '{key}' is missing from the registry")]
    MissingKey {
        /// The key that was looked up.
        key: String,
    },

    /// A strict typed accessor missed: the key is absent or holds a
    /// different kind of value.
    #[error("key '{key}' is missing from the registry as {expected}")]
    MissingTypedKey {
        /// The key that was looked up.
        key: String,
        /// The kind the accessor required.
        expected: ValueKind,
    },

    /// An `add_as_*` operation hit a key that already exists.
    #[error("key '{key}' is already in the registry")]
    DuplicateKey {
        /// The key that was being added.
        key: String,
    },

    /// A string write violated the key's registered enumeration.
    #[error("value for key '{key}' must be one of {allowed:?}, got '{value}'")]
    ConstraintViolation {
        /// The constrained key.
        key: String,
        /// The rejected value.
        value: String,
        /// The admissible values.
        allowed: Vec<String>,
    },

    /// A seed entry's default value violates its own declared enumeration.
    /// Indicates corrupt seed data; fatal at startup.
    #[error("default value '{value}' for key '{key}' is not in its declared enumeration")]
    InvalidDefault {
        /// The key being seeded.
        key: String,
        /// The offending default value.
        value: String,
    },

    /// Enumeration introspection on a key with no registered constraint.
    #[error("key '{key}' has no registered enumeration")]
    NoEnum {
        /// The key that was queried.
        key: String,
    },

    /// The override file exists but could not be read or parsed.
    #[error("failed to parse override file {path}: {reason}")]
    ConfigFileParse {
        /// Path to the file that failed to load.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// An environment override holds a value of the wrong shape.
    #[error("{var} must be an integer, got '{value}'")]
    InvalidEnvironmentValue {
        /// Name of the environment variable.
        var: String,
        /// The rejected value.
        value: String,
    },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
