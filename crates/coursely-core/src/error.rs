//! Error types for the Coursely editor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::FieldId;

/// A shared error type for the entire editor subsystem.
///
/// None of these variants are fatal to the process: storage read failures are
/// recovered by falling back to defaults, validation failures keep the edit
/// session open, and pending features surface as notices.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CourselyError {
    /// Persisted payload absent or malformed.
    #[error("Storage read error for '{key}': {message}")]
    StorageRead { key: String, message: String },

    /// Field-specific rule violation. Displays as the user-facing message.
    #[error("{message}")]
    Validation { field: FieldId, message: String },

    /// A placeholder feature was invoked.
    #[error("Not implemented yet: {action}")]
    NotImplemented { action: String },

    /// An edit-session transition was requested in the wrong state.
    #[error("Invalid editor state: {0}")]
    InvalidState(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CourselyError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a StorageRead error
    pub fn storage_read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageRead {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(field: FieldId, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a NotImplemented error
    pub fn not_implemented(action: impl Into<String>) -> Self {
        Self::NotImplemented {
            action: action.into(),
        }
    }

    /// Creates an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a NotImplemented error
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Check if this is a StorageRead error
    pub fn is_storage_read(&self) -> bool {
        matches!(self, Self::StorageRead { .. })
    }

    /// Returns the user-facing message of a validation failure.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            Self::Validation { message, .. } => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CourselyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CourselyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CourselyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CourselyError>`.
pub type Result<T> = std::result::Result<T, CourselyError>;
