//! Unified error handling for DevDock
//!
//! This module provides the error type shared by the registry, the menu
//! loader and the configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all DevDock core operations
#[derive(Error, Debug)]
pub enum Error {
    // ==================== I/O Errors ====================

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // ==================== Registry Errors ====================

    /// A panel with the same key is already registered
    #[error("Panel '{key}' is already registered")]
    DuplicatePanel {
        key: String,
    },

    /// Missing required field while building a registration
    #[error("Missing required field: {field}")]
    MissingField {
        field: String,
    },

    // ==================== Panel Errors ====================

    /// A panel's render unit could not be constructed
    #[error("Panel '{identifier}' failed to load: {message}")]
    PanelLoad {
        identifier: String,
        message: String,
    },

    /// A panel's metadata record could not be parsed
    #[error("Invalid panel metadata: {message}")]
    InvalidMetadata {
        message: String,
    },

    // ==================== Configuration Errors ====================

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
    },

    // ==================== General Errors ====================

    /// Custom error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type using the unified Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a panel load error
    pub fn panel_load(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Error::PanelLoad {
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    /// Create an invalid metadata error
    pub fn invalid_metadata(message: impl Into<String>) -> Self {
        Error::InvalidMetadata {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::FileNotFound(_) => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Error::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_with_context() {
        let err = Error::FileNotFound(PathBuf::from("/test"));
        let contextualized = err.with_context("while loading config");

        assert!(contextualized.to_string().contains("while loading config"));
        assert!(contextualized.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::FileNotFound(PathBuf::from("/test")).is_not_found());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(Error::from(io).is_not_found());
        assert!(!Error::invalid_config("bad").is_not_found());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::FileNotFound(PathBuf::from("/test")));
        let with_context = result.context("loading data");

        assert!(with_context.is_err());
        assert!(with_context.unwrap_err().to_string().contains("loading data"));
    }
}
