//! Error types for the pagekit core library.

use thiserror::Error;

/// Result type alias using `UiError`.
pub type Result<T> = std::result::Result<T, UiError>;

/// Error types for pagekit widgets.
///
/// None of these are fatal to the page: callers log them and leave the
/// affected widget inert.
#[derive(Error, Debug)]
pub enum UiError {
    /// A widget's anchor element is not in the document.
    #[error("Element not found: {selector}")]
    MissingElement { selector: String },

    /// The environment lacks a browser capability.
    #[error("Unsupported capability: {capability}")]
    Unsupported { capability: &'static str },

    /// A browser operation was rejected.
    #[error("{operation} failed: {message}")]
    Operation {
        operation: &'static str,
        message: String,
    },

    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A stored preference holds an unknown value.
    #[error("Invalid preference value: {0}")]
    InvalidPreference(String),

    /// Search index could not be fetched.
    #[error("Search index fetch error: {0}")]
    IndexFetch(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UiError {
    /// Create a missing-element error.
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    /// Create an unsupported-capability error.
    pub fn unsupported(capability: &'static str) -> Self {
        Self::Unsupported { capability }
    }

    /// Create an operation error.
    pub fn operation(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Operation {
            operation,
            message: message.into(),
        }
    }

    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a search index fetch error.
    pub fn index_fetch(message: impl Into<String>) -> Self {
        Self::IndexFetch(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_error() {
        let err = UiError::missing(".search-overlay");
        assert_eq!(err.to_string(), "Element not found: .search-overlay");
    }

    #[test]
    fn test_operation_error() {
        let err = UiError::operation("clipboard write", "permission denied");
        assert_eq!(err.to_string(), "clipboard write failed: permission denied");
    }

    #[test]
    fn test_config_error_with_source() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = UiError::config_with_source("bad page config", source);
        assert!(err.to_string().contains("Configuration error"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("[").unwrap_err();
        let err: UiError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
