// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for message resolution.
//!
//! Only a missing dictionary is a configuration gap callers must fix; every other
//! "missing data" case during lookup degrades to the `"<field> is invalid"` fallback
//! instead of producing an error. The remaining variants cover construction-time
//! validation (delimiter patterns), malformed evaluate blocks in templates, and
//! parsing of dictionaries held in memory.

use thiserror::Error;

/// Error type for all message box operations.
#[derive(Error, Debug)]
pub enum MessageBoxError {
    /// Neither the registry nor the instance holds messages for the resolved language.
    #[error("No messages found for language \"{language}\"")]
    MissingDictionary { language: String },

    /// A delimiter pattern failed to compile or has no capture group for the expression.
    #[error("Invalid delimiter pattern '{pattern}': {reason}")]
    InvalidDelimiter { pattern: String, reason: String },

    /// A template's evaluate blocks could not be compiled.
    #[error("Failed to compile template '{template}': {reason}")]
    Template { template: String, reason: String },

    /// A YAML message dictionary could not be parsed.
    #[error("Failed to parse message dictionary: {0}")]
    Dictionary(#[from] serde_yaml::Error),

    /// A JSON message dictionary could not be parsed.
    #[error("Failed to parse message dictionary: {0}")]
    DictionaryJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MessageBoxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dictionary_display() {
        let error = MessageBoxError::MissingDictionary {
            language: "es-ES".to_string(),
        };
        assert_eq!(error.to_string(), "No messages found for language \"es-ES\"");
    }

    #[test]
    fn test_invalid_delimiter_display() {
        let error = MessageBoxError::InvalidDelimiter {
            pattern: "[[".to_string(),
            reason: "unclosed character class".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid delimiter pattern '[[': unclosed character class"
        );
    }

    #[test]
    fn test_dictionary_error_from_yaml() {
        let yaml_error = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let error: MessageBoxError = yaml_error.into();
        assert!(matches!(error, MessageBoxError::Dictionary(_)));
        assert!(error.to_string().starts_with("Failed to parse message dictionary"));
    }
}
