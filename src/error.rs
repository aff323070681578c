use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A resolver fetch failure.
///
/// Cloneable so a stored failure can be handed to every caller that shared
/// the single in-flight request, and returned again on later lookups until
/// an explicit refetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request interrupted before completion")]
    Interrupted,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// A single field's validation message inside a rejected save.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub message: String,
}

/// A failed settings save.
///
/// Validation failures carry the server's field-keyed details verbatim so
/// the UI can attach each message to the offending control. The draft is
/// never touched on failure; the error persists until the next attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveError {
    #[error("settings rejected by validation")]
    Validation { details: HashMap<String, FieldError> },

    #[error("settings have not been loaded")]
    NotLoaded,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

impl SaveError {
    /// Build a single-field validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut details = HashMap::new();
        details.insert(
            field.into(),
            FieldError {
                message: message.into(),
            },
        );
        SaveError::Validation { details }
    }

    /// The validation message for a field, if this is a validation error
    /// that names it.
    #[must_use]
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            SaveError::Validation { details } => {
                details.get(field).map(|e| e.message.as_str())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SaveError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            SaveError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            SaveError::Transport(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_message_reads_validation_details() {
        let err = SaveError::validation("account_statement_descriptor", "Use only latin characters.");
        assert_eq!(
            err.field_message("account_statement_descriptor"),
            Some("Use only latin characters.")
        );
        assert_eq!(err.field_message("purchase_price_threshold"), None);
    }

    #[test]
    fn field_message_is_none_for_transport_errors() {
        let err = SaveError::Transport("connection reset".into());
        assert_eq!(err.field_message("account_statement_descriptor"), None);
    }
}
