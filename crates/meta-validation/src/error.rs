//! Validation error types.

use meta_core::enums::ErrorCode;
use meta_core::responses::{GraphqlError, ToGraphqlError};
use thiserror::Error;

/// A rejected metadata request. Every kind is a user-input error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Sync is on but the supplied (or stored) name is not the label-derived one.
    #[error("Name is not synced with label. Expected name: \"{expected}\", got {actual}")]
    NameLabelSyncMismatch { expected: String, actual: String },

    /// A name that is empty or not ASCII alphanumeric starting with a letter.
    #[error("Name \"{name}\" is not a valid identifier")]
    InvalidName { name: String },

    /// An enumerated field's default is not among its option values.
    #[error("Default value \"{value}\" must be one of the option values")]
    DefaultValueNotInOptions { value: String },
}

impl ValidationError {
    /// Stable machine-readable kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NameLabelSyncMismatch { .. } => "NAME_LABEL_SYNC_MISMATCH",
            Self::InvalidName { .. } => "INVALID_NAME",
            Self::DefaultValueNotInOptions { .. } => "DEFAULT_VALUE_NOT_IN_OPTIONS",
        }
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::BadUserInput
    }
}

impl ToGraphqlError for ValidationError {
    fn to_graphql_error(&self) -> GraphqlError {
        GraphqlError::new(self.code(), self.to_string())
    }
}
