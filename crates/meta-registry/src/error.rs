//! Registry error types.

use meta_core::enums::ErrorCode;
use meta_core::responses::{GraphqlError, GraphqlErrorResponse, ToGraphqlError};
use meta_validation::ValidationError;
use thiserror::Error;

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Object metadata not found: {0}")]
    ObjectNotFound(String),

    #[error("Field metadata not found: {0}")]
    FieldNotFound(String),

    /// An object or field name is already taken in its scope.
    #[error("{entity} name \"{name}\" is already in use")]
    DuplicateName { entity: &'static str, name: String },

    /// The request failed validation; one entry per failed rule.
    #[error("{}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for RegistryError {
    fn from(error: ValidationError) -> Self {
        Self::Invalid(vec![error])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl RegistryError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ObjectNotFound(_) | Self::FieldNotFound(_) => ErrorCode::NotFound,
            Self::DuplicateName { .. } | Self::Invalid(_) => ErrorCode::BadUserInput,
            Self::SnapshotVersion { .. } | Self::Io(_) | Self::Json(_) => {
                ErrorCode::InternalServerError
            }
        }
    }

    /// The GraphQL `errors` body for this failure: one entry per validation
    /// failure, or a single entry otherwise.
    #[must_use]
    pub fn to_graphql_errors(&self) -> GraphqlErrorResponse {
        match self {
            Self::Invalid(errors) => errors.iter().map(ToGraphqlError::to_graphql_error).collect(),
            other => std::iter::once(other.to_graphql_error()).collect(),
        }
    }
}

impl ToGraphqlError for RegistryError {
    fn to_graphql_error(&self) -> GraphqlError {
        GraphqlError::new(self.code(), self.to_string())
    }
}
