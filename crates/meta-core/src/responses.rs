//! GraphQL-shaped error envelope returned to callers of the metadata API.
//!
//! A failed request yields one [`GraphqlError`] per failed check, collected in
//! a [`GraphqlErrorResponse`]:
//!
//! ```json
//! { "errors": [ { "message": "...", "name": "UserInputError",
//!                 "extensions": { "code": "BAD_USER_INPUT", "userFriendlyMessage": "..." } } ] }
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ErrorCode;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlErrorExtensions {
    pub code: ErrorCode,
    pub user_friendly_message: String,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GraphqlError {
    pub message: String,
    pub name: String,
    pub extensions: GraphqlErrorExtensions,
}

impl GraphqlError {
    /// Build an error whose user-facing message equals its technical message.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            name: code.error_name().to_string(),
            extensions: GraphqlErrorExtensions {
                code,
                user_friendly_message: message.clone(),
            },
            message,
        }
    }

    #[must_use]
    pub fn user_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadUserInput, message)
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.extensions.code
    }
}

/// Top-level failure body: `{ "errors": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GraphqlErrorResponse {
    pub errors: Vec<GraphqlError>,
}

impl FromIterator<GraphqlError> for GraphqlErrorResponse {
    fn from_iter<I: IntoIterator<Item = GraphqlError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Conversion of a domain error into its GraphQL error entry.
pub trait ToGraphqlError {
    fn to_graphql_error(&self) -> GraphqlError;
}
