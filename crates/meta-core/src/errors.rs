//! Cross-cutting error types for Metafield.
//!
//! Domain-specific errors (e.g., `ValidationError`, `RegistryError`) are
//! defined in their respective crates. The CLI converges them with `anyhow`.

use thiserror::Error;

/// Errors that can be raised while building core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field kind name did not match any `FieldMetadataType`.
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// An option was malformed, or two options share a value.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}
