//! Field kinds and error codes for Metafield.
//!
//! `FieldMetadataType` serializes in `SCREAMING_SNAKE_CASE` to match the wire
//! names used by the metadata API (`TEXT`, `SELECT`, `MULTI_SELECT`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// FieldMetadataType
// ---------------------------------------------------------------------------

/// Kind of a field definition.
///
/// The set is closed: adding a kind means adding a variant here and deciding
/// whether it is enumerated (see [`FieldMetadataType::is_enum`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldMetadataType {
    Uuid,
    Text,
    Phones,
    Emails,
    DateTime,
    Date,
    Boolean,
    Number,
    Numeric,
    Links,
    Currency,
    FullName,
    Rating,
    Select,
    MultiSelect,
    Relation,
    Position,
    Address,
    RawJson,
    RichText,
    Array,
}

impl FieldMetadataType {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Uuid,
        Self::Text,
        Self::Phones,
        Self::Emails,
        Self::DateTime,
        Self::Date,
        Self::Boolean,
        Self::Number,
        Self::Numeric,
        Self::Links,
        Self::Currency,
        Self::FullName,
        Self::Rating,
        Self::Select,
        Self::MultiSelect,
        Self::Relation,
        Self::Position,
        Self::Address,
        Self::RawJson,
        Self::RichText,
        Self::Array,
    ];

    /// Whether values of this kind must come from a declared option set.
    #[must_use]
    pub const fn is_enum(self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect | Self::Rating)
    }

    /// Whether the default value is a list of option literals rather than one.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::MultiSelect)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uuid => "UUID",
            Self::Text => "TEXT",
            Self::Phones => "PHONES",
            Self::Emails => "EMAILS",
            Self::DateTime => "DATE_TIME",
            Self::Date => "DATE",
            Self::Boolean => "BOOLEAN",
            Self::Number => "NUMBER",
            Self::Numeric => "NUMERIC",
            Self::Links => "LINKS",
            Self::Currency => "CURRENCY",
            Self::FullName => "FULL_NAME",
            Self::Rating => "RATING",
            Self::Select => "SELECT",
            Self::MultiSelect => "MULTI_SELECT",
            Self::Relation => "RELATION",
            Self::Position => "POSITION",
            Self::Address => "ADDRESS",
            Self::RawJson => "RAW_JSON",
            Self::RichText => "RICH_TEXT",
            Self::Array => "ARRAY",
        }
    }
}

impl fmt::Display for FieldMetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldMetadataType {
    type Err = CoreError;

    /// Accepts the wire name in any case, with `-` or `_` separators
    /// (`multi-select`, `MULTI_SELECT`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownFieldType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

/// Stable machine-readable code carried in a GraphQL error's `extensions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadUserInput,
    NotFound,
    InternalServerError,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadUserInput => "BAD_USER_INPUT",
            Self::NotFound => "NOT_FOUND",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// The GraphQL error `name` conventionally paired with this code.
    #[must_use]
    pub const fn error_name(self) -> &'static str {
        match self {
            Self::BadUserInput => "UserInputError",
            Self::NotFound => "NotFoundError",
            Self::InternalServerError => "InternalServerError",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
