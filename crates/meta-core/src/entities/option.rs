use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Color given to options declared without one.
pub const DEFAULT_OPTION_COLOR: &str = "gray";

/// One entry in an enumerated field's option set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldMetadataOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    pub value: String,
    pub color: String,
    pub position: f64,
}

impl FieldMetadataOption {
    /// Reject an option list in which two entries share a `value`.
    pub fn check_unique_values(options: &[Self]) -> Result<(), CoreError> {
        for (index, option) in options.iter().enumerate() {
            if options[..index].iter().any(|earlier| earlier.value == option.value) {
                return Err(CoreError::InvalidOptions(format!(
                    "option value '{}' is declared more than once",
                    option.value
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for FieldMetadataOption {
    type Err = CoreError;

    /// Parse the shorthand `VALUE[=Label][@color]`.
    ///
    /// Without a label, the value doubles as the label. The position is left at
    /// `0.0`; callers assign positions when assembling the option list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, color) = match s.rsplit_once('@') {
            Some((rest, color)) => (rest, color.trim()),
            None => (s, DEFAULT_OPTION_COLOR),
        };
        let (value, label) = match rest.split_once('=') {
            Some((value, label)) => (value.trim(), label.trim()),
            None => (rest.trim(), rest.trim()),
        };

        if value.is_empty() {
            return Err(CoreError::InvalidOptions(format!(
                "option '{s}' has an empty value"
            )));
        }
        if color.is_empty() {
            return Err(CoreError::InvalidOptions(format!(
                "option '{s}' has an empty color"
            )));
        }

        Ok(Self {
            id: None,
            label: label.to_string(),
            value: value.to_string(),
            color: color.to_string(),
            position: 0.0,
        })
    }
}
