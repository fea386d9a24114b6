//! Default-value membership for enumerated field kinds.
//!
//! Enumerated defaults are single-quoted literals (`"'OPTION_1'"`); a
//! multi-valued kind takes an array of them. One pair of surrounding quotes is
//! removed before comparing against `options[].value`.

use meta_core::entities::FieldMetadata;
use meta_core::updates::FieldMetadataUpdate;
use serde_json::Value;
use tracing::debug;

use crate::error::ValidationError;
use crate::settings::ValidationSettings;

/// Require the effective default of an enumerated field to be one of the
/// effective option values. Non-enumerated kinds always pass.
pub fn check(
    current: &FieldMetadata,
    update: &mut FieldMetadataUpdate,
    _settings: &ValidationSettings,
) -> Result<(), ValidationError> {
    if !current.field_type.is_enum() {
        return Ok(());
    }

    let merged = update.apply_to(current);
    let Some(default) = merged.effective_default() else {
        return Ok(());
    };
    let values: Vec<&str> = merged.option_values().collect();

    debug!(
        field = %current.id,
        field_type = %current.field_type,
        options = values.len(),
        "checking default value against options"
    );

    match default {
        Value::Array(items) if current.field_type.is_multi_valued() => items
            .iter()
            .try_for_each(|item| require_option(item, &values)),
        single if !current.field_type.is_multi_valued() => require_option(single, &values),
        other => Err(rejected(other)),
    }
}

fn require_option(literal: &Value, values: &[&str]) -> Result<(), ValidationError> {
    let found = literal
        .as_str()
        .map(unquote)
        .is_some_and(|value| values.contains(&value));
    if found { Ok(()) } else { Err(rejected(literal)) }
}

/// Strip one pair of surrounding single quotes, if present.
fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(literal)
}

fn rejected(value: &Value) -> ValidationError {
    let value = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    ValidationError::DefaultValueNotInOptions { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{enum_field, option, text_field};
    use meta_core::enums::FieldMetadataType;
    use meta_core::updates::FieldMetadataUpdateBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn run(current: &FieldMetadata, update: FieldMetadataUpdate) -> Result<(), ValidationError> {
        let mut update = update;
        check(current, &mut update, &ValidationSettings::default())
    }

    fn with_default(value: Value) -> FieldMetadataUpdate {
        FieldMetadataUpdateBuilder::new().default_value(Some(value)).build()
    }

    #[test]
    fn rejects_default_outside_options() {
        let current = enum_field(FieldMetadataType::Select, &["OPTION_1"]);
        let err = run(&current, with_default(json!("'OPTION_2'"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Default value \"'OPTION_2'\" must be one of the option values"
        );
    }

    #[rstest]
    #[case(json!("'OPTION_1'"))]
    #[case(json!("OPTION_1"))]
    #[case(json!(null))]
    fn accepts_member_or_null(#[case] value: Value) {
        let current = enum_field(FieldMetadataType::Select, &["OPTION_1", "OPTION_2"]);
        assert!(run(&current, with_default(value)).is_ok());
    }

    #[test]
    fn checks_against_options_in_same_update() {
        let current = enum_field(FieldMetadataType::Select, &["OPTION_1"]);
        let update = FieldMetadataUpdateBuilder::new()
            .options(vec![option("OPTION_1", 1.0), option("OPTION_2", 2.0)])
            .default_value(Some(json!("'OPTION_2'")))
            .build();
        assert!(run(&current, update).is_ok());
    }

    #[test]
    fn removing_option_invalidates_stored_default() {
        let mut current = enum_field(FieldMetadataType::Select, &["OPTION_1", "OPTION_2"]);
        current.default_value = Some(json!("'OPTION_2'"));
        let update = FieldMetadataUpdateBuilder::new()
            .options(vec![option("OPTION_1", 1.0)])
            .build();
        let err = run(&current, update).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DefaultValueNotInOptions {
                value: "'OPTION_2'".into()
            }
        );
    }

    #[test]
    fn clearing_default_passes() {
        let mut current = enum_field(FieldMetadataType::Select, &["OPTION_1"]);
        current.default_value = Some(json!("'GONE'"));
        let update = FieldMetadataUpdateBuilder::new().default_value(None).build();
        assert!(run(&current, update).is_ok());
    }

    #[test]
    fn multi_select_reports_first_offending_literal() {
        let current = enum_field(FieldMetadataType::MultiSelect, &["RED", "BLUE"]);
        assert!(run(&current, with_default(json!(["'RED'", "'BLUE'"]))).is_ok());

        let err = run(&current, with_default(json!(["'RED'", "'GREEN'", "'PINK'"]))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DefaultValueNotInOptions {
                value: "'GREEN'".into()
            }
        );
    }

    #[test]
    fn shape_mismatch_is_rejected_whole() {
        let multi = enum_field(FieldMetadataType::MultiSelect, &["RED"]);
        let err = run(&multi, with_default(json!("'RED'"))).unwrap_err();
        assert_eq!(err.to_string(), "Default value \"'RED'\" must be one of the option values");

        let single = enum_field(FieldMetadataType::Select, &["RED"]);
        let err = run(&single, with_default(json!(["'RED'"]))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DefaultValueNotInOptions {
                value: "[\"'RED'\"]".into()
            }
        );
    }

    #[test]
    fn enum_without_options_rejects_any_default() {
        let mut current = enum_field(FieldMetadataType::Rating, &[]);
        current.options = None;
        assert!(run(&current, with_default(json!("'RATING_1'"))).is_err());
    }

    #[test]
    fn non_enum_kinds_are_ignored() {
        let current = text_field();
        assert!(run(&current, with_default(json!("'anything'"))).is_ok());
    }
}
