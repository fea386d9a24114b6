//! Independent validation rules, applied by the validator in [`RULES`] order.
//!
//! A rule reads the stored field and the proposed update. It may normalize the
//! update (the sync rule fills in a derived `name`) but never touches the
//! stored field.

pub mod default_value;
pub mod name_identifier;
pub mod name_label_sync;

use meta_core::entities::FieldMetadata;
use meta_core::updates::FieldMetadataUpdate;

use crate::error::ValidationError;
use crate::settings::ValidationSettings;

/// Signature shared by every rule.
pub type Rule = fn(
    &FieldMetadata,
    &mut FieldMetadataUpdate,
    &ValidationSettings,
) -> Result<(), ValidationError>;

/// Rules in evaluation order, with the name used in logs.
pub const RULES: &[(&str, Rule)] = &[
    ("name_label_sync", name_label_sync::check),
    ("name_is_identifier", name_identifier::check),
    ("default_value_in_options", default_value::check),
];
