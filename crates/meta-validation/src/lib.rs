//! # meta-validation
//!
//! Pure validation of field-metadata create and update requests.
//!
//! Given the stored field and a partial update, [`FieldMetadataValidator`]
//! applies independent rule functions in a fixed order:
//!
//! 1. [`rules::name_label_sync`]: when `isLabelSyncedWithName` is in effect,
//!    `name` must equal [`compute_name_from_label`] of the effective label.
//! 2. [`rules::name_identifier`]: a supplied or derived `name` must be ASCII
//!    alphanumeric and start with a letter.
//! 3. [`rules::default_value`]: for enumerated kinds, a non-null default must
//!    be one of the effective `options[].value`.
//!
//! Nothing here performs I/O or holds state between calls; a rejected request
//! can be corrected and resubmitted.

pub mod canonical;
pub mod error;
pub mod rules;
pub mod settings;
pub mod validator;

pub use canonical::{compute_name_from_label, is_identifier};
pub use error::ValidationError;
pub use settings::ValidationSettings;
pub use validator::{FieldMetadataValidator, ValidatedPatch};

#[cfg(test)]
pub(crate) mod test_support;
