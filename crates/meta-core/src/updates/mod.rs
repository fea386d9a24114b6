//! Update payload types for metadata mutations.
//!
//! Each payload has `Option` fields: `None` leaves the stored attribute alone.
//! Clearable attributes use `Option<Option<T>>`, where `Some(None)` clears.
//! Only `Some` fields are serialized, so a payload echoes exactly what changed.

pub mod field;

pub use field::{FieldMetadataUpdate, FieldMetadataUpdateBuilder};
