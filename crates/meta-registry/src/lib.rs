//! # meta-registry
//!
//! Explicit schema registry for dynamically defined objects and their fields.
//!
//! Objects are keyed by id; each owns an ordered list of field definitions.
//! Field creates and updates pass through
//! [`FieldMetadataValidator`](meta_validation::FieldMetadataValidator) before
//! anything is stored, and a rejected request leaves the registry untouched.
//! Deleting an object cascades to its fields.
//!
//! The registry is a plain owned value. Persistence is a JSON snapshot (see
//! [`snapshot`]); callers sharing a registry across threads wrap it themselves.

pub mod error;
pub mod registry;
pub mod snapshot;

pub use error::RegistryError;
pub use registry::{MetadataRegistry, ObjectEntry};
pub use snapshot::{RegistrySnapshot, SNAPSHOT_VERSION};
