//! # meta-schema
//!
//! JSON Schema generation and validation for Metafield payloads.
//!
//! Types are defined in `meta-core` with `#[derive(JsonSchema)]`. This crate
//! collects their schemas into a [`SchemaRegistry`] used to export schemas and
//! to check raw JSON payloads before they are deserialized.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
