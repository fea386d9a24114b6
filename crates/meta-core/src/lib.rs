//! # meta-core
//!
//! Core types and error envelopes for Metafield.
//!
//! This crate provides the foundational types shared across all Metafield crates:
//! - Entity structs for object and field metadata
//! - The closed `FieldMetadataType` enum and its enumerated-kind predicate
//! - Create/update input payloads and the field update builder
//! - Cross-cutting error types
//! - The GraphQL-shaped error envelope returned to callers

pub mod entities;
pub mod enums;
pub mod errors;
pub mod inputs;
pub mod responses;
pub mod updates;

mod serde_helpers;
