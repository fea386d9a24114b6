//! Entity structs for object and field metadata.
//!
//! All structs serialize with camelCase keys (the metadata API wire format) and
//! derive `JsonSchema` for schema export and validation.

mod field;
mod object;
mod option;

pub use field::FieldMetadata;
pub use object::ObjectMetadata;
pub use option::FieldMetadataOption;
