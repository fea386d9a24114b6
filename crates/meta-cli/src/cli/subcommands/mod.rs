mod field;
mod object;

pub use field::{FieldCommands, FieldCreateArgs};
pub use object::ObjectCommands;
