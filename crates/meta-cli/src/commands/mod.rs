pub mod dispatch;
pub mod field;
pub mod object;
pub mod schema;
