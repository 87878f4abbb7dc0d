pub mod schema;
pub mod mutations;
pub mod queries;

pub use schema::{create_schema, AuthSchema, ServerInfo};
