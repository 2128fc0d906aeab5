pub mod schema;
pub mod validator;

pub use schema::SchemaHandle;
pub use validator::Validator;
