pub mod queries;
pub mod schema;
pub mod scope;

pub use queries::*;
pub use schema::{init_db, init_schema};
pub use scope::{ConnectionManager, ConnectionScope};
