//! Database layer - connection pool, schema, and repositories
//!
//! - Connection pool shared by every handler, no Arc<Mutex<Connection>>
//! - Schema is created once at startup, before any request is served
//! - One SQL statement per repository operation

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
