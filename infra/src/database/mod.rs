//! MySQL persistence layer: connection pool and repository implementations.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlSecurityCodeRepository, MySqlUserRepository};
