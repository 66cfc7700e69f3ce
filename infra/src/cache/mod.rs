//! Redis cache layer: the shared client and the attempt store built on it.

pub mod attempt_store;
pub mod redis_client;

pub use attempt_store::RedisAttemptStore;
pub use redis_client::RedisClient;
