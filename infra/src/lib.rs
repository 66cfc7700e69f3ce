//! # Brew Infrastructure
//!
//! Concrete adapters behind the core crate's seams: the Redis-backed
//! attempt store, MySQL repositories, and the outbound code delivery
//! channel.

pub mod cache;
pub mod database;
pub mod email;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
