//! Value objects used across the domain layer.

pub mod cookie;

pub use cookie::SessionCookie;
