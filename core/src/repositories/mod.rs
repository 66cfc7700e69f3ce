//! Repository interfaces and in-memory mocks.

pub mod security_code;
pub mod user;

pub use security_code::{MockSecurityCodeRepository, SecurityCodeRepository};
pub use user::{MockUserRepository, UserRepository};
