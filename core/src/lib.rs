//! # Brew Core
//!
//! Core business logic and domain layer for the Brew backend.
//! This crate contains domain entities, the verification limiter and
//! security-code services, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::security_code::{ContactType, DeliveryMethod, SecurityCode};
pub use domain::entities::user::{User, UserRole, UserStatus};
pub use domain::value_objects::cookie::SessionCookie;
pub use errors::{AuthError, DomainError, DomainResult, ErrorResponse, VerificationError};
