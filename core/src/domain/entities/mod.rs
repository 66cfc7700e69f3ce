//! Domain entities representing core business objects.

pub mod security_code;
pub mod user;

// Re-export commonly used types
pub use security_code::{ContactType, DeliveryMethod, SecurityCode, CODE_LENGTH};
pub use user::{User, UserRole, UserStatus};
