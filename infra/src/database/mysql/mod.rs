//! MySQL repository implementations

pub mod security_code_repository_impl;
pub mod user_repository_impl;

pub use security_code_repository_impl::MySqlSecurityCodeRepository;
pub use user_repository_impl::MySqlUserRepository;
