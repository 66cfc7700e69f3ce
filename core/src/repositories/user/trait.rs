//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations.
///
/// All lookups are implicitly scoped to active rows; row-level email
/// uniqueness is enforced by the storage layer, not here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find an active user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Check whether an active user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
