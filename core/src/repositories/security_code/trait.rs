//! Security-code repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::security_code::SecurityCode;
use crate::errors::DomainError;

/// Repository trait for SecurityCode record persistence.
///
/// Records are never deleted through this interface; cleanup of stale
/// rows belongs to an external job. Lookups are scoped to active rows.
#[async_trait]
pub trait SecurityCodeRepository: Send + Sync {
    /// Persist a new record
    async fn create(&self, code: SecurityCode) -> Result<SecurityCode, DomainError>;

    /// Find a record matching a user and code digest
    async fn find_by_user_and_hash(
        &self,
        user_id: Uuid,
        code_hash: &str,
    ) -> Result<Option<SecurityCode>, DomainError>;

    /// Update an existing record (used to mark it verified)
    async fn update(&self, code: SecurityCode) -> Result<SecurityCode, DomainError>;

    /// Most recent records for a contact, newest first, at most `limit`
    async fn find_recent_for_contact(
        &self,
        contact: &str,
        limit: u32,
    ) -> Result<Vec<SecurityCode>, DomainError>;
}
