//! Mock implementation of SecurityCodeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::security_code::SecurityCode;
use crate::errors::DomainError;

use super::trait_::SecurityCodeRepository;

/// Mock security-code repository for testing
pub struct MockSecurityCodeRepository {
    codes: Arc<RwLock<HashMap<Uuid, SecurityCode>>>,
}

impl MockSecurityCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records (test helper)
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }
}

impl Default for MockSecurityCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecurityCodeRepository for MockSecurityCodeRepository {
    async fn create(&self, code: SecurityCode) -> Result<SecurityCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.insert(code.id, code.clone());
        Ok(code)
    }

    async fn find_by_user_and_hash(
        &self,
        user_id: Uuid,
        code_hash: &str,
    ) -> Result<Option<SecurityCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .values()
            .find(|c| c.user_id == user_id && c.code_hash == code_hash && c.is_active)
            .cloned())
    }

    async fn update(&self, code: SecurityCode) -> Result<SecurityCode, DomainError> {
        let mut codes = self.codes.write().await;

        if !codes.contains_key(&code.id) {
            return Err(DomainError::Internal {
                message: format!("security code {} not found", code.id),
            });
        }

        codes.insert(code.id, code.clone());
        Ok(code)
    }

    async fn find_recent_for_contact(
        &self,
        contact: &str,
        limit: u32,
    ) -> Result<Vec<SecurityCode>, DomainError> {
        let codes = self.codes.read().await;
        let mut matching: Vec<SecurityCode> = codes
            .values()
            .filter(|c| c.contact == contact && c.is_active)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit as usize);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::security_code::{ContactType, DeliveryMethod};
    use chrono::{Duration, Utc};

    fn record(contact: &str, user_id: Uuid, hash: &str, created_at: chrono::DateTime<Utc>) -> SecurityCode {
        SecurityCode::new(
            contact.to_string(),
            ContactType::Email,
            hash.to_string(),
            DeliveryMethod::Email,
            user_id,
            created_at,
        )
    }

    #[tokio::test]
    async fn test_find_by_user_and_hash() {
        let repo = MockSecurityCodeRepository::new();
        let user_id = Uuid::new_v4();
        let code = record("a@b.com", user_id, "digest", Utc::now());
        repo.create(code.clone()).await.unwrap();

        let found = repo.find_by_user_and_hash(user_id, "digest").await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(code.id));

        let missing = repo.find_by_user_and_hash(user_id, "other").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_recent_for_contact_ordering() {
        let repo = MockSecurityCodeRepository::new();
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        for i in 0..4 {
            let created = now + Duration::seconds(i);
            repo.create(record("a@b.com", user_id, &format!("h{}", i), created))
                .await
                .unwrap();
        }
        repo.create(record("other@b.com", user_id, "hx", now))
            .await
            .unwrap();

        let recent = repo.find_recent_for_contact("a@b.com", 3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].code_hash, "h3");
        assert_eq!(recent[2].code_hash, "h1");
    }
}
