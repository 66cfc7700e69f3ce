//! MySQL implementation of the SecurityCodeRepository trait.
//!
//! Records are append-mostly; the only update is the Pending -> Verified
//! flip (and its compensating revert). Stale rows are removed by an
//! external cleanup job, not through this interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use brew_core::domain::entities::security_code::{
    ContactType, DeliveryMethod, SecurityCode,
};
use brew_core::errors::DomainError;
use brew_core::repositories::SecurityCodeRepository;

/// MySQL-backed security-code repository
pub struct MySqlSecurityCodeRepository {
    pool: MySqlPool,
}

impl MySqlSecurityCodeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn contact_type_to_str(contact_type: ContactType) -> &'static str {
        match contact_type {
            ContactType::Email => "EMAIL",
            ContactType::Phone => "PHONE",
        }
    }

    fn method_to_str(method: DeliveryMethod) -> &'static str {
        match method {
            DeliveryMethod::Email => "EMAIL",
            DeliveryMethod::Sms => "SMS",
        }
    }

    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<SecurityCode, DomainError> {
        let id: String = row.try_get("id").map_err(|e| db_error("id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| db_error("user_id", e))?;
        let contact_type: String = row
            .try_get("contact_type")
            .map_err(|e| db_error("contact_type", e))?;
        let method: String = row
            .try_get("method")
            .map_err(|e| db_error("method", e))?;

        Ok(SecurityCode {
            id: parse_uuid("id", &id)?,
            contact: row
                .try_get("contact")
                .map_err(|e| db_error("contact", e))?,
            contact_type: match contact_type.as_str() {
                "PHONE" => ContactType::Phone,
                _ => ContactType::Email,
            },
            code_hash: row
                .try_get("code_hash")
                .map_err(|e| db_error("code_hash", e))?,
            method: match method.as_str() {
                "SMS" => DeliveryMethod::Sms,
                _ => DeliveryMethod::Email,
            },
            user_id: parse_uuid("user_id", &user_id)?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| db_error("is_verified", e))?,
            verified_at: row
                .try_get::<Option<DateTime<Utc>>, _>("verified_at")
                .map_err(|e| db_error("verified_at", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| db_error("is_active", e))?,
        })
    }
}

fn parse_uuid(column: &str, raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid uuid in column {}: {}", column, e),
    })
}

fn db_error(column: &str, err: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to read column {}: {}", column, err),
    }
}

fn query_error(err: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Database query failed: {}", err),
    }
}

#[async_trait]
impl SecurityCodeRepository for MySqlSecurityCodeRepository {
    async fn create(&self, code: SecurityCode) -> Result<SecurityCode, DomainError> {
        let query = r#"
            INSERT INTO security_codes (
                id, contact, contact_type, code_hash, method, user_id,
                is_verified, verified_at, created_at, is_active
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(&code.contact)
            .bind(Self::contact_type_to_str(code.contact_type))
            .bind(&code.code_hash)
            .bind(Self::method_to_str(code.method))
            .bind(code.user_id.to_string())
            .bind(code.is_verified)
            .bind(code.verified_at)
            .bind(code.created_at)
            .bind(code.is_active)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(code)
    }

    async fn find_by_user_and_hash(
        &self,
        user_id: Uuid,
        code_hash: &str,
    ) -> Result<Option<SecurityCode>, DomainError> {
        let query = r#"
            SELECT id, contact, contact_type, code_hash, method, user_id,
                   is_verified, verified_at, created_at, is_active
            FROM security_codes
            WHERE user_id = ? AND code_hash = ? AND is_active = TRUE
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(code_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        row.map(|r| Self::row_to_code(&r)).transpose()
    }

    async fn update(&self, code: SecurityCode) -> Result<SecurityCode, DomainError> {
        let query = r#"
            UPDATE security_codes
            SET is_verified = ?, verified_at = ?, is_active = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(code.is_verified)
            .bind(code.verified_at)
            .bind(code.is_active)
            .bind(code.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Internal {
                message: format!("security code {} not found for update", code.id),
            });
        }

        Ok(code)
    }

    async fn find_recent_for_contact(
        &self,
        contact: &str,
        limit: u32,
    ) -> Result<Vec<SecurityCode>, DomainError> {
        let query = r#"
            SELECT id, contact, contact_type, code_hash, method, user_id,
                   is_verified, verified_at, created_at, is_active
            FROM security_codes
            WHERE contact = ? AND is_active = TRUE
            ORDER BY created_at DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(contact)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(Self::row_to_code).collect()
    }
}
