//! MySQL implementation of the UserRepository trait.
//!
//! Users are stored with CHAR(36) uuid primary keys and string-encoded
//! status/role columns. Every lookup is scoped to active rows; soft
//! deletion flips `is_active` and the row disappears from this layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use brew_core::domain::entities::user::{User, UserRole, UserStatus};
use brew_core::errors::DomainError;
use brew_core::repositories::UserRepository;

/// MySQL-backed user repository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn status_to_str(status: UserStatus) -> &'static str {
        match status {
            UserStatus::NotVerified => "NOT_VERIFIED",
            UserStatus::Verified => "VERIFIED",
        }
    }

    fn role_to_str(role: UserRole) -> &'static str {
        match role {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("id", e))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| db_error("status", e))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| db_error("role", e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user id in database: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| db_error("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("password_hash", e))?,
            status: match status.as_str() {
                "VERIFIED" => UserStatus::Verified,
                _ => UserStatus::NotVerified,
            },
            role: match role.as_str() {
                "ADMIN" => UserRole::Admin,
                _ => UserRole::User,
            },
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("updated_at", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| db_error("is_active", e))?,
        })
    }
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
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, status, role,
                   created_at, updated_at, is_active
            FROM users
            WHERE id = ? AND is_active = TRUE
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, status, role,
                   created_at, updated_at, is_active
            FROM users
            WHERE email = ? AND is_active = TRUE
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, password_hash, status, role,
                created_at, updated_at, is_active
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(Self::status_to_str(user.status))
            .bind(Self::role_to_str(user.role))
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.is_active)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, password_hash = ?, status = ?, role = ?,
                updated_at = ?, is_active = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(Self::status_to_str(user.status))
            .bind(Self::role_to_str(user.role))
            .bind(user.updated_at)
            .bind(user.is_active)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Internal {
                message: format!("user {} not found for update", user.id),
            });
        }

        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT 1 FROM users WHERE email = ? AND is_active = TRUE LIMIT 1";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(row.is_some())
    }
}
