//! User entity representing a registered account in the Brew system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Verification status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Account created, email ownership not yet proven
    NotVerified,
    /// Email ownership proven with a security code
    Verified,
}

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique among active users
    pub email: String,

    /// Password hash produced by the external credential service
    pub password_hash: String,

    /// Verification status
    pub status: UserStatus,

    /// Account role
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Soft-delete flag; inactive rows are invisible to lookups
    pub is_active: bool,
}

impl User {
    /// Creates a new unverified user
    pub fn new(email: String, password_hash: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            status: UserStatus::NotVerified,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    /// Marks the account as verified
    pub fn verify(&mut self, now: DateTime<Utc>) {
        self.status = UserStatus::Verified;
        self.updated_at = now;
    }

    /// Checks whether the account has completed email verification
    pub fn is_verified(&self) -> bool {
        self.status == UserStatus::Verified
    }
}
