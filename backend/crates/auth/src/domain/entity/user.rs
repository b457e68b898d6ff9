//! User Entity
//!
//! The credential store record: identity, contact metadata, and the one-way
//! password hash. Never carries a plaintext password.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::user_role::UserRole;

/// User entity as persisted in the `users` table.
///
/// Users are never hard-deleted; the only mutations are password changes
/// and phone number changes.
#[derive(Debug, Clone)]
pub struct User {
    /// Row id, also the owner reference on todos
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Unique email
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2id PHC string
    pub password_hash: HashedPassword,
    /// Role (user or admin)
    pub role: UserRole,
    /// Active flag (present for parity with the credential store schema)
    pub is_active: bool,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Insert payload for a new user; the store assigns the row id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: HashedPassword,
    pub role: UserRole,
    pub phone_number: String,
}
