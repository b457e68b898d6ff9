//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use platform::password::HashedPassword;

use crate::domain::entity::user::{NewUser, User};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user, returning the assigned row id
    async fn create(&self, user: &NewUser) -> AuthResult<i64>;

    /// Find user by row id
    async fn find_by_id(&self, id: i64) -> AuthResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;

    /// Check if username exists
    async fn exists_by_username(&self, username: &str) -> AuthResult<bool>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &str) -> AuthResult<bool>;

    /// Replace the stored password hash
    async fn update_password(&self, id: i64, hash: &HashedPassword) -> AuthResult<()>;

    /// Replace the stored phone number
    async fn update_phone_number(&self, id: i64, phone_number: &str) -> AuthResult<()>;
}
