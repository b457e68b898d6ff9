//! Profile Use Case
//!
//! Self-service operations on the authenticated user's own record:
//! fetch profile, change password, change phone number.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Password change input
pub struct ChangePasswordInput {
    /// Current password, re-verified before anything is written
    pub password: String,
    pub new_password: String,
}

/// Profile use case
pub struct ProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the caller's own record.
    pub async fn fetch(&self, user_id: i64) -> AuthResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Change the caller's password.
    ///
    /// The current password must re-verify first; on mismatch the stored
    /// hash is left untouched.
    pub async fn change_password(&self, user_id: i64, input: ChangePasswordInput) -> AuthResult<()> {
        let user = self.fetch(user_id).await?;

        let current = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::PasswordChangeRejected)?;

        if !user.password_hash.verify(&current) {
            tracing::warn!(user_id, "Password change rejected: current password mismatch");
            return Err(AuthError::PasswordChangeRejected);
        }

        let new_password = ClearTextPassword::new(input.new_password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let new_hash = new_password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        self.repo.update_password(user_id, &new_hash).await?;

        tracing::info!(user_id, "Password changed");

        Ok(())
    }

    /// Change the caller's phone number.
    pub async fn change_phone_number(&self, user_id: i64, phone_number: &str) -> AuthResult<()> {
        // Confirm the record still exists before writing
        self.fetch(user_id).await?;

        self.repo.update_phone_number(user_id, phone_number).await?;

        tracing::info!(user_id, "Phone number changed");

        Ok(())
    }
}
