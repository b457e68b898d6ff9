//! Register Use Case
//!
//! Creates a new user account with a freshly hashed password.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    /// Role code; anything other than "admin" registers a regular user
    pub role: String,
    pub phone_number: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: i64,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        if self.repo.exists_by_username(&input.username).await? {
            return Err(AuthError::UsernameTaken);
        }
        if self.repo.exists_by_email(&input.email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Validate and hash; the plaintext is zeroized on drop
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = NewUser {
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
            role: UserRole::from_code(&input.role),
            phone_number: input.phone_number,
        };

        let user_id = self.repo.create(&user).await?;

        tracing::info!(
            user_id,
            username = %user.username,
            role = %user.role,
            "User registered"
        );

        Ok(RegisterOutput { user_id })
    }
}
