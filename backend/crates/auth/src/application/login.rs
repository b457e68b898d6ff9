//! Login Use Case
//!
//! Authenticates a user and issues a signed bearer token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Compact signed token for the Authorization header
    pub access_token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A candidate that fails password policy cannot match any stored
        // hash; report it the same way as a mismatch.
        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(&user.username, user.id, user.role)?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            "User logged in"
        );

        Ok(LoginOutput { access_token })
    }
}
