//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::register::RegisterInput;
use crate::domain::entity::user::User;

// ============================================================================
// Registration
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
    pub phone_number: String,
}

impl CreateUserRequest {
    pub fn into_input(self) -> RegisterInput {
        RegisterInput {
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password: self.password,
            role: self.role,
            phone_number: self.phone_number,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

// ============================================================================
// Self-service
// ============================================================================

/// Password change request
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String,
    pub new_password: String,
}

/// Own-profile response; never includes the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    pub phone_number: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role.code().to_string(),
            is_active: user.is_active,
            phone_number: user.phone_number,
        }
    }
}
