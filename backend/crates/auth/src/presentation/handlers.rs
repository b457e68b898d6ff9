//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::profile::{ChangePasswordInput, ProfileUseCase};
use crate::application::register::RegisterUseCase;
use crate::application::token::{Claims, TokenService};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    ChangePasswordRequest, CreateUserRequest, LoginRequest, TokenResponse, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Registration / Login
// ============================================================================

/// POST /auth/
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<CreateUserRequest>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    use_case.execute(req.into_input()).await?;

    // Success status only, no body
    Ok(StatusCode::CREATED)
}

/// POST /auth/token
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenResponse::bearer(output.access_token)))
}

// ============================================================================
// Self-service (behind require_auth)
// ============================================================================

/// GET /user/
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<Claims>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone());

    let user = use_case.fetch(claims.user_id).await?;

    Ok(Json(user.into()))
}

/// PUT /user/password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone());

    use_case
        .change_password(
            claims.user_id,
            ChangePasswordInput {
                password: req.password,
                new_password: req.new_password,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /user/phonenumber/{phone_number}
pub async fn change_phone_number<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<Claims>,
    Path(phone_number): Path<String>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone());

    use_case
        .change_phone_number(claims.user_id, &phone_number)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
