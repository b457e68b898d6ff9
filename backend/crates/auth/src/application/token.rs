//! Token Issuer and Verifier
//!
//! Stateless bearer tokens (JWT, HS256). A token encodes
//! `{sub, id, role, exp, iat}` and is trusted only when the signature
//! verifies under the configured secret, the expiry is in the future, and
//! both `sub` and `id` are present and non-null.
//!
//! Verification is a pure computation (signature check plus clock
//! comparison); it never touches the store. A missing `role` claim means
//! "no elevated privilege", never a wildcard allow.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Verified token claims.
///
/// Only constructed by [`TokenService::verify`]; holding a value of this
/// type means the token it came from passed every check.
#[derive(Debug, Clone)]
pub struct Claims {
    /// Subject: the username
    pub username: String,
    /// Numeric user id (matches `users.id`)
    pub user_id: i64,
    /// Role claim; `None` grants no privilege
    pub role: Option<UserRole>,
    /// Absolute expiry instant
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|r| r.is_admin())
    }
}

/// Wire representation of the claims set.
///
/// Every field is optional on the way in so that a structurally valid but
/// incomplete payload reaches our own presence checks instead of failing
/// as a serde error (which would misreport it as malformed).
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
}

/// Issues and verifies signed bearer tokens.
///
/// Keys are derived once from [`AuthConfig`]; the service is cheap to
/// share behind an `Arc`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock slack: a token past its expiry fails immediately
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_ttl = Duration::seconds(config.token_ttl_secs() as i64);

        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            token_ttl,
        }
    }

    /// Issue a signed token for the given identity, expiring after the
    /// configured TTL.
    pub fn issue(&self, username: &str, user_id: i64, role: UserRole) -> AuthResult<String> {
        self.issue_with_expiry(username, user_id, role, Utc::now() + self.token_ttl)
    }

    /// Issue a signed token with an explicit expiry instant.
    pub fn issue_with_expiry(
        &self,
        username: &str,
        user_id: i64,
        role: UserRole,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        let claims = WireClaims {
            sub: Some(username.to_string()),
            id: Some(user_id),
            role: Some(role.code().to_string()),
            exp: Some(expires_at.timestamp()),
            iat: Some(Utc::now().timestamp()),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))
    }

    /// Verify a token and extract its claims, fail-closed.
    ///
    /// Checks, in order: structure, signature, expiry, then presence of
    /// `sub` and `id`. Each failure maps to its own [`AuthError`] variant;
    /// callers collapse them into one client-visible detail.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let data =
            jsonwebtoken::decode::<WireClaims>(token, &self.decoding_key, &self.validation)
                .map_err(map_jwt_error)?;

        let wire = data.claims;

        let username = wire.sub.ok_or(AuthError::IncompletePayload)?;
        let user_id = wire.id.ok_or(AuthError::IncompletePayload)?;
        // exp presence is enforced by the validation above
        let exp = wire.exp.ok_or(AuthError::IncompletePayload)?;

        let expires_at = DateTime::from_timestamp(exp, 0).ok_or(AuthError::Malformed)?;

        Ok(Claims {
            username,
            user_id,
            role: wire.role.as_deref().map(UserRole::from_code),
            expires_at,
        })
    }
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::MissingRequiredClaim(_) => AuthError::IncompletePayload,
        _ => AuthError::Malformed,
    }
}
