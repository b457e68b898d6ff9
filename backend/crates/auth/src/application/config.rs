//! Application Configuration
//!
//! Configuration for the Auth application layer. Loaded once at startup;
//! there is no key versioning, so rotating the secret invalidates every
//! token issued before the rotation.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric secret for HS256 token signing
    pub jwt_secret: Vec<u8>,
    /// Lifetime of issued tokens (default 20 minutes)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: vec![0u8; 32],
            token_ttl: Duration::from_secs(20 * 60),
        }
    }
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>, token_ttl: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl,
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self {
            jwt_secret: secret,
            ..Default::default()
        }
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl.as_secs()
    }
}
