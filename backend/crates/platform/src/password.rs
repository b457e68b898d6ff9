//! Password Hashing and Verification
//!
//! One-way password handling:
//! - Argon2id hashing (memory-hard, salted)
//! - Zeroization of the plaintext on drop
//! - Constant-time verification (delegated to argon2's comparator)
//!
//! Verification is binary: a mismatch is `false`, never an error.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in Unicode code points
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains control characters
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization.
///
/// The plaintext is erased from memory when this value is dropped. The type
/// deliberately does not implement `Clone`, and its `Debug` output is
/// redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
/// let hashed = password.hash().unwrap();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation.
    ///
    /// The input is NFKC-normalized before validation, then checked for:
    /// - emptiness / whitespace-only content
    /// - length bounds (counted in code points, not bytes)
    /// - control characters
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Control characters are never legitimate password content
        for ch in normalized.chars() {
            if ch.is_control() && ch != ' ' && ch != '\t' {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(normalized))
    }

    /// Create without validation (tests only).
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id with a fresh random salt.
    ///
    /// Returns a PHC-formatted hash string wrapped in [`HashedPassword`].
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        // Default parameters are the OWASP-recommended Argon2id set:
        // m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format.
///
/// Carries algorithm, version, parameters, salt and digest; the stored
/// string alone never reveals the plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string (e.g., loaded from the database).
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a candidate password against this hash.
    ///
    /// Argon2 performs the digest comparison in constant time; the result
    /// does not depend on where a mismatch occurs.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("abc".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_empty() {
        let result = ClearTextPassword::new("".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_characters() {
        let result = ClearTextPassword::new("abc\u{0007}def".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_valid_password() {
        let result = ClearTextPassword::new("Secret123".to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_unicode_password() {
        let result = ClearTextPassword::new("pässwörd-ünïcode".to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash().unwrap();

        // Correct password should verify
        assert!(hashed.verify(&password));

        // Wrong password should not verify
        let wrong_password = ClearTextPassword::new_unchecked("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong_password));
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let a = password.hash().unwrap();
        let b = password.hash().unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash().unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new_unchecked("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
