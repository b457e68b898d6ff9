//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id) and verification
//! - Zeroization of sensitive material

pub mod password;
