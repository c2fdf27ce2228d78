use argon2::password_hash::{self, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::Rng;
use thiserror::Error;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password does not match")]
    Mismatch,
    #[error("stored password hash is malformed")]
    MalformedHash,
}

fn salt() -> Result<SaltString, AppError> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    SaltString::encode_b64(&bytes)
        .map_err(|e| AppError::crypto(format!("Failed to encode salt: {e}")))
}

/// Hash a plaintext password into a self-salted Argon2id PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt()?)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::crypto(format!("Failed to hash password: {e}")))
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> Result<(), PasswordError> {
    let parsed = PasswordHash::new(digest).map_err(|_| PasswordError::MalformedHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|e| match e {
            password_hash::Error::Password => PasswordError::Mismatch,
            _ => PasswordError::MalformedHash,
        })
}
