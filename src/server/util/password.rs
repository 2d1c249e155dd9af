//! Password hashing and verification using Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plaintext password into a PHC-format string with a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch and for accounts without a usable hash (such
/// as users created without a password), so that login can answer both cases the
/// same way.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return Ok(false);
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::PasswordHash(e.to_string()).into()),
    }
}
