/**
 * Password Hashing
 *
 * One-way password hashing and verification on top of bcrypt. Each hash
 * call salts randomly, so hashing the same plaintext twice never yields
 * the same output; verification goes through bcrypt's own comparison,
 * which does not leak where a mismatch occurred.
 *
 * bcrypt is deliberately slow, so both operations run under
 * `spawn_blocking` to keep the hashing work off the async executor.
 */

use crate::error::ApiError;

/// Default bcrypt work factor
pub const DEFAULT_COST: u32 = 10;

/// Hash a plaintext password
///
/// # Arguments
/// * `plaintext` - The password to hash
/// * `cost` - bcrypt work factor (configured, default 10)
///
/// # Errors
///
/// Fails only when the underlying hashing primitive fails (entropy or
/// resource exhaustion), surfaced as an internal error.
pub async fn hash_password(plaintext: &str, cost: u32) -> Result<String, ApiError> {
    let plaintext = plaintext.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
        .await
        .map_err(|e| ApiError::internal(format!("hashing task failed: {e}")))?
        .map_err(|e| ApiError::internal(format!("password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored hash
///
/// Returns `Ok(false)` on mismatch. A structurally corrupt stored hash is
/// an internal error, not a mismatch.
pub async fn verify_password(plaintext: &str, hash: &str) -> Result<bool, ApiError> {
    let plaintext = plaintext.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
        .await
        .map_err(|e| ApiError::internal(format!("verification task failed: {e}")))?
        .map_err(|e| ApiError::internal(format!("password verification failed: {e}")))
}
