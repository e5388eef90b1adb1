/**
 * Token Issuance and Verification
 *
 * Stateless bearer tokens: HS256-signed JWTs binding a single user id
 * (`sub`) with issued-at and expiry claims. Tokens are verified by
 * signature and expiry alone; there is no revocation store, so an issued
 * token stays valid for its full TTL.
 *
 * The TTL comes from configuration (default 24 hours).
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Clock skew tolerance applied during expiry validation
const LEEWAY_SECS: u64 = 30;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Issues and verifies the backend's bearer tokens
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer from a shared secret and a token TTL
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECS;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            validation,
            ttl,
        }
    }

    /// Issue a signed token bound to `user_id`, expiring after the
    /// configured TTL
    pub fn issue(&self, user_id: Uuid) -> Result<String, ApiError> {
        let now = unix_now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.ttl.as_secs(),
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("token signing failed: {e}")))
    }

    /// Verify a token and return its claims
    ///
    /// # Errors
    ///
    /// * `TokenExpired` - expiry is at or before the current time
    /// * `InvalidToken` - bad signature, wrong algorithm, malformed token,
    ///   or a missing/empty subject claim
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => ApiError::TokenExpired,
                    _ => ApiError::InvalidToken,
                }
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(ApiError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    /// Verify a token and resolve the user id it is bound to
    pub fn verified_subject(&self, token: &str) -> Result<Uuid, ApiError> {
        let claims = self.verify(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| ApiError::InvalidToken)
    }

    /// The configured token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
