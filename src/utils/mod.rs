use bcrypt::{hash, verify};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), cost)
}

/// Compares a plaintext password with a stored bcrypt hash.
///
/// A malformed or foreign hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match verify(password.as_bytes(), hash) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::debug!("Password hash comparison failed: {}", e);
            false
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub employee_id: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs a session token for a verified employee. Returns the token and its
/// expiry as a unix timestamp.
///
/// A lifetime too large to represent as a timestamp is an error.
pub fn generate_token(employee_id: &str, email: &str, config: &Config) -> AppResult<(String, i64)> {
    let issued_at = Utc::now();
    let expiration = i64::try_from(config.jwt_expiration().as_secs())
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .ok_or_else(|| AppError::Internal("Token lifetime out of range".into()))?;

    let claims = Claims {
        employee_id: employee_id.to_string(),
        email: email.to_string(),
        iat: issued_at.timestamp(),
        exp: expiration.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;

    Ok((token, claims.exp))
}

// Not wired to any route yet; requests are not authenticated.
pub fn verify_token(token: &str, config: &Config) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
