//! JWT issue and validation. Tokens carry the login email as subject.

use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Default token lifetime: one hour.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // email used at login
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
    ttl: Duration,
}

impl JwtSecret {
    pub fn new(secret: String) -> Self {
        Self::with_ttl(secret, DEFAULT_TOKEN_TTL_SECS)
    }

    pub fn with_ttl(secret: String, ttl_secs: i64) -> Self {
        Self {
            secret,
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn issue(&self, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("jwt encode: {}", e)))?;
        Ok(token)
    }

    /// Returns the embedded claims iff the signature matches and the token
    /// has not expired. Expiry is checked with zero leeway.
    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AppError::Auth("Invalid or expired token".to_string()))?;
        Ok(data.claims)
    }
}
