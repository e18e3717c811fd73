use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::AppError;

// JWT Claims: whatever the client signed in with, plus issue/expiry times
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Signs and verifies HS256 identity tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Signs an arbitrary claim object. No validation is done on the payload;
    /// `iat` and `exp` are always set by the service.
    pub fn issue(&self, mut payload: Map<String, Value>) -> Result<String, AppError> {
        let now = Utc::now();
        payload.insert("iat".into(), Value::from(now.timestamp()));
        payload.insert("exp".into(), Value::from((now + self.ttl).timestamp()));

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| AppError::Token(format!("Failed to generate token: {}", e)))
    }

    /// Checks signature and expiry. Every failure is reported as
    /// `Unauthorized`, without saying which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        // `aud` is caller data here
        validation.validate_aud = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("Token rejected: {}", e);
                AppError::Unauthorized
            })
    }
}
