/// Bearer token verification
///
/// Tokens are HS256 JWTs signed with a secret shared with the identity
/// provider; the `sub` claim is the caller's user id.
use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use linkshelf_core::UserId;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiration: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

impl AuthService {
    pub fn new(secret: &str, access_expiration_hours: u64) -> Result<Self> {
        let access_token_expiration = i64::try_from(access_expiration_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                ServerError::Config(format!(
                    "token expiration of {} hours is out of range",
                    access_expiration_hours
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiration,
        })
    }

    /// Mint an access token for `user_id`
    pub fn create_access_token(&self, user_id: &UserId) -> Result<String> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.access_token_expiration)
            .ok_or_else(|| ServerError::Internal("token expiry overflows".to_string()))?;

        let claims = Claims {
            sub: user_id.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(ServerError::from)
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Resolve the caller's identity from an access token
    pub fn verify_access_token(&self, token: &str) -> Result<UserId> {
        let claims = self.verify_token(token)?;
        if claims.sub.trim().is_empty() {
            return Err(ServerError::Auth("Token has no subject".to_string()));
        }
        Ok(UserId::new(claims.sub))
    }
}
