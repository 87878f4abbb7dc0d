use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use uuid::Uuid;

use keygate_config::AuthConfig;
use keygate_models::auth::{Claims, SignedToken};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("token lifetime of {0} hours is out of range")]
    Expiry(i64),
}

/// Password hashing and bearer-token signing.
#[async_trait]
pub trait CredentialUtils: Send + Sync {
    /// One-way, salted hash of `value`.
    async fn hash_value(&self, value: &str) -> Result<String, CredentialError>;

    /// True iff `hash` was produced from `value`.
    async fn compare_hash(&self, value: &str, hash: &str) -> Result<bool, CredentialError>;

    /// Sign a token asserting `sub = user_id` and `email`.
    fn sign_token(&self, user_id: Uuid, email: &str) -> Result<SignedToken, CredentialError>;
}

/// bcrypt for passwords, HS256 JWTs for tokens.
pub struct BcryptJwtCredentials {
    cost: u32,
    expires_in: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl BcryptJwtCredentials {
    pub fn new(secret: &str, expires_in_hours: i64, cost: u32) -> Result<Self, CredentialError> {
        let expires_in = Duration::try_hours(expires_in_hours)
            .filter(|d| *d > Duration::zero())
            .ok_or(CredentialError::Expiry(expires_in_hours))?;

        Ok(Self {
            cost,
            expires_in,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    pub fn from_config(config: &AuthConfig) -> Result<Self, CredentialError> {
        Self::new(&config.jwt_secret, config.jwt_expires_in_hours, config.bcrypt_cost)
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn decode_token(&self, token: &str) -> Result<Claims, CredentialError> {
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}

#[async_trait]
impl CredentialUtils for BcryptJwtCredentials {
    async fn hash_value(&self, value: &str) -> Result<String, CredentialError> {
        let value = value.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(value, cost)).await??;
        Ok(hashed)
    }

    async fn compare_hash(&self, value: &str, hash: &str) -> Result<bool, CredentialError> {
        let value = value.to_owned();
        let hash = hash.to_owned();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(value, &hash)).await??;
        Ok(matches)
    }

    fn sign_token(&self, user_id: Uuid, email: &str) -> Result<SignedToken, CredentialError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.expires_in)
            .ok_or(CredentialError::Expiry(self.expires_in.num_hours()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(SignedToken { access_token })
    }
}
