use std::sync::Arc;

use keygate_database::UserStore;
use keygate_models::auth::{NewUser, SignedToken};

use super::credentials::CredentialUtils;
use crate::error::{AuthError, EMAIL_TAKEN};

/// Registration and login over a user store and a credential backend.
///
/// Holds no mutable state; one instance is shared across all requests.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    credentials: Arc<dyn CredentialUtils>,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, credentials: Arc<dyn CredentialUtils>) -> Self {
        Self { store, credentials }
    }

    /// Create a user and return a token for it.
    ///
    /// Fails with `AlreadyExists` if the email is taken. The biometric key is
    /// stored as given.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        biometric_key: Option<&str>,
    ) -> Result<SignedToken, AuthError> {
        let password_hash = self.credentials.hash_value(password).await?;

        if self.store.find_by_email(email).await?.is_some() {
            tracing::debug!("Registration rejected: email already registered");
            return Err(AuthError::AlreadyExists(EMAIL_TAKEN.to_string()));
        }

        let user = self
            .store
            .create_user(NewUser {
                email: email.to_string(),
                password_hash,
                biometric_key: biometric_key.map(str::to_string),
            })
            .await
            .map_err(AuthError::from_insert)?;

        tracing::info!(user_id = %user.id, biometric = user.biometric_key.is_some(), "User registered");
        Ok(self.credentials.sign_token(user.id, &user.email)?)
    }

    /// Email/password login. Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<SignedToken, AuthError> {
        let Some(user) = self.store.find_by_email(email).await? else {
            tracing::debug!("Login rejected: unknown email");
            return Err(AuthError::invalid_credentials());
        };

        let matches = match self.credentials.compare_hash(password, &user.password_hash).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Stored password hash could not be compared");
                false
            }
        };

        if !matches {
            tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AuthError::invalid_credentials());
        }

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(self.credentials.sign_token(user.id, &user.email)?)
    }

    pub async fn biometric_login(&self, biometric_key: &str) -> Result<SignedToken, AuthError> {
        let Some(user) = self.store.find_by_biometric_key(biometric_key).await? else {
            tracing::debug!("Biometric login rejected: unknown key");
            return Err(AuthError::invalid_biometric_key());
        };

        tracing::info!(user_id = %user.id, "User logged in with biometric key");
        Ok(self.credentials.sign_token(user.id, &user.email)?)
    }
}
