use async_graphql::ErrorExtensions;
use thiserror::Error;

use keygate_database::{StoreError, UniqueField};
use crate::services::credentials::CredentialError;
use crate::validation::FieldViolation;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const INVALID_BIOMETRIC_KEY: &str = "Invalid biometricKey";
pub const EMAIL_TAKEN: &str = "User with email already exists";
pub const BIOMETRIC_KEY_TAKEN: &str = "User with biometricKey already exists";

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("Validation failed")]
    ValidationFailed(Vec<FieldViolation>),
    #[error("user store failure: {0}")]
    Store(#[from] StoreError),
    #[error("credential failure: {0}")]
    Credential(#[from] CredentialError),
}

impl AuthError {
    pub fn invalid_credentials() -> Self {
        AuthError::Unauthorized(INVALID_CREDENTIALS.to_string())
    }

    pub fn invalid_biometric_key() -> Self {
        AuthError::Unauthorized(INVALID_BIOMETRIC_KEY.to_string())
    }

    /// Map a failed insert. Uniqueness violations are duplicate registrations
    /// that slipped past the existence check.
    pub fn from_insert(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(UniqueField::Email) => AuthError::AlreadyExists(EMAIL_TAKEN.to_string()),
            StoreError::UniqueViolation(UniqueField::BiometricKey) => {
                AuthError::AlreadyExists(BIOMETRIC_KEY_TAKEN.to_string())
            }
            other => AuthError::Store(other),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::AlreadyExists(_) => "ALREADY_EXISTS",
            AuthError::Unauthorized(_) => "UNAUTHORIZED",
            AuthError::ValidationFailed(_) => "BAD_USER_INPUT",
            AuthError::Store(_) | AuthError::Credential(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Infrastructure failures, as opposed to rejections of the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, AuthError::Store(_) | AuthError::Credential(_))
    }
}

impl ErrorExtensions for AuthError {
    fn extend(&self) -> async_graphql::Error {
        let message = if self.is_internal() {
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        async_graphql::Error::new(message).extend_with(|_, e| {
            e.set("code", self.code());
            if let AuthError::ValidationFailed(fields) = self {
                if let Ok(value) = async_graphql::to_value(fields) {
                    e.set("fields", value);
                }
            }
        })
    }
}

/// Convert at the GraphQL boundary, logging anything the caller won't see.
pub fn into_graphql_error(err: AuthError) -> async_graphql::Error {
    if err.is_internal() {
        tracing::error!(error = %err, "Auth operation failed");
    }
    err.extend()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_violations_become_already_exists() {
        let err = AuthError::from_insert(StoreError::UniqueViolation(UniqueField::Email));
        assert!(matches!(&err, AuthError::AlreadyExists(msg) if msg == EMAIL_TAKEN));

        let err = AuthError::from_insert(StoreError::UniqueViolation(UniqueField::BiometricKey));
        assert!(matches!(&err, AuthError::AlreadyExists(msg) if msg == BIOMETRIC_KEY_TAKEN));

        let err = AuthError::from_insert(StoreError::Database(sqlx_row_not_found()));
        assert!(matches!(err, AuthError::Store(_)));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AuthError::Store(StoreError::Database(sqlx_row_not_found()));
        assert!(err.is_internal());

        let gql = err.extend();
        assert_eq!(gql.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn test_rejections_keep_their_message() {
        let gql = AuthError::invalid_credentials().extend();
        assert_eq!(gql.message, "Invalid credentials");

        let gql = AuthError::invalid_biometric_key().extend();
        assert_eq!(gql.message, "Invalid biometricKey");
    }

    fn sqlx_row_not_found() -> keygate_database::sqlx::Error {
        keygate_database::sqlx::Error::RowNotFound
    }
}
