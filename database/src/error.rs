use std::fmt;

use thiserror::Error;

pub const EMAIL_CONSTRAINT: &str = "users_email_key";
pub const BIOMETRIC_KEY_CONSTRAINT: &str = "users_biometric_key_key";

/// The unique column a rejected insert collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    BiometricKey,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Email => write!(f, "email"),
            UniqueField::BiometricKey => write!(f, "biometricKey"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a user with this {0} already exists")]
    UniqueViolation(UniqueField),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                match db_err.constraint() {
                    Some(EMAIL_CONSTRAINT) => return StoreError::UniqueViolation(UniqueField::Email),
                    Some(BIOMETRIC_KEY_CONSTRAINT) => return StoreError::UniqueViolation(UniqueField::BiometricKey),
                    _ => {}
                }
            }
        }
        StoreError::Database(err)
    }
}
