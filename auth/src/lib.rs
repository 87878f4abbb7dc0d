//! Authentication service library.
//!
//! Email/password registration and login, biometric-key login, and the
//! GraphQL boundary that exposes them. The binary in main.rs wires these
//! pieces to a user store and an HTTP server.

pub mod error;
pub mod graphql;
pub mod handlers;
pub mod services;
pub mod validation;

pub use error::AuthError;
pub use services::{AuthService, BcryptJwtCredentials, CredentialError, CredentialUtils};
