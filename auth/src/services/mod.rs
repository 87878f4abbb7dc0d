pub mod auth_service;
pub mod credentials;

pub use auth_service::AuthService;
pub use credentials::{BcryptJwtCredentials, CredentialError, CredentialUtils};
