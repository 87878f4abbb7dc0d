//! Repository pattern for user persistence.

pub mod user;
pub mod memory;

pub use user::UserRepository;
pub use memory::InMemoryUserStore;

use async_trait::async_trait;

use keygate_models::auth::{NewUser, User};
use crate::error::StoreError;

/// Exact-match lookup and insertion of user records.
///
/// Implementations must enforce uniqueness of `email` and of a present
/// `biometric_key` on insert and report collisions as
/// [`StoreError::UniqueViolation`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_biometric_key(&self, biometric_key: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user; the store assigns `id` and `created_at`.
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Cheap liveness probe for health checks
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;
}
