use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use keygate_models::auth::{NewUser, User};
use crate::error::{StoreError, UniqueField};
use super::UserStore;

/// Process-local user store.
///
/// Used by tests and by the service when no `DATABASE_URL` is configured.
/// Every insert runs under one write lock, so the uniqueness check and the
/// insert are atomic.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    by_email: HashMap<String, Uuid>,
    by_biometric_key: HashMap<String, Uuid>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.by_email.get(email).and_then(|id| inner.users.get(id)).cloned())
    }

    async fn find_by_biometric_key(&self, biometric_key: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .by_biometric_key
            .get(biometric_key)
            .and_then(|id| inner.users.get(id))
            .cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write();

        if inner.by_email.contains_key(&new_user.email) {
            return Err(StoreError::UniqueViolation(UniqueField::Email));
        }
        if let Some(key) = &new_user.biometric_key {
            if inner.by_biometric_key.contains_key(key) {
                return Err(StoreError::UniqueViolation(UniqueField::BiometricKey));
            }
        }

        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            biometric_key: new_user.biometric_key,
            created_at: Utc::now(),
        };

        inner.by_email.insert(user.email.clone(), user.id);
        if let Some(key) = &user.biometric_key {
            inner.by_biometric_key.insert(key.clone(), user.id);
        }
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
