use async_trait::async_trait;
use sqlx::{query, query_as, PgPool};

use keygate_models::auth::{NewUser, User};
use crate::error::StoreError;
use super::UserStore;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = query_as::<_, User>(
            r#"SELECT id, email, password_hash, biometric_key, created_at
               FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_biometric_key(&self, biometric_key: &str) -> Result<Option<User>, StoreError> {
        let user = query_as::<_, User>(
            r#"SELECT id, email, password_hash, biometric_key, created_at
               FROM users WHERE biometric_key = $1"#,
        )
        .bind(biometric_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, biometric_key)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, biometric_key, created_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.biometric_key.as_deref())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(user_id = %user.id, "Inserted user row");
        Ok(user)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
