#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use keygate_auth::graphql::{create_schema, AuthSchema, ServerInfo};
use keygate_auth::{AuthService, BcryptJwtCredentials};
use keygate_database::InMemoryUserStore;

pub const TEST_SECRET: &str = "keygate_test_secret_do_not_use";
pub const TEST_PORT: u16 = 3000;

// Lowest cost bcrypt accepts; keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub struct TestContext {
    pub store: Arc<InMemoryUserStore>,
    pub credentials: Arc<BcryptJwtCredentials>,
    pub service: Arc<AuthService>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryUserStore::new());
        let credentials = Arc::new(BcryptJwtCredentials::new(TEST_SECRET, 24, TEST_BCRYPT_COST).unwrap());
        let service = Arc::new(AuthService::new(store.clone(), credentials.clone()));
        Self { store, credentials, service }
    }

    pub fn schema(&self) -> AuthSchema {
        create_schema(self.service.clone(), ServerInfo { port: TEST_PORT })
    }
}

/// Helper to generate unique test emails
pub fn generate_test_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

pub const REGISTER: &str = r#"
    mutation Register($data: RegisterInput!) {
        register(data: $data) { message accessToken }
    }
"#;

pub const LOGIN: &str = r#"
    mutation Login($data: LoginInput!) {
        login(data: $data) { message accessToken }
    }
"#;

pub const BIOMETRIC_LOGIN: &str = r#"
    mutation BiometricLogin($data: BiometricLoginInput!) {
        biometricLogin(data: $data) { message accessToken }
    }
"#;

/// Run an operation against the schema and return the response as JSON.
pub async fn execute(schema: &AuthSchema, query: &str, variables: Value) -> Value {
    let request = async_graphql::Request::new(query)
        .variables(async_graphql::Variables::from_json(variables));
    serde_json::to_value(schema.execute(request).await).expect("response serializes")
}

pub fn first_error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"]
        .as_str()
        .expect("response has an error code")
}

pub fn first_error_message(response: &Value) -> &str {
    response["errors"][0]["message"]
        .as_str()
        .expect("response has an error message")
}
