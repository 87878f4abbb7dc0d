mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use keygate_auth::handlers::configure_routes;
use keygate_database::{sqlx, StoreError, UserStore};
use keygate_models::auth::{NewUser, User};

use common::{TestContext, BIOMETRIC_LOGIN, LOGIN, REGISTER};

macro_rules! init_app {
    ($ctx:expr, $playground:expr) => {{
        let store: Arc<dyn UserStore> = $ctx.store.clone();
        test::init_service(
            App::new()
                .app_data(web::Data::new($ctx.schema()))
                .app_data(web::Data::new(store))
                .configure(|cfg| configure_routes(cfg, $playground)),
        )
        .await
    }};
}

/// Store that behaves like an unreachable database.
struct DownStore;

#[async_trait]
impl UserStore for DownStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_biometric_key(&self, _biometric_key: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn create_user(&self, _new_user: NewUser) -> Result<User, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

fn graphql_request(query: &str, variables: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/graphql")
        .set_json(json!({ "query": query, "variables": variables }))
}

#[actix_web::test]
async fn test_full_flow_over_http() {
    let ctx = TestContext::new();
    let app = init_app!(ctx, true);
    let email = common::generate_test_email();

    let req = graphql_request(
        REGISTER,
        json!({ "data": { "email": email, "password": "password123", "biometricKey": "bk-http" } }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["register"]["message"], "Registration successful");

    let req = graphql_request(LOGIN, json!({ "data": { "email": email, "password": "password123" } })).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["data"]["login"]["accessToken"].as_str().unwrap();

    let user = ctx.store.find_by_email(&email).await.unwrap().unwrap();
    let claims = ctx.credentials.decode_token(token).unwrap();
    assert_eq!(claims.sub, user.id.to_string());

    let req = graphql_request(BIOMETRIC_LOGIN, json!({ "data": { "biometricKey": "bk-http" } })).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["biometricLogin"]["message"], "Login successful");
}

#[actix_web::test]
async fn test_rejected_login_over_http() {
    let ctx = TestContext::new();
    let app = init_app!(ctx, true);

    let req = graphql_request(LOGIN, json!({ "data": { "email": "nobody@test.com", "password": "password123" } }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["data"].is_null());
    assert_eq!(body["errors"][0]["message"], "Invalid credentials");
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let app = init_app!(ctx, true);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "auth-service");
    assert_eq!(body["store"], "memory");
}

#[actix_web::test]
async fn test_health_check_reports_unreachable_store() {
    let ctx = TestContext::new();
    let store: Arc<dyn UserStore> = Arc::new(DownStore);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.schema()))
            .app_data(web::Data::new(store))
            .configure(|cfg| configure_routes(cfg, false)),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["storeStatus"], "disconnected");
    assert_eq!(body["store"], "postgres");
}

#[actix_web::test]
async fn test_playground_toggle() {
    let ctx = TestContext::new();

    let app = init_app!(ctx, true);
    let req = test::TestRequest::get().uri("/graphql").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let app = init_app!(ctx, false);
    let req = test::TestRequest::get().uri("/graphql").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
