use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::json;

use keygate_database::UserStore;

pub async fn health_check(store: web::Data<Arc<dyn UserStore>>) -> HttpResponse {
    let store_status = match store.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::error!("[Auth Service] User store health check failed: {}", e);
            "disconnected"
        }
    };

    let body = json!({
        "status": if store_status == "connected" { "healthy" } else { "degraded" },
        "service": "auth-service",
        "store": store.backend(),
        "storeStatus": store_status,
        "timestamp": chrono::Utc::now()
    });

    if store_status == "connected" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
