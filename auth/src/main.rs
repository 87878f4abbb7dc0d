use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use keygate_auth::graphql::{create_schema, ServerInfo};
use keygate_auth::handlers::configure_routes;
use keygate_auth::{AuthService, BcryptJwtCredentials};
use keygate_config::AuthConfig;
use keygate_database::{Database, DatabaseConfig, InMemoryUserStore, UserStore};
use keygate_observability::{init_tracing, TracingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before the logger reads RUST_LOG
    dotenv::dotenv().ok();

    init_tracing(&TracingConfig::for_service("auth-service")).context("Failed to initialize tracing")?;

    let config = AuthConfig::from_env().context("Invalid auth service configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let store: Arc<dyn UserStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("📊 [Auth Service] Connecting to database...");
            let db = Database::new(&DatabaseConfig::new(database_url.clone(), config.db_max_connections)).await?;
            db.migrate().await?;
            tracing::info!(
                "✅ [Auth Service] Database ready (max {} connections)",
                config.db_max_connections
            );
            Arc::new(db.users())
        }
        None => {
            tracing::warn!("[Auth Service] No database configured; using in-memory user store");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let credentials = Arc::new(BcryptJwtCredentials::from_config(&config).context("Invalid token settings")?);
    let auth_service = Arc::new(AuthService::new(store.clone(), credentials));
    let schema = create_schema(auth_service, ServerInfo { port: config.port });
    let playground = config.graphql_playground;

    tracing::info!("🚀 [Auth Service] Starting on port {}", config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(store.clone()))
            .wrap(cors)
            .wrap(TracingLogger::default())
            .configure(|cfg| configure_routes(cfg, playground))
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    Ok(())
}
