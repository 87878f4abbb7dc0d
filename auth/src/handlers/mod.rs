pub mod graphql;
pub mod health;

use actix_web::web;

/// Mount the service routes. The playground is only served when enabled.
pub fn configure_routes(cfg: &mut web::ServiceConfig, playground: bool) {
    let mut graphql_resource = web::resource("/graphql").route(web::post().to(graphql::graphql_handler));
    if playground {
        graphql_resource = graphql_resource.route(web::get().to(graphql::graphql_playground));
    }

    cfg.route("/health", web::get().to(health::health_check))
        .service(graphql_resource);
}
