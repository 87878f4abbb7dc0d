use actix_web::{web, HttpResponse, Result};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::AuthSchema;

/// GraphQL query/mutation handler
pub async fn graphql_handler(schema: web::Data<AuthSchema>, gql_request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(gql_request.into_inner()).await.into()
}

/// GraphQL Playground handler (development only)
pub async fn graphql_playground() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql"))))
}
