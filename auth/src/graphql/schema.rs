use async_graphql::*;
use std::sync::Arc;

use super::queries::QueryRoot;
use super::mutations::MutationRoot;
use crate::services::AuthService;

pub type AuthSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Facts about the running process exposed through the schema.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub port: u16,
}

/// Create the GraphQL schema
pub fn create_schema(auth_service: Arc<AuthService>, info: ServerInfo) -> AuthSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(auth_service)
        .data(info)
        .limit_depth(10)
        .limit_complexity(100)
        .finish()
}
