use async_graphql::*;
use std::sync::Arc;

use keygate_models::graphql::{AuthResponse, BiometricLoginInput, LoginInput, RegisterInput};

use crate::error::into_graphql_error;
use crate::services::AuthService;
use crate::validation::validate_input;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register with email and password, optionally binding a biometric key
    async fn register(&self, ctx: &Context<'_>, data: RegisterInput) -> Result<AuthResponse> {
        validate_input(&data).map_err(into_graphql_error)?;
        let auth = ctx.data::<Arc<AuthService>>()?;

        let token = auth
            .register(&data.email, &data.password, data.biometric_key.as_deref())
            .await
            .map_err(into_graphql_error)?;

        Ok(AuthResponse::registered(token))
    }

    /// Log in with email and password
    async fn login(&self, ctx: &Context<'_>, data: LoginInput) -> Result<AuthResponse> {
        validate_input(&data).map_err(into_graphql_error)?;
        let auth = ctx.data::<Arc<AuthService>>()?;

        let token = auth
            .login(&data.email, &data.password)
            .await
            .map_err(into_graphql_error)?;

        Ok(AuthResponse::logged_in(token))
    }

    /// Log in with a previously registered biometric key
    async fn biometric_login(&self, ctx: &Context<'_>, data: BiometricLoginInput) -> Result<AuthResponse> {
        validate_input(&data).map_err(into_graphql_error)?;
        let auth = ctx.data::<Arc<AuthService>>()?;

        let token = auth
            .biometric_login(&data.biometric_key)
            .await
            .map_err(into_graphql_error)?;

        Ok(AuthResponse::logged_in(token))
    }
}
