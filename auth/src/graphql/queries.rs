use async_graphql::*;

use super::schema::ServerInfo;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Liveness check
    async fn app_running(&self, ctx: &Context<'_>) -> Result<String> {
        let info = ctx.data::<ServerInfo>()?;
        Ok(format!("Hey champ, your app is running on port {} 🚀🚀🚀🚀🚀", info.port))
    }
}
