//! User queries for GraphQLZero

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::graphql::types::{page_options, Page, PageQueryOptionsInput, User};
use crate::repositories::UserRepository;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// List users
    async fn users(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<User>>> {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?.operation("users", &options);

        let page = ctx.data::<UserRepository>()?.list(&options).await.extend()?;
        Ok(Some(page.into()))
    }

    /// Get a user by ID
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        ctx.data::<DebugLog>()?.operation("user", id.as_str());

        let user = ctx.data::<UserRepository>()?.find(&id).await.extend()?;
        Ok(Some(user.into()))
    }
}
