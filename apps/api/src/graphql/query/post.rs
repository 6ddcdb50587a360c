//! Post queries for GraphQLZero

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::graphql::types::{page_options, Page, PageQueryOptionsInput, Post};
use crate::repositories::PostRepository;

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// List posts
    async fn posts(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Post>>> {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?.operation("posts", &options);

        let page = ctx.data::<PostRepository>()?.list(&options).await.extend()?;
        Ok(Some(page.into()))
    }

    /// Get a post by ID
    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Post>> {
        ctx.data::<DebugLog>()?.operation("post", id.as_str());

        let post = ctx.data::<PostRepository>()?.find(&id).await.extend()?;
        Ok(Some(post.into()))
    }
}
