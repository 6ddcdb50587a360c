//! Comment queries for GraphQLZero

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::graphql::types::{page_options, Comment, Page, PageQueryOptionsInput};
use crate::repositories::CommentRepository;

#[derive(Default)]
pub struct CommentQuery;

#[Object]
impl CommentQuery {
    /// List comments
    async fn comments(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Comment>>> {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?.operation("comments", &options);

        let page = ctx.data::<CommentRepository>()?.list(&options).await.extend()?;
        Ok(Some(page.into()))
    }

    /// Get a comment by ID
    async fn comment(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Comment>> {
        ctx.data::<DebugLog>()?.operation("comment", id.as_str());

        let comment = ctx.data::<CommentRepository>()?.find(&id).await.extend()?;
        Ok(Some(comment.into()))
    }
}
