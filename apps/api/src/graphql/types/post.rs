//! Post GraphQL type
//!
//! Posts link up to their author and down to their comments.

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::models::{Comment as ModelComment, Post as ModelPost};
use crate::repositories::{PostRepository, UserRepository};

use super::comment::Comment;
use super::page::{page_options, Page, PageQueryOptionsInput};
use super::user::User;

/// A blog post
pub struct Post {
    inner: ModelPost,
}

impl From<ModelPost> for Post {
    fn from(post: ModelPost) -> Self {
        Self { inner: post }
    }
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn title(&self) -> Option<&str> {
        self.inner.title.as_deref()
    }

    async fn body(&self) -> Option<&str> {
        self.inner.body.as_deref()
    }

    // Relationship resolvers

    /// Author of the post
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(user_id) = self.inner.user_id.as_deref() else {
            return Ok(None);
        };
        ctx.data::<DebugLog>()?.operation("Post.user", user_id);

        let user = ctx.data::<UserRepository>()?.find(user_id).await.extend()?;
        Ok(Some(user.into()))
    }

    /// Comments on the post
    async fn comments(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Comment>>> {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?
            .operation("Post.comments", (&self.inner.id, &options));

        let page = ctx
            .data::<PostRepository>()?
            .list_related::<ModelComment>(&self.inner.id, &options)
            .await
            .extend()?;
        Ok(Some(page.into()))
    }
}
