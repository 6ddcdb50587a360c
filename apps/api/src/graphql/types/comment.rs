//! Comment GraphQL type

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::models::Comment as ModelComment;
use crate::repositories::PostRepository;

use super::post::Post;

/// A comment on a post
pub struct Comment {
    inner: ModelComment,
}

impl From<ModelComment> for Comment {
    fn from(comment: ModelComment) -> Self {
        Self { inner: comment }
    }
}

#[Object]
impl Comment {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    async fn email(&self) -> Option<&str> {
        self.inner.email.as_deref()
    }

    async fn body(&self) -> Option<&str> {
        self.inner.body.as_deref()
    }

    /// Post this comment was left on
    async fn post(&self, ctx: &Context<'_>) -> Result<Option<Post>> {
        let Some(post_id) = self.inner.post_id.as_deref() else {
            return Ok(None);
        };
        ctx.data::<DebugLog>()?.operation("Comment.post", post_id);

        let post = ctx.data::<PostRepository>()?.find(post_id).await.extend()?;
        Ok(Some(post.into()))
    }
}
