//! Post mutations for GraphQLZero

use async_graphql::{Context, InputObject, Object, Result, ResultExt, ID};

use crate::error::ApiError;
use crate::graphql::debug::DebugLog;
use crate::graphql::types::Post;
use crate::graphql::validation::{optional_text, require_text};
use crate::models::{NewPost, PostChanges};
use crate::repositories::PostRepository;

/// Input for creating a post
#[derive(Debug, InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
}

/// Input for updating a post
#[derive(Debug, InputObject)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl TryFrom<CreatePostInput> for NewPost {
    type Error = ApiError;

    fn try_from(input: CreatePostInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: require_text("title", input.title)?,
            body: require_text("body", input.body)?,
        })
    }
}

impl TryFrom<UpdatePostInput> for PostChanges {
    type Error = ApiError;

    fn try_from(input: UpdatePostInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: optional_text("title", input.title)?,
            body: optional_text("body", input.body)?,
        })
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Create a post
    async fn create_post(&self, ctx: &Context<'_>, input: CreatePostInput) -> Result<Option<Post>> {
        ctx.data::<DebugLog>()?.operation("createPost", &input);
        let new_post = NewPost::try_from(input).extend()?;

        let post = ctx.data::<PostRepository>()?.create(&new_post).await.extend()?;
        Ok(Some(post.into()))
    }

    /// Update the supplied fields of a post
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdatePostInput,
    ) -> Result<Option<Post>> {
        ctx.data::<DebugLog>()?
            .operation("updatePost", (id.as_str(), &input));
        let changes = PostChanges::try_from(input).extend()?;

        let post = ctx
            .data::<PostRepository>()?
            .update(&id, &changes)
            .await
            .extend()?;
        Ok(Some(post.into()))
    }

    /// Delete a post
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        ctx.data::<DebugLog>()?.operation("deletePost", id.as_str());

        let deleted = ctx.data::<PostRepository>()?.delete(&id).await.extend()?;
        Ok(Some(deleted))
    }
}
