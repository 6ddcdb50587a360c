//! Comment mutations for GraphQLZero

use async_graphql::{Context, InputObject, Object, Result, ResultExt, ID};

use crate::error::ApiError;
use crate::graphql::debug::DebugLog;
use crate::graphql::types::Comment;
use crate::graphql::validation::{optional_text, require_text};
use crate::models::{CommentChanges, NewComment};
use crate::repositories::CommentRepository;

// =============================================================================
// Input Types
// =============================================================================

/// Input for creating a comment
#[derive(Debug, InputObject)]
pub struct CreateCommentInput {
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Input for updating a comment; omitted fields are left unchanged
#[derive(Debug, InputObject)]
pub struct UpdateCommentInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
}

impl TryFrom<CreateCommentInput> for NewComment {
    type Error = ApiError;

    fn try_from(input: CreateCommentInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("name", input.name)?,
            email: require_text("email", input.email)?,
            body: require_text("body", input.body)?,
        })
    }
}

impl TryFrom<UpdateCommentInput> for CommentChanges {
    type Error = ApiError;

    fn try_from(input: UpdateCommentInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: optional_text("name", input.name)?,
            email: optional_text("email", input.email)?,
            body: optional_text("body", input.body)?,
        })
    }
}

// =============================================================================
// Mutations
// =============================================================================

#[derive(Default)]
pub struct CommentMutation;

#[Object]
impl CommentMutation {
    /// Create a comment
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        input: CreateCommentInput,
    ) -> Result<Option<Comment>> {
        ctx.data::<DebugLog>()?.operation("createComment", &input);
        let new_comment = NewComment::try_from(input).extend()?;

        let comment = ctx
            .data::<CommentRepository>()?
            .create(&new_comment)
            .await
            .extend()?;
        Ok(Some(comment.into()))
    }

    /// Update the supplied fields of a comment
    async fn update_comment(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateCommentInput,
    ) -> Result<Option<Comment>> {
        ctx.data::<DebugLog>()?
            .operation("updateComment", (id.as_str(), &input));
        let changes = CommentChanges::try_from(input).extend()?;

        let comment = ctx
            .data::<CommentRepository>()?
            .update(&id, &changes)
            .await
            .extend()?;
        Ok(Some(comment.into()))
    }

    /// Delete a comment; true once the upstream accepted the deletion
    async fn delete_comment(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        ctx.data::<DebugLog>()?.operation("deleteComment", id.as_str());

        let deleted = ctx.data::<CommentRepository>()?.delete(&id).await.extend()?;
        Ok(Some(deleted))
    }
}
