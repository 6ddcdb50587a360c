//! Album mutations for GraphQLZero

use async_graphql::{Context, InputObject, Object, Result, ResultExt, ID};

use crate::error::ApiError;
use crate::graphql::debug::DebugLog;
use crate::graphql::types::Album;
use crate::graphql::validation::{optional_text, require_text};
use crate::models::{AlbumChanges, NewAlbum};
use crate::repositories::AlbumRepository;

/// Input for creating an album
#[derive(Debug, InputObject)]
pub struct CreateAlbumInput {
    pub title: String,
    /// Owner of the new album
    pub user_id: ID,
}

/// Input for updating an album
#[derive(Debug, InputObject)]
pub struct UpdateAlbumInput {
    pub title: Option<String>,
    pub user_id: Option<ID>,
}

impl TryFrom<CreateAlbumInput> for NewAlbum {
    type Error = ApiError;

    fn try_from(input: CreateAlbumInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: require_text("title", input.title)?,
            user_id: require_text("userId", input.user_id.0)?,
        })
    }
}

impl TryFrom<UpdateAlbumInput> for AlbumChanges {
    type Error = ApiError;

    fn try_from(input: UpdateAlbumInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: optional_text("title", input.title)?,
            user_id: optional_text("userId", input.user_id.map(|id| id.0))?,
        })
    }
}

#[derive(Default)]
pub struct AlbumMutation;

#[Object]
impl AlbumMutation {
    /// Create an album
    async fn create_album(
        &self,
        ctx: &Context<'_>,
        input: CreateAlbumInput,
    ) -> Result<Option<Album>> {
        ctx.data::<DebugLog>()?.operation("createAlbum", &input);
        let new_album = NewAlbum::try_from(input).extend()?;

        let album = ctx
            .data::<AlbumRepository>()?
            .create(&new_album)
            .await
            .extend()?;
        Ok(Some(album.into()))
    }

    /// Update the supplied fields of an album
    async fn update_album(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateAlbumInput,
    ) -> Result<Option<Album>> {
        ctx.data::<DebugLog>()?
            .operation("updateAlbum", (id.as_str(), &input));
        let changes = AlbumChanges::try_from(input).extend()?;

        let album = ctx
            .data::<AlbumRepository>()?
            .update(&id, &changes)
            .await
            .extend()?;
        Ok(Some(album.into()))
    }

    /// Delete an album
    async fn delete_album(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        ctx.data::<DebugLog>()?.operation("deleteAlbum", id.as_str());

        let deleted = ctx.data::<AlbumRepository>()?.delete(&id).await.extend()?;
        Ok(Some(deleted))
    }
}
