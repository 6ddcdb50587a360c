//! Album GraphQL type
//!
//! This module defines the GraphQL type for albums with relationship resolvers.

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::models::{Album as ModelAlbum, Photo as ModelPhoto};
use crate::repositories::{AlbumRepository, UserRepository};

use super::page::{page_options, Page, PageQueryOptionsInput};
use super::photo::Photo;
use super::user::User;

/// Photo album exposed via GraphQL
pub struct Album {
    inner: ModelAlbum,
}

impl From<ModelAlbum> for Album {
    fn from(album: ModelAlbum) -> Self {
        Self { inner: album }
    }
}

#[Object]
impl Album {
    /// Unique album identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Album title
    async fn title(&self) -> Option<&str> {
        self.inner.title.as_deref()
    }

    // Relationship resolvers

    /// Owner of the album
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(user_id) = self.inner.user_id.as_deref() else {
            return Ok(None);
        };
        ctx.data::<DebugLog>()?.operation("Album.user", user_id);

        let user = ctx.data::<UserRepository>()?.find(user_id).await.extend()?;
        Ok(Some(user.into()))
    }

    /// Photos in the album
    async fn photos(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Photo>>> {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?
            .operation("Album.photos", (&self.inner.id, &options));

        let page = ctx
            .data::<AlbumRepository>()?
            .list_related::<ModelPhoto>(&self.inner.id, &options)
            .await
            .extend()?;
        Ok(Some(page.into()))
    }
}
