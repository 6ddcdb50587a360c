//! Photo GraphQL type

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::models::Photo as ModelPhoto;
use crate::repositories::AlbumRepository;

use super::album::Album;

/// A photo in an album
pub struct Photo {
    inner: ModelPhoto,
}

impl From<ModelPhoto> for Photo {
    fn from(photo: ModelPhoto) -> Self {
        Self { inner: photo }
    }
}

#[Object]
impl Photo {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn title(&self) -> Option<&str> {
        self.inner.title.as_deref()
    }

    /// Full-size image URL
    async fn url(&self) -> Option<&str> {
        self.inner.url.as_deref()
    }

    async fn thumbnail_url(&self) -> Option<&str> {
        self.inner.thumbnail_url.as_deref()
    }

    /// Album containing the photo
    async fn album(&self, ctx: &Context<'_>) -> Result<Option<Album>> {
        let Some(album_id) = self.inner.album_id.as_deref() else {
            return Ok(None);
        };
        ctx.data::<DebugLog>()?.operation("Photo.album", album_id);

        let album = ctx.data::<AlbumRepository>()?.find(album_id).await.extend()?;
        Ok(Some(album.into()))
    }
}
