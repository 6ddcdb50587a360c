//! Album queries for GraphQLZero

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::graphql::types::{page_options, Album, Page, PageQueryOptionsInput};
use crate::repositories::AlbumRepository;

#[derive(Default)]
pub struct AlbumQuery;

#[Object]
impl AlbumQuery {
    /// List albums
    async fn albums(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Album>>> {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?.operation("albums", &options);

        let page = ctx.data::<AlbumRepository>()?.list(&options).await.extend()?;
        Ok(Some(page.into()))
    }

    /// Get a album by ID
    async fn album(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Album>> {
        ctx.data::<DebugLog>()?.operation("album", id.as_str());

        let album = ctx.data::<AlbumRepository>()?.find(&id).await.extend()?;
        Ok(Some(album.into()))
    }
}
