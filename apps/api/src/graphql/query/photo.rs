//! Photo queries for GraphQLZero

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::graphql::types::{page_options, Page, PageQueryOptionsInput, Photo};
use crate::repositories::PhotoRepository;

#[derive(Default)]
pub struct PhotoQuery;

#[Object]
impl PhotoQuery {
    /// List photos
    async fn photos(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Photo>>> {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?.operation("photos", &options);

        let page = ctx.data::<PhotoRepository>()?.list(&options).await.extend()?;
        Ok(Some(page.into()))
    }

    /// Get a photo by ID
    async fn photo(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Photo>> {
        ctx.data::<DebugLog>()?.operation("photo", id.as_str());

        let photo = ctx.data::<PhotoRepository>()?.find(&id).await.extend()?;
        Ok(Some(photo.into()))
    }
}
