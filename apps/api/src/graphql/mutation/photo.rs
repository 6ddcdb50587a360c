//! Photo mutations for GraphQLZero

use async_graphql::{Context, InputObject, Object, Result, ResultExt, ID};

use crate::error::ApiError;
use crate::graphql::debug::DebugLog;
use crate::graphql::types::Photo;
use crate::graphql::validation::{optional_text, require_text};
use crate::models::{NewPhoto, PhotoChanges};
use crate::repositories::PhotoRepository;

/// Input for creating a photo
#[derive(Debug, InputObject)]
pub struct CreatePhotoInput {
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Input for updating a photo
#[derive(Debug, InputObject)]
pub struct UpdatePhotoInput {
    pub title: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl TryFrom<CreatePhotoInput> for NewPhoto {
    type Error = ApiError;

    fn try_from(input: CreatePhotoInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: require_text("title", input.title)?,
            url: require_text("url", input.url)?,
            thumbnail_url: require_text("thumbnailUrl", input.thumbnail_url)?,
        })
    }
}

impl TryFrom<UpdatePhotoInput> for PhotoChanges {
    type Error = ApiError;

    fn try_from(input: UpdatePhotoInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: optional_text("title", input.title)?,
            url: optional_text("url", input.url)?,
            thumbnail_url: optional_text("thumbnailUrl", input.thumbnail_url)?,
        })
    }
}

#[derive(Default)]
pub struct PhotoMutation;

#[Object]
impl PhotoMutation {
    /// Create a photo
    async fn create_photo(
        &self,
        ctx: &Context<'_>,
        input: CreatePhotoInput,
    ) -> Result<Option<Photo>> {
        ctx.data::<DebugLog>()?.operation("createPhoto", &input);
        let new_photo = NewPhoto::try_from(input).extend()?;

        let photo = ctx
            .data::<PhotoRepository>()?
            .create(&new_photo)
            .await
            .extend()?;
        Ok(Some(photo.into()))
    }

    /// Update the supplied fields of a photo
    async fn update_photo(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdatePhotoInput,
    ) -> Result<Option<Photo>> {
        ctx.data::<DebugLog>()?
            .operation("updatePhoto", (id.as_str(), &input));
        let changes = PhotoChanges::try_from(input).extend()?;

        let photo = ctx
            .data::<PhotoRepository>()?
            .update(&id, &changes)
            .await
            .extend()?;
        Ok(Some(photo.into()))
    }

    /// Delete a photo
    async fn delete_photo(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        ctx.data::<DebugLog>()?.operation("deletePhoto", id.as_str());

        let deleted = ctx.data::<PhotoRepository>()?.delete(&id).await.extend()?;
        Ok(Some(deleted))
    }
}
