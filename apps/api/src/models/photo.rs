//! Photo model

use graphqlzero_placeholder_client::ids;
use serde::{Deserialize, Serialize};

use super::Resource;

/// A photo belonging to an album
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(deserialize_with = "ids::deserialize")]
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "ids::deserialize_option")]
    pub album_id: Option<String>,
}

/// Body for creating a photo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoto {
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Partial update for a photo
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Resource for Photo {
    const COLLECTION: &'static str = "photos";
    type Create = NewPhoto;
    type Update = PhotoChanges;

    fn id(&self) -> &str {
        &self.id
    }
}
