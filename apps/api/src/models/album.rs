//! Album model

use graphqlzero_placeholder_client::ids;
use serde::{Deserialize, Serialize};

use super::Resource;

/// A photo album owned by a user
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(deserialize_with = "ids::deserialize")]
    pub id: String,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "ids::deserialize_option")]
    pub user_id: Option<String>,
}

/// Body for creating an album
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlbum {
    pub title: String,
    pub user_id: String,
}

/// Partial update for an album
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Resource for Album {
    const COLLECTION: &'static str = "albums";
    type Create = NewAlbum;
    type Update = AlbumChanges;

    fn id(&self) -> &str {
        &self.id
    }
}
