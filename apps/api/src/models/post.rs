//! Post model

use graphqlzero_placeholder_client::ids;
use serde::{Deserialize, Serialize};

use super::Resource;

/// A blog post written by a user
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "ids::deserialize")]
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default, deserialize_with = "ids::deserialize_option")]
    pub user_id: Option<String>,
}

/// Body for creating a post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// Partial update for a post
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Resource for Post {
    const COLLECTION: &'static str = "posts";
    type Create = NewPost;
    type Update = PostChanges;

    fn id(&self) -> &str {
        &self.id
    }
}
