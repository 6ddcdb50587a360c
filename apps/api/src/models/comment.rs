//! Comment model

use graphqlzero_placeholder_client::ids;
use serde::{Deserialize, Serialize};

use super::Resource;

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "ids::deserialize")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
    #[serde(default, deserialize_with = "ids::deserialize_option")]
    pub post_id: Option<String>,
}

/// Body for creating a comment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Partial update for a comment; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Resource for Comment {
    const COLLECTION: &'static str = "comments";
    type Create = NewComment;
    type Update = CommentChanges;

    fn id(&self) -> &str {
        &self.id
    }
}
