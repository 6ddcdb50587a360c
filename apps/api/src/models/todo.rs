//! Todo model

use graphqlzero_placeholder_client::ids;
use serde::{Deserialize, Serialize};

use super::Resource;

/// A todo item owned by a user
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(deserialize_with = "ids::deserialize")]
    pub id: String,
    pub title: Option<String>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "ids::deserialize_option")]
    pub user_id: Option<String>,
}

/// Body for creating a todo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
}

/// Partial update for a todo
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Resource for Todo {
    const COLLECTION: &'static str = "todos";
    type Create = NewTodo;
    type Update = TodoChanges;

    fn id(&self) -> &str {
        &self.id
    }
}
