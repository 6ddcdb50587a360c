//! Todo GraphQL type

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::models::Todo as ModelTodo;
use crate::repositories::UserRepository;

use super::user::User;

/// A todo item
pub struct Todo {
    inner: ModelTodo,
}

impl From<ModelTodo> for Todo {
    fn from(todo: ModelTodo) -> Self {
        Self { inner: todo }
    }
}

#[Object]
impl Todo {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn title(&self) -> Option<&str> {
        self.inner.title.as_deref()
    }

    async fn completed(&self) -> Option<bool> {
        self.inner.completed
    }

    /// Owner of the todo
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(user_id) = self.inner.user_id.as_deref() else {
            return Ok(None);
        };
        ctx.data::<DebugLog>()?.operation("Todo.user", user_id);

        let user = ctx.data::<UserRepository>()?.find(user_id).await.extend()?;
        Ok(Some(user.into()))
    }
}
