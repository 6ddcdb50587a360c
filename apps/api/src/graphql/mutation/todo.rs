//! Todo mutations for GraphQLZero

use async_graphql::{Context, InputObject, Object, Result, ResultExt, ID};

use crate::error::ApiError;
use crate::graphql::debug::DebugLog;
use crate::graphql::types::Todo;
use crate::graphql::validation::{optional_text, require_text};
use crate::models::{NewTodo, TodoChanges};
use crate::repositories::TodoRepository;

/// Input for creating a todo
#[derive(Debug, InputObject)]
pub struct CreateTodoInput {
    pub title: String,
    pub completed: bool,
}

/// Input for updating a todo
#[derive(Debug, InputObject)]
pub struct UpdateTodoInput {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TryFrom<CreateTodoInput> for NewTodo {
    type Error = ApiError;

    fn try_from(input: CreateTodoInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: require_text("title", input.title)?,
            completed: input.completed,
        })
    }
}

impl TryFrom<UpdateTodoInput> for TodoChanges {
    type Error = ApiError;

    fn try_from(input: UpdateTodoInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: optional_text("title", input.title)?,
            completed: input.completed,
        })
    }
}

#[derive(Default)]
pub struct TodoMutation;

#[Object]
impl TodoMutation {
    /// Create a todo
    async fn create_todo(&self, ctx: &Context<'_>, input: CreateTodoInput) -> Result<Option<Todo>> {
        ctx.data::<DebugLog>()?.operation("createTodo", &input);
        let new_todo = NewTodo::try_from(input).extend()?;

        let todo = ctx.data::<TodoRepository>()?.create(&new_todo).await.extend()?;
        Ok(Some(todo.into()))
    }

    /// Update the supplied fields of a todo
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateTodoInput,
    ) -> Result<Option<Todo>> {
        ctx.data::<DebugLog>()?
            .operation("updateTodo", (id.as_str(), &input));
        let changes = TodoChanges::try_from(input).extend()?;

        let todo = ctx
            .data::<TodoRepository>()?
            .update(&id, &changes)
            .await
            .extend()?;
        Ok(Some(todo.into()))
    }

    /// Delete a todo
    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        ctx.data::<DebugLog>()?.operation("deleteTodo", id.as_str());

        let deleted = ctx.data::<TodoRepository>()?.delete(&id).await.extend()?;
        Ok(Some(deleted))
    }
}
