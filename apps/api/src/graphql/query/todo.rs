//! Todo queries for GraphQLZero

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::debug::DebugLog;
use crate::graphql::types::{page_options, Page, PageQueryOptionsInput, Todo};
use crate::repositories::TodoRepository;

#[derive(Default)]
pub struct TodoQuery;

#[Object]
impl TodoQuery {
    /// List todos
    async fn todos(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Todo>>> {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?.operation("todos", &options);

        let page = ctx.data::<TodoRepository>()?.list(&options).await.extend()?;
        Ok(Some(page.into()))
    }

    /// Get a todo by ID
    async fn todo(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Todo>> {
        ctx.data::<DebugLog>()?.operation("todo", id.as_str());

        let todo = ctx.data::<TodoRepository>()?.find(&id).await.extend()?;
        Ok(Some(todo.into()))
    }
}
