//! GraphQL queries for GraphQLZero
//!
//! One query object per resource, merged into the root `Query`.

mod album;
mod comment;
mod photo;
mod post;
mod todo;
mod user;

pub use album::AlbumQuery;
pub use comment::CommentQuery;
pub use photo::PhotoQuery;
pub use post::PostQuery;
pub use todo::TodoQuery;
pub use user::UserQuery;

use async_graphql::MergedObject;

/// Root query type combining all resource queries
#[derive(MergedObject, Default)]
pub struct Query(
    CommentQuery,
    PhotoQuery,
    PostQuery,
    TodoQuery,
    UserQuery,
    AlbumQuery,
);
