//! GraphQL mutations for GraphQLZero
//!
//! Create, update and delete for every resource, merged into the root
//! `Mutation`.

mod album;
mod comment;
mod photo;
mod post;
mod todo;
mod user;

pub use album::{AlbumMutation, CreateAlbumInput, UpdateAlbumInput};
pub use comment::{CommentMutation, CreateCommentInput, UpdateCommentInput};
pub use photo::{CreatePhotoInput, PhotoMutation, UpdatePhotoInput};
pub use post::{CreatePostInput, PostMutation, UpdatePostInput};
pub use todo::{CreateTodoInput, TodoMutation, UpdateTodoInput};
pub use user::{
    AddressInput, CompanyInput, CreateUserInput, GeoInput, UpdateUserInput, UserMutation,
};

use async_graphql::MergedObject;

/// Root mutation type combining all resource mutations
#[derive(MergedObject, Default)]
pub struct Mutation(
    CommentMutation,
    PhotoMutation,
    PostMutation,
    TodoMutation,
    UserMutation,
    AlbumMutation,
);
