//! Upstream resource models for GraphQLZero
//!
//! Each model mirrors one JSONPlaceholder collection. Records decode from
//! upstream JSON; the `New*` and `*Changes` bodies encode create and partial
//! update requests.

pub mod album;
pub mod comment;
pub mod photo;
pub mod post;
pub mod todo;
pub mod user;

pub use album::{Album, AlbumChanges, NewAlbum};
pub use comment::{Comment, CommentChanges, NewComment};
pub use photo::{NewPhoto, Photo, PhotoChanges};
pub use post::{NewPost, Post, PostChanges};
pub use todo::{NewTodo, Todo, TodoChanges};
pub use user::{Address, Company, Geo, NewUser, User, UserChanges};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A REST-addressable resource kind
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Collection path segment on the upstream API, e.g. `comments`
    const COLLECTION: &'static str;

    /// Body sent to create a record
    type Create: Serialize + Send + Sync;

    /// Body sent to partially update a record
    type Update: Serialize + Send + Sync;

    /// Identifier of this record
    fn id(&self) -> &str;
}
