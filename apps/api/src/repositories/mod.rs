//! Resource repository layer
//!
//! One generic repository per resource kind wraps the shared
//! [`ResourceClient`] and owns path construction, so resolvers never build
//! URLs themselves.
//!
//! # Example
//!
//! ```ignore
//! use graphqlzero_api::repositories::PostRepository;
//!
//! let posts = PostRepository::new(client.clone());
//! let post = posts.find("1").await?;
//! let comments = posts.list_related::<Comment>("1", &options).await?;
//! ```

use std::marker::PhantomData;

use graphqlzero_placeholder_client::{Page, PageQueryOptions, ResourceClient};
use tracing::debug;

use crate::error::ApiResult;
use crate::models::{Album, Comment, Photo, Post, Resource, Todo, User};

/// CRUD access to one upstream collection
pub struct ResourceRepository<R> {
    client: ResourceClient,
    _resource: PhantomData<fn() -> R>,
}

// Manual impl: a derive would require `R: Clone`.
impl<R> Clone for ResourceRepository<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceRepository<R> {
    /// Create a new repository over a shared client
    pub fn new(client: ResourceClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("/{}", R::COLLECTION)
    }

    fn resource_path(id: &str) -> String {
        format!("/{}/{}", R::COLLECTION, id)
    }

    /// Fetch one page of the collection
    pub async fn list(&self, options: &PageQueryOptions) -> ApiResult<Page<R>> {
        Ok(self
            .client
            .fetch_page(&Self::collection_path(), Some(options))
            .await?)
    }

    /// Fetch one record by id
    pub async fn find(&self, id: &str) -> ApiResult<R> {
        Ok(self.client.fetch_resource(&Self::resource_path(id)).await?)
    }

    /// Fetch one page of a child collection nested under a record,
    /// e.g. `/posts/1/comments`
    pub async fn list_related<C: Resource>(
        &self,
        id: &str,
        options: &PageQueryOptions,
    ) -> ApiResult<Page<C>> {
        let path = format!("{}/{}", Self::resource_path(id), C::COLLECTION);
        Ok(self.client.fetch_page(&path, Some(options)).await?)
    }

    /// Create a record
    pub async fn create(&self, input: &R::Create) -> ApiResult<R> {
        let created: R = self
            .client
            .create_resource(&Self::collection_path(), input)
            .await?;
        debug!(collection = R::COLLECTION, id = created.id(), "Created record");
        Ok(created)
    }

    /// Apply a partial update to a record
    pub async fn update(&self, id: &str, changes: &R::Update) -> ApiResult<R> {
        Ok(self
            .client
            .update_resource(&Self::resource_path(id), changes)
            .await?)
    }

    /// Delete a record
    ///
    /// The upstream answers with an empty object (or nothing at all); any
    /// successful answer counts as deleted.
    pub async fn delete(&self, id: &str) -> ApiResult<bool> {
        let _: serde_json::Value = self
            .client
            .delete_resource(&Self::resource_path(id))
            .await?;
        debug!(collection = R::COLLECTION, id, "Deleted record");
        Ok(true)
    }
}

pub type AlbumRepository = ResourceRepository<Album>;
pub type CommentRepository = ResourceRepository<Comment>;
pub type PhotoRepository = ResourceRepository<Photo>;
pub type PostRepository = ResourceRepository<Post>;
pub type TodoRepository = ResourceRepository<Todo>;
pub type UserRepository = ResourceRepository<User>;
