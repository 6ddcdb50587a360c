//! GraphQL schema builder for GraphQLZero
//!
//! This module provides the schema construction for the async-graphql API.

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, Schema};
use graphqlzero_placeholder_client::ResourceClient;

use crate::error::{ApiError, ApiResult};
use crate::repositories::{
    AlbumRepository, CommentRepository, PhotoRepository, PostRepository, TodoRepository,
    UserRepository,
};

use super::debug::DebugLog;
use super::mutation::Mutation;
use super::pagination::LimitPolicy;
use super::query::Query;

/// The GraphQLZero GraphQL schema type
pub type GraphQLZeroSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
#[derive(Default)]
pub struct SchemaBuilder {
    client: Option<ResourceClient>,
    limit_policy: LimitPolicy,
    debug_log: DebugLog,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upstream resource client
    pub fn client(mut self, client: ResourceClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the page-size policy applied to every list field
    ///
    /// Defaults to [`LimitPolicy::default`].
    pub fn limit_policy(mut self, limit_policy: LimitPolicy) -> Self {
        self.limit_policy = limit_policy;
        self
    }

    /// Set the resolver debug log (disabled unless set)
    pub fn debug_log(mut self, debug_log: DebugLog) -> Self {
        self.debug_log = debug_log;
        self
    }

    /// Build the schema with all configured services
    ///
    /// # Errors
    /// Returns a configuration error if no resource client was set
    pub fn build(self) -> ApiResult<GraphQLZeroSchema> {
        let client = self
            .client
            .ok_or_else(|| ApiError::Configuration("resource client is required".to_string()))?;

        let schema = Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .extension(Tracing)
            .data(CommentRepository::new(client.clone()))
            .data(PhotoRepository::new(client.clone()))
            .data(PostRepository::new(client.clone()))
            .data(TodoRepository::new(client.clone()))
            .data(UserRepository::new(client.clone()))
            .data(AlbumRepository::new(client))
            .data(self.limit_policy)
            .data(self.debug_log)
            .finish();

        Ok(schema)
    }
}

/// Create a new GraphQL schema with the provided services
pub fn build_schema(
    client: ResourceClient,
    limit_policy: LimitPolicy,
    debug_log: DebugLog,
) -> ApiResult<GraphQLZeroSchema> {
    SchemaBuilder::new()
        .client(client)
        .limit_policy(limit_policy)
        .debug_log(debug_log)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use graphqlzero_shared_config::PlaceholderConfig;

    #[test]
    fn test_schema_builder_default() {
        let builder = SchemaBuilder::default();
        assert!(builder.client.is_none());
        assert_eq!(builder.limit_policy, LimitPolicy::default());
        assert_eq!(builder.debug_log, DebugLog::default());
    }

    #[test]
    fn test_build_requires_client() {
        assert_matches!(
            SchemaBuilder::new().build().err(),
            Some(ApiError::Configuration(_))
        );
    }

    #[test]
    fn test_sdl_exposes_every_resource() {
        let client = ResourceClient::new(&PlaceholderConfig::default()).unwrap();
        let schema = build_schema(client, LimitPolicy::default(), DebugLog::default()).unwrap();
        let sdl = schema.sdl();

        for page in [
            "CommentsPage",
            "PhotosPage",
            "PostsPage",
            "TodosPage",
            "UsersPage",
            "AlbumsPage",
        ] {
            assert!(sdl.contains(page), "missing {}", page);
        }
        assert!(sdl.contains("input PageQueryOptions"));
        assert!(sdl.contains("deleteTodo(id: ID!): Boolean"));
        assert!(sdl.contains("createComment(input: CreateCommentInput!): Comment"));
    }
}
