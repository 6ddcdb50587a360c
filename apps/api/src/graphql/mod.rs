//! GraphQL schema and resolvers for GraphQLZero
//!
//! This module contains the async-graphql schema including:
//! - Query and mutation resolvers for every resource
//! - Object types with relation resolvers
//! - The page-size policy and boundary validation for arguments

pub mod debug;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;
pub mod validation;

pub use debug::DebugLog;
pub use pagination::LimitPolicy;
pub use schema::{build_schema, GraphQLZeroSchema, SchemaBuilder};
