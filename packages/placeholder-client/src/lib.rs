//! REST resource client for GraphQLZero
//!
//! This crate talks to a JSONPlaceholder-style (json-server) API and provides:
//! - Typed create/read/update/delete calls decoding JSON bodies
//! - Page fetching with json-server query options (`_page`, `_limit`, `_sort`, ...)
//! - `Link` and `X-Total-Count` header decoding into [`Page`] metadata
//!
//! # Example
//!
//! ```rust,no_run
//! use graphqlzero_placeholder_client::{PageQueryOptions, PaginateOptions, ResourceClient};
//! use graphqlzero_shared_config::PlaceholderConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ResourceClient::new(&PlaceholderConfig::default())?;
//!
//! let options = PageQueryOptions {
//!     paginate: Some(PaginateOptions { page: Some(1), limit: Some(5) }),
//!     ..Default::default()
//! };
//! let page = client
//!     .fetch_page::<serde_json::Value>("/posts", Some(&options))
//!     .await?;
//! println!("{} of {:?} posts", page.data.len(), page.meta.total_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `PLACEHOLDER_API_URL`: upstream base URL (default: public JSONPlaceholder)
//! - `PLACEHOLDER_TIMEOUT`: request timeout in seconds

mod client;
mod error;
pub mod ids;
mod options;
mod page;

pub use client::ResourceClient;
pub use error::{ClientError, ClientResult};
pub use options::{
    OperatorKind, OperatorOptions, PageQueryOptions, PaginateOptions, SearchOptions,
    SliceOptions, SortOptions, SortOrder,
};
pub use page::{Page, PageLimitPair, PageMetadata, PaginationLinks};
