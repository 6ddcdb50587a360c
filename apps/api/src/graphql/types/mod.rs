//! GraphQL type definitions for GraphQLZero
//!
//! Object types wrap the upstream models and resolve relation fields
//! through the repositories held in the schema data.

mod album;
mod comment;
mod page;
mod photo;
mod post;
mod todo;
mod user;

pub use album::Album;
pub use comment::Comment;
pub use page::{
    page_options, OperatorInput, OperatorKindEnum, Page, PageLimitPair, PageMetadata,
    PageQueryOptionsInput, PaginateInput, PaginationLinks, SearchInput, SliceInput, SortInput,
    SortOrderEnum,
};
pub use photo::Photo;
pub use post::Post;
pub use todo::Todo;
pub use user::{Address, Company, Geo, User};
