//! Page types and list options
//!
//! `PageQueryOptions` is the one argument every list field accepts. It is
//! validated here, then normalized by the [`LimitPolicy`] before it reaches
//! a repository.

use async_graphql::{Context, Enum, InputObject, OutputType, Result, ResultExt, SimpleObject};
use graphqlzero_placeholder_client as client;

use crate::error::ApiError;
use crate::graphql::pagination::LimitPolicy;
use crate::graphql::validation::{at_least, require_text};

use super::{Album, Comment, Photo, Post, Todo, User};

// =============================================================================
// Input Types
// =============================================================================

/// Options for list fields
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "PageQueryOptions")]
pub struct PageQueryOptionsInput {
    /// Page-number pagination
    pub paginate: Option<PaginateInput>,
    /// Offset slicing
    pub slice: Option<SliceInput>,
    /// Sort keys, applied in order
    pub sort: Option<Vec<SortInput>>,
    /// Field filters
    pub operators: Option<Vec<OperatorInput>>,
    /// Full-text search
    pub search: Option<SearchInput>,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "PaginateOptions")]
pub struct PaginateInput {
    /// 1-based page number
    pub page: Option<i32>,
    /// Page size; clamped, never rejected
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "SliceOptions")]
pub struct SliceInput {
    pub start: Option<i32>,
    pub end: Option<i32>,
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(name = "SortOptions")]
pub struct SortInput {
    pub field: String,
    #[graphql(default_with = "SortOrderEnum::Asc")]
    pub order: SortOrderEnum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SortOrderEnum {
    Asc,
    Desc,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(name = "OperatorOptions")]
pub struct OperatorInput {
    pub kind: OperatorKindEnum,
    pub field: String,
    pub value: String,
}

/// Comparison applied by an operator filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum OperatorKindEnum {
    /// Greater than or equal
    Gte,
    /// Less than or equal
    Lte,
    /// Not equal
    Ne,
    /// Regular-expression match
    Like,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "SearchOptions")]
pub struct SearchInput {
    pub q: Option<String>,
}

impl From<SortOrderEnum> for client::SortOrder {
    fn from(order: SortOrderEnum) -> Self {
        match order {
            SortOrderEnum::Asc => Self::Asc,
            SortOrderEnum::Desc => Self::Desc,
        }
    }
}

impl From<OperatorKindEnum> for client::OperatorKind {
    fn from(kind: OperatorKindEnum) -> Self {
        match kind {
            OperatorKindEnum::Gte => Self::Gte,
            OperatorKindEnum::Lte => Self::Lte,
            OperatorKindEnum::Ne => Self::Ne,
            OperatorKindEnum::Like => Self::Like,
        }
    }
}

impl TryFrom<PageQueryOptionsInput> for client::PageQueryOptions {
    type Error = ApiError;

    fn try_from(input: PageQueryOptionsInput) -> Result<Self, Self::Error> {
        let paginate = input
            .paginate
            .map(|p| {
                Ok::<_, ApiError>(client::PaginateOptions {
                    page: at_least("paginate.page", p.page, 1)?,
                    limit: p.limit,
                })
            })
            .transpose()?;

        let slice = input
            .slice
            .map(|s| {
                Ok::<_, ApiError>(client::SliceOptions {
                    start: at_least("slice.start", s.start, 0)?,
                    end: at_least("slice.end", s.end, 0)?,
                    limit: s.limit,
                })
            })
            .transpose()?;

        let sort = input
            .sort
            .unwrap_or_default()
            .into_iter()
            .map(|s| {
                Ok(client::SortOptions {
                    field: require_text("sort.field", s.field)?,
                    order: s.order.into(),
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        let operators = input
            .operators
            .unwrap_or_default()
            .into_iter()
            .map(|o| {
                Ok(client::OperatorOptions {
                    kind: o.kind.into(),
                    field: require_text("operators.field", o.field)?,
                    value: o.value,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        Ok(Self {
            paginate,
            slice,
            sort,
            operators,
            search: input.search.map(|s| client::SearchOptions { q: s.q }),
        })
    }
}

/// Validate list options and apply the limit policy from the schema data
pub fn page_options(
    ctx: &Context<'_>,
    input: Option<PageQueryOptionsInput>,
) -> Result<client::PageQueryOptions> {
    let policy = ctx.data::<LimitPolicy>()?;
    let options = input
        .map(client::PageQueryOptions::try_from)
        .transpose()
        .extend()?;
    Ok(policy.enforce(options))
}

// =============================================================================
// Output Types
// =============================================================================

/// A page of records plus navigation and metadata
#[derive(SimpleObject)]
#[graphql(concrete(name = "AlbumsPage", params(Album)))]
#[graphql(concrete(name = "CommentsPage", params(Comment)))]
#[graphql(concrete(name = "PhotosPage", params(Photo)))]
#[graphql(concrete(name = "PostsPage", params(Post)))]
#[graphql(concrete(name = "TodosPage", params(Todo)))]
#[graphql(concrete(name = "UsersPage", params(User)))]
pub struct Page<T: OutputType> {
    pub data: Vec<T>,
    pub links: Option<PaginationLinks>,
    pub meta: PageMetadata,
}

impl<M, T> From<client::Page<M>> for Page<T>
where
    T: OutputType + From<M>,
{
    fn from(page: client::Page<M>) -> Self {
        let page = page.map(T::from);
        Self {
            data: page.data,
            links: page.links.map(Into::into),
            meta: page.meta.into(),
        }
    }
}

/// Navigation to neighbouring pages
#[derive(Debug, Clone, SimpleObject)]
pub struct PaginationLinks {
    pub first: Option<PageLimitPair>,
    pub prev: Option<PageLimitPair>,
    pub next: Option<PageLimitPair>,
    pub last: Option<PageLimitPair>,
}

#[derive(Debug, Clone, Copy, SimpleObject)]
pub struct PageLimitPair {
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

/// Collection metadata
#[derive(Debug, Clone, Copy, SimpleObject)]
pub struct PageMetadata {
    /// Number of records in the whole (filtered) collection
    pub total_count: Option<i64>,
}

impl From<client::PaginationLinks> for PaginationLinks {
    fn from(links: client::PaginationLinks) -> Self {
        Self {
            first: links.first.map(Into::into),
            prev: links.prev.map(Into::into),
            next: links.next.map(Into::into),
            last: links.last.map(Into::into),
        }
    }
}

impl From<client::PageLimitPair> for PageLimitPair {
    fn from(pair: client::PageLimitPair) -> Self {
        Self {
            page: pair.page,
            limit: pair.limit,
        }
    }
}

impl From<client::PageMetadata> for PageMetadata {
    fn from(meta: client::PageMetadata) -> Self {
        Self {
            total_count: meta.total_count,
        }
    }
}
