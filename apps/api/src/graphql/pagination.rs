//! Page-size policy shared by every list resolver
//!
//! A single [`LimitPolicy`] decides the `_limit` forwarded upstream for
//! top-level lists and nested relation lists alike.

use graphqlzero_placeholder_client::{PageQueryOptions, PaginateOptions};

/// Smallest page size ever forwarded upstream
pub const MIN_LIMIT: i32 = 1;

/// Largest page size when `MAX_PAGE_LIMIT` is not configured
pub const DEFAULT_MAX_LIMIT: i32 = 100;

/// Inclusive `[min, max]` bounds for page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPolicy {
    min: i32,
    max: i32,
}

impl LimitPolicy {
    /// Policy with the given maximum; a maximum below [`MIN_LIMIT`] is raised to it
    pub fn new(max: i32) -> Self {
        Self {
            min: MIN_LIMIT,
            max: max.max(MIN_LIMIT),
        }
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Normalize a requested page size
    ///
    /// Absent and `0` mean "as many as allowed"; anything else is clamped.
    pub fn effective_limit(&self, requested: Option<i32>) -> i32 {
        match requested {
            None | Some(0) => self.max,
            Some(limit) if limit > self.max => self.max,
            Some(limit) if limit < self.min => self.min,
            Some(limit) => limit,
        }
    }

    /// Return `options` with a legal `paginate.limit`, leaving every other field intact
    ///
    /// A supplied `slice.limit` is clamped the same way and stays the limit
    /// forwarded upstream.
    pub fn enforce(&self, options: Option<PageQueryOptions>) -> PageQueryOptions {
        let mut options = options.unwrap_or_default();
        let paginate = options.paginate.get_or_insert_with(PaginateOptions::default);
        paginate.limit = Some(self.effective_limit(paginate.limit));
        if let Some(slice) = options.slice.as_mut() {
            if slice.limit.is_some() {
                slice.limit = Some(self.effective_limit(slice.limit));
            }
        }
        options
    }
}

impl Default for LimitPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphqlzero_placeholder_client::{SearchOptions, SliceOptions, SortOptions, SortOrder};
    use rstest::rstest;

    fn with_limit(limit: Option<i32>) -> PageQueryOptions {
        PageQueryOptions {
            paginate: Some(PaginateOptions { page: None, limit }),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_options_get_max() {
        let guarded = LimitPolicy::default().enforce(None);
        assert_eq!(guarded, with_limit(Some(100)));
    }

    #[test]
    fn test_options_without_paginate_get_max() {
        let options = PageQueryOptions {
            search: Some(SearchOptions {
                q: Some("dolor".to_string()),
            }),
            ..Default::default()
        };
        let guarded = LimitPolicy::default().enforce(Some(options));
        assert_eq!(guarded.limit(), Some(100));
        assert_eq!(guarded.search.unwrap().q.as_deref(), Some("dolor"));
    }

    #[rstest]
    #[case::absent(None, 100)]
    #[case::zero(Some(0), 100)]
    #[case::too_large(Some(500), 100)]
    #[case::negative(Some(-5), 1)]
    #[case::in_range(Some(50), 50)]
    #[case::lower_bound(Some(1), 1)]
    #[case::upper_bound(Some(100), 100)]
    fn test_effective_limit(#[case] requested: Option<i32>, #[case] expected: i32) {
        let guarded = LimitPolicy::default().enforce(Some(with_limit(requested)));
        assert_eq!(guarded.limit(), Some(expected));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(0))]
    #[case(Some(-5))]
    #[case(Some(7))]
    #[case(Some(10_000))]
    fn test_idempotent(#[case] requested: Option<i32>) {
        let policy = LimitPolicy::new(200);
        let once = policy.enforce(Some(with_limit(requested)));
        let twice = policy.enforce(Some(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_other_fields_pass_through() {
        let options = PageQueryOptions {
            paginate: Some(PaginateOptions {
                page: Some(3),
                limit: Some(500),
            }),
            slice: Some(SliceOptions {
                start: Some(10),
                end: Some(20),
                limit: None,
            }),
            sort: vec![SortOptions {
                field: "title".to_string(),
                order: SortOrder::Desc,
            }],
            operators: Vec::new(),
            search: None,
        };

        let guarded = LimitPolicy::default().enforce(Some(options.clone()));

        assert_eq!(guarded.paginate.as_ref().unwrap().page, Some(3));
        assert_eq!(guarded.limit(), Some(100));
        assert_eq!(guarded.slice, options.slice);
        assert_eq!(guarded.sort, options.sort);
    }

    #[rstest]
    #[case::in_range(Some(5), Some(5))]
    #[case::too_large(Some(500), Some(100))]
    #[case::negative(Some(-3), Some(1))]
    #[case::absent(None, Some(100))]
    fn test_slice_limit_is_clamped_and_forwarded(
        #[case] requested: Option<i32>,
        #[case] forwarded: Option<i32>,
    ) {
        let options = PageQueryOptions {
            slice: Some(SliceOptions {
                start: Some(0),
                end: None,
                limit: requested,
            }),
            ..Default::default()
        };
        let policy = LimitPolicy::default();
        let guarded = policy.enforce(Some(options));

        assert_eq!(guarded.limit(), forwarded);
        assert_eq!(policy.enforce(Some(guarded.clone())), guarded);
    }

    #[test]
    fn test_configured_maximum() {
        let policy = LimitPolicy::new(200);
        assert_eq!(policy.effective_limit(Some(150)), 150);
        assert_eq!(policy.effective_limit(Some(201)), 200);
        assert_eq!(policy.effective_limit(None), 200);
    }

    #[test]
    fn test_maximum_never_below_minimum() {
        let policy = LimitPolicy::new(0);
        assert_eq!(policy.max(), MIN_LIMIT);
        assert_eq!(policy.effective_limit(Some(50)), 1);
    }
}
