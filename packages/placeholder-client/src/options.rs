//! List query options understood by json-server style APIs
//!
//! Each option maps onto the reserved query parameters of the upstream:
//!
//! | Option | Query parameters |
//! |---|---|
//! | `paginate { page, limit }` | `_page`, `_limit` |
//! | `slice { start, end, limit }` | `_start`, `_end`, `_limit` |
//! | `sort [{ field, order }]` | `_sort=a,b`, `_order=asc,desc` |
//! | `operators [{ kind, field, value }]` | `{field}_gte`, `{field}_lte`, `{field}_ne`, `{field}_like` |
//! | `search { q }` | `q` |

/// Options accepted by list operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQueryOptions {
    pub paginate: Option<PaginateOptions>,
    pub slice: Option<SliceOptions>,
    pub sort: Vec<SortOptions>,
    pub operators: Vec<OperatorOptions>,
    pub search: Option<SearchOptions>,
}

/// Page-number based pagination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginateOptions {
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

/// Offset based slicing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceOptions {
    pub start: Option<i32>,
    pub end: Option<i32>,
    pub limit: Option<i32>,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort by a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    pub field: String,
    pub order: SortOrder,
}

/// Field comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Gte,
    Lte,
    Ne,
    Like,
}

impl OperatorKind {
    fn suffix(self) -> &'static str {
        match self {
            Self::Gte => "_gte",
            Self::Lte => "_lte",
            Self::Ne => "_ne",
            Self::Like => "_like",
        }
    }
}

/// Filter on a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorOptions {
    pub kind: OperatorKind,
    pub field: String,
    pub value: String,
}

/// Full-text search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub q: Option<String>,
}

impl PageQueryOptions {
    /// Page size forwarded as `_limit`, if any
    ///
    /// An explicit slice limit wins over the paginate limit.
    pub fn limit(&self) -> Option<i32> {
        self.slice
            .as_ref()
            .and_then(|s| s.limit)
            .or_else(|| self.paginate.as_ref().and_then(|p| p.limit))
    }

    /// Render the options as query parameters
    ///
    /// `_limit` is emitted once, taken from [`limit`](Self::limit).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(page) = self.paginate.as_ref().and_then(|p| p.page) {
            pairs.push(("_page".to_string(), page.to_string()));
        }

        if let Some(slice) = &self.slice {
            if let Some(start) = slice.start {
                pairs.push(("_start".to_string(), start.to_string()));
            }
            if let Some(end) = slice.end {
                pairs.push(("_end".to_string(), end.to_string()));
            }
        }

        if let Some(limit) = self.limit() {
            pairs.push(("_limit".to_string(), limit.to_string()));
        }

        if !self.sort.is_empty() {
            let fields: Vec<&str> = self.sort.iter().map(|s| s.field.as_str()).collect();
            let orders: Vec<&str> = self.sort.iter().map(|s| s.order.as_param()).collect();
            pairs.push(("_sort".to_string(), fields.join(",")));
            pairs.push(("_order".to_string(), orders.join(",")));
        }

        for operator in &self.operators {
            pairs.push((
                format!("{}{}", operator.field, operator.kind.suffix()),
                operator.value.clone(),
            ));
        }

        if let Some(q) = self.search.as_ref().and_then(|s| s.q.as_ref()) {
            pairs.push(("q".to_string(), q.clone()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(options: &PageQueryOptions) -> Vec<(String, String)> {
        options.to_query_pairs()
    }

    fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_options_render_nothing() {
        assert!(PageQueryOptions::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_paginate_params() {
        let options = PageQueryOptions {
            paginate: Some(PaginateOptions {
                page: Some(2),
                limit: Some(10),
            }),
            ..Default::default()
        };
        assert_eq!(pairs(&options), expected(&[("_page", "2"), ("_limit", "10")]));
    }

    #[test]
    fn test_slice_limit_wins_over_paginate_limit() {
        let options = PageQueryOptions {
            paginate: Some(PaginateOptions {
                page: None,
                limit: Some(5),
            }),
            slice: Some(SliceOptions {
                start: Some(20),
                end: None,
                limit: Some(50),
            }),
            ..Default::default()
        };
        assert_eq!(pairs(&options), expected(&[("_start", "20"), ("_limit", "50")]));
    }

    #[test]
    fn test_sort_operators_and_search() {
        let options = PageQueryOptions {
            sort: vec![
                SortOptions {
                    field: "title".to_string(),
                    order: SortOrder::Asc,
                },
                SortOptions {
                    field: "id".to_string(),
                    order: SortOrder::Desc,
                },
            ],
            operators: vec![
                OperatorOptions {
                    kind: OperatorKind::Gte,
                    field: "id".to_string(),
                    value: "10".to_string(),
                },
                OperatorOptions {
                    kind: OperatorKind::Like,
                    field: "title".to_string(),
                    value: "qui".to_string(),
                },
            ],
            search: Some(SearchOptions {
                q: Some("dolor".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(
            pairs(&options),
            expected(&[
                ("_sort", "title,id"),
                ("_order", "asc,desc"),
                ("id_gte", "10"),
                ("title_like", "qui"),
                ("q", "dolor"),
            ])
        );
    }

    #[test]
    fn test_limit_accessor() {
        assert_eq!(PageQueryOptions::default().limit(), None);
        let options = PageQueryOptions {
            paginate: Some(PaginateOptions {
                page: Some(1),
                limit: Some(7),
            }),
            ..Default::default()
        };
        assert_eq!(options.limit(), Some(7));

        let sliced = PageQueryOptions {
            slice: Some(SliceOptions {
                start: Some(0),
                end: None,
                limit: Some(3),
            }),
            ..options
        };
        assert_eq!(sliced.limit(), Some(3));
    }
}
