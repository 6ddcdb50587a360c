//! Pages returned by list operations
//!
//! json-server reports pagination out of band: the body is a bare JSON array,
//! the total size travels in `X-Total-Count` and the neighbouring pages in an
//! RFC 8288 `Link` header.

use url::Url;

/// A bounded slice of a resource collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records on this page
    pub data: Vec<T>,
    /// Neighbouring pages, when the upstream advertised any
    pub links: Option<PaginationLinks>,
    /// Collection metadata
    pub meta: PageMetadata,
}

impl<T> Page<T> {
    /// Convert every record on the page, keeping links and metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            links: self.links,
            meta: self.meta,
        }
    }
}

/// Collection metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Size of the whole (filtered) collection
    pub total_count: Option<i64>,
}

/// Page/limit coordinates of a neighbouring page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLimitPair {
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

/// Links to the first, previous, next and last pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationLinks {
    pub first: Option<PageLimitPair>,
    pub prev: Option<PageLimitPair>,
    pub next: Option<PageLimitPair>,
    pub last: Option<PageLimitPair>,
}

impl PaginationLinks {
    /// Decode a `Link` header such as
    /// `<http://host/posts?_page=1&_limit=10>; rel="first", <...>; rel="next"`.
    ///
    /// Returns `None` when no known relation is present.
    pub fn from_link_header(header: &str) -> Option<Self> {
        let mut links = Self::default();
        let mut found = false;
        let mut rest = header;

        // Targets may contain commas (`_sort=a,b`), so walk `<...>` groups instead of splitting.
        while let Some(start) = rest.find('<') {
            let after = &rest[start + 1..];
            let Some(end) = after.find('>') else {
                break;
            };
            let target = &after[..end];
            let tail = &after[end + 1..];
            let next = tail.find('<').unwrap_or(tail.len());
            let params = &tail[..next];
            rest = &tail[next..];

            let rel = params.split(';').find_map(|param| {
                param.trim().strip_prefix("rel=").map(|rel| {
                    rel.trim()
                        .trim_end_matches(',')
                        .trim()
                        .trim_matches('"')
                })
            });

            let pair = PageLimitPair::from_target(target);
            let slot = match rel {
                Some("first") => &mut links.first,
                Some("prev") => &mut links.prev,
                Some("next") => &mut links.next,
                Some("last") => &mut links.last,
                _ => continue,
            };
            *slot = Some(pair);
            found = true;
        }

        found.then_some(links)
    }
}

impl PageLimitPair {
    fn from_target(target: &str) -> Self {
        let url = Url::parse(target).or_else(|_| {
            Url::parse("http://placeholder.invalid/").and_then(|base| base.join(target))
        });

        let mut pair = Self::default();
        if let Ok(url) = url {
            for (key, value) in url.query_pairs() {
                match key.as_ref() {
                    "_page" => pair.page = value.parse().ok(),
                    "_limit" => pair.limit = value.parse().ok(),
                    _ => {}
                }
            }
        }
        pair
    }
}
