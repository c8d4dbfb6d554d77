//! List filters sent as URL query parameters.

use std::fmt::Display;

/// One filter field: its query key and value when the caller set it.
pub type QueryPair = (&'static str, Option<String>);

/// Filter object accepted by a list endpoint.
///
/// Pairs are returned in field declaration order. Fields the caller left
/// unset carry `None` and are dropped by the query encoder.
pub trait ListFilter {
    /// Returns every filter field in declaration order.
    fn query_pairs(&self) -> Vec<QueryPair>;
}

/// Builds a filter pair, string-coercing the value when present.
#[must_use]
pub fn pair<T: Display>(key: &'static str, value: Option<&T>) -> QueryPair {
    (key, value.map(ToString::to_string))
}

/// Filter for list endpoints that take no parameters besides paging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl Pagination {
    /// Creates a filter for one page.
    #[must_use]
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

impl ListFilter for Pagination {
    fn query_pairs(&self) -> Vec<QueryPair> {
        vec![
            pair("page", self.page.as_ref()),
            pair("limit", self.limit.as_ref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{ListFilter, Pagination, pair};

    #[test]
    fn pair_coerces_values_to_strings() {
        assert_eq!(pair("is_active", Some(&false)).1.as_deref(), Some("false"));
        assert_eq!(pair::<u32>("limit", None).1, None);
    }

    #[test]
    fn pagination_keeps_page_before_limit() {
        let pairs = Pagination::page(2, 25).query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(key, _)| *key).collect();

        assert_eq!(keys, vec!["page", "limit"]);
    }

    proptest! {
        #[test]
        fn pagination_pairs_mirror_set_fields(page in proptest::option::of(1u32..500), limit in proptest::option::of(1u32..200)) {
            let pairs = Pagination { page, limit }.query_pairs();

            prop_assert_eq!(pairs[0].1.clone(), page.map(|value| value.to_string()));
            prop_assert_eq!(pairs[1].1.clone(), limit.map(|value| value.to_string()));
        }
    }
}
