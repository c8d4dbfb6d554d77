use permitdesk_domain::ListFilter;
use url::form_urlencoded;

/// Encodes the fields a filter has set as a URL query string.
///
/// Unset fields are skipped; the rest keep declaration order. Returns an
/// empty string when nothing is set.
#[must_use]
pub fn encode_query<F>(filter: &F) -> String
where
    F: ListFilter + ?Sized,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in filter.query_pairs() {
        if let Some(value) = value {
            serializer.append_pair(key, &value);
        }
    }

    serializer.finish()
}

/// Appends a filter's query string to an endpoint path.
#[must_use]
pub fn with_query<F>(path: &str, filter: &F) -> String
where
    F: ListFilter + ?Sized,
{
    let query = encode_query(filter);
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use permitdesk_domain::{ListFilter, Pagination, PermitFilter, QueryPair, pair};
    use proptest::prelude::*;

    use super::{encode_query, with_query};

    struct SampleFilter {
        a: Option<i64>,
        b: Option<i64>,
        c: Option<String>,
    }

    impl ListFilter for SampleFilter {
        fn query_pairs(&self) -> Vec<QueryPair> {
            vec![
                pair("a", self.a.as_ref()),
                pair("b", self.b.as_ref()),
                pair("c", self.c.as_ref()),
            ]
        }
    }

    #[test]
    fn unset_fields_are_omitted() {
        let filter = SampleFilter {
            a: Some(1),
            b: None,
            c: Some("x".to_owned()),
        };

        assert_eq!(encode_query(&filter), "a=1&c=x");
    }

    #[test]
    fn empty_filter_leaves_path_untouched() {
        assert_eq!(with_query("/domains", &Pagination::default()), "/domains");
        assert_eq!(
            with_query("/domains", &Pagination::page(2, 10)),
            "/domains?page=2&limit=10"
        );
    }

    #[test]
    fn values_are_form_encoded() {
        let filter = PermitFilter {
            name: Some("hot work & welding".to_owned()),
            ..PermitFilter::default()
        };

        assert_eq!(encode_query(&filter), "name=hot+work+%26+welding");
    }

    proptest! {
        #[test]
        fn encoded_pairs_decode_back_in_order(
            a in proptest::option::of(any::<i64>()),
            b in proptest::option::of(any::<i64>()),
            c in proptest::option::of("[ -~]{0,16}"),
        ) {
            let filter = SampleFilter { a, b, c: c.clone() };
            let encoded = encode_query(&filter);
            let decoded: Vec<(String, String)> = url::form_urlencoded::parse(encoded.as_bytes())
                .into_owned()
                .collect();

            let expected: Vec<(String, String)> = [
                a.map(|value| ("a".to_owned(), value.to_string())),
                b.map(|value| ("b".to_owned(), value.to_string())),
                c.map(|value| ("c".to_owned(), value)),
            ]
            .into_iter()
            .flatten()
            .collect();

            prop_assert_eq!(decoded, expected);
        }
    }
}
