//! Property-based tests using proptest
//!
//! These tests check the token codec and the statement assembler against
//! generated inputs rather than hand-picked fixtures.

use proptest::prelude::*;

use news_service::application::token;
use news_service::infrastructure::persistence::{
    bulk_delete, bulk_insert, news_list_statement, taxonomy_list_statement, SqlParam,
    NEWS_TABLE, TAGS_TABLE,
};
use news_service::value_objects::{NewsFilter, Pagination, TaxonomyFilter, TopicFilter};
use news_service::entities::TaxonomyDraft;

// Strategy for generating pagination windows
fn pagination_strategy() -> impl Strategy<Value = Pagination> {
    (0i64..100_000, 1i64..500).prop_map(|(offset, count)| Pagination::new(offset, count))
}

// Strategy for generating news filters, each field independently set or unset
fn news_filter_strategy() -> impl Strategy<Value = NewsFilter> {
    (
        prop_oneof![Just(0i32), 1i32..=3],
        prop::collection::vec(1i64..10_000, 0..6),
        prop_oneof![Just(0i64), 1i64..100_000],
        prop_oneof![Just(String::new()), "[a-zA-Z0-9 ?>~]{1,24}"],
    )
        .prop_map(|(status, topics, news_id, title)| NewsFilter {
            status,
            topics,
            news_id,
            title,
        })
}

fn topic_filter_strategy() -> impl Strategy<Value = TopicFilter> {
    (
        prop_oneof![Just(String::new()), "\\PC{1,16}"],
        prop_oneof![Just(0i64), 1i64..1000],
    )
        .prop_map(|(name, news_topic_id)| TopicFilter {
            name,
            news_topic_id,
        })
}

/// Every `$N` in `sql`, in order of appearance
fn placeholders(sql: &str) -> Vec<usize> {
    let mut found = Vec::new();
    let mut chars = sql.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c != '$' {
            continue;
        }
        let mut digits = String::new();
        while let Some(&(_, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        if let Ok(n) = digits.parse() {
            found.push(n);
        }
    }
    found
}

proptest! {
    /// Pagination survives an encode/decode cycle
    #[test]
    fn pagination_token_round_trip(pagination in pagination_strategy()) {
        let encoded = token::encode(&pagination).unwrap();
        let decoded: Pagination = token::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, pagination);
    }

    /// News filters survive an encode/decode cycle
    #[test]
    fn news_filter_token_round_trip(filter in news_filter_strategy()) {
        let encoded = token::encode(&filter).unwrap();
        let decoded: NewsFilter = token::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, filter);
    }

    /// Tokens never contain characters that need escaping in a query string
    #[test]
    fn tokens_are_url_safe(filter in topic_filter_strategy()) {
        let encoded = token::encode(&filter).unwrap();
        prop_assert!(
            !encoded.contains(['+', '/', '=']),
            "token must not contain +, / or =: {}",
            encoded
        );
        let decoded: TopicFilter = token::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, filter);
    }

    /// The news list statement has one WHERE at most and numbers its
    /// placeholders 1..=params.len() in order
    #[test]
    fn news_list_placeholders_are_sequential(
        pagination in pagination_strategy(),
        filter in prop::option::of(news_filter_strategy()),
    ) {
        let statement = news_list_statement(&pagination, filter.as_ref());

        prop_assert!(statement.sql.matches(" WHERE ").count() <= 1);
        let expected: Vec<usize> = (1..=statement.params.len()).collect();
        prop_assert_eq!(placeholders(&statement.sql), expected);

        // Pagination is always bound last, count before offset
        let n = statement.params.len();
        prop_assert_eq!(&statement.params[n - 2], &SqlParam::BigInt(pagination.count));
        prop_assert_eq!(&statement.params[n - 1], &SqlParam::BigInt(pagination.offset));
    }

    /// Unset filter fields add nothing to the statement
    #[test]
    fn empty_news_filter_matches_no_filter(pagination in pagination_strategy()) {
        let with_empty = news_list_statement(&pagination, Some(&NewsFilter::default()));
        let without = news_list_statement(&pagination, None);
        prop_assert_eq!(with_empty, without);
    }

    #[test]
    fn taxonomy_list_placeholders_are_sequential(
        pagination in prop::option::of(pagination_strategy()),
        filter in prop::option::of(topic_filter_strategy()),
    ) {
        let filter = filter.map(TaxonomyFilter::from);
        let statement = taxonomy_list_statement(&TAGS_TABLE, pagination.as_ref(), filter.as_ref());

        prop_assert!(statement.sql.matches(" WHERE ").count() <= 1);
        let expected: Vec<usize> = (1..=statement.params.len()).collect();
        prop_assert_eq!(placeholders(&statement.sql), expected);
    }

    /// A bulk insert of N rows binds N * width parameters and emits N tuples
    #[test]
    fn bulk_insert_binds_every_row(names in prop::collection::vec("[a-z]{1,12}", 1..40)) {
        let drafts: Vec<TaxonomyDraft> = names
            .iter()
            .map(|n| TaxonomyDraft::new(n.clone()).unwrap())
            .collect();
        let statement = bulk_insert(&TAGS_TABLE, &drafts).unwrap();

        prop_assert_eq!(statement.params.len(), drafts.len());
        prop_assert_eq!(statement.sql.matches('(').count(), drafts.len() + 1);
        let expected: Vec<usize> = (1..=drafts.len()).collect();
        prop_assert_eq!(placeholders(&statement.sql), expected);
    }

    /// Bulk delete always binds the whole id set as one array
    #[test]
    fn bulk_delete_binds_one_array(ids in prop::collection::vec(1i64..1_000_000, 1..100)) {
        let statement = bulk_delete(&NEWS_TABLE, &ids).unwrap();
        prop_assert_eq!(statement.params, vec![SqlParam::BigIntArray(ids)]);
        prop_assert_eq!(placeholders(&statement.sql), vec![1]);
    }
}
