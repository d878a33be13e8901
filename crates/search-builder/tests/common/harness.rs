//! Test generation macros.

/// Generates the pair of tests every leaf setter needs: the first call writes
/// the expected body, the second call on the same handle is rejected.
///
/// # Example
///
/// ```ignore
/// set_once_test!(
///     filter_term,
///     new_filter,
///     set_term,
///     json!({ "status": "Active" }),
///     bool_body(json!({ "filter": [{ "term": { "status": "Active" } }] }))
/// );
/// ```
#[macro_export]
macro_rules! set_once_test {
    ($test_name:ident, $fixture:expr, $setter:ident, $value:expr, $expected:expr) => {
        paste::paste! {
            #[test]
            fn [<test_ $test_name _sets_value>]() {
                let mut msearch = es_search_builder::MultiSearchBuilder::new();
                let subject = $fixture(&mut msearch);
                subject.$setter($value).expect("First assignment failed");

                $crate::common::assertions::assert_single_body(&msearch, $expected);
            }

            #[test]
            fn [<test_ $test_name _rejects_second_assignment>]() {
                let mut msearch = es_search_builder::MultiSearchBuilder::new();
                let subject = $fixture(&mut msearch);
                subject.$setter($value).expect("First assignment failed");

                $crate::common::assertions::assert_already_set(subject.$setter($value));
                // The rejected write must leave the first value in place.
                $crate::common::assertions::assert_single_body(&msearch, $expected);
            }
        }
    };
}
