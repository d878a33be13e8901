//! Fixtures that create the handle a test works on.
//!
//! Every fixture appends exactly one search with [`HEADER_INDEX`] to the given
//! multi-search, so the expected output is always `[header, body]`.

use serde_json::{Value, json};

use es_search_builder::{
    BoolQueryBuilder, Filter, MultiSearchBuilder, Must, SearchBodyBuilder, Should, SuggestBuilder,
};

/// Index name used in every fixture header.
pub const HEADER_INDEX: &str = "some-index";

/// The header every fixture passes to `create_search`.
pub fn header() -> Value {
    json!({ "index": HEADER_INDEX })
}

/// Appends a search and returns its body handle.
pub fn new_search(msearch: &mut MultiSearchBuilder) -> SearchBodyBuilder {
    msearch.create_search(header())
}

/// Appends a search and returns a suggester named `my-suggest` on it.
pub fn new_suggest(msearch: &mut MultiSearchBuilder) -> SuggestBuilder {
    new_search(msearch)
        .create_suggest("my-suggest")
        .expect("Failed to create suggest")
}

/// Appends a search and returns the bool query under its `query`.
pub fn new_bool_query(msearch: &mut MultiSearchBuilder) -> BoolQueryBuilder {
    new_search(msearch)
        .create_query()
        .expect("Failed to create query")
        .create_bool_query()
        .expect("Failed to create bool query")
}

/// Appends a search and returns the first `filter` element of its bool query.
pub fn new_filter(msearch: &mut MultiSearchBuilder) -> Filter {
    new_bool_query(msearch).add_filter()
}

/// Appends a search and returns the first `must` element of its bool query.
pub fn new_must(msearch: &mut MultiSearchBuilder) -> Must {
    new_bool_query(msearch).add_must()
}

/// Appends a search and returns the first `should` element of its bool query.
pub fn new_should(msearch: &mut MultiSearchBuilder) -> Should {
    new_bool_query(msearch).add_should()
}

/// Wraps `clauses` as the body a fixture search renders to.
pub fn bool_body(clauses: Value) -> Value {
    json!({ "query": { "bool": clauses } })
}
