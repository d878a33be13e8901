//! Assertion helpers for rendered output and builder errors.

use std::fmt::Debug;

use serde_json::Value;

use es_search_builder::{BuilderError, BuilderResult, MultiSearchBuilder};

use super::fixtures::header;

/// Asserts that the multi-search holds exactly one fixture search whose body
/// renders to `expected`.
pub fn assert_single_body(msearch: &MultiSearchBuilder, expected: Value) {
    let result = msearch.build();
    assert_eq!(
        result,
        vec![header(), expected.clone()],
        "Body mismatch: expected {}, got {:?}",
        expected,
        result
    );
}

/// Asserts that a result is an `AlreadySet` error.
pub fn assert_already_set<T: Debug>(result: BuilderResult<T>) {
    match result {
        Err(err @ BuilderError::AlreadySet { .. }) => {
            let message = err.to_string();
            assert!(
                message.ends_with("value has already been set"),
                "Unexpected message: {}",
                message
            );
        }
        other => panic!("Expected AlreadySet error, got {:?}", other),
    }
}

/// Asserts that a result is an `AlreadyExists` error for `construct`.
pub fn assert_already_exists<T: Debug>(result: BuilderResult<T>, construct: &str) {
    match result {
        Err(BuilderError::AlreadyExists { construct: actual }) => {
            assert_eq!(actual, construct, "Construct label mismatch");
        }
        other => panic!("Expected AlreadyExists error, got {:?}", other),
    }
}

/// Asserts that a result is a `SuggestExists` error for `name`.
pub fn assert_suggest_exists<T: Debug>(result: BuilderResult<T>, name: &str) {
    match result {
        Err(err @ BuilderError::SuggestExists { .. }) => {
            assert_eq!(
                err.to_string(),
                format!("suggest with name '{}' already exists", name)
            );
        }
        other => panic!("Expected SuggestExists error, got {:?}", other),
    }
}
