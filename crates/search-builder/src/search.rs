//! Search body builders.
//!
//! [`SearchBuilder`] is the standalone entry point for a single `_search`
//! request. [`SearchBodyBuilder`] is the body handle shared by both modes: the
//! standalone builder wraps one, and
//! [`MultiSearchBuilder::create_search`](crate::MultiSearchBuilder::create_search)
//! hands one out for every search it appends.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{BuilderError, BuilderResult};
use crate::node::Node;
use crate::query::QueryBuilder;
use crate::suggest::SuggestBuilder;

/// Builds one search body in place.
///
/// This handle has no `build()` of its own; the body is rendered by whichever
/// root created it.
#[derive(Debug, Clone)]
pub struct SearchBodyBuilder {
    node: Node,
}

impl SearchBodyBuilder {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Sets the page size (`size`).
    pub fn set_search_take(&self, take: u64) -> BuilderResult<&Self> {
        self.node.set_once("size", Value::from(take), "search take")?;
        Ok(self)
    }

    /// Sets the page offset (`from`).
    pub fn set_search_skip(&self, skip: u64) -> BuilderResult<&Self> {
        self.node.set_once("from", Value::from(skip), "search skip")?;
        Ok(self)
    }

    /// Sets source filtering (`_source`).
    pub fn set_search_source(&self, source: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("_source", source.into(), "search source")?;
        Ok(self)
    }

    /// Sets the sort clauses (`sort`).
    pub fn set_search_sort(&self, sort: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("sort", sort.into(), "search sort")?;
        Ok(self)
    }

    /// Creates a suggester named `name` under `suggest`.
    pub fn create_suggest(&self, name: &str) -> BuilderResult<SuggestBuilder> {
        let suggest = self
            .node
            .child("suggest")
            .create_once(name, || BuilderError::SuggestExists {
                name: name.to_string(),
            })?;
        Ok(SuggestBuilder::new(suggest))
    }

    /// Creates the top-level `query`.
    pub fn create_query(&self) -> BuilderResult<QueryBuilder> {
        let query = self.node.create_once("query", || BuilderError::AlreadyExists {
            construct: "query clause",
        })?;
        Ok(QueryBuilder::new(query))
    }
}

/// Builds a single standalone search request body.
///
/// # Example
///
/// ```
/// use es_search_builder::SearchBuilder;
/// use serde_json::json;
///
/// # fn main() -> es_search_builder::BuilderResult<()> {
/// let search = SearchBuilder::new();
/// search.set_search_take(10)?.set_search_skip(20)?;
/// search
///     .create_query()?
///     .create_bool_query()?
///     .add_filter()
///     .set_term(json!({ "status": "Active" }))?;
///
/// assert_eq!(
///     search.build(),
///     json!({
///         "size": 10,
///         "from": 20,
///         "query": { "bool": { "filter": [{ "term": { "status": "Active" } }] } }
///     })
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SearchBuilder {
    body: Node,
    search: SearchBodyBuilder,
}

impl SearchBuilder {
    /// Creates a builder over a new, empty body.
    pub fn new() -> Self {
        let body = Node::root();
        Self {
            search: SearchBodyBuilder::new(body.clone()),
            body,
        }
    }

    /// Sets the page size (`size`).
    pub fn set_search_take(&self, take: u64) -> BuilderResult<&SearchBodyBuilder> {
        self.search.set_search_take(take)
    }

    /// Sets the page offset (`from`).
    pub fn set_search_skip(&self, skip: u64) -> BuilderResult<&SearchBodyBuilder> {
        self.search.set_search_skip(skip)
    }

    /// Sets source filtering (`_source`).
    pub fn set_search_source(&self, source: impl Into<Value>) -> BuilderResult<&SearchBodyBuilder> {
        self.search.set_search_source(source)
    }

    /// Sets the sort clauses (`sort`).
    pub fn set_search_sort(&self, sort: impl Into<Value>) -> BuilderResult<&SearchBodyBuilder> {
        self.search.set_search_sort(sort)
    }

    /// Creates a suggester named `name` under `suggest`.
    pub fn create_suggest(&self, name: &str) -> BuilderResult<SuggestBuilder> {
        self.search.create_suggest(name)
    }

    /// Creates the top-level `query`.
    pub fn create_query(&self) -> BuilderResult<QueryBuilder> {
        self.search.create_query()
    }

    /// Renders the body as configured so far.
    pub fn build(&self) -> Value {
        self.body.render()
    }
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for SearchBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.build().serialize(serializer)
    }
}
