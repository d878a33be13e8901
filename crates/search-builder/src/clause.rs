//! Bool query clause builders.
//!
//! Each builder wraps one element of a `bool.filter`, `bool.must` or
//! `bool.should` array and exposes the leaf clauses that make sense in that
//! position.

use serde_json::Value;

use crate::error::{BuilderError, BuilderResult};
use crate::node::Node;
use crate::query::QueryBuilder;

/// Creates `nested: { path, query: {} }` on `node` and returns the inner query.
fn create_nested_query(node: &Node, path: &str) -> BuilderResult<QueryBuilder> {
    let nested = node.create_once("nested", || BuilderError::AlreadyExists {
        construct: "nested query",
    })?;
    nested.assign("path", Value::String(path.to_string()));
    Ok(QueryBuilder::new(nested.child("query")))
}

/// One element of a bool query's `filter` array.
#[derive(Debug, Clone)]
pub struct Filter {
    node: Node,
}

impl Filter {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Sets the `term` clause.
    pub fn set_term(&self, term: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("term", term.into(), "term")?;
        Ok(self)
    }

    /// Sets the `terms` clause.
    pub fn set_terms(&self, terms: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("terms", terms.into(), "terms")?;
        Ok(self)
    }

    /// Sets the `nested` clause to a caller-built value.
    ///
    /// Shares the `nested` key with [`Filter::create_nested_query`]; only one
    /// of the two can succeed on a given filter.
    pub fn set_nested(&self, nested: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("nested", nested.into(), "nested")?;
        Ok(self)
    }

    /// Sets the `geo_bounding_box` clause.
    pub fn set_geo_bounding_box(&self, geo_bounding_box: impl Into<Value>) -> BuilderResult<&Self> {
        self.node
            .set_once("geo_bounding_box", geo_bounding_box.into(), "geo_bounding_box")?;
        Ok(self)
    }

    /// Sets the `range` clause.
    pub fn set_range(&self, range: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("range", range.into(), "range")?;
        Ok(self)
    }

    /// Creates a `query` wrapper inside this filter.
    pub fn create_query(&self) -> BuilderResult<QueryBuilder> {
        let query = self.node.create_once("query", || BuilderError::AlreadyExists {
            construct: "query clause",
        })?;
        Ok(QueryBuilder::new(query))
    }

    /// Creates a `nested` clause on `path` and returns its inner query.
    pub fn create_nested_query(&self, path: &str) -> BuilderResult<QueryBuilder> {
        create_nested_query(&self.node, path)
    }
}

/// One element of a bool query's `must` array.
#[derive(Debug, Clone)]
pub struct Must {
    node: Node,
}

impl Must {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Sets the `match` clause.
    pub fn set_match(&self, query: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("match", query.into(), "match")?;
        Ok(self)
    }

    /// Sets the `multi_match` clause.
    pub fn set_multi_match(&self, query: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("multi_match", query.into(), "multi_match")?;
        Ok(self)
    }
}

/// One element of a bool query's `should` array.
#[derive(Debug, Clone)]
pub struct Should {
    node: Node,
}

impl Should {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Sets the `match` clause.
    pub fn set_match(&self, query: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("match", query.into(), "match")?;
        Ok(self)
    }

    /// Sets the `term` clause.
    pub fn set_term(&self, term: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("term", term.into(), "term")?;
        Ok(self)
    }

    /// Sets the `range` clause.
    pub fn set_range(&self, range: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("range", range.into(), "range")?;
        Ok(self)
    }

    /// Creates a `nested` clause on `path` and returns its inner query.
    pub fn create_nested_query(&self, path: &str) -> BuilderResult<QueryBuilder> {
        create_nested_query(&self.node, path)
    }
}
