//! Query and bool query builders.

use serde_json::Value;

use crate::clause::{Filter, Must, Should};
use crate::error::{BuilderError, BuilderResult};
use crate::node::Node;

/// Builds a `query` object.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    node: Node,
}

impl QueryBuilder {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Creates the `bool` compound query.
    pub fn create_bool_query(&self) -> BuilderResult<BoolQueryBuilder> {
        let bool_query = self.node.create_once("bool", || BuilderError::AlreadyExists {
            construct: "bool query",
        })?;
        Ok(BoolQueryBuilder::new(bool_query))
    }
}

/// Builds a `bool` compound query.
///
/// The clause arrays are append-only: every `add_*` call pushes a new, empty
/// element and returns a handle to it. Handles from different calls never
/// share an element.
#[derive(Debug, Clone)]
pub struct BoolQueryBuilder {
    node: Node,
}

impl BoolQueryBuilder {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Appends an element to `filter`.
    pub fn add_filter(&self) -> Filter {
        Filter::new(self.node.append("filter"))
    }

    /// Appends an element to `must`.
    pub fn add_must(&self) -> Must {
        Must::new(self.node.append("must"))
    }

    /// Appends an element to `should`.
    pub fn add_should(&self) -> Should {
        Should::new(self.node.append("should"))
    }

    /// Sets `minimum_should_match`.
    ///
    /// Unlike the clause setters this is not guarded: a later call replaces
    /// the earlier value.
    pub fn set_minimum_should_match(&self, minimum_should_match: impl Into<Value>) -> &Self {
        self.node
            .assign("minimum_should_match", minimum_should_match.into());
        self
    }
}
