//! Multi-search (`_msearch`) builder.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::node::{Node, SharedTree};
use crate::search::SearchBodyBuilder;

/// Builds an ordered list of (header, body) pairs for an `_msearch` request.
///
/// Every body lives in one tree owned by this builder. The handles returned by
/// [`create_search`](Self::create_search) write into that tree, so changes made
/// through them after the call are still picked up by [`build`](Self::build).
///
/// # Example
///
/// ```
/// use es_search_builder::MultiSearchBuilder;
/// use serde_json::json;
///
/// # fn main() -> es_search_builder::BuilderResult<()> {
/// let mut msearch = MultiSearchBuilder::new();
/// msearch
///     .create_search(json!({ "index": "patients" }))
///     .set_search_take(5)?;
///
/// assert_eq!(
///     msearch.build(),
///     vec![json!({ "index": "patients" }), json!({ "size": 5 })]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MultiSearchBuilder {
    tree: SharedTree,
    searches: Vec<(Value, Node)>,
}

impl MultiSearchBuilder {
    /// Creates an empty multi-search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a search with the given header and an empty body.
    ///
    /// The header is stored as given and is not validated.
    pub fn create_search(&mut self, header: impl Into<Value>) -> SearchBodyBuilder {
        let body = Node::alloc(&self.tree);
        tracing::trace!(position = self.searches.len(), "appended search");
        self.searches.push((header.into(), body.clone()));
        SearchBodyBuilder::new(body)
    }

    /// Flattens the searches into `[header, body, header, body, ...]`.
    ///
    /// The result always has twice as many elements as there were
    /// `create_search` calls. Each call renders the current state afresh.
    pub fn build(&self) -> Vec<Value> {
        let tree = self.tree.lock();
        self.searches
            .iter()
            .flat_map(|(header, body)| [header.clone(), tree.render(body.id())])
            .collect()
    }
}

impl Serialize for MultiSearchBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.build().serialize(serializer)
    }
}
