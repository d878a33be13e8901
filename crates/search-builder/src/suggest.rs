//! Named suggester builder.

use serde_json::Value;

use crate::error::BuilderResult;
use crate::node::Node;

/// Builds one named entry under a search body's `suggest` object.
#[derive(Debug, Clone)]
pub struct SuggestBuilder {
    node: Node,
}

impl SuggestBuilder {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// Sets the suggestion `text`.
    pub fn set_suggest_text(&self, text: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("text", text.into(), "text")?;
        Ok(self)
    }

    /// Sets the `completion` suggester options.
    pub fn set_suggest_completion(&self, completion: impl Into<Value>) -> BuilderResult<&Self> {
        self.node.set_once("completion", completion.into(), "completion")?;
        Ok(self)
    }
}
