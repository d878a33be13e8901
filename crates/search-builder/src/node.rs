//! Shared node tree behind every builder handle.
//!
//! A search body is stored as an arena of mapping nodes. Builders never own
//! data; each one is a [`Node`] handle holding the shared tree plus the id of the
//! node it writes to. Nodes are only ever appended to the arena, so an id handed
//! out once stays valid for as long as any handle keeps the tree alive.
//!
//! Two handles into the same tree observe each other's writes, which is what
//! lets a `Filter` returned deep inside a bool query show up in the final
//! `build()` of the search that created it.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use crate::error::{BuilderError, BuilderResult};

/// Index of a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// What a key of a node holds.
#[derive(Debug)]
enum Slot {
    /// An opaque caller-supplied value.
    Value(Value),
    /// A nested mapping node.
    Node(NodeId),
    /// An append-only list of mapping nodes (`filter`, `must`, `should`).
    List(Vec<NodeId>),
}

/// Arena of mapping nodes. Entries keep insertion order.
#[derive(Debug, Default)]
pub(crate) struct Tree {
    nodes: Vec<Vec<(String, Slot)>>,
}

impl Tree {
    fn alloc(&mut self) -> NodeId {
        self.nodes.push(Vec::new());
        NodeId(self.nodes.len() - 1)
    }

    fn contains(&self, id: NodeId, key: &str) -> bool {
        self.nodes[id.0].iter().any(|(k, _)| k == key)
    }

    fn child_id(&self, id: NodeId, key: &str) -> Option<NodeId> {
        self.nodes[id.0].iter().find_map(|(k, slot)| match slot {
            Slot::Node(child) if k == key => Some(*child),
            _ => None,
        })
    }

    fn slot_mut(&mut self, id: NodeId, key: &str) -> Option<&mut Slot> {
        self.nodes[id.0]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, slot)| slot)
    }

    /// Writes `slot` under `key`, replacing in place if the key is present.
    fn put(&mut self, id: NodeId, key: &str, slot: Slot) {
        match self.slot_mut(id, key) {
            Some(existing) => *existing = slot,
            None => self.nodes[id.0].push((key.to_string(), slot)),
        }
    }

    /// Renders the subtree rooted at `id` as a JSON object.
    pub(crate) fn render(&self, id: NodeId) -> Value {
        let mut map = Map::new();
        for (key, slot) in &self.nodes[id.0] {
            let value = match slot {
                Slot::Value(value) => value.clone(),
                Slot::Node(child) => self.render(*child),
                Slot::List(items) => {
                    Value::Array(items.iter().map(|item| self.render(*item)).collect())
                }
            };
            map.insert(key.clone(), value);
        }
        Value::Object(map)
    }
}

/// A tree shared by every handle created from one root builder.
pub(crate) type SharedTree = Arc<Mutex<Tree>>;

/// Handle over one mapping node of a shared tree.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    tree: SharedTree,
    id: NodeId,
}

impl Node {
    /// Creates a fresh tree holding a single empty node.
    pub(crate) fn root() -> Self {
        Self::alloc(&SharedTree::default())
    }

    /// Allocates a new empty node in `tree` that no other node references.
    pub(crate) fn alloc(tree: &SharedTree) -> Self {
        let id = tree.lock().alloc();
        Self {
            tree: Arc::clone(tree),
            id,
        }
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    fn with_id(&self, id: NodeId) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            id,
        }
    }

    /// Assigns `key` once; fails if the key is already present.
    pub(crate) fn set_once(
        &self,
        key: &str,
        value: Value,
        field: &'static str,
    ) -> BuilderResult<()> {
        let mut tree = self.tree.lock();
        if tree.contains(self.id, key) {
            tracing::debug!(key, field, "rejected second assignment");
            return Err(BuilderError::AlreadySet { field });
        }
        tree.put(self.id, key, Slot::Value(value));
        Ok(())
    }

    /// Assigns `key` unconditionally, overwriting any previous value.
    pub(crate) fn assign(&self, key: &str, value: Value) {
        self.tree.lock().put(self.id, key, Slot::Value(value));
    }

    /// Inserts an empty node under `key`; fails with `err()` if the key is present.
    pub(crate) fn create_once(
        &self,
        key: &str,
        err: impl FnOnce() -> BuilderError,
    ) -> BuilderResult<Node> {
        let mut tree = self.tree.lock();
        if tree.contains(self.id, key) {
            let err = err();
            tracing::debug!(key, error = %err, "rejected duplicate creation");
            return Err(err);
        }
        let child = tree.alloc();
        tree.put(self.id, key, Slot::Node(child));
        tracing::trace!(key, node = child.0, "created node");
        Ok(self.with_id(child))
    }

    /// Returns the node under `key`, inserting an empty one if absent.
    pub(crate) fn child(&self, key: &str) -> Node {
        let mut tree = self.tree.lock();
        if let Some(existing) = tree.child_id(self.id, key) {
            return self.with_id(existing);
        }
        let child = tree.alloc();
        tree.put(self.id, key, Slot::Node(child));
        tracing::trace!(key, node = child.0, "created node");
        self.with_id(child)
    }

    /// Appends a new empty node to the list under `key`, creating the list on
    /// first use.
    pub(crate) fn append(&self, key: &str) -> Node {
        let mut tree = self.tree.lock();
        let child = tree.alloc();
        match tree.slot_mut(self.id, key) {
            Some(Slot::List(items)) => items.push(child),
            _ => tree.put(self.id, key, Slot::List(vec![child])),
        }
        tracing::trace!(key, node = child.0, "appended node");
        self.with_id(child)
    }

    /// Renders this node and everything below it.
    pub(crate) fn render(&self) -> Value {
        self.tree.lock().render(self.id)
    }
}
