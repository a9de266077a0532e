//! The syntax tree arena.
//!
//! Nodes are stored in a flat arena and refer to each other by [`NodeId`], so a
//! wildcard child that routes back to an ancestor is just another handle. The
//! tree also owns the capture stores; every operation that records or clears
//! captures takes `&mut self`, which keeps a tree from being dispatched on from
//! two places at once.

use super::capture::{CaptureStores, Captures, StoreId};
use super::node::{Action, NodeId, NodeKind, SyntaxNode};
use super::not_found::{NOT_FOUND, NOT_FOUND_NAME};
use crate::error::{GrammarError, Result};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Arena holding every node and capture store of a grammar.
#[derive(Debug)]
pub struct SyntaxTree<R> {
    nodes: Vec<SyntaxNode<R>>,
    stores: CaptureStores,
}

impl<R> Default for SyntaxTree<R> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            stores: CaptureStores::new(),
        }
    }
}

impl<R> SyntaxTree<R> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node for `id`. The sentinel has no stored node.
    pub fn node(&self, id: NodeId) -> Option<&SyntaxNode<R>> {
        if id.is_sentinel() {
            return None;
        }
        self.nodes.get(id.0)
    }

    /// Iterates over every stored node.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode<R>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Name of a node; the sentinel reports its own fixed name.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        if id.is_sentinel() {
            return Some(NOT_FOUND_NAME);
        }
        self.node(id).map(SyntaxNode::name)
    }

    pub fn help(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(SyntaxNode::help)
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(SyntaxNode::kind)
    }

    pub fn is_executable(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(SyntaxNode::is_executable)
    }

    /// Allocates a new, empty capture store.
    pub fn new_store(&mut self) -> StoreId {
        self.stores.create()
    }

    /// Returns true if both ids refer to the same logical capture store.
    pub fn same_store(&self, a: StoreId, b: StoreId) -> bool {
        self.stores.is_unified(a, b)
    }

    /// Values currently captured into `store`.
    pub fn captured(&self, store: StoreId) -> &[String] {
        self.stores.values(store)
    }

    /// Read-only view of all capture stores.
    pub fn captures(&self) -> Captures<'_> {
        self.stores.view()
    }

    /// Starts building a branch node.
    pub fn branch(&mut self, name: impl Into<String>) -> NodeBuilder<'_, R> {
        NodeBuilder::new(self, name.into())
    }

    /// Starts building a capturing node with its own new store.
    ///
    /// Use [`NodeBuilder::capture_into`] to share an existing store instead.
    pub fn capturing(&mut self, name: impl Into<String>) -> NodeBuilder<'_, R> {
        let mut builder = NodeBuilder::new(self, name.into());
        builder.capture = CaptureMode::Fresh;
        builder
    }

    /// Starts building an executable node with a zero-argument action.
    pub fn executable<F>(&mut self, name: impl Into<String>, f: F) -> NodeBuilder<'_, R>
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        let mut builder = NodeBuilder::new(self, name.into());
        builder.action = Some(Action::new(f));
        builder
    }

    /// Starts building an executable node whose action reads captured values.
    pub fn executable_with<F>(&mut self, name: impl Into<String>, f: F) -> NodeBuilder<'_, R>
    where
        F: Fn(&Captures<'_>) -> R + Send + Sync + 'static,
    {
        let mut builder = NodeBuilder::new(self, name.into());
        builder.action = Some(Action::with_captures(f));
        builder
    }

    /// Starts building an executable node that also captures into a new store.
    pub fn capturing_executable<F>(
        &mut self,
        name: impl Into<String>,
        f: F,
    ) -> NodeBuilder<'_, R>
    where
        F: Fn(&Captures<'_>) -> R + Send + Sync + 'static,
    {
        let mut builder = self.executable_with(name, f);
        builder.capture = CaptureMode::Fresh;
        builder
    }

    /// Attaches `child` to `parent` under the child's own name.
    ///
    /// A child named [`WILDCARD`](super::WILDCARD) becomes the parent's default.
    /// Attaching a capturing child to a capturing parent unifies their stores.
    /// Attaching to the sentinel is a no-op.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if parent.is_sentinel() {
            return Ok(());
        }
        let key = self.require(child)?.name().to_string();
        let parent_node = self.require(parent)?;
        if parent_node.is_executable() {
            return Err(GrammarError::attach_to_executable(parent_node.name()));
        }
        self.link(parent, key, child);
        Ok(())
    }

    /// Attaches several children, each under the key it is paired with.
    ///
    /// Capturing parents reject the bulk form; use [`attach`](Self::attach).
    pub fn attach_many<I, K>(&mut self, parent: NodeId, children: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, NodeId)>,
        K: Into<String>,
    {
        if parent.is_sentinel() {
            return Ok(());
        }
        let parent_node = self.require(parent)?;
        if parent_node.is_executable() {
            return Err(GrammarError::attach_to_executable(parent_node.name()));
        }
        if parent_node.is_capturing() {
            return Err(GrammarError::bulk_attach_to_capturing(parent_node.name()));
        }

        let children: Vec<(String, NodeId)> = children
            .into_iter()
            .map(|(key, id)| (key.into(), id))
            .collect();
        for (_, id) in &children {
            self.require(*id)?;
        }
        for (key, id) in children {
            self.link(parent, key, id);
        }
        Ok(())
    }

    /// Resolves `token` beneath `id`, recording wildcard captures.
    ///
    /// Falls back to the wildcard child, then to [`NOT_FOUND`]. On a capturing
    /// node a wildcard fallback first records `token` into the node's store.
    pub fn get(&mut self, id: NodeId, token: &str) -> NodeId {
        let Some(node) = self.node(id) else {
            return NOT_FOUND;
        };
        let Some((child, fell_back)) = node.resolve(token) else {
            return NOT_FOUND;
        };
        if let Some(store) = node.capture_store().filter(|_| fell_back) {
            trace!(node = node.name(), token, "capturing wildcard token");
            self.stores.push(store, token);
        }
        child
    }

    /// Resolves `token` beneath `id` without recording anything.
    pub fn lookup(&self, id: NodeId, token: &str) -> NodeId {
        self.node(id)
            .and_then(|node| node.resolve(token))
            .map_or(NOT_FOUND, |(child, _)| child)
    }

    /// Runs the action of an executable node.
    ///
    /// Returns `None` if `id` is not executable.
    pub fn execute(&self, id: NodeId) -> Option<R> {
        let action = self.node(id)?.action()?;
        Some(action.call(&self.stores.view()))
    }

    /// Empties every capture store reachable from `root`.
    pub fn clear_captures(&mut self, root: NodeId) {
        let mut visited = HashSet::new();
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.nodes.get(id.0) else {
                continue;
            };
            if let Some(store) = node.capture_store() {
                self.stores.clear(store);
            }
            pending.extend(node.children().map(|(_, child)| child));
        }
    }

    fn require(&self, id: NodeId) -> Result<&SyntaxNode<R>> {
        self.node(id).ok_or(GrammarError::UnknownNode(id))
    }

    /// Inserts the edge and unifies capture stores. Both ids must be valid.
    fn link(&mut self, parent: NodeId, key: String, child: NodeId) {
        let parent_store = self.nodes[parent.0].capture_store();
        let child_store = self.nodes[child.0].capture_store();
        if let (Some(parent_store), Some(child_store)) = (parent_store, child_store) {
            self.stores.unify(parent_store, child_store);
        }

        let parent_node = &mut self.nodes[parent.0];
        if let Some(previous) = parent_node.insert_child(key, child) {
            if previous != child {
                debug!(
                    parent = parent_node.name(),
                    "replaced existing child {previous} with {child}"
                );
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CaptureMode {
    None,
    Fresh,
    Into(StoreId),
}

/// Builder for a single node, created by the [`SyntaxTree`] constructors.
///
/// Children given here are wired at creation time, which is the only way an
/// executable node can receive children.
#[must_use = "call build() to insert the node into the tree"]
pub struct NodeBuilder<'t, R> {
    tree: &'t mut SyntaxTree<R>,
    name: String,
    help: Option<String>,
    alias: Option<String>,
    children: Vec<NodeId>,
    capture: CaptureMode,
    action: Option<Action<R>>,
}

impl<'t, R> NodeBuilder<'t, R> {
    fn new(tree: &'t mut SyntaxTree<R>, name: String) -> Self {
        Self {
            tree,
            name,
            help: None,
            alias: None,
            children: Vec::new(),
            capture: CaptureMode::None,
            action: None,
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Display name used by diagrams and help output. Never used for matching.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn child(mut self, child: NodeId) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.children.extend(children);
        self
    }

    /// Makes the node capture into an existing store.
    pub fn capture_into(mut self, store: StoreId) -> Self {
        self.capture = CaptureMode::Into(store);
        self
    }

    /// Inserts the node and returns its handle.
    pub fn build(self) -> Result<NodeId> {
        let Self {
            tree,
            name,
            help,
            alias,
            children,
            capture,
            action,
        } = self;

        for child in &children {
            tree.require(*child)?;
        }
        let store = match capture {
            CaptureMode::None => None,
            CaptureMode::Fresh => Some(tree.stores.create()),
            CaptureMode::Into(store) if tree.stores.contains(store) => Some(store),
            CaptureMode::Into(store) => return Err(GrammarError::UnknownStore(store)),
        };

        let id = NodeId(tree.nodes.len());
        tree.nodes
            .push(SyntaxNode::new(name, help, alias, store, action));
        for child in children {
            let key = tree.nodes[child.0].name().to_string();
            tree.link(id, key, child);
        }
        trace!(name = tree.nodes[id.0].name(), "built {id}");
        Ok(id)
    }
}
