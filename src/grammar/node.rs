//! Syntax node records.
//!
//! A node is one addressable position in the grammar. Its variant is derived from
//! what it carries: an action makes it executable, a capture store makes it
//! capturing, neither makes it a plain branch.

use super::capture::{Captures, StoreId};
use super::WILDCARD;
use std::collections::HashMap;
use std::fmt;

/// Stable handle to a node inside a [`SyntaxTree`](super::SyntaxTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const SENTINEL: Self = Self(usize::MAX);

    /// Returns true for the NotFound sentinel handle.
    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// Position of the node in its tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            write!(f, "node#notFound")
        } else {
            write!(f, "node#{}", self.0)
        }
    }
}

/// The variant of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Pure routing node.
    Branch,
    /// Node with an action. May also capture.
    Executable,
    /// Node that records wildcard tokens.
    Capturing,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch => write!(f, "Branch"),
            Self::Executable => write!(f, "Executable"),
            Self::Capturing => write!(f, "Capturing"),
        }
    }
}

/// The operation run when dispatch stops on an executable node.
pub struct Action<R> {
    f: Box<dyn Fn(&Captures<'_>) -> R + Send + Sync>,
}

impl<R> Action<R> {
    /// Wraps a zero-argument operation.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self {
            f: Box::new(move |_| f()),
        }
    }

    /// Wraps an operation that reads captured values.
    pub fn with_captures<F>(f: F) -> Self
    where
        F: Fn(&Captures<'_>) -> R + Send + Sync + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Runs the action.
    pub fn call(&self, captures: &Captures<'_>) -> R {
        (self.f)(captures)
    }
}

impl<R> fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// One node of the grammar tree.
#[derive(Debug)]
pub struct SyntaxNode<R> {
    name: String,
    help: Option<String>,
    alias: Option<String>,
    children: HashMap<String, NodeId>,
    default_child: Option<NodeId>,
    capture: Option<StoreId>,
    action: Option<Action<R>>,
}

impl<R> SyntaxNode<R> {
    pub(crate) fn new(
        name: String,
        help: Option<String>,
        alias: Option<String>,
        capture: Option<StoreId>,
        action: Option<Action<R>>,
    ) -> Self {
        Self {
            name,
            help,
            alias,
            children: HashMap::new(),
            default_child: None,
            capture,
            action,
        }
    }

    /// The name this node is matched by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional description of this grammar position.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Optional display name.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The alias if set, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn kind(&self) -> NodeKind {
        if self.action.is_some() {
            NodeKind::Executable
        } else if self.capture.is_some() {
            NodeKind::Capturing
        } else {
            NodeKind::Branch
        }
    }

    pub fn is_executable(&self) -> bool {
        self.action.is_some()
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Store this node records wildcard tokens into.
    pub fn capture_store(&self) -> Option<StoreId> {
        self.capture
    }

    pub fn action(&self) -> Option<&Action<R>> {
        self.action.as_ref()
    }

    /// Literal child registered under `name`.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// All children keyed by the name they are registered under.
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child registered under the wildcard name.
    pub fn default_child(&self) -> Option<NodeId> {
        self.default_child
    }

    /// Resolves a token to a child.
    ///
    /// Returns the child and whether it is the wildcard slot. A token spelled
    /// like the wildcard lands in that slot too.
    pub(crate) fn resolve(&self, token: &str) -> Option<(NodeId, bool)> {
        match self.children.get(token) {
            Some(id) => Some((*id, token == WILDCARD)),
            None => self.default_child.map(|id| (id, true)),
        }
    }

    /// Inserts a child, updating the default when the key is the wildcard.
    ///
    /// Returns the child previously registered under that key.
    pub(crate) fn insert_child(&mut self, key: String, child: NodeId) -> Option<NodeId> {
        if key == WILDCARD {
            self.default_child = Some(child);
        }
        self.children.insert(key, child)
    }
}
