//! The syntax tree: nodes, capture stores, and the NotFound sentinel.
//!
//! A grammar is built bottom-up in a [`SyntaxTree`]: leaves first, then the
//! branches that route to them. Node names are compared exactly, so `echo` and
//! `ECHO` are different tokens.

pub mod capture;
pub mod diagram;
pub mod node;
pub mod not_found;
pub mod tree;

pub use capture::{CaptureStores, Captures, StoreId};
pub use diagram::{render_mermaid, Direction};
pub use node::{Action, NodeId, NodeKind, SyntaxNode};
pub use not_found::{NotFound, NOT_FOUND, NOT_FOUND_NAME};
pub use tree::{NodeBuilder, SyntaxTree};

/// Reserved child name marking the fallback for any unmatched token.
///
/// Must never be used as a real command word.
pub const WILDCARD: &str = "^_^";
