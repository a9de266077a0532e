//! The NotFound sentinel.
//!
//! Every node falls back to [`NOT_FOUND`] when neither a literal child nor a
//! wildcard child matches. The sentinel is a reserved handle rather than a stored
//! node: resolving anything beneath it yields the sentinel again, attaching to it
//! does nothing, and the diagnostic it produces for a token is a plain value.

use super::node::NodeId;
use std::fmt;

/// Handle of the NotFound sentinel.
pub const NOT_FOUND: NodeId = NodeId::SENTINEL;

/// Name reported for the sentinel.
pub const NOT_FOUND_NAME: &str = "notFound";

/// Diagnostic produced when a command does not resolve to an executable node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotFound {
    token: String,
}

impl NotFound {
    /// Manufactures the diagnostic for an unresolved token.
    ///
    /// Equal tokens always produce equal diagnostics.
    pub fn for_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The token the diagnostic refers to.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NOT_FOUND_NAME}: no command matches '{}'", self.token)
    }
}
