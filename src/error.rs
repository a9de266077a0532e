//! Error types for cmdtree.
//!
//! Construction-time misuse and configuration problems are reported through
//! [`GrammarError`]. A command that fails to resolve at dispatch time is not an
//! error; it comes back as [`crate::commands::Dispatch::NotFound`].

use crate::grammar::{NodeId, StoreId};
use thiserror::Error;

/// Main error type for cmdtree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A child was attached to an executable node after it was created.
    #[error("Cannot attach children to executable node '{parent}'")]
    AttachToExecutable { parent: String },

    /// The bulk attach form was used on a capturing node.
    #[error("Capturing node '{parent}' only accepts children one at a time; use attach")]
    BulkAttachToCapturing { parent: String },

    /// A node handle that does not belong to this tree.
    #[error("Unknown node handle {0}")]
    UnknownNode(NodeId),

    /// A capture store handle that does not belong to this tree.
    #[error("Unknown capture store {0}")]
    UnknownStore(StoreId),

    /// A grammar template was given fewer callbacks than it has executable positions.
    #[error("Grammar template needs {expected} callbacks but {provided} were provided")]
    MissingCallback { expected: usize, provided: usize },

    /// Tokenizer pattern errors (invalid regex, bad group index, empty delimiter).
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Configuration errors (unreadable file, invalid TOML, unknown strategy).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GrammarError {
    /// Creates an attach-to-executable error for the named parent.
    pub fn attach_to_executable(parent: impl Into<String>) -> Self {
        Self::AttachToExecutable {
            parent: parent.into(),
        }
    }

    /// Creates a bulk-attach error for the named capturing parent.
    pub fn bulk_attach_to_capturing(parent: impl Into<String>) -> Self {
        Self::BulkAttachToCapturing {
            parent: parent.into(),
        }
    }

    /// Creates a pattern error with the given message.
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::AttachToExecutable { .. }
            | Self::BulkAttachToCapturing { .. }
            | Self::UnknownNode(_)
            | Self::UnknownStore(_) => "Construction Error",
            Self::MissingCallback { .. } => "Template Error",
            Self::Pattern(_) => "Pattern Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using GrammarError.
pub type Result<T> = std::result::Result<T, GrammarError>;
