//! cmdtree - a hierarchical command-grammar dispatcher.
//!
//! Commands are tokenized, walked through a tree of named syntax nodes, and
//! dispatched to the action of the executable node the walk reaches.

pub mod commands;
pub mod config;
pub mod error;
pub mod grammar;
pub mod logging;
pub mod templates;

pub use commands::{Dispatch, Dispatcher, Tokenizer, TokenizerKind};
pub use error::{GrammarError, Result};
pub use grammar::{NodeId, NotFound, StoreId, SyntaxTree, NOT_FOUND, WILDCARD};
