//! Command tokenization and dispatch.
//!
//! Parsing a command is split into two steps: a [`Tokenizer`] turns text into
//! tokens, and the [`Dispatcher`] walks those tokens through a grammar tree.
//! Either step can be used and tested on its own.

pub mod output;
pub mod router;
pub mod tokenizer;

pub use output::Dispatch;
pub use router::Dispatcher;
pub use tokenizer::{Tokenizer, TokenizerKind};
