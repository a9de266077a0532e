//! Command dispatch for cmdtree.
//!
//! The [`Dispatcher`] owns a grammar tree, the top-level command names that
//! enter it, and one tokenizer. `run` tokenizes the input, walks the tree one
//! token at a time, and runs the first executable node the walk settles on.
//!
//! The walk is greedy and never backtracks. An executable node with children
//! only runs early when the next token does not resolve beneath it; otherwise
//! the walk continues and the deeper node wins.

use super::output::Dispatch;
use super::tokenizer::Tokenizer;
use crate::config::DispatcherConfig;
use crate::error::{GrammarError, Result};
use crate::grammar::{render_mermaid, Direction, NodeId, NotFound, SyntaxTree, NOT_FOUND};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Tokenizes commands and dispatches them through a grammar tree.
#[derive(Debug)]
pub struct Dispatcher<R> {
    tree: SyntaxTree<R>,
    roots: HashMap<String, NodeId>,
    tokenizer: Tokenizer,
}

impl<R> Dispatcher<R> {
    /// Creates a dispatcher with an empty tree.
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self::with_tree(SyntaxTree::new(), tokenizer)
    }

    /// Creates a dispatcher over an already built tree.
    pub fn with_tree(tree: SyntaxTree<R>, tokenizer: Tokenizer) -> Self {
        Self {
            tree,
            roots: HashMap::new(),
            tokenizer,
        }
    }

    /// Creates a dispatcher with the configured tokenizer.
    pub fn from_config(config: &DispatcherConfig) -> Result<Self> {
        Ok(Self::new(config.tokenizer()?))
    }

    pub fn tree(&self) -> &SyntaxTree<R> {
        &self.tree
    }

    /// Mutable access for building the grammar.
    pub fn tree_mut(&mut self) -> &mut SyntaxTree<R> {
        &mut self.tree
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn set_tokenizer(&mut self, tokenizer: Tokenizer) {
        self.tokenizer = tokenizer;
    }

    /// Registers a top-level command under its node's name.
    pub fn register(&mut self, root: NodeId) -> Result<()> {
        let name = self
            .tree
            .node(root)
            .ok_or(GrammarError::UnknownNode(root))?
            .name()
            .to_string();
        self.register_as(name, root)
    }

    /// Registers a top-level command under an explicit name.
    pub fn register_as(&mut self, name: impl Into<String>, root: NodeId) -> Result<()> {
        if self.tree.node(root).is_none() {
            return Err(GrammarError::UnknownNode(root));
        }
        let name = name.into();
        debug!(command = %name, "registered {root}");
        self.roots.insert(name, root);
        Ok(())
    }

    /// Registered top-level command names, sorted.
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.roots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Root node registered under `name`, or the sentinel.
    pub fn get(&self, name: &str) -> NodeId {
        self.roots.get(name).copied().unwrap_or(NOT_FOUND)
    }

    /// Follows `tokens` without capturing or executing anything.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> NodeId {
        let Some((first, rest)) = tokens.split_first() else {
            return NOT_FOUND;
        };
        rest.iter().fold(self.get(first.as_ref()), |current, token| {
            self.tree.lookup(current, token.as_ref())
        })
    }

    /// Help text of the grammar position reached by `tokens`.
    pub fn help_at<S: AsRef<str>>(&self, tokens: &[S]) -> Option<&str> {
        self.tree.help(self.resolve(tokens))
    }

    /// Tokenizes and dispatches a command.
    pub fn run(&mut self, command: &str) -> Dispatch<R> {
        let tokens = self.tokenizer.tokenize(command);
        debug!(command, ?tokens, "dispatching");
        self.run_tokens(&tokens)
    }

    /// Dispatches an already tokenized command.
    ///
    /// Captures reachable from the entry node are cleared before returning,
    /// whether or not an action ran.
    pub fn run_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> Dispatch<R> {
        let Some(last) = tokens.len().checked_sub(1) else {
            return Dispatch::NotFound(NotFound::for_token(""));
        };

        let entry = self.get(tokens[0].as_ref());
        let mut current = entry;
        let mut result = None;

        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            if i > 0 {
                current = self.tree.get(current, token);
            }
            if current == NOT_FOUND {
                trace!(position = i, token, "token did not resolve");
                break;
            }
            if !self.tree.is_executable(current) {
                continue;
            }

            let descends =
                i < last && self.tree.lookup(current, tokens[i + 1].as_ref()) != NOT_FOUND;
            if descends {
                trace!(position = i, token, "executable node deferred to a deeper match");
                continue;
            }
            trace!(position = i, token, "executing {current}");
            result = self.tree.execute(current);
            break;
        }

        self.tree.clear_captures(entry);
        match result {
            Some(value) => Dispatch::Executed(value),
            None => {
                let token = tokens[last].as_ref();
                debug!(token, "no executable node reached");
                Dispatch::NotFound(NotFound::for_token(token))
            }
        }
    }

    /// Empties every capture store reachable from a registered command.
    pub fn clear_captures(&mut self) {
        for root in self.roots.values() {
            self.tree.clear_captures(*root);
        }
    }

    /// Renders every registered command as a Mermaid flowchart.
    pub fn diagram(&self, direction: Direction) -> String {
        let roots = self.commands().into_iter().map(|name| self.get(name));
        render_mermaid(&self.tree, roots, direction)
    }
}
