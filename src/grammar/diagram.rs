//! Mermaid rendering of a grammar.
//!
//! Read-only: walks the tree from the given roots and emits one node line per
//! reachable node and one edge per parent/child pair. Output is deterministic
//! (children are visited in name order) so it can be snapshot in tests.

use super::node::NodeId;
use super::tree::SyntaxTree;
use std::collections::HashSet;
use std::fmt::Write;

/// Layout direction of the rendered flowchart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    #[default]
    LeftRight,
    /// Bottom to top.
    BottomTop,
}

impl Direction {
    fn header(self) -> &'static str {
        match self {
            Self::LeftRight => "LR",
            Self::BottomTop => "BT",
        }
    }
}

/// Renders every node reachable from `roots` as a Mermaid flowchart.
pub fn render_mermaid<R>(
    tree: &SyntaxTree<R>,
    roots: impl IntoIterator<Item = NodeId>,
    direction: Direction,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "graph {}", direction.header());

    let mut visited = HashSet::new();
    let mut pending: Vec<NodeId> = roots.into_iter().collect();
    pending.reverse();

    while let Some(id) = pending.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(node) = tree.node(id) else {
            continue;
        };

        let label = escape(node.display_name());
        if node.is_executable() {
            let _ = writeln!(out, "    n{}([\"{label}\"])", id.index());
        } else {
            let _ = writeln!(out, "    n{}[\"{label}\"]", id.index());
        }

        let mut children: Vec<(&str, NodeId)> = node.children().collect();
        children.sort_unstable();
        for (_, child) in &children {
            let _ = writeln!(out, "    n{} --> n{}", id.index(), child.index());
        }
        pending.extend(children.into_iter().rev().map(|(_, child)| child));
    }

    out
}

fn escape(label: &str) -> String {
    label.replace('"', "#quot;")
}
