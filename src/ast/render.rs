//! Text rendering of parse trees.
//!
//! Each visible node takes one line: `"|  "` repeated once per level of
//! depth, then `"|"`, then the node's label. Leaves render as
//! `<Kind> : '<lexeme>'`. Transparent nodes take no line and no depth;
//! their children are rendered in their place. Lines are separated by a
//! newline, with none after the last.
//!
//! ```text
//! |Relation
//! |  |Atom
//! |  |  |Id : 'f'
//! ```

use super::node::ParseNode;

const INDENT: &str = "|  ";

impl ParseNode {
    /// Renders the tree rooted at this node.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = vec![];
        // Walked with an explicit stack so that long right-nested chains
        // cannot overflow the call stack.
        let mut pending = vec![(self, 0usize)];

        while let Some((node, depth)) = pending.pop() {
            let child_depth = match node {
                ParseNode::Leaf { kind, lexeme } => {
                    lines.push(format!("{}|{} : '{}'", INDENT.repeat(depth), kind, lexeme));
                    continue;
                }
                ParseNode::Structural { label, .. } => {
                    lines.push(format!("{}|{}", INDENT.repeat(depth), label));
                    depth + 1
                }
                ParseNode::Transparent(_) => depth,
            };

            pending.extend(node.children().iter().rev().map(|child| (child, child_depth)));
        }

        lines.join("\n")
    }
}
