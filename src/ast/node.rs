use std::fmt::Display;

/// Labels of the structural (rendered) nodes, one per grammar production
/// that survives into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    Prolog,
    Module,
    TypeDecl,
    Type,
    Relation,
    Expression,
    Term,
    Atom,
}

impl Display for NodeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Id,
    Var,
}

impl Display for LeafKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One instance of a grammar production in the parse tree.
///
/// Trees are built bottom-up as productions succeed and are never mutated
/// afterwards. Chains nest as deep as the input is long, so dropping and
/// comparing walk the tree with an explicit stack. The derived `Clone` and
/// `Debug` still recurse once per level.
#[derive(Debug, Clone)]
pub enum ParseNode {
    /// An identifier or variable, rendered as `Id : 'foo'`.
    Leaf { kind: LeafKind, lexeme: String },
    /// A node that is rendered on its own line, with its children one
    /// level deeper.
    Structural {
        label: NodeLabel,
        children: Vec<ParseNode>,
    },
    /// A grouping that is never rendered itself; its children take its
    /// place at the same depth.
    Transparent(Vec<ParseNode>),
}

impl ParseNode {
    pub fn id(lexeme: impl Into<String>) -> Self {
        ParseNode::Leaf {
            kind: LeafKind::Id,
            lexeme: lexeme.into(),
        }
    }

    pub fn var(lexeme: impl Into<String>) -> Self {
        ParseNode::Leaf {
            kind: LeafKind::Var,
            lexeme: lexeme.into(),
        }
    }

    pub fn structural(label: NodeLabel, children: Vec<ParseNode>) -> Self {
        ParseNode::Structural { label, children }
    }

    pub fn transparent(children: Vec<ParseNode>) -> Self {
        ParseNode::Transparent(children)
    }

    /// Builds an `Atom`: the head identifier followed by one transparent
    /// node holding the argument sequence.
    pub fn atom(head: ParseNode, args: Vec<ParseNode>) -> Self {
        ParseNode::structural(NodeLabel::Atom, vec![head, ParseNode::transparent(args)])
    }

    pub fn label(&self) -> Option<NodeLabel> {
        match self {
            ParseNode::Structural { label, .. } => Some(*label),
            _ => None,
        }
    }

    pub fn lexeme(&self) -> Option<&str> {
        match self {
            ParseNode::Leaf { lexeme, .. } => Some(lexeme),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ParseNode::Transparent(_))
    }

    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Leaf { .. } => &[],
            ParseNode::Structural { children, .. } => children,
            ParseNode::Transparent(children) => children,
        }
    }

    /// The children as they appear once transparent nodes are spliced out.
    pub fn visible_children(&self) -> Vec<&ParseNode> {
        let mut visible = vec![];
        let mut pending = self.children().iter().rev().collect::<Vec<_>>();

        while let Some(node) = pending.pop() {
            match node {
                ParseNode::Transparent(children) => pending.extend(children.iter().rev()),
                _ => visible.push(node),
            }
        }

        visible
    }

    /// For an `Atom`, the arguments following its head.
    pub fn atom_arguments(&self) -> Option<&[ParseNode]> {
        match self {
            ParseNode::Structural {
                label: NodeLabel::Atom,
                children,
            } => Some(children.get(1).map(ParseNode::children).unwrap_or_default()),
            _ => None,
        }
    }

    /// Converts a term into the shape it takes in argument position: a
    /// zero-argument atom becomes its bare identifier, an atom with
    /// arguments is wrapped the way a parenthesised argument is.
    pub fn into_argument(mut self) -> ParseNode {
        let arity = self.atom_arguments().map(<[ParseNode]>::len);

        if arity == Some(0) {
            if let ParseNode::Structural { children, .. } = &mut self {
                if !children.is_empty() {
                    return children.swap_remove(0);
                }
            }
        }

        match arity {
            Some(_) => ParseNode::transparent(vec![self]),
            None => self,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<ParseNode>> {
        match self {
            ParseNode::Leaf { .. } => None,
            ParseNode::Structural { children, .. } | ParseNode::Transparent(children) => {
                Some(children)
            }
        }
    }
}

impl Drop for ParseNode {
    fn drop(&mut self) {
        let Some(children) = self.children_mut() else {
            return;
        };
        let mut pending = std::mem::take(children);

        // Every popped node hands its children to `pending` before it is
        // dropped, leaving it with nothing to recurse into.
        while let Some(mut node) = pending.pop() {
            if let Some(children) = node.children_mut() {
                pending.append(children);
            }
        }
    }
}

impl PartialEq for ParseNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (
                    ParseNode::Leaf { kind, lexeme },
                    ParseNode::Leaf {
                        kind: other_kind,
                        lexeme: other_lexeme,
                    },
                ) => {
                    if kind != other_kind || lexeme != other_lexeme {
                        return false;
                    }
                }
                (
                    ParseNode::Structural { label, children },
                    ParseNode::Structural {
                        label: other_label,
                        children: other_children,
                    },
                ) if label == other_label && children.len() == other_children.len() => {
                    pending.extend(children.iter().zip(other_children));
                }
                (ParseNode::Transparent(children), ParseNode::Transparent(other_children))
                    if children.len() == other_children.len() =>
                {
                    pending.extend(children.iter().zip(other_children));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for ParseNode {}

impl Display for ParseNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
