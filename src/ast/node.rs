use std::fmt;

use crate::ast::{LeafKind, LogicalOp, Predicate};

/// Abstract Syntax Tree node of a selection.
///
/// Either a leaf predicate or a logical operator with exactly two owned
/// children. Nodes are never shared and never mutated after the parser builds
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Single attribute comparison
    ///
    /// # Example
    /// ```text
    /// atom CA
    /// ```
    Leaf(Predicate),

    /// Logical combination of two selections
    ///
    /// # Example
    /// ```text
    /// atom CA and chain A
    /// ```
    Binary {
        op: LogicalOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(predicate: Predicate) -> Self {
        Node::Leaf(predicate)
    }

    pub fn binary(op: LogicalOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Resolved kind of a leaf; `None` for operator nodes.
    pub fn kind(&self) -> Option<LeafKind> {
        match self {
            Node::Leaf(predicate) => Some(predicate.kind()),
            Node::Binary { .. } => None,
        }
    }

    pub fn op(&self) -> Option<LogicalOp> {
        match self {
            Node::Binary { op, .. } => Some(*op),
            Node::Leaf(_) => None,
        }
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        match self {
            Node::Leaf(predicate) => Some(predicate),
            Node::Binary { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Binary { left, .. } => Some(left),
            Node::Leaf(_) => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Binary { right, .. } => Some(right),
            Node::Leaf(_) => None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Binary { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Height of the tree; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Indented, one-node-per-line rendering for diagnostics.
    ///
    /// ```text
    /// and
    ///   or
    ///     atom-name(CA)
    ///     atom-name(CB)
    ///   residue-name(ALA)
    /// ```
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, indent: usize) {
        out.push_str(&"  ".repeat(indent));
        match self {
            Node::Leaf(predicate) => {
                out.push_str(&format!("{}({})\n", predicate.kind(), predicate.value()));
            }
            Node::Binary { op, left, right } => {
                out.push_str(op.as_str());
                out.push('\n');
                left.write_tree(out, indent + 1);
                right.write_tree(out, indent + 1);
            }
        }
    }
}

/// Renders the tree back as selection source with every operator node
/// parenthesized, so the grouping the parser chose is explicit.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(predicate) => write!(f, "{predicate}"),
            Node::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
