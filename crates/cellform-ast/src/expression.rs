//! Expression nodes and the arena that owns them

use crate::{BinaryOp, ExprTree, RangeFunction};
use std::ops::Index;

/// Handle to a node stored in an [`ExprArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(usize);

impl ExprId {
    /// Position of the node in creation order
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// All formula expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Numeric literal
    Number(f64),
    /// String literal, without its quote delimiters
    Text(String),
    /// Cell reference such as `A3`
    Identifier(String),
    /// Binary arithmetic operation
    Binary(BinaryExpr),
    /// Range function call such as `SUM(A1:B2)`
    Range(RangeCall),
}

impl Expression {
    /// Create a binary operation over two existing nodes
    pub fn binary(op: BinaryOp, left: ExprId, right: ExprId) -> Self {
        Self::Binary(BinaryExpr { op, left, right })
    }

    /// Operator precedence of this node, if it is an operation
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Self::Binary(binary) => Some(binary.op.precedence()),
            _ => None,
        }
    }
}

/// Binary operation expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: ExprId,
    pub right: ExprId,
}

/// Range function call over a block of cells
///
/// The boundary names were accepted by the model as a valid range when the
/// call was parsed; the node only keeps them by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCall {
    pub function: RangeFunction,
    pub start: String,
    pub end: String,
}

impl RangeCall {
    pub fn new(function: RangeFunction, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            function,
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Storage for every node built during one parse, in creation order
///
/// Children are always allocated before their parent, so handles only ever
/// point backwards and the stored graph cannot contain a cycle. Dropping the
/// arena releases every node it holds, linked into a tree or not.
#[derive(Debug, Default)]
pub struct ExprArena {
    nodes: Vec<Expression>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its handle
    pub fn alloc(&mut self, expr: Expression) -> ExprId {
        if let Expression::Binary(binary) = &expr {
            debug_assert!(binary.left.0 < self.nodes.len());
            debug_assert!(binary.right.0 < self.nodes.len());
        }
        let id = ExprId(self.nodes.len());
        self.nodes.push(expr);
        id
    }

    /// Get the node behind `id`, if it belongs to this arena
    pub fn get(&self, id: ExprId) -> Option<&Expression> {
        self.nodes.get(id.0)
    }

    /// Number of nodes allocated so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Turn the arena into a tree rooted at `root`
    pub fn into_tree(self, root: ExprId) -> ExprTree {
        ExprTree::new(self, root)
    }

    /// Drop every node, returning how many were released
    pub fn release(self) -> usize {
        self.nodes.len()
    }
}

impl Index<ExprId> for ExprArena {
    type Output = Expression;

    fn index(&self, id: ExprId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
