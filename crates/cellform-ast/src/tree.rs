//! Parsed formula trees

use crate::{ExprArena, ExprId, Expression};
use std::fmt;
use std::ops::Index;

/// A fully parsed formula
///
/// Owns the arena of every node built by the parse; the root and all of its
/// descendants are reached through [`ExprId`] handles into that arena.
#[derive(Debug)]
pub struct ExprTree {
    arena: ExprArena,
    root: ExprId,
}

impl ExprTree {
    pub(crate) fn new(arena: ExprArena, root: ExprId) -> Self {
        Self { arena, root }
    }

    /// Handle of the root node
    pub fn root_id(&self) -> ExprId {
        self.root
    }

    /// The root node
    pub fn root(&self) -> &Expression {
        &self.arena[self.root]
    }

    /// Get a node by handle
    pub fn get(&self, id: ExprId) -> Option<&Expression> {
        self.arena.get(id)
    }

    /// Number of nodes owned by the tree
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Compare the shape and contents of two trees, ignoring node handles
    pub fn structurally_eq(&self, other: &ExprTree) -> bool {
        nodes_eq(self, self.root, other, other.root)
    }

    /// Render as a fully parenthesized prefix expression
    ///
    /// `1 + 2 * 3` renders as `(+ 1 (* 2 3))`.
    pub fn to_sexpr(&self) -> String {
        Sexpr(self).to_string()
    }

    fn write_sexpr<W: fmt::Write>(&self, id: ExprId, out: &mut W) -> fmt::Result {
        match &self.arena[id] {
            Expression::Number(value) => write!(out, "{value}"),
            Expression::Text(text) => write_quoted(text, out),
            Expression::Identifier(name) => out.write_str(name),
            Expression::Binary(binary) => {
                write!(out, "({} ", binary.op.symbol())?;
                self.write_sexpr(binary.left, out)?;
                out.write_char(' ')?;
                self.write_sexpr(binary.right, out)?;
                out.write_char(')')
            }
            Expression::Range(call) => {
                write!(out, "({} {} {})", call.function, call.start, call.end)
            }
        }
    }

    fn fmt_node(&self, id: ExprId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arena[id] {
            Expression::Number(value) => write!(f, "{value}"),
            Expression::Text(text) => write_quoted(text, f),
            Expression::Identifier(name) => f.write_str(name),
            Expression::Binary(binary) => {
                let precedence = binary.op.precedence();
                self.fmt_operand(binary.left, precedence, false, f)?;
                write!(f, " {} ", binary.op.symbol())?;
                self.fmt_operand(binary.right, precedence, true, f)
            }
            Expression::Range(call) => {
                write!(f, "{}({}:{})", call.function, call.start, call.end)
            }
        }
    }

    // Operators group left, so a right operand of equal precedence needs
    // parentheses to keep its shape.
    fn fmt_operand(
        &self,
        id: ExprId,
        parent: u8,
        right: bool,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let needs_parens = match self.arena[id].precedence() {
            Some(child) => child < parent || (right && child == parent),
            None => false,
        };
        if needs_parens {
            f.write_str("(")?;
            self.fmt_node(id, f)?;
            f.write_str(")")
        } else {
            self.fmt_node(id, f)
        }
    }
}

impl Index<ExprId> for ExprTree {
    type Output = Expression;

    fn index(&self, id: ExprId) -> &Self::Output {
        &self.arena[id]
    }
}

impl PartialEq for ExprTree {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other)
    }
}

/// Infix rendering with the minimum parentheses needed to re-parse to the
/// same tree
impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(self.root, f)
    }
}

struct Sexpr<'t>(&'t ExprTree);

impl fmt::Display for Sexpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_sexpr(self.0.root, f)
    }
}

fn nodes_eq(a: &ExprTree, a_id: ExprId, b: &ExprTree, b_id: ExprId) -> bool {
    match (&a.arena[a_id], &b.arena[b_id]) {
        (Expression::Binary(x), Expression::Binary(y)) => {
            x.op == y.op && nodes_eq(a, x.left, b, y.left) && nodes_eq(a, x.right, b, y.right)
        }
        (Expression::Binary(_), _) | (_, Expression::Binary(_)) => false,
        (x, y) => x == y,
    }
}

// Double quotes unless the text holds an unescaped one. Text read from a
// single quoted token never holds both delimiters unescaped.
fn write_quoted<W: fmt::Write>(text: &str, out: &mut W) -> fmt::Result {
    let quote = if has_unescaped(text, '"') { '\'' } else { '"' };
    out.write_char(quote)?;
    out.write_str(text)?;
    out.write_char(quote)
}

fn has_unescaped(text: &str, quote: char) -> bool {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return true;
        }
    }
    false
}
