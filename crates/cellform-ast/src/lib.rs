//! Spreadsheet formula expression tree
//!
//! Nodes live in an [`ExprArena`] and refer to their children through
//! [`ExprId`] handles. A finished parse hands the arena over to an
//! [`ExprTree`], which owns every node reachable from its root.

mod expression;
mod function;
mod operator;
mod tree;

pub use expression::*;
pub use function::*;
pub use operator::*;
pub use tree::*;
