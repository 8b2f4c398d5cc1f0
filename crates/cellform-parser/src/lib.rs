//! Spreadsheet formula parser
//!
//! This crate turns formula text such as `(A1 + 2) * SUM(B1:B9)` into an
//! [`ExprTree`](cellform_ast::ExprTree). It is a recursive-descent parser
//! using precedence climbing for the binary operators, with cell names and
//! range functions resolved against a [`Model`](cellform_model::Model).

mod expression;
mod formula;
mod scanner;
mod token;

pub use expression::operator_precedence;
pub use formula::{parse_formula, parse_str};
pub use scanner::{Scanner, TokenScanner};
pub use token::{Token, TokenKind};
