//! Spreadsheet formula parsing for Rust
//!
//! This crate bundles the formula toolchain:
//! - Tokenizing and parsing formulas such as `(A1 + 2) * SUM(B1:B9)`
//! - Expression trees with infix and prefix rendering
//! - A sheet model that decides which cell names and ranges exist
//!
//! # Example
//!
//! ```
//! use cellform::{parse_str, Sheet};
//!
//! let sheet = Sheet::default();
//! let tree = parse_str("(A1 + 2) * sum(b1:b9)", &sheet)?;
//! assert_eq!(tree.to_string(), "(A1 + 2) * SUM(b1:b9)");
//! # Ok::<(), cellform::ParseError>(())
//! ```

// Re-export all public APIs from internal crates
pub use cellform_ast as ast;
pub use cellform_diagnostics as diagnostics;
pub use cellform_model as model;
pub use cellform_parser as parser;

// Convenience re-exports
pub use cellform_ast::{ExprTree, Expression};
pub use cellform_diagnostics::{ParseError, Result};
pub use cellform_model::{Model, Sheet, SheetConfig};
pub use cellform_parser::{parse_formula, parse_str};
