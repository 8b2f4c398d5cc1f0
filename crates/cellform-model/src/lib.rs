//! Spreadsheet model abstraction
//!
//! This crate provides:
//! - The [`Model`] trait the formula parser consults for name and range checks
//! - A1-style cell names
//! - A fixed-size [`Sheet`] implementation configured from JSON

mod cell;
mod error;
mod sheet;

pub use cell::*;
pub use error::*;
pub use sheet::*;

/// Read-only view of a spreadsheet used while parsing formulas
///
/// The parser only asks questions; it never mutates the model. Sharing one
/// model between concurrent parses is safe whenever the implementation is
/// `Sync`.
pub trait Model {
    /// Whether `name` refers to a cell of this model
    fn is_valid_name(&self, name: &str) -> bool;

    /// Whether `start:end` denotes a block of cells of this model
    fn is_valid_range(&self, start: &str, end: &str) -> bool;
}
