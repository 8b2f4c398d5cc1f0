//! Formula diagnostics and error handling
//!
//! This crate provides the error types shared by the formula parser and its
//! collaborators, along with byte spans that locate tokens in the source.

mod error;
mod span;

pub use error::*;
pub use span::*;

/// Result type for public formula parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
