//! Formula error types

use crate::Span;
use thiserror::Error;

/// Message carried by every [`ParseError`], whatever the underlying cause
pub const PARSE_FAILURE_MESSAGE: &str = "Error while parsing expression.";

/// A grammar violation detected while reading a formula
///
/// Syntax errors are raised at the point of detection and never recovered
/// from. Only the top-level entry point sees them; callers of the parser
/// receive a [`ParseError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    message: String,
    span: Option<Span>,
}

impl SyntaxError {
    /// Create a syntax error without location
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    /// Create a syntax error located at `span`
    pub fn at(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }

    /// `Unexpected token "<text>"`
    pub fn unexpected_token(text: &str, span: Span) -> Self {
        Self::at(format!("Unexpected token \"{text}\""), span)
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Location of the offending input, if known
    pub fn span(&self) -> Option<Span> {
        self.span
    }
}

/// Failure of a whole formula parse
///
/// Displays only the generic [`PARSE_FAILURE_MESSAGE`]. The syntax error
/// that triggered the failure is kept as the error source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error while parsing expression.")]
pub struct ParseError {
    #[source]
    detail: SyntaxError,
    released_nodes: usize,
}

impl ParseError {
    /// Wrap the syntax error that aborted a parse
    pub fn new(detail: SyntaxError, released_nodes: usize) -> Self {
        Self {
            detail,
            released_nodes,
        }
    }

    /// The syntax error that aborted the parse
    pub fn detail(&self) -> &SyntaxError {
        &self.detail
    }

    /// Number of expression nodes built before the failure and released with it
    pub fn released_nodes(&self) -> usize {
        self.released_nodes
    }
}
