//! Formula entry points

use crate::expression::{parse_expr, PResult};
use crate::scanner::{Scanner, TokenScanner};
use cellform_ast::{ExprArena, ExprId, ExprTree};
use cellform_diagnostics::{ParseError, Result, SyntaxError};
use cellform_model::Model;
use log::{debug, warn};

/// Parse one complete formula from `scanner`
///
/// Cell names and ranges are checked against `model`. On failure every node
/// built so far is released, the detailed syntax error is logged at `warn`
/// level, and a generic [`ParseError`] carrying that detail as its source is
/// returned.
pub fn parse_formula<S, M>(scanner: &mut S, model: &M) -> Result<ExprTree>
where
    S: Scanner + ?Sized,
    M: Model + ?Sized,
{
    let mut arena = ExprArena::new();
    match parse_top_level(scanner, model, &mut arena) {
        Ok(root) => Ok(arena.into_tree(root)),
        Err(detail) => {
            match detail.span() {
                Some(span) => warn!("{detail} (at {span})"),
                None => warn!("{detail}"),
            }
            let released = arena.release();
            debug!("released {released} pending expression nodes");
            Err(ParseError::new(detail, released))
        }
    }
}

/// Parse formula source text
pub fn parse_str<M>(source: &str, model: &M) -> Result<ExprTree>
where
    M: Model + ?Sized,
{
    parse_formula(&mut TokenScanner::new(source), model)
}

fn parse_top_level<S, M>(scanner: &mut S, model: &M, arena: &mut ExprArena) -> PResult<ExprId>
where
    S: Scanner + ?Sized,
    M: Model + ?Sized,
{
    let root = parse_expr(scanner, model, arena, 0)?;
    if scanner.has_more_tokens() {
        let token = scanner.next_token();
        return Err(SyntaxError::unexpected_token(token.text(), token.span()));
    }
    Ok(root)
}
