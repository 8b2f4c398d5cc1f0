//! Expression parser using recursive descent with precedence climbing
//!
//! Every node built here is allocated in the caller's [`ExprArena`], so a
//! parse that fails halfway leaves all partial results in one place for the
//! entry point to release.

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};
use cellform_ast::{BinaryOp, ExprArena, ExprId, Expression, RangeCall, RangeFunction};
use cellform_diagnostics::SyntaxError;
use cellform_model::Model;

pub(crate) type PResult<T> = Result<T, SyntaxError>;

/// Precedence of `token` as a binary operator
///
/// `+` and `-` bind at 1, `*` and `/` at 2. Anything else, including the
/// end of input, is 0 and stops every operator loop.
pub fn operator_precedence(token: &str) -> u8 {
    BinaryOp::from_symbol(token).map_or(0, |op| op.precedence())
}

/// Parse an expression whose operators all bind tighter than `min_precedence`
///
/// The right operand of each operator is parsed with that operator's own
/// precedence as the floor, so operators of equal precedence group left.
pub(crate) fn parse_expr<S, M>(
    scanner: &mut S,
    model: &M,
    arena: &mut ExprArena,
    min_precedence: u8,
) -> PResult<ExprId>
where
    S: Scanner + ?Sized,
    M: Model + ?Sized,
{
    let mut exp = parse_term(scanner, model, arena)?;

    loop {
        let token = scanner.next_token();
        let precedence = operator_precedence(token.text());
        let op = match BinaryOp::from_symbol(token.text()) {
            Some(op) if precedence > min_precedence => op,
            _ => {
                scanner.save_token(token);
                return Ok(exp);
            }
        };

        let rhs = parse_expr(scanner, model, arena, precedence)?;
        exp = arena.alloc(Expression::binary(op, exp, rhs));
    }
}

/// Parse a number, string, cell name, range call or parenthesized expression
fn parse_term<S, M>(scanner: &mut S, model: &M, arena: &mut ExprArena) -> PResult<ExprId>
where
    S: Scanner + ?Sized,
    M: Model + ?Sized,
{
    let token = scanner.next_token();

    let expr = match token.kind() {
        TokenKind::Word if model.is_valid_name(token.text()) => {
            Expression::Identifier(token.into_text())
        }
        TokenKind::Word => Expression::Range(parse_range_call(scanner, model, &token)?),
        TokenKind::Number => {
            let illegal = || {
                SyntaxError::at(format!("Illegal number \"{}\"", token.text()), token.span())
            };
            let value = token.text().parse::<f64>().map_err(|_| illegal())?;
            if !value.is_finite() {
                return Err(illegal());
            }
            Expression::Number(value)
        }
        TokenKind::String => Expression::Text(unquote(token.text()).to_string()),
        TokenKind::Punct if token.is_punct("(") => {
            // Parentheses only group; the inner node was allocated by whichever
            // rule built it.
            let inner = parse_expr(scanner, model, arena, 0)?;
            let close = scanner.next_token();
            if !close.is_punct(")") {
                return Err(SyntaxError::at("Unbalanced parentheses", close.span()));
            }
            return Ok(inner);
        }
        _ => return Err(SyntaxError::unexpected_token(token.text(), token.span())),
    };

    Ok(arena.alloc(expr))
}

/// Parse `NAME(start:end)` after a word that is not a cell name
///
/// The returned call is not allocated; `parse_term` stores it.
fn parse_range_call<S, M>(scanner: &mut S, model: &M, token: &Token) -> PResult<RangeCall>
where
    S: Scanner + ?Sized,
    M: Model + ?Sized,
{
    let function = RangeFunction::from_name(&token.text().to_uppercase())
        .ok_or_else(|| SyntaxError::unexpected_token(token.text(), token.span()))?;

    let open = scanner.next_token();
    if !open.is_punct("(") {
        return Err(SyntaxError::at("Missing ( after range function", open.span()));
    }

    let start = scanner.next_token();
    if !model.is_valid_name(start.text()) {
        return Err(SyntaxError::unexpected_token(start.text(), start.span()));
    }

    let colon = scanner.next_token();
    if !colon.is_punct(":") {
        return Err(SyntaxError::at(
            "Missing : in the middle of range function",
            colon.span(),
        ));
    }

    let end = scanner.next_token();
    if !model.is_valid_name(end.text()) {
        return Err(SyntaxError::unexpected_token(end.text(), end.span()));
    }

    if !model.is_valid_range(start.text(), end.text()) {
        return Err(SyntaxError::at(
            format!("Invalid range \"{}:{}\"", start.text(), end.text()),
            start.span().merge(end.span()),
        ));
    }

    let close = scanner.next_token();
    if !close.is_punct(")") {
        return Err(SyntaxError::at(
            "Missing ) at the end of range function",
            close.span(),
        ));
    }

    Ok(RangeCall::new(function, start.into_text(), end.into_text()))
}

/// Strip exactly the first and last character of a quoted token
fn unquote(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
