//! Formula token scanner using winnow

use crate::token::{Token, TokenKind};
use cellform_diagnostics::Span;
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::error::ModalResult;
use winnow::token::{any, one_of, take_while};
use winnow::Parser;

/// Source of classified tokens with one-token pushback
pub trait Scanner {
    /// Consume and return the next token, or an `End` token when exhausted
    fn next_token(&mut self) -> Token;

    /// Push a token back so the next call to `next_token` returns it
    fn save_token(&mut self, token: Token);

    /// Whether any token other than `End` remains
    fn has_more_tokens(&mut self) -> bool {
        let token = self.next_token();
        let more = !token.is_end();
        self.save_token(token);
        more
    }
}

/// Scanner over formula source text
///
/// Whitespace between tokens is skipped. Saved tokens are replayed last-in,
/// first-out before any more input is read.
#[derive(Debug, Clone)]
pub struct TokenScanner<'s> {
    source: &'s str,
    rest: &'s str,
    saved: Vec<Token>,
}

impl<'s> TokenScanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            rest: source,
            saved: Vec::new(),
        }
    }

    /// The full text being scanned
    pub fn source(&self) -> &'s str {
        self.source
    }

    fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    fn scan(&mut self) -> Token {
        self.rest = self.rest.trim_start();
        let start = self.offset();
        if self.rest.is_empty() {
            return Token::end(start);
        }

        match token.parse_next(&mut self.rest) {
            Ok((kind, text)) => Token::new(kind, text, Span::from(start..self.offset())),
            // `any` accepts every character, so this only guards the invariant.
            Err(_) => {
                let text = std::mem::take(&mut self.rest);
                Token::new(TokenKind::Punct, text, Span::from(start..self.source.len()))
            }
        }
    }
}

impl Scanner for TokenScanner<'_> {
    fn next_token(&mut self) -> Token {
        match self.saved.pop() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    fn save_token(&mut self, token: Token) {
        self.saved.push(token);
    }
}

impl Iterator for TokenScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}

fn token<'s>(input: &mut &'s str) -> ModalResult<(TokenKind, &'s str)> {
    alt((
        word.map(|text| (TokenKind::Word, text)),
        number.map(|text| (TokenKind::Number, text)),
        quoted.map(|text| (TokenKind::String, text)),
        any.take().map(|text| (TokenKind::Punct, text)),
    ))
    .parse_next(input)
}

fn word<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        one_of(|c: char| c.is_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// `12`, `1.5`, `.5`, `3.`, `6.02e23`, `1E-3`
fn number<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

/// Quoted string with backslash escapes, kept verbatim with its delimiters
fn quoted<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    let start = *input;
    let quote = opening_quote(input)?;
    loop {
        match next_char(input)? {
            '\\' => {
                next_char(input)?;
            }
            c if c == quote => break,
            _ => {}
        }
    }
    Ok(&start[..start.len() - input.len()])
}

fn opening_quote(input: &mut &str) -> ModalResult<char> {
    one_of(['"', '\'']).parse_next(input)
}

fn next_char(input: &mut &str) -> ModalResult<char> {
    any.parse_next(input)
}
