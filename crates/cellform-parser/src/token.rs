//! Classified formula tokens

use cellform_diagnostics::Span;

/// Token classification assigned by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letters, digits and `_`, starting with a letter or `_`
    Word,
    /// Decimal number, optionally with fraction and exponent
    Number,
    /// Quoted string, delimiters included in the token text
    String,
    /// Any other single character
    Punct,
    /// End of input; its text is empty
    End,
}

/// A token and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// End-of-input marker at byte offset `pos`
    pub fn end(pos: usize) -> Self {
        Self::new(TokenKind::End, "", Span::point(pos))
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    /// Whether this is the punctuation character `symbol`
    pub fn is_punct(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == symbol
    }
}
