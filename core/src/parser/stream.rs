//! Forward-only cursor over the token sequence.

use super::tokenizer::{Token, TokenKind};

/// A peekable, forward-only token cursor. Never rewinds.
pub(crate) struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Returns the current token and advances past it.
    ///
    /// A kind mismatch or an exhausted stream is a parser defect, not a
    /// user error, and panics.
    pub(crate) fn consume(&mut self, expected: TokenKind) -> Token {
        let token = self
            .tokens
            .get(self.position)
            .unwrap_or_else(|| panic!("consumed past the end of the token stream"));
        assert_eq!(
            token.kind, expected,
            "expected a {expected:?} token, found {:?}",
            token.kind
        );
        self.position += 1;
        token.clone()
    }

    /// Asserts the kind of the current token without advancing.
    pub(crate) fn expect(&self, expected: TokenKind) -> &Token {
        let token = self
            .peek()
            .unwrap_or_else(|| panic!("expected a {expected:?} token, found end of stream"));
        assert_eq!(
            token.kind, expected,
            "expected a {expected:?} token, found {:?}",
            token.kind
        );
        token
    }
}
