//! Converts source code into a stream of [`Token`]s.

use crate::token::{Token, TokenKind};
use logos::Logos;

/// Lazily scans tokens from a source string.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    /// Returns the next token in reading order.
    /// Once the input is exhausted, every call returns a [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(TokenKind::Ident) => {
                let word = self.inner.slice();
                Token::new(TokenKind::lookup_ident(word), word)
            }
            Some(kind) => Token::new(kind, self.inner.slice()),
            None => Token::eof(),
        }
    }
}

/// Yields every token up to (but not including) [`TokenKind::Eof`].
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}
