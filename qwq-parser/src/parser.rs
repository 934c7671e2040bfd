use crate::ast::{Expression, Identifier, Program, Statement};
use crate::lexer::Lexer;
use crate::token::{Precedence, Token, TokenKind};
use qwq_diagnostics::{ErrorReporter, SyntaxError};
use std::mem;

mod expr;
mod stmt;

/// Maximum nesting of expressions and statements. Deeper input is reported instead of overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Pratt parser with a two token window (`current_token`, `peek_token`).
///
/// Parsing never aborts. Structural failures are recorded and the parser continues with the next statement.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// The token under the cursor.
    current_token: Token,
    /// Cached token for peeking.
    peek_token: Token,
    /// Accumulated errors.
    errors: ErrorReporter,
    /// Number of expressions and statements currently being parsed.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            current_token: Token::eof(),
            peek_token: Token::eof(),
            errors: ErrorReporter::new(),
            depth: 0,
        };
        // prime both cursors
        parser.next();
        parser.next();
        parser
    }

    /// Parses statements until the end of input.
    /// The result may be missing statements that failed to parse. Check [`Self::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next();
        }

        program
    }

    /// Errors reported so far, in the order they were found.
    pub fn errors(&self) -> &[SyntaxError] {
        self.errors.errors()
    }

    /// Consumes `self` and returns the [`ErrorReporter`].
    pub fn into_errors(self) -> ErrorReporter {
        self.errors
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    /// Shifts `peek_token` into `current_token` and pulls a fresh token from the lexer.
    fn next(&mut self) {
        let token = self.lexer.next_token();
        self.current_token = mem::replace(&mut self.peek_token, token);
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advances if the next token is `kind`. Otherwise records an error and returns `false`.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next();
            true
        } else {
            self.error(format!("expect {}, got {}", kind, self.peek_token.kind));
            false
        }
    }

    /// Eats the optional `;` that ends a statement.
    fn eat_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next();
        }
    }

    /// Skips tokens up to the end of the current statement: a `;`, the end of input, or the token before a
    /// `}`, `let` or `return`. The closing brace of an enclosing block is left for the block.
    fn skip_statement(&mut self) {
        while !self.current_is(TokenKind::Semicolon)
            && !self.current_is(TokenKind::Eof)
            && !self.peek_is(TokenKind::RBrace)
            && !self.peek_is(TokenKind::Let)
            && !self.peek_is(TokenKind::Return)
        {
            self.next();
        }
    }

    /// Runs `parse` one nesting level deeper. Past [`MAX_NESTING_DEPTH`], reports an error and skips the
    /// rest of the statement instead.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.error("expression nested too deeply");
            self.skip_statement();
            return None;
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn error(&mut self, message: impl ToString) {
        self.errors.add_error(SyntaxError::new(message));
    }
}
