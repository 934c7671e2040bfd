use super::*;
use crate::ast::BlockStatement;

impl<'a> Parser<'a> {
    /// Parses a statement starting at `current_token`.
    /// Returns `None` if the statement could not be parsed. The error is recorded.
    pub fn parse_statement(&mut self) -> Option<Statement> {
        log::trace!("parse statement at {:?}", self.current_token);

        self.nested(|parser| match parser.current_token.kind {
            TokenKind::Let => parser.parse_let_stmt(),
            TokenKind::Return => parser.parse_return_stmt(),
            TokenKind::LBrace => {
                let block = parser.parse_block_stmt();
                parser.eat_semicolon();
                Some(Statement::Block(block))
            }
            _ => parser.parse_expr_stmt(),
        })
    }

    /// Parses the statements between `{` and `}`. `current_token` must be the `{`.
    /// A missing `}` silently ends the block at the end of input.
    pub fn parse_block_stmt(&mut self) -> BlockStatement {
        let token = self.current_token.clone();
        self.next();

        let mut statements = Vec::new();
        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next();
        }

        BlockStatement { token, statements }
    }

    fn parse_let_stmt(&mut self) -> Option<Statement> {
        let token = self.current_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            self.skip_statement();
            return None;
        }
        let name = Identifier::new(self.current_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            self.skip_statement();
            return None;
        }
        self.next();

        let value = self.parse_expr(Precedence::Lowest);
        self.eat_semicolon();
        Some(Statement::Let {
            token,
            name,
            value: value?,
        })
    }

    fn parse_return_stmt(&mut self) -> Option<Statement> {
        let token = self.current_token.clone();
        self.next();

        let value = self.parse_expr(Precedence::Lowest);
        self.eat_semicolon();
        Some(Statement::Return {
            token,
            value: value?,
        })
    }

    fn parse_expr_stmt(&mut self) -> Option<Statement> {
        let token = self.current_token.clone();

        let expr = self.parse_expr(Precedence::Lowest);
        self.eat_semicolon();
        Some(Statement::Expression { token, expr: expr? })
    }
}
