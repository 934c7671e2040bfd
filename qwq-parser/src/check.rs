//! Consistency check between AST nodes and the tokens they carry.

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::token::TokenKind;
use crate::visitor::{walk_block, walk_expr, walk_stmt, Visitor};

/// Returns a description of every node whose token kind does not match its variant.
/// An empty result means the tree is consistent.
pub fn check_tokens(program: &Program) -> Vec<String> {
    let mut checker = TokenCheck::default();
    for stmt in &program.statements {
        checker.visit_stmt(stmt);
    }
    checker.mismatches
}

#[derive(Default)]
struct TokenCheck {
    mismatches: Vec<String>,
}

impl TokenCheck {
    fn expect(&mut self, node: &str, actual: TokenKind, allowed: &[TokenKind]) {
        if !allowed.contains(&actual) {
            self.mismatches
                .push(format!("{} node carries a {} token", node, actual));
        }
    }
}

impl<'ast> Visitor<'ast> for TokenCheck {
    fn visit_expr(&mut self, expr: &'ast Expression) {
        use TokenKind::*;

        let kind = expr.token().kind;
        match expr {
            Expression::Identifier(_) => self.expect("identifier", kind, &[Ident]),
            Expression::IntegerLiteral { .. } => self.expect("integer", kind, &[Int]),
            Expression::BooleanLiteral { .. } => self.expect("boolean", kind, &[True, False]),
            Expression::Prefix { .. } => self.expect("prefix", kind, &[Minus, Bang]),
            Expression::Infix { .. } => self.expect(
                "infix",
                kind,
                &[Plus, Minus, Multi, Divide, Eq, Ne, Lt, Le, Gt, Ge],
            ),
            Expression::Suffix { .. } => {
                self.expect("suffix", kind, &[PlusPlus, MinusMinus, What])
            }
            Expression::If { .. } => self.expect("if", kind, &[If]),
            Expression::Function { params, .. } => {
                self.expect("function", kind, &[Function]);
                for param in params {
                    self.expect("parameter", param.token.kind, &[Ident]);
                }
            }
            Expression::Call { .. } => self.expect("call", kind, &[LParen]),
        }

        walk_expr(self, expr);
    }

    fn visit_stmt(&mut self, stmt: &'ast Statement) {
        match stmt {
            Statement::Let { token, name, .. } => {
                self.expect("let", token.kind, &[TokenKind::Let]);
                self.expect("let name", name.token.kind, &[TokenKind::Ident]);
            }
            Statement::Return { token, .. } => {
                self.expect("return", token.kind, &[TokenKind::Return])
            }
            // an expression statement starts with the first token of its expression
            Statement::Expression { .. } | Statement::Block(_) => {}
        }

        walk_stmt(self, stmt);
    }

    fn visit_block(&mut self, block: &'ast BlockStatement) {
        self.expect("block", block.token.kind, &[TokenKind::LBrace]);
        walk_block(self, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Identifier;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use crate::token::Token;

    #[test]
    fn test_parsed_program_is_consistent() {
        let source = r#"
            let add = fn(a, b) { return a + b; };
            if (add(1, 2) >= 3) { !true } else { -x++ };
            { let y = z?; y-- }"#;
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        assert!(parser.errors().is_empty());
        assert_eq!(check_tokens(&program), Vec::<String>::new());
    }

    #[test]
    fn test_reports_mismatch() {
        let program = Program {
            statements: vec![Statement::Expression {
                token: Token::new(TokenKind::Int, "1"),
                expr: Expression::Prefix {
                    token: Token::new(TokenKind::Plus, "+"),
                    right: Box::new(Expression::Identifier(Identifier::new(Token::new(
                        TokenKind::Int,
                        "1",
                    )))),
                },
            }],
        };
        assert_eq!(
            check_tokens(&program),
            vec![
                "prefix node carries a + token",
                "identifier node carries a INT token"
            ]
        );
    }
}
