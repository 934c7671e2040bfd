//! Visitor pattern for AST nodes.

use crate::ast::{BlockStatement, Expression, Statement};

pub trait Visitor<'ast>: Sized {
    fn visit_expr(&mut self, expr: &'ast Expression) {
        walk_expr(self, expr);
    }
    fn visit_stmt(&mut self, stmt: &'ast Statement) {
        walk_stmt(self, stmt);
    }
    fn visit_block(&mut self, block: &'ast BlockStatement) {
        walk_block(self, block);
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expression) {
    match expr {
        Expression::Identifier(_)
        | Expression::IntegerLiteral { .. }
        | Expression::BooleanLiteral { .. } => {}
        Expression::Prefix { right, .. } => visitor.visit_expr(right),
        Expression::Infix { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        Expression::Suffix { left, .. } => visitor.visit_expr(left),
        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => {
            visitor.visit_expr(condition);
            visitor.visit_block(consequence);
            if let Some(alternative) = alternative {
                visitor.visit_block(alternative);
            }
        }
        Expression::Function { body, .. } => visitor.visit_block(body),
        Expression::Call {
            function,
            arguments,
            ..
        } => {
            visitor.visit_expr(function);
            for arg in arguments {
                visitor.visit_expr(arg);
            }
        }
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Statement) {
    match stmt {
        Statement::Let { value, .. } => visitor.visit_expr(value),
        Statement::Return { value, .. } => visitor.visit_expr(value),
        Statement::Expression { expr, .. } => visitor.visit_expr(expr),
        Statement::Block(block) => visitor.visit_block(block),
    }
}

pub fn walk_block<'ast>(visitor: &mut impl Visitor<'ast>, block: &'ast BlockStatement) {
    for stmt in &block.statements {
        visitor.visit_stmt(stmt);
    }
}
