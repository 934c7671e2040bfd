//! Abstract syntax tree produced by the [`Parser`](crate::parser::Parser).
//!
//! Every node keeps the [`Token`] that introduced it. For operator nodes, the token kind is the operator.
//! The [`fmt::Display`] implementations produce the fully parenthesized form used to check precedence.

use crate::token::{Token, TokenKind};
use std::fmt;

/// An identifier (e.g. `foo`).
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Self { token, name }
    }
}

/// A brace delimited list of statements. `token` is the `{`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        token: Token,
        name: Identifier,
        value: Expression,
    },
    /// `return <value>;`
    Return { token: Token, value: Expression },
    /// An expression evaluated for its value, optionally terminated by `;`.
    Expression { token: Token, expr: Expression },
    Block(BlockStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    BooleanLiteral {
        token: Token,
        value: bool,
    },
    /// A prefix expression (e.g. `-1`).
    Prefix {
        token: Token,
        right: Box<Expression>,
    },
    /// An infix expression (e.g. `1 + 1`).
    Infix {
        token: Token,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// A suffix expression (e.g. `x++`).
    Suffix {
        token: Token,
        left: Box<Expression>,
    },
    If {
        token: Token,
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// A function literal (e.g. `fn(x, y) { x + y }`).
    Function {
        token: Token,
        params: Vec<Identifier>,
        body: BlockStatement,
    },
    /// A call expression (e.g. `add(1, 2)`). `token` is the `(`.
    Call {
        token: Token,
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => token,
            Statement::Block(block) => &block.token,
        }
    }
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(ident) => &ident.token,
            Expression::IntegerLiteral { token, .. }
            | Expression::BooleanLiteral { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. }
            | Expression::Suffix { token, .. }
            | Expression::If { token, .. }
            | Expression::Function { token, .. }
            | Expression::Call { token, .. } => token,
        }
    }

    /// The operator of a prefix, infix or suffix expression.
    pub fn op(&self) -> Option<TokenKind> {
        match self {
            Expression::Prefix { token, .. }
            | Expression::Infix { token, .. }
            | Expression::Suffix { token, .. } => Some(token.kind),
            _ => None,
        }
    }
}

/// The root node. An ordered list of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// Literal of the token of every statement, one per line.
    pub fn token_literal(&self) -> String {
        self.statements
            .iter()
            .map(|stmt| format!("{}\n", stmt.token().literal))
            .collect()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value, .. } => write!(f, "let {} = {};", name, value),
            Statement::Return { value, .. } => write!(f, "return {};", value),
            Statement::Expression { expr, .. } => write!(f, "{}", expr),
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}

/// Writes `items` separated by `, `.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral { token, .. } | Expression::BooleanLiteral { token, .. } => {
                write!(f, "{}", token)
            }
            Expression::Prefix { token, right } => write!(f, "({}{})", token, right),
            Expression::Infix { token, left, right } => {
                write!(f, "({} {} {})", left, token, right)
            }
            // `a?` and `true?` would lex back as a single identifier
            Expression::Suffix { token, left } => match &**left {
                Expression::Identifier(_) | Expression::BooleanLiteral { .. }
                    if token.kind == TokenKind::What =>
                {
                    write!(f, "(({}){})", left, token)
                }
                _ => write!(f, "({}{})", left, token),
            },
            Expression::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if ({}){}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, "else{}", alternative)?;
                }
                Ok(())
            }
            Expression::Function { params, body, .. } => {
                f.write_str("fn(")?;
                write_list(f, params)?;
                write!(f, "){}", body)
            }
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                write!(f, "{}(", function)?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
