use qwq_parser::token::TokenKind;
use std::{error, fmt};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The operands of an infix operator have different types.
    TypeMismatch {
        left: &'static str,
        op: TokenKind,
        right: &'static str,
    },
    /// The prefix operator is not defined for the operand's type.
    UnknownPrefixOperator { op: TokenKind, right: &'static str },
    /// The infix operator is not defined for the operands' type.
    UnknownInfixOperator {
        left: &'static str,
        op: TokenKind,
        right: &'static str,
    },
    /// The suffix operator is not defined for the operand's type.
    UnknownSuffixOperator { left: &'static str, op: TokenKind },
    DivisionByZero,
    /// Tried to use an unbound identifier.
    IdentifierNotFound { name: String },
    /// Tried to call a value that is not a function.
    NotAFunction { found: &'static str },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch { expected: usize, found: usize },
    /// Calls nested deeper than the evaluator allows.
    StackOverflow { depth: usize },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {} {} {}", left, op, right)
            }
            Self::UnknownPrefixOperator { op, right } => {
                write!(f, "unknown operator: {}{}", op, right)
            }
            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {} {} {}", left, op, right)
            }
            Self::UnknownSuffixOperator { left, op } => {
                write!(f, "unknown operator: {}{}", left, op)
            }
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {}", name),
            Self::NotAFunction { found } => write!(f, "not a function: {}", found),
            Self::ArgumentCountMismatch { expected, found } => write!(
                f,
                "wrong number of arguments: expected {}, got {}",
                expected, found
            ),
            Self::StackOverflow { depth } => {
                write!(f, "stack overflow: more than {} nested calls", depth)
            }
        }
    }
}

impl error::Error for RuntimeError {}
