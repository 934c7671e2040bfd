//! Front end of the interpreter: tokens, lexer, AST and the Pratt parser.

pub mod ast;
pub mod check;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod visitor;
