//! Drives the lexer, parser and evaluator over a piece of source code.

use qwq_diagnostics::SyntaxError;
use qwq_eval::{Evaluator, RuntimeError, Value};
use qwq_parser::ast::Program;
use qwq_parser::lexer::Lexer;
use qwq_parser::parser::Parser;
use qwq_parser::token::Token;
use std::{error, fmt};

/// Why a piece of source produced no value.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Parsing failed. Nothing was evaluated.
    Syntax(Vec<SyntaxError>),
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i != 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}", error)?;
                }
                Ok(())
            }
            Error::Runtime(error) => write!(f, "ERROR: {}", error),
        }
    }
}

impl error::Error for Error {}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Error::Runtime(error)
    }
}

/// Lexes `source` up to, but not including, the end of input.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Parses `source`. Fails with every diagnostic if any statement could not be parsed.
pub fn parse(source: &str) -> Result<Program, Error> {
    log::info!("Parsing...");
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if !errors.has_no_errors() {
        log::debug!("Syntax errors: {:?}", errors.errors());
        return Err(Error::Syntax(errors.into_errors()));
    }
    log::debug!("Program: {}", program);
    Ok(program)
}

/// Parses and evaluates `source` in a fresh environment.
/// Returns `Ok(None)` if the program evaluates to `NULL`.
///
/// # Example
/// ```
/// use qwq_eval::Value;
///
/// assert_eq!(qwq::interpret("let x = 2; x * 21"), Ok(Some(Value::Integer(42))));
/// assert_eq!(qwq::interpret("let x = 2;"), Ok(None));
/// ```
pub fn interpret(source: &str) -> Result<Option<Value>, Error> {
    Session::new().run(source)
}

/// An interpreter whose global bindings persist from one [`Session::run`] to the next.
#[derive(Default)]
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and evaluates `source` against the bindings of earlier runs.
    /// Bindings made before a runtime error are kept.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, Error> {
        log::info!("Source: {:?}", source);
        let program = parse(source)?;

        log::info!("Evaluating...");
        let value = self.evaluator.eval_program(&program)?;
        log::debug!("Result: {}", value);

        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }
}
