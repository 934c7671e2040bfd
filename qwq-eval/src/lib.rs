//! Tree-walking evaluator.

pub mod environment;
pub mod error;
pub mod eval;
pub mod value;

pub use error::RuntimeError;
pub use eval::Evaluator;
pub use value::Value;

use qwq_parser::ast::Program;

/// Evaluates `program` in a fresh global environment.
pub fn eval(program: &Program) -> Result<Value, RuntimeError> {
    Evaluator::new().eval_program(program)
}
