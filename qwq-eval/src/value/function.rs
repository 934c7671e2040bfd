use crate::environment::Env;
use qwq_parser::ast::{BlockStatement, Identifier};
use std::fmt;

/// A closure: a function literal together with the environment it was created in.
pub struct Function {
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Env,
}

/// `Debug` skips `env` because a closure stored in its own environment would recurse forever.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.params.iter().map(|param| param.name.as_str()).collect();
        write!(f, "fn({}){}", params.join(", "), self.body)
    }
}
