//! Evaluates AST nodes directly.

use crate::environment::{Env, Environment};
use crate::error::RuntimeError;
use crate::value::{native_bool_to_value, Function, Value, FALSE, NULL, TRUE};
use qwq_parser::ast::{BlockStatement, Expression, Program, Statement};
use qwq_parser::token::{Token, TokenKind};
use std::rc::Rc;

/// Maximum number of nested function calls.
pub const MAX_CALL_DEPTH: usize = 256;

/// Non-local exits. `return` unwinds to the enclosing function call or program.
enum Unwind {
    Return(Value),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}

type EvalResult = Result<Value, Unwind>;

/// Evaluates programs against a global environment that persists between calls.
pub struct Evaluator {
    globals: Env,
    /// Number of function calls currently being evaluated.
    depth: usize,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            globals: Environment::new().into_env(),
            depth: 0,
        }
    }

    /// Evaluates every statement in order and returns the value of the last one, or of the first top level `return`.
    /// An empty program evaluates to `null`.
    pub fn eval_program(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        let globals = Rc::clone(&self.globals);
        Self::unwrap_return(self.eval_statements(&program.statements, &globals))
    }

    /// Evaluates a single statement in the global environment.
    pub fn eval_statement(&mut self, stmt: &Statement) -> Result<Value, RuntimeError> {
        let globals = Rc::clone(&self.globals);
        Self::unwrap_return(self.eval_stmt(stmt, &globals))
    }

    /// Evaluates a single expression in the global environment.
    pub fn eval_expression(&mut self, expr: &Expression) -> Result<Value, RuntimeError> {
        let globals = Rc::clone(&self.globals);
        Self::unwrap_return(self.eval_expr(expr, &globals))
    }

    fn unwrap_return(result: EvalResult) -> Result<Value, RuntimeError> {
        match result {
            Ok(value) | Err(Unwind::Return(value)) => Ok(value),
            Err(Unwind::Error(error)) => Err(error),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/* Statements */
impl Evaluator {
    fn eval_statements(&mut self, stmts: &[Statement], env: &Env) -> EvalResult {
        let mut result = NULL;
        for stmt in stmts {
            result = self.eval_stmt(stmt, env)?;
        }
        Ok(result)
    }

    fn eval_stmt(&mut self, stmt: &Statement, env: &Env) -> EvalResult {
        log::trace!("eval statement {}", stmt);

        match stmt {
            Statement::Let { name, value, .. } => {
                let value = self.eval_expr(value, env)?;
                env.borrow_mut().set(name.name.as_str(), value);
                Ok(NULL)
            }
            Statement::Return { value, .. } => {
                let value = self.eval_expr(value, env)?;
                Err(Unwind::Return(value))
            }
            Statement::Expression { expr, .. } => self.eval_expr(expr, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    /// Evaluates `block` in a new scope nested in `env`.
    fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> EvalResult {
        let scope = Environment::new_enclosed(Rc::clone(env)).into_env();
        self.eval_statements(&block.statements, &scope)
    }
}

/* Expressions */
impl Evaluator {
    fn eval_expr(&mut self, expr: &Expression, env: &Env) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => match env.borrow().get(&ident.name) {
                Some(value) => Ok(value),
                None => Err(RuntimeError::IdentifierNotFound {
                    name: ident.name.clone(),
                }
                .into()),
            },
            Expression::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expression::BooleanLiteral { value, .. } => Ok(native_bool_to_value(*value)),
            Expression::Prefix { token, right } => {
                let right = self.eval_expr(right, env)?;
                Ok(eval_prefix_expr(token, right)?)
            }
            Expression::Infix { token, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                Ok(eval_infix_expr(token, left, right)?)
            }
            Expression::Suffix { token, left } => {
                let left = self.eval_expr(left, env)?;
                Ok(eval_suffix_expr(token, left)?)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                let condition = self.eval_expr(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(NULL)
                }
            }
            Expression::Function { params, body, .. } => Ok(Value::Function(Rc::new(Function {
                params: params.clone(),
                body: body.clone(),
                env: Rc::clone(env),
            }))),
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                let function = self.eval_expr(function, env)?;
                let mut args = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    args.push(self.eval_expr(arg, env)?);
                }
                self.apply_function(function, args)
            }
        }
    }

    fn apply_function(&mut self, function: Value, args: Vec<Value>) -> EvalResult {
        let function = match function {
            Value::Function(function) => function,
            value => {
                return Err(RuntimeError::NotAFunction {
                    found: value.type_name(),
                }
                .into())
            }
        };
        if function.params.len() != args.len() {
            return Err(RuntimeError::ArgumentCountMismatch {
                expected: function.params.len(),
                found: args.len(),
            }
            .into());
        }
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::StackOverflow {
                depth: MAX_CALL_DEPTH,
            }
            .into());
        }

        let mut scope = Environment::new_enclosed(Rc::clone(&function.env));
        for (param, arg) in function.params.iter().zip(args) {
            scope.set(param.name.as_str(), arg);
        }
        let scope = scope.into_env();

        self.depth += 1;
        let result = self.eval_statements(&function.body.statements, &scope);
        self.depth -= 1;

        match result {
            Err(Unwind::Return(value)) => Ok(value),
            result => result,
        }
    }
}

/* Operators */
fn eval_prefix_expr(op: &Token, right: Value) -> Result<Value, RuntimeError> {
    match (op.kind, right) {
        (TokenKind::Bang, right) => Ok(eval_bang_expr(right)),
        (TokenKind::Minus, Value::Integer(val)) => Ok(Value::Integer(val.wrapping_neg())),
        (op, right) => Err(RuntimeError::UnknownPrefixOperator {
            op,
            right: right.type_name(),
        }),
    }
}

fn eval_bang_expr(right: Value) -> Value {
    match right {
        Value::Boolean(true) => FALSE,
        Value::Boolean(false) | Value::Null => TRUE,
        _ => FALSE,
    }
}

fn eval_infix_expr(op: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix_expr(op.kind, *l, *r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_infix_expr(op.kind, *l, *r),
        _ if left.type_name() != right.type_name() => Err(RuntimeError::TypeMismatch {
            left: left.type_name(),
            op: op.kind,
            right: right.type_name(),
        }),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: left.type_name(),
            op: op.kind,
            right: right.type_name(),
        }),
    }
}

/// `+`, `-` and `*` wrap on overflow. `/` truncates toward zero.
fn eval_integer_infix_expr(op: TokenKind, l: i64, r: i64) -> Result<Value, RuntimeError> {
    let value = match op {
        TokenKind::Plus => Value::Integer(l.wrapping_add(r)),
        TokenKind::Minus => Value::Integer(l.wrapping_sub(r)),
        TokenKind::Multi => Value::Integer(l.wrapping_mul(r)),
        TokenKind::Divide => {
            if r == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(l.wrapping_div(r))
        }
        TokenKind::Eq => native_bool_to_value(l == r),
        TokenKind::Ne => native_bool_to_value(l != r),
        TokenKind::Lt => native_bool_to_value(l < r),
        TokenKind::Le => native_bool_to_value(l <= r),
        TokenKind::Gt => native_bool_to_value(l > r),
        TokenKind::Ge => native_bool_to_value(l >= r),
        op => {
            return Err(RuntimeError::UnknownInfixOperator {
                left: "INTEGER",
                op,
                right: "INTEGER",
            })
        }
    };
    Ok(value)
}

/// Booleans are not ordered: `<`, `<=`, `>` and `>=` are always `false`.
fn eval_boolean_infix_expr(op: TokenKind, l: bool, r: bool) -> Result<Value, RuntimeError> {
    match op {
        TokenKind::Eq => Ok(native_bool_to_value(l == r)),
        TokenKind::Ne => Ok(native_bool_to_value(l != r)),
        TokenKind::Lt | TokenKind::Le | TokenKind::Gt | TokenKind::Ge => Ok(FALSE),
        op => Err(RuntimeError::UnknownInfixOperator {
            left: "BOOLEAN",
            op,
            right: "BOOLEAN",
        }),
    }
}

/// `n++` and `n--` yield `n + 1` and `n - 1` without rebinding anything. `v?` yields the truthiness of `v`.
fn eval_suffix_expr(op: &Token, left: Value) -> Result<Value, RuntimeError> {
    match (op.kind, left) {
        (TokenKind::PlusPlus, Value::Integer(val)) => Ok(Value::Integer(val.wrapping_add(1))),
        (TokenKind::MinusMinus, Value::Integer(val)) => Ok(Value::Integer(val.wrapping_sub(1))),
        (TokenKind::What, left) => Ok(native_bool_to_value(left.is_truthy())),
        (op, left) => Err(RuntimeError::UnknownSuffixOperator {
            left: left.type_name(),
            op,
        }),
    }
}
