//! Syntax error representation and accumulation.

use std::{error, fmt};

/// Represents a syntax error (detected while lexing or parsing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    message: String,
}

impl SyntaxError {
    /// Create a new syntax error with the specified `message`.
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for SyntaxError {}

/// Manages all the errors, in the order they were reported.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    errors: Vec<SyntaxError>,
}

impl ErrorReporter {
    /// Create an empty `ErrorReporter`.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the `ErrorReporter`.
    pub fn add_error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    /// Returns `true` if no errors were reported. Returns `false` otherwise.
    pub fn has_no_errors(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Consumes `self` and returns the accumulated errors.
    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }

        Ok(())
    }
}
