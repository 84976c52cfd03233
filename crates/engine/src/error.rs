// Error handling for evaluation
//
// Every evaluator and allocator converts its internal faults into one of
// three tags before returning; nothing else crosses the `evaluate` /
// `compute_*` boundary.

use thiserror::Error;

// Import Span type from parser AST
pub use parser::ast::Span;

/// Failure tag without detail, as rendered by the calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Syntax,
    Math,
    Validation,
}

/// Evaluation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Malformed or unparseable expression, unknown symbol
    #[error("Syntax error: {message}")]
    Syntax {
        message: String,
        span: Option<Span>,
    },

    /// Non-finite numeric result (division by zero, domain error, overflow)
    #[error("Math error: {reason}")]
    Math { reason: String },

    /// Bill-split precondition violated
    #[error("Invalid input: {reason}")]
    Validation { reason: String },
}

impl CalcError {
    pub fn syntax(message: impl Into<String>, span: Option<Span>) -> Self {
        CalcError::Syntax {
            message: message.into(),
            span,
        }
    }

    pub fn math(reason: impl Into<String>) -> Self {
        CalcError::Math {
            reason: reason.into(),
        }
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        CalcError::Validation {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            CalcError::Syntax { .. } => FailureKind::Syntax,
            CalcError::Math { .. } => FailureKind::Math,
            CalcError::Validation { .. } => FailureKind::Validation,
        }
    }

    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::Syntax { .. } => 2,
            CalcError::Math { .. } => 3,
            CalcError::Validation { .. } => 4,
        }
    }
}

/// Convenient Result type for evaluation
pub type CalcResult<T> = Result<T, CalcError>;
