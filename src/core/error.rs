// This module defines error types for the tacgen pipeline using the thiserror crate for
// idiomatic Rust error handling. Each stage owns its own error enum: LexError for characters
// the tokenizer cannot place, ValidationError for structural and contextual problems found
// before lexing is trusted, ParseError for the shunting-yard converter, and CodeGenError for
// the operand-stack walk that emits three-address code. CompileError wraps all of them (plus
// Internal for captured panics) and is what the public entry points return. ErrorKind flattens
// every error onto the fixed set of diagnostic kinds so callers can branch without matching
// nested enums. CompileResult<T> is a convenience alias for Result<T, CompileError>.

//! Error types for the tacgen pipeline.

use thiserror::Error;

use super::operator::{Operator, OperatorClass};

/// Diagnostic kind shared by every stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyExpression,
    UnbalancedParentheses,
    InvalidCharacter,
    InvalidOperatorUsage,
    MismatchedParentheses,
    InsufficientOperands,
    MalformedExpression,
    Internal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expression cannot be empty")]
    EmptyExpression,

    #[error("Unbalanced parentheses at position {position}")]
    UnbalancedParentheses { position: usize },

    #[error("Invalid characters in expression: '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid use of {class} operator '{operator}' at position {position}")]
    InvalidOperatorUsage {
        class: OperatorClass,
        operator: Operator,
        position: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeGenError {
    #[error("Not enough operands for operator {operator}")]
    InsufficientOperands { operator: Operator },

    #[error("Invalid expression - {remaining} values left on the operand stack")]
    MalformedExpression { remaining: usize },
}

/// Main error type returned by the compiler entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    CodeGen(#[from] CodeGenError),

    #[error("Internal error: {reason}")]
    Internal { reason: String },
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lex(LexError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            CompileError::Validation(e) => match e {
                ValidationError::EmptyExpression => ErrorKind::EmptyExpression,
                ValidationError::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
                ValidationError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
                ValidationError::InvalidOperatorUsage { .. } => ErrorKind::InvalidOperatorUsage,
            },
            CompileError::Parse(ParseError::MismatchedParentheses) => ErrorKind::MismatchedParentheses,
            CompileError::CodeGen(e) => match e {
                CodeGenError::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
                CodeGenError::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            },
            CompileError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Render as the single output line handed to presentation layers.
    pub fn to_line(&self) -> String {
        format!("Error: {}", self)
    }
}

/// Result type alias for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;
