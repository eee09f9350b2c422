// This module serves as the central hub for tacgen's shared infrastructure: the constant
// operator table consulted by every stage, the per-stage error types with their umbrella
// CompileError, and the arena-backed CompilationSession that carries the temporary counter
// and statistics of a single compilation.

//! Core tacgen infrastructure.
//!
//! # Key Components
//!
//! ## Operator Table (`operator`)
//! - Symbol, mnemonic, precedence, associativity and arity per operator
//! - Longest-match symbol lookup shared by the lexer and validator
//!
//! ## Errors (`error`)
//! - One `thiserror` enum per stage, wrapped by `CompileError`
//!
//! ## Session Management (`session`)
//! - Arena allocation using `bumpalo`
//! - Per-compilation temporary counter and statistics

pub mod error;
pub mod operator;
pub mod session;

pub use error::{
    CodeGenError,
    CompileError,
    CompileResult,
    ErrorKind,
    LexError,
    ParseError,
    ValidationError,
};

pub use operator::{OpInfo, Operator, OperatorClass};

pub use session::{CompilationSession, SessionStats};
