//! tacgen - infix expression to three-address code compiler.
//!
//! tacgen translates a single-line arithmetic/logical expression into
//! postfix notation and three-address code, one instruction per operator,
//! each writing a fresh temporary.
//!
//! # Primary Usage
//!
//! ```
//! use tacgen::{compile_to_postfix, compile_to_tac};
//!
//! assert_eq!(compile_to_postfix("3+4*2"), ["3", "4", "2", "*", "+"]);
//! assert_eq!(compile_to_tac("3+4*2"), ["t0 = 4 MUL 2", "t1 = 3 ADD t0"]);
//! assert_eq!(compile_to_tac("(1+2"), ["Error: Unbalanced parentheses at position 0"]);
//! ```
//!
//! # Architecture
//!
//! - [`core`] - Operator table, errors, per-compilation session
//! - [`lexer`] - Tokenizer
//! - [`validator`] - Pre-parse structural and contextual checks
//! - [`postfix`] - Shunting-yard infix to postfix conversion
//! - [`codegen`] - Three-address code emission
//! - [`trace`] - Step-by-step translation report
//! - [`compiler`] - Entry points

pub mod codegen;
pub mod compiler;
pub mod core;
pub mod lexer;
pub mod postfix;
pub mod trace;
pub mod validator;

pub use codegen::{emit_tac, TacInstruction};
pub use compiler::{compile, compile_to_postfix, compile_to_tac, compile_with_trace, CompiledExpression};
pub use self::core::{
    // Errors
    CodeGenError, CompileError, CompileResult, ErrorKind, LexError, ParseError, ValidationError,
    // Operator table
    OpInfo, Operator, OperatorClass,
    // Session management
    CompilationSession, SessionStats,
};
pub use lexer::{tokenize, Token};
pub use postfix::to_postfix;
pub use validator::validate;
