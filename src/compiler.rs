// This module exposes the compiler entry points consumed by presentation layers. compile()
// runs validation, lexing, shunting-yard conversion and code emission inside a fresh
// arena-backed CompilationSession and returns owned postfix and TAC lines together with the
// session statistics. compile_to_tac, compile_to_postfix and compile_with_trace wrap the
// pipeline in the text-line convention: the normal output lines on success, or a single
// "Error: <message>" line on any failure. Those three also run the pipeline under
// catch_unwind so an internal fault is reported the same way instead of unwinding into the
// caller.

//! Compiler entry points.

use crate::codegen::{emit_tac, TacInstruction};
use crate::core::{CompilationSession, CompileError, CompileResult, SessionStats};
use crate::lexer::{tokenize, Token};
use crate::postfix::to_postfix;
use crate::trace::trace;
use crate::validator::validate;
use bumpalo::Bump;
use std::panic::{self, AssertUnwindSafe};

/// Owned output of one successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledExpression {
    pub postfix: Vec<String>,
    pub code: Vec<String>,
    pub stats: SessionStats,
}

fn texts(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(|t| t.text().to_string()).collect()
}

/// Every intermediate product of one compilation.
pub(crate) struct PipelineOutput<'a> {
    pub tokens: Vec<Token<'a>>,
    pub postfix: Vec<Token<'a>>,
    pub code: Vec<TacInstruction<'a>>,
}

/// Validate, lex and convert to postfix; no temporaries are needed yet.
fn front_end(expression: &str) -> CompileResult<(Vec<Token<'_>>, Vec<Token<'_>>)> {
    validate(expression)?;
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    Ok((tokens, postfix))
}

/// Validate, lex, convert and emit `expression` inside `session`.
pub(crate) fn run_pipeline<'a>(
    expression: &'a str,
    session: &CompilationSession<'a>,
) -> CompileResult<PipelineOutput<'a>> {
    let (tokens, postfix) = front_end(expression)?;
    session.record_tokens(tokens.len());
    let code = emit_tac(&postfix, session)?;
    Ok(PipelineOutput { tokens, postfix, code })
}

fn postfix_lines(expression: &str) -> CompileResult<Vec<String>> {
    let (_, postfix) = front_end(expression)?;
    Ok(texts(&postfix))
}

/// Compile `expression` through every stage in a fresh session.
pub fn compile(expression: &str) -> CompileResult<CompiledExpression> {
    log::debug!("compiling {:?}", expression);

    let arena = Bump::new();
    let session = CompilationSession::new(&arena);
    let output = run_pipeline(expression, &session)?;

    Ok(CompiledExpression {
        postfix: texts(&output.postfix),
        code: output.code.iter().map(|inst| inst.to_string()).collect(),
        stats: session.stats(),
    })
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run `stage`, folding errors and panics into the single error line.
fn into_lines(stage: impl FnOnce() -> CompileResult<Vec<String>>) -> Vec<String> {
    let result = panic::catch_unwind(AssertUnwindSafe(stage)).unwrap_or_else(|payload| {
        Err(CompileError::Internal { reason: panic_reason(payload.as_ref()) })
    });

    match result {
        Ok(lines) => lines,
        Err(e) => {
            log::warn!("compilation failed: {}", e);
            vec![e.to_line()]
        }
    }
}

/// Three-address code lines, or `["Error: ..."]`.
pub fn compile_to_tac(expression: &str) -> Vec<String> {
    into_lines(|| compile(expression).map(|c| c.code))
}

/// Postfix tokens in order, or `["Error: ..."]`.
pub fn compile_to_postfix(expression: &str) -> Vec<String> {
    into_lines(|| postfix_lines(expression))
}

/// Full narrated trace, or `["Error: ..."]`.
pub fn compile_with_trace(expression: &str) -> Vec<String> {
    into_lines(|| trace(expression))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_collects_stats() {
        let compiled = compile("(a + b) * (c - 1)").unwrap();
        assert_eq!(compiled.postfix, ["a", "b", "+", "c", "1", "-", "*"]);
        assert_eq!(compiled.code, ["t0 = a ADD b", "t1 = c SUB 1", "t2 = t0 MUL t1"]);
        assert_eq!(compiled.stats.tokens_lexed, 11);
        assert_eq!(compiled.stats.instructions_emitted, 3);
        assert_eq!(compiled.stats.max_operand_depth, 3);
    }

    #[test]
    fn test_trace_and_compile_share_code() {
        for expr in ["a || !!b", "2**3**2 - x", "!(a < b) && c"] {
            let compiled = compile(expr).unwrap();
            let lines = trace(expr).unwrap();
            assert!(lines.ends_with(&compiled.code), "{expr}: {lines:?}");
            assert!(lines.contains(&format!("Postfix: {}", compiled.postfix.join(" "))));
        }
    }

    #[test]
    fn test_into_lines_captures_panics() {
        let lines = into_lines(|| panic!("stack exploded"));
        assert_eq!(lines, ["Error: Internal error: stack exploded"]);
    }

    #[test]
    fn test_into_lines_renders_errors() {
        let lines = into_lines(|| Err(crate::core::ParseError::MismatchedParentheses.into()));
        assert_eq!(lines, ["Error: Mismatched parentheses"]);
    }
}
