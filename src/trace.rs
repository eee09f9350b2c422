//! Narrated, step-by-step view of a compilation.

use crate::compiler::{run_pipeline, PipelineOutput};
use crate::core::{CompilationSession, CompileResult};
use crate::lexer::Token;
use bumpalo::Bump;

fn join(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text()).collect::<Vec<_>>().join(" ")
}

fn push_step(lines: &mut Vec<String>, number: usize, title: &str, body: impl IntoIterator<Item = String>) {
    if number > 1 {
        lines.push(String::new());
    }
    let headline = format!("Step {}: {}", number, title);
    let underline = "-".repeat(headline.len());
    lines.push(headline);
    lines.push(underline);
    lines.extend(body);
}

/// Run every stage on `expression` and describe each one.
///
/// No line is produced unless every stage succeeds.
pub fn trace(expression: &str) -> CompileResult<Vec<String>> {
    let arena = Bump::new();
    let session = CompilationSession::new(&arena);
    let PipelineOutput { tokens, postfix, code } = run_pipeline(expression, &session)?;

    let mut lines = Vec::new();
    push_step(&mut lines, 1, "Input Expression", [format!("Expression: {}", expression)]);
    push_step(&mut lines, 2, "Tokenization", [format!("Tokens: {}", join(&tokens))]);
    push_step(
        &mut lines,
        3,
        "Operator Precedence Analysis",
        tokens.iter().map(|token| match token {
            Token::Operator(op) => format!("{} (Precedence: {})", op, op.precedence()),
            other => other.to_string(),
        }),
    );
    push_step(&mut lines, 4, "Postfix Notation", [format!("Postfix: {}", join(&postfix))]);
    push_step(&mut lines, 5, "Three-Address Code", code.iter().map(|inst| inst.to_string()));

    log::debug!("trace of {:?} has {} lines", expression, lines.len());
    Ok(lines)
}
