// This module generates three-address code from a postfix token sequence. emit_tac walks
// the sequence left to right with an operand stack allocated in the session arena: operands
// push their source text, a binary operator pops its right then its left operand, asks the
// session for the next temporary and emits `temp = lhs MNEMONIC rhs`, pushing the temporary
// back. The unary `!` pops a single operand. Running out of operands fails with
// InsufficientOperands, and anything other than exactly one value left on the stack at the
// end fails with MalformedExpression.

//! Three-address code emission.

pub mod tac;

pub use tac::TacInstruction;

use crate::core::{CodeGenError, CompilationSession};
use crate::lexer::Token;
use bumpalo::collections::Vec as BumpVec;

pub fn emit_tac<'a>(
    postfix: &[Token<'a>],
    session: &CompilationSession<'a>,
) -> Result<Vec<TacInstruction<'a>>, CodeGenError> {
    let mut operands: BumpVec<'a, &'a str> = BumpVec::new_in(session.arena());
    let mut code = Vec::new();

    for token in postfix {
        match *token {
            Token::Number(text) | Token::Identifier(text) => {
                operands.push(text);
                session.record_stack_depth(operands.len());
            }
            Token::Operator(op) => {
                let insufficient = || CodeGenError::InsufficientOperands { operator: op };
                let rhs = operands.pop().ok_or_else(insufficient)?;
                let inst = if op.is_unary() {
                    TacInstruction::unary(session.next_temp(), op, rhs)
                } else {
                    let lhs = operands.pop().ok_or_else(insufficient)?;
                    TacInstruction::binary(session.next_temp(), lhs, op, rhs)
                };
                log::trace!("  emit {}", inst);

                session.record_instruction(op.mnemonic());
                code.push(inst);
                operands.push(inst.dest);
            }
            Token::LParen | Token::RParen => {
                return Err(CodeGenError::MalformedExpression { remaining: operands.len() });
            }
        }
    }

    if operands.len() != 1 {
        return Err(CodeGenError::MalformedExpression { remaining: operands.len() });
    }

    log::debug!("emitted {} instructions, {} temporaries", code.len(), session.temp_count());
    Ok(code)
}
