//! Structural and contextual checks run on the raw expression before its
//! tokens are trusted.
//!
//! The operator-context rules are heuristics over the characters adjacent to
//! each relational or logical operator. They reject the common misuse
//! patterns without parsing the grammar, so some malformed input still passes
//! here and is rejected later by the converter or the code emitter. One
//! consequence is that compact forms such as `1<2` or `(a)&&(b)` are refused;
//! they must be written with spaces (`1 < 2`).
//!
//! Operand order is not checked either. Postfix-shaped input such as `a b +`
//! or `+ 1 2` passes validation, and the converter accepts it, so it compiles
//! to `t0 = a ADD b` and `t0 = 1 ADD 2`.

use crate::core::{Operator, OperatorClass, ValidationError};

/// Run every check in order, stopping at the first failure.
pub fn validate(expression: &str) -> Result<(), ValidationError> {
    if expression.trim().is_empty() {
        return Err(ValidationError::EmptyExpression);
    }

    check_parentheses(expression)?;
    check_characters(expression)?;
    check_operator_context(expression)?;

    log::trace!("validated {:?}", expression);
    Ok(())
}

fn check_parentheses(expression: &str) -> Result<(), ValidationError> {
    let mut open = Vec::new();

    for (position, ch) in expression.char_indices() {
        match ch {
            '(' => open.push(position),
            ')' => {
                if open.pop().is_none() {
                    return Err(ValidationError::UnbalancedParentheses { position });
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some(position) => Err(ValidationError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch == '_'
        || ch == '('
        || ch == ')'
        || ch.is_ascii_whitespace()
        || Operator::is_symbol_char(ch)
}

fn check_characters(expression: &str) -> Result<(), ValidationError> {
    match expression.char_indices().find(|&(_, ch)| !is_allowed(ch)) {
        Some((position, character)) => Err(ValidationError::InvalidCharacter { character, position }),
        None => Ok(()),
    }
}

fn check_operator_context(expression: &str) -> Result<(), ValidationError> {
    let first = expression.len() - expression.trim_start().len();
    let last = expression.trim_end().len();
    let mut i = 0;

    while i < expression.len() {
        let Some(op) = Operator::match_at(expression, i) else {
            i += expression[i..].chars().next().map_or(1, char::len_utf8);
            continue;
        };

        let start = i;
        let end = i + op.symbol().len();
        i = end;

        let class = op.info().class;
        if class == OperatorClass::Arithmetic {
            continue;
        }

        let misplaced = end == last || (start == first && !op.is_unary());
        let before = expression[..start].chars().next_back();
        let after = expression[end..].chars().next();

        let bad_context = match (before, after) {
            (Some(b), Some(a)) => {
                let joins_operands = (b.is_ascii_digit() || b == ')') && (a.is_ascii_digit() || a == '(');
                let between_operators = Operator::is_single_char_operator(b) && Operator::is_single_char_operator(a);
                joins_operands || between_operators
            }
            _ => false,
        };

        if misplaced || bad_context {
            log::debug!("rejecting {} operator '{}' at {}", class, op, start);
            return Err(ValidationError::InvalidOperatorUsage { class, operator: op, position: start });
        }
    }

    Ok(())
}
