//! Infix to postfix conversion using the shunting-yard algorithm.

use crate::core::{Operator, ParseError};
use crate::lexer::Token;

/// Entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Operator(Operator),
    LParen,
}

/// Whether `top` must be emitted before `incoming` is pushed.
///
/// A prefix operator has no left operand, so nothing on the stack can
/// complete before it.
fn pops_before(top: Operator, incoming: Operator) -> bool {
    let incoming_info = incoming.info();
    if incoming.is_unary() {
        false
    } else if incoming_info.right_associative {
        top.precedence() > incoming_info.precedence
    } else {
        top.precedence() >= incoming_info.precedence
    }
}

pub fn to_postfix<'src>(tokens: &[Token<'src>]) -> Result<Vec<Token<'src>>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token),
            Token::Operator(op) => {
                while let Some(&StackEntry::Operator(top)) = stack.last() {
                    if !pops_before(top, op) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(StackEntry::Operator(op));
            }
            Token::LParen => stack.push(StackEntry::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op)) => output.push(Token::Operator(op)),
                    Some(StackEntry::LParen) => break,
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(Token::Operator(op)),
            StackEntry::LParen => return Err(ParseError::MismatchedParentheses),
        }
    }

    log::trace!(
        "postfix: {}",
        output.iter().map(|t| t.text()).collect::<Vec<_>>().join(" ")
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn postfix(expression: &str) -> Vec<String> {
        let tokens = tokenize(expression).unwrap();
        to_postfix(&tokens)
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("3+4*2"), ["3", "4", "2", "*", "+"]);
        assert_eq!(postfix("3*4+2"), ["3", "4", "*", "2", "+"]);
        assert_eq!(postfix("a + b < c * d"), ["a", "b", "+", "c", "d", "*", "<"]);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix("8-3-2"), ["8", "3", "-", "2", "-"]);
        assert_eq!(postfix("a / b // c % d"), ["a", "b", "/", "c", "//", "d", "%"]);
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(postfix("2**3**2"), ["2", "3", "2", "**", "**"]);
        assert_eq!(postfix("2*3**2"), ["2", "3", "2", "**", "*"]);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix("(3+4)*2"), ["3", "4", "+", "2", "*"]);
        assert_eq!(postfix("((a))"), ["a"]);
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(postfix("a && b || c"), ["a", "b", "&&", "c", "||"]);
        assert_eq!(postfix("!a && b"), ["a", "!", "b", "&&"]);
        assert_eq!(postfix("a && !b"), ["a", "b", "!", "&&"]);
        assert_eq!(postfix("x > 1 && y <= 2"), ["x", "1", ">", "y", "2", "<=", "&&"]);
    }

    #[test]
    fn test_prefix_not_never_pops() {
        assert_eq!(postfix("!!a"), ["a", "!", "!"]);
        assert_eq!(postfix("a && !!b"), ["a", "b", "!", "!", "&&"]);
        assert_eq!(postfix("!(!a)"), ["a", "!", "!"]);
        assert_eq!(postfix("a || !!!b"), ["a", "b", "!", "!", "!", "||"]);
    }

    #[test]
    fn test_mismatched_parentheses() {
        let tokens = tokenize("1+2)").unwrap();
        assert_eq!(to_postfix(&tokens), Err(ParseError::MismatchedParentheses));

        let tokens = tokenize("(1+2").unwrap();
        assert_eq!(to_postfix(&tokens), Err(ParseError::MismatchedParentheses));
    }
}
