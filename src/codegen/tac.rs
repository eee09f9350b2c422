//! Three-address code instruction record.

use crate::core::Operator;
use std::fmt;

/// One `dest = lhs MNEMONIC rhs` instruction.
///
/// `lhs` is `None` for unary operators, which render as `dest = MNEMONIC rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TacInstruction<'a> {
    pub dest: &'a str,
    pub lhs: Option<&'a str>,
    pub op: Operator,
    pub rhs: &'a str,
}

impl<'a> TacInstruction<'a> {
    pub fn binary(dest: &'a str, lhs: &'a str, op: Operator, rhs: &'a str) -> Self {
        Self { dest, lhs: Some(lhs), op, rhs }
    }

    pub fn unary(dest: &'a str, op: Operator, operand: &'a str) -> Self {
        Self { dest, lhs: None, op, rhs: operand }
    }

    pub fn mnemonic(&self) -> &'static str {
        self.op.mnemonic()
    }
}

impl fmt::Display for TacInstruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lhs {
            Some(lhs) => write!(f, "{} = {} {} {}", self.dest, lhs, self.mnemonic(), self.rhs),
            None => write!(f, "{} = {} {}", self.dest, self.mnemonic(), self.rhs),
        }
    }
}
