// This module defines the operator table shared by every stage of the tacgen pipeline.
// Operator is a closed enum of the supported symbols: arithmetic (+ - * / % // **),
// relational (< <= > >= == !=) and logical (&& || !). Each variant maps through a const
// info() lookup to an OpInfo record carrying its source symbol, TAC mnemonic, binding
// precedence, associativity, arity and operator class. The lexer resolves symbols through
// from_symbol(), the validator uses the class and arity to pick its context checks, the
// shunting-yard converter reads precedence and associativity, and the code emitter reads
// the mnemonic and arity. The table is compile-time constant and never mutated.

//! Operator table.

use std::fmt;

/// Broad family an operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Arithmetic,
    Relational,
    Logical,
}

impl OperatorClass {
    pub const fn name(self) -> &'static str {
        match self {
            OperatorClass::Arithmetic => "arithmetic",
            OperatorClass::Relational => "relational",
            OperatorClass::Logical => "logical",
        }
    }
}

impl fmt::Display for OperatorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub symbol: &'static str,
    pub mnemonic: &'static str,
    /// Binding strength; higher binds tighter.
    pub precedence: u8,
    pub right_associative: bool,
    pub arity: u8,
    pub class: OperatorClass,
}

impl Operator {
    /// Every supported operator, two-character symbols first.
    pub const ALL: [Operator; 16] = [
        Operator::FloorDiv,
        Operator::Pow,
        Operator::Le,
        Operator::Ge,
        Operator::Eq,
        Operator::Ne,
        Operator::And,
        Operator::Or,
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::Lt,
        Operator::Gt,
        Operator::Not,
    ];

    pub const fn info(self) -> OpInfo {
        use Operator::*;
        use OperatorClass::*;
        match self {
            Pow => OpInfo { symbol: "**", mnemonic: "POW", precedence: 6, right_associative: true, arity: 2, class: Arithmetic },
            Mul => OpInfo { symbol: "*", mnemonic: "MUL", precedence: 5, right_associative: false, arity: 2, class: Arithmetic },
            Div => OpInfo { symbol: "/", mnemonic: "DIV", precedence: 5, right_associative: false, arity: 2, class: Arithmetic },
            FloorDiv => OpInfo { symbol: "//", mnemonic: "DIV", precedence: 5, right_associative: false, arity: 2, class: Arithmetic },
            Mod => OpInfo { symbol: "%", mnemonic: "MOD", precedence: 5, right_associative: false, arity: 2, class: Arithmetic },
            Add => OpInfo { symbol: "+", mnemonic: "ADD", precedence: 4, right_associative: false, arity: 2, class: Arithmetic },
            Sub => OpInfo { symbol: "-", mnemonic: "SUB", precedence: 4, right_associative: false, arity: 2, class: Arithmetic },
            Lt => OpInfo { symbol: "<", mnemonic: "LT", precedence: 3, right_associative: false, arity: 2, class: Relational },
            Le => OpInfo { symbol: "<=", mnemonic: "LE", precedence: 3, right_associative: false, arity: 2, class: Relational },
            Gt => OpInfo { symbol: ">", mnemonic: "GT", precedence: 3, right_associative: false, arity: 2, class: Relational },
            Ge => OpInfo { symbol: ">=", mnemonic: "GE", precedence: 3, right_associative: false, arity: 2, class: Relational },
            Eq => OpInfo { symbol: "==", mnemonic: "EQ", precedence: 3, right_associative: false, arity: 2, class: Relational },
            Ne => OpInfo { symbol: "!=", mnemonic: "NE", precedence: 3, right_associative: false, arity: 2, class: Relational },
            Not => OpInfo { symbol: "!", mnemonic: "NOT", precedence: 2, right_associative: false, arity: 1, class: Logical },
            And => OpInfo { symbol: "&&", mnemonic: "AND", precedence: 1, right_associative: false, arity: 2, class: Logical },
            Or => OpInfo { symbol: "||", mnemonic: "OR", precedence: 1, right_associative: false, arity: 2, class: Logical },
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.info().symbol == symbol)
    }

    /// Longest operator symbol starting at byte offset `pos` of `text`.
    pub fn match_at(text: &str, pos: usize) -> Option<Self> {
        let two = text.get(pos..pos + 2).and_then(Self::from_symbol);
        two.or_else(|| text.get(pos..pos + 1).and_then(Self::from_symbol))
    }

    /// Characters that can begin or continue an operator symbol.
    pub fn is_symbol_char(ch: char) -> bool {
        matches!(ch, '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=' | '!' | '&' | '|')
    }

    /// True if `ch` is a complete single-character operator on its own.
    pub fn is_single_char_operator(ch: char) -> bool {
        let mut buf = [0u8; 4];
        Self::from_symbol(ch.encode_utf8(&mut buf)).is_some()
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }

    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    pub fn is_unary(self) -> bool {
        self.info().arity == 1
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
