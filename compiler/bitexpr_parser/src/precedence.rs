//! Operator precedence levels, tightest first.

use bitexpr_lexer::Operator;

/// How many operands a level's operators consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Prefix operator applied to the operand on its right
    Unary,
    Binary,
}

/// One precedence level of the fold cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    pub operators: &'static [Operator],
    pub arity: Arity,
}

impl Level {
    pub fn contains(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }
}

/// The cascade, tightest binding first.
///
/// Binary levels fold left to right, so they associate left. The unary level
/// folds right to left so stacked prefixes apply innermost first. `-` appears
/// there so a subtract with no operand on its left folds as a negation.
pub static LEVELS: [Level; 7] = [
    Level {
        name: "unary",
        operators: &[Operator::BitNot, Operator::Negate, Operator::Subtract],
        arity: Arity::Unary,
    },
    Level {
        name: "multiplicative",
        operators: &[Operator::Multiply, Operator::Divide, Operator::Modulo],
        arity: Arity::Binary,
    },
    Level {
        name: "additive",
        operators: &[Operator::Add, Operator::Subtract],
        arity: Arity::Binary,
    },
    Level {
        name: "shift",
        operators: &[Operator::ShiftLeft, Operator::ShiftRight],
        arity: Arity::Binary,
    },
    Level {
        name: "bitwise-and",
        operators: &[Operator::BitAnd],
        arity: Arity::Binary,
    },
    Level {
        name: "bitwise-xor",
        operators: &[Operator::BitXor],
        arity: Arity::Binary,
    },
    Level {
        name: "bitwise-or",
        operators: &[Operator::BitOr],
        arity: Arity::Binary,
    },
];

/// The operator a prefix token folds as, given whether an operand sits to its
/// left. `None` means the token is not a prefix operator here.
pub fn prefix_form(op: Operator, follows_operand: bool) -> Option<Operator> {
    match op {
        Operator::Subtract if !follows_operand => Some(Operator::Negate),
        _ if op.is_unary() => Some(op),
        _ => None,
    }
}
