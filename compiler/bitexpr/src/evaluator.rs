//! Post-order evaluation of a folded expression.

use log::debug;

use bitexpr_ast::{walk, Expression, VisitResult, Visitor};
use bitexpr_lexer::Operator;
use bitexpr_number::{ops, ErrorKind, Number, Result, Signedness, SizeMode};
use bitexpr_parser::TreeBuilder;

/// Computes the value of a folded tree at a fixed size mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    size_mode: SizeMode,
    signedness: Signedness,
}

impl Evaluator {
    pub fn new(size_mode: SizeMode, signedness: Signedness) -> Self {
        Self {
            size_mode,
            signedness,
        }
    }

    /// Builds `expr` if needed, then evaluates its root.
    pub fn evaluate(&mut self, builder: &mut TreeBuilder, expr: &mut Expression) -> Result<Number> {
        let root = builder.build(expr)?;
        walk(expr, root, self).inspect_err(|err| {
            debug!("evaluating {expr} at {:?} failed: {err}", self.size_mode);
        })
    }
}

impl Visitor for Evaluator {
    type Output = Number;

    /// Rejects literals wider than the size mode, then widens them to it.
    fn visit_literal(&mut self, value: u64) -> VisitResult<Number> {
        let number = Number::from_literal(value, self.signedness);
        if number.size() > self.size_mode {
            return Err(ErrorKind::SizeMismatch);
        }
        Ok(Number::new(number.bits(), self.size_mode, self.signedness))
    }

    fn visit_unary(&mut self, op: Operator, operand: Number) -> VisitResult<Number> {
        match op {
            Operator::BitNot => ops::bitwise_not(&operand, self.size_mode),
            Operator::Negate | Operator::Subtract => ops::negate(&operand, self.size_mode),
            _ => Err(ErrorKind::InvalidExpression),
        }
    }

    fn visit_binary(&mut self, op: Operator, left: Number, right: Number) -> VisitResult<Number> {
        let size = self.size_mode;
        match op {
            Operator::Multiply => ops::multiply(&left, &right, size),
            Operator::Divide => ops::divide(&left, &right, size),
            Operator::Modulo => ops::modulo(&left, &right, size),
            Operator::Add => ops::add(&left, &right, size),
            Operator::Subtract => ops::subtract(&left, &right, size),
            Operator::ShiftLeft => ops::shift_left(&left, &right, size),
            Operator::ShiftRight => ops::shift_right(&left, &right, size),
            Operator::BitAnd => ops::bitwise_and(&left, &right, size),
            Operator::BitXor => ops::bitwise_xor(&left, &right, size),
            Operator::BitOr => ops::bitwise_or(&left, &right, size),
            Operator::LeftParen | Operator::RightParen | Operator::BitNot | Operator::Negate => {
                Err(ErrorKind::InvalidExpression)
            }
        }
    }
}

/// Builds `expr` into a tree if it is not one yet and computes its value.
///
/// A failed build leaves `expr` as it was. Once built, the tree stays built
/// whether or not the arithmetic succeeds; no node is changed by the walk.
pub fn evaluate(expr: &mut Expression, size_mode: SizeMode, signedness: Signedness) -> Result<Number> {
    Evaluator::new(size_mode, signedness).evaluate(&mut TreeBuilder::new(), expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eval(text: &str, size: SizeMode, signedness: Signedness) -> Result<Number> {
        let mut expr = Expression::new();
        expr.set_from_str(text)?;
        evaluate(&mut expr, size, signedness)
    }

    fn qword(text: &str) -> Result<u64> {
        eval(text, SizeMode::Qword, Signedness::Unsigned).map(|n| n.as_u64())
    }

    #[test]
    fn arithmetic_follows_precedence() {
        assert_eq!(qword("2+3*4"), Ok(14));
        assert_eq!(qword("(2+3)*4"), Ok(20));
        assert_eq!(qword("10-3-2"), Ok(5));
        assert_eq!(qword("1+2+3*(5+2)"), Ok(24));
        assert_eq!(qword("1 << 2 + 1"), Ok(8));
        assert_eq!(qword("6 & 3 | 8"), Ok(10));
        assert_eq!(qword("6 ^ 3 & 1"), Ok(7));
    }

    #[test]
    fn literal_bases() {
        assert_eq!(qword("0x1A"), Ok(26));
        assert_eq!(qword("0b101"), Ok(5));
        assert_eq!(qword("0755"), Ok(493));
        assert_eq!(qword("0"), Ok(0));
    }

    #[test]
    fn byte_mode_wraps() {
        let n = eval("250 + 21", SizeMode::Byte, Signedness::Unsigned).unwrap();
        assert_eq!(n.as_u64(), 15);
        assert_eq!(n.size(), SizeMode::Byte);
        assert_eq!(eval("~0", SizeMode::Byte, Signedness::Unsigned).map(|n| n.as_u64()), Ok(255));
        assert_eq!(eval("0 - 1", SizeMode::Word, Signedness::Unsigned).map(|n| n.as_u64()), Ok(0xFFFF));
    }

    #[test]
    fn wide_literal_in_narrow_mode() {
        assert_eq!(
            eval("256 + 1", SizeMode::Byte, Signedness::Unsigned),
            Err(ErrorKind::SizeMismatch)
        );
        assert_eq!(eval("256", SizeMode::Byte, Signedness::Unsigned), Err(ErrorKind::SizeMismatch));
        assert!(eval("255", SizeMode::Byte, Signedness::Unsigned).is_ok());
    }

    #[test]
    fn lone_literal_takes_the_size_mode() {
        for text in ["200", "(200)", "((200))"] {
            let n = eval(text, SizeMode::Qword, Signedness::Signed).unwrap();
            assert_eq!(n.size(), SizeMode::Qword);
            assert_eq!(n.as_i64(), 200);
            assert_eq!(n.to_string(), "200");

            let n = eval(text, SizeMode::Dword, Signedness::Unsigned).unwrap();
            assert_eq!(n.size(), SizeMode::Dword);
            assert_eq!(n.as_i64(), 200);
        }
        let n = eval("200", SizeMode::Byte, Signedness::Signed).unwrap();
        assert_eq!(n.size(), SizeMode::Byte);
        assert_eq!(n.as_i64(), -56);
        assert_eq!(
            eval("200", SizeMode::Qword, Signedness::Signed),
            eval("200 + 0", SizeMode::Qword, Signedness::Signed)
        );
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(qword("1 / 0"), Err(ErrorKind::DivideByZero));
        assert_eq!(qword("1 % (2 - 2)"), Err(ErrorKind::DivideByZero));
        assert_eq!(qword("3 + 4 * (5 / 0)"), Err(ErrorKind::DivideByZero));
    }

    #[test]
    fn signed_mode() {
        let n = eval("--3", SizeMode::Qword, Signedness::Signed).unwrap();
        assert_eq!(n.as_i64(), 3);
        assert_eq!(eval("-7 / 2", SizeMode::Byte, Signedness::Signed).map(|n| n.as_i64()), Ok(-3));
        assert_eq!(eval("-7 % 2", SizeMode::Byte, Signedness::Signed).map(|n| n.as_i64()), Ok(-1));
        assert_eq!(eval("-8 >> 1", SizeMode::Word, Signedness::Signed).map(|n| n.as_i64()), Ok(-4));
        assert_eq!(
            eval("1 << -1", SizeMode::Dword, Signedness::Signed),
            Err(ErrorKind::InvalidExpression)
        );
    }

    #[test]
    fn evaluation_does_not_touch_the_tree() {
        let mut expr = Expression::new();
        expr.set_from_str("8 / (4 - 4)").unwrap();
        assert_eq!(
            evaluate(&mut expr, SizeMode::Qword, Signedness::Unsigned),
            Err(ErrorKind::DivideByZero)
        );
        let built = expr.clone();
        assert_eq!(
            evaluate(&mut expr, SizeMode::Qword, Signedness::Unsigned),
            Err(ErrorKind::DivideByZero)
        );
        assert_eq!(expr, built);
        assert_eq!(expr.to_string(), "( 8 / ( 4 - 4 ) )");
    }
}
