//! Wraparound arithmetic on [`Number`]s.
//!
//! Every operation rejects inputs wider than the requested size mode, computes
//! in 64 bits, and truncates the result to the size mode. Overflow is never an
//! error. The result takes the left operand's signedness.

use crate::error::{ErrorKind, Result};
use crate::number::{Number, SizeMode};

fn check_fits(size: SizeMode, operands: &[&Number]) -> Result<()> {
    if operands.iter().any(|n| n.size() > size) {
        return Err(ErrorKind::SizeMismatch);
    }
    Ok(())
}

fn unary<F>(operand: &Number, size: SizeMode, f: F) -> Result<Number>
where
    F: FnOnce(u64) -> u64,
{
    check_fits(size, &[operand])?;
    let value = f(operand.widened(size));
    Ok(Number::new(value, size, operand.signedness()))
}

fn binary<F>(lhs: &Number, rhs: &Number, size: SizeMode, f: F) -> Result<Number>
where
    F: FnOnce(u64, u64) -> Result<u64>,
{
    check_fits(size, &[lhs, rhs])?;
    let value = f(lhs.widened(size), rhs.widened(size))?;
    Ok(Number::new(value, size, lhs.signedness()))
}

pub fn add(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    binary(lhs, rhs, size, |a, b| Ok(a.wrapping_add(b)))
}

pub fn subtract(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    binary(lhs, rhs, size, |a, b| Ok(a.wrapping_sub(b)))
}

pub fn multiply(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    binary(lhs, rhs, size, |a, b| Ok(a.wrapping_mul(b)))
}

/// Truncating division. Signed operands divide as two's complement, and
/// `MIN / -1` wraps to `MIN`.
pub fn divide(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    let signed = lhs.signedness().is_signed();
    binary(lhs, rhs, size, |a, b| {
        if b == 0 {
            return Err(ErrorKind::DivideByZero);
        }
        if signed {
            Ok((a as i64).wrapping_div(b as i64) as u64)
        } else {
            Ok(a / b)
        }
    })
}

/// Remainder with the sign of the dividend when signed.
pub fn modulo(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    let signed = lhs.signedness().is_signed();
    binary(lhs, rhs, size, |a, b| {
        if b == 0 {
            return Err(ErrorKind::DivideByZero);
        }
        if signed {
            Ok((a as i64).wrapping_rem(b as i64) as u64)
        } else {
            Ok(a % b)
        }
    })
}

pub fn bitwise_not(operand: &Number, size: SizeMode) -> Result<Number> {
    unary(operand, size, |a| !a)
}

pub fn negate(operand: &Number, size: SizeMode) -> Result<Number> {
    unary(operand, size, |a| a.wrapping_neg())
}

/// Shift amount as an unsigned count, rejecting negative signed amounts.
fn shift_amount(amount: u64, signed: bool) -> Result<u64> {
    if signed && (amount as i64) < 0 {
        return Err(ErrorKind::InvalidExpression);
    }
    Ok(amount)
}

/// Shifts past the width produce zero.
pub fn shift_left(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    let signed_amount = rhs.signedness().is_signed();
    binary(lhs, rhs, size, |a, b| {
        let amount = shift_amount(b, signed_amount)?;
        if amount >= u64::from(size.bits()) {
            Ok(0)
        } else {
            Ok(a << amount)
        }
    })
}

/// Arithmetic shift when signed, logical otherwise. Shifts past the width
/// leave only the sign fill.
pub fn shift_right(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    let signed_amount = rhs.signedness().is_signed();
    let signed = lhs.signedness().is_signed();
    binary(lhs, rhs, size, |a, b| {
        let amount = shift_amount(b, signed_amount)?.min(u64::from(size.bits()));
        Ok(match (signed, amount) {
            (true, 64) => ((a as i64) >> 63) as u64,
            (true, n) => ((a as i64) >> n) as u64,
            (false, 64) => 0,
            (false, n) => a >> n,
        })
    })
}

pub fn bitwise_and(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    binary(lhs, rhs, size, |a, b| Ok(a & b))
}

pub fn bitwise_xor(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    binary(lhs, rhs, size, |a, b| Ok(a ^ b))
}

pub fn bitwise_or(lhs: &Number, rhs: &Number, size: SizeMode) -> Result<Number> {
    binary(lhs, rhs, size, |a, b| Ok(a | b))
}
