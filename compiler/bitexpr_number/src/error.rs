//! Failure kinds shared by every stage of the engine.

/// Result alias used across the bitexpr crates.
pub type Result<T> = std::result::Result<T, ErrorKind>;

/// Every way lexing, building, or evaluating an expression can fail.
///
/// All kinds are recoverable: the caller resets the expression and retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Division or modulo with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// An operator child was still an unresolved operator at evaluation time.
    #[error("operand is not a number")]
    OperandNotANumber,

    /// A `)` without a matching `(`, or a `(` that was never closed.
    #[error("mismatched parenthesis")]
    ParenthesisMismatch,

    /// Malformed input: bad characters, dangling operators, empty groups.
    #[error("invalid expression")]
    InvalidExpression,

    /// An operand is wider than the requested size mode.
    #[error("operand does not fit the requested size mode")]
    SizeMismatch,

    /// The expression's token arena is full.
    #[error("expression capacity exceeded")]
    CapacityExceeded,
}
