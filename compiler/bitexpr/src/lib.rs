//! A fixed-width integer expression engine.
//!
//! Text such as `"1 + 2 * (0x10 >> 2)"` is lexed into an [`Expression`],
//! folded in place into a tree by operator precedence, and evaluated with
//! wraparound at 8, 16, 32 or 64 bits, signed or unsigned.
//!
//! ```
//! use bitexpr::{Engine, EngineConfig, SizeMode};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_size_mode(SizeMode::Byte))?;
//! assert_eq!(engine.evaluate_str("250 + 21")?.as_u64(), 15);
//! # Ok::<(), bitexpr::ErrorKind>(())
//! ```
//!
//! The free functions below mirror the methods on [`Expression`] for callers
//! that prefer a procedural interface.

pub mod config;
pub mod engine;
pub mod evaluator;
pub mod shared;

pub use bitexpr_ast::{Expression, NodeId, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use bitexpr_lexer::{LexError, Operator};
pub use bitexpr_number::{DisplayMode, ErrorKind, Number, Result, Signedness, SizeMode};
pub use bitexpr_parser::{build_tree, TreeBuilder};
pub use config::EngineConfig;
pub use engine::Engine;
pub use evaluator::{evaluate, Evaluator};
pub use shared::{Checkout, SharedExpression};

/// An empty expression holding up to `capacity` tokens.
pub fn new_expression(capacity: usize) -> Result<Expression> {
    Expression::with_capacity(capacity)
}

pub fn reset(expr: &mut Expression) {
    expr.reset();
}

pub fn append_operand(expr: &mut Expression, value: u64) -> Result<NodeId> {
    expr.append_operand(value)
}

pub fn append_operator(expr: &mut Expression, op: Operator) -> Result<NodeId> {
    expr.append_operator(op)
}

/// Replaces `expr`'s tokens with those of `text`, leaving it empty on failure.
pub fn set_from_str(expr: &mut Expression, text: &str) -> Result<()> {
    expr.set_from_str(text)
}

pub fn render(expr: &Expression) -> String {
    bitexpr_ast::render(expr)
}
