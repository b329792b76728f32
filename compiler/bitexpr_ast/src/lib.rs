//! Expression storage for bitexpr.
//!
//! An [`Expression`] owns its tokens in a fixed-capacity arena and links them
//! into a sequence by index. The tree builder folds that sequence in place into
//! a binary tree; [`visit`] walks the result and [`render`] prints it.

pub mod arena;
pub mod expression;
pub mod render;
pub mod visit;

// Re-export commonly used types
pub use arena::{Node, NodeId, NodeState, TokenArena};
pub use expression::{Expression, Tokens, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use render::render;
pub use visit::{walk, VisitResult, Visitor};

/// A result type for serialization helpers.
#[cfg(feature = "serde")]
pub type JsonResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serializes an expression (or any node type) to pretty JSON.
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize>(value: &T) -> JsonResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
