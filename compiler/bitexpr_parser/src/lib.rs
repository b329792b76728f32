//! Tree building for bitexpr expressions.
//!
//! [`build_tree`] folds an [`Expression`](bitexpr_ast::Expression)'s flat
//! token sequence into a binary tree in place, following the operator table in
//! [`precedence`].

pub mod builder;
mod parens;
pub mod precedence;
mod span;

pub use builder::{build_tree, TreeBuilder};
pub use precedence::{prefix_form, Arity, Level, LEVELS};
