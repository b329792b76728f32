//! bitexpr lexical analyzer
//!
//! Converts an ASCII infix expression into the ordered token sequence the
//! tree builder folds. Operators, parentheses, and integer literals in
//! binary, octal, decimal, or hexadecimal are recognised; spaces and tabs
//! between tokens are skipped.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod literal;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{tokenize, LexError, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Operator, Token, TokenType};
