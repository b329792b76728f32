//! Fixed-width integer arithmetic for the bitexpr engine.
//!
//! [`Number`] is a bit pattern tagged with a [`SizeMode`] and a
//! [`Signedness`]; the functions in [`ops`] combine numbers with wraparound
//! semantics. [`ErrorKind`] is the failure taxonomy shared by every crate in
//! the workspace.

pub mod error;
pub mod number;
pub mod ops;

pub use error::{ErrorKind, Result};
pub use number::{DisplayMode, Number, Signedness, SizeMode};
