//! Shared helpers for the workspace integration tests.

use std::sync::Once;

use bitexpr::{evaluate, ErrorKind, Expression, Signedness, SizeMode};

static INIT: Once = Once::new();

/// Initialize the logger for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    });
}

/// Evaluates `text` in a fresh expression and returns the value sign-extended
/// from `size` when `signedness` is signed.
pub fn eval_i64(text: &str, size: SizeMode, signedness: Signedness) -> Result<i64, ErrorKind> {
    let mut expr = Expression::new();
    expr.set_from_str(text)?;
    let number = evaluate(&mut expr, size, signedness)?;
    Ok(match signedness {
        Signedness::Signed => number.as_i64(),
        Signedness::Unsigned => number.as_u64() as i64,
    })
}
