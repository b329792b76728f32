use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use log::warn;

use bitexpr_ast::Expression;
use bitexpr_number::Result;

/// An expression that several threads take turns building and evaluating.
///
/// At most one checkout guard is live at a time. Dropping the guard returns
/// the expression.
#[derive(Debug, Default)]
pub struct SharedExpression {
    inner: Mutex<Expression>,
}

/// Exclusive access to a [`SharedExpression`].
pub type Checkout<'a> = MutexGuard<'a, Expression>;

impl SharedExpression {
    pub fn new(expr: Expression) -> Self {
        Self {
            inner: Mutex::new(expr),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::new(Expression::with_capacity(capacity)?))
    }

    /// The expression, or `None` while another checkout is live.
    pub fn try_checkout(&self) -> Option<Checkout<'_>> {
        match self.inner.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::WouldBlock) => None,
            Err(TryLockError::Poisoned(poisoned)) => Some(self.recover(poisoned)),
        }
    }

    /// Waits for the expression to be free.
    pub fn checkout(&self) -> Checkout<'_> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| self.recover(poisoned))
    }

    pub fn into_inner(self) -> Expression {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A holder that panicked mid-build may have left a half-folded sequence.
    fn recover<'a>(&self, poisoned: PoisonError<Checkout<'a>>) -> Checkout<'a> {
        warn!("expression checkout was poisoned; resetting it");
        let mut guard = poisoned.into_inner();
        guard.reset();
        self.inner.clear_poison();
        guard
    }
}
