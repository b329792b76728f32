//! Folds a flat token sequence into a single-rooted tree, in place.
//!
//! Parenthesis groups are resolved first, innermost out, each by running the
//! full precedence cascade over just the enclosed tokens. The cascade then runs
//! once more over the whole, now parenthesis-free, sequence. Every fold reuses
//! the operator's node as the new operand, so building never allocates.

use log::{debug, trace};

use bitexpr_ast::{Expression, NodeId};
use bitexpr_number::{ErrorKind, Result};

use crate::parens::resolve_groups;
use crate::precedence::{prefix_form, Arity, Level, LEVELS};
use crate::span::Span;

/// Turns an expression's token sequence into a tree.
///
/// The builder keeps its parenthesis stack between calls so repeated builds
/// reuse the allocation.
#[derive(Debug)]
pub struct TreeBuilder {
    levels: &'static [Level],
    pub(crate) open_groups: Vec<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            levels: &LEVELS,
            open_groups: Vec::new(),
        }
    }

    /// Folds `expr` into a tree and returns its root.
    ///
    /// An expression that already is a single operand is returned as is. On
    /// failure `expr` is restored to the sequence it held before the call.
    pub fn build(&mut self, expr: &mut Expression) -> Result<NodeId> {
        if let Some(root) = expr.root() {
            return Ok(root);
        }

        let saved = expr.clone();
        let result = self.build_in_place(expr);
        if let Err(err) = result {
            debug!("build failed with {err:?}; restoring {saved}");
            *expr = saved;
        }
        result
    }

    fn build_in_place(&mut self, expr: &mut Expression) -> Result<NodeId> {
        resolve_groups(self, expr)?;
        self.cascade(expr, Span::whole())
    }

    /// Runs every precedence level over `span` and returns the operand it
    /// reduces to.
    pub(crate) fn cascade(&self, expr: &mut Expression, span: Span) -> Result<NodeId> {
        for level in self.levels {
            let folds = fold_level(expr, span, level)?;
            if folds > 0 {
                debug!("{} level: {folds} fold(s)", level.name);
            }
        }

        let root = span.first(expr).ok_or(ErrorKind::InvalidExpression)?;
        if span.next_of(expr, root).is_some() || !expr.state(root).is_operand() {
            debug!("span did not reduce to one operand: {expr}");
            return Err(ErrorKind::InvalidExpression);
        }
        Ok(root)
    }
}

/// Folds one level until a pass finds nothing left to fold.
fn fold_level(expr: &mut Expression, span: Span, level: &Level) -> Result<usize> {
    let mut total = 0;
    loop {
        let folds = match level.arity {
            Arity::Binary => binary_pass(expr, span, level)?,
            Arity::Unary => prefix_pass(expr, span, level)?,
        };
        if folds == 0 {
            return Ok(total);
        }
        total += folds;
    }
}

fn is_operand(expr: &Expression, id: Option<NodeId>) -> bool {
    id.is_some_and(|id| expr.state(id).is_operand())
}

/// Whether the operator at `id` has operands on both sides within `span`.
fn binary_ready(expr: &Expression, span: Span, level: &Level, id: NodeId) -> bool {
    expr.state(id)
        .pending_operator()
        .is_some_and(|op| level.contains(op))
        && is_operand(expr, span.prev_of(expr, id))
        && is_operand(expr, span.next_of(expr, id))
}

/// Left to right; scanning resumes at each folded node so chains fold left
/// associatively.
fn binary_pass(expr: &mut Expression, span: Span, level: &Level) -> Result<usize> {
    let mut folds = 0;
    let mut cursor = span.first(expr);
    while let Some(id) = cursor {
        if binary_ready(expr, span, level, id) {
            expr.fold_binary(id)?;
            trace!("folded {} at {id:?}", level.name);
            folds += 1;
        }
        cursor = span.next_of(expr, id);
    }
    Ok(folds)
}

/// Right to left, so stacked prefix operators fold innermost first.
fn prefix_pass(expr: &mut Expression, span: Span, level: &Level) -> Result<usize> {
    let mut folds = 0;
    let mut cursor = span.last(expr);
    while let Some(id) = cursor {
        let prev = span.prev_of(expr, id);
        let form = expr
            .state(id)
            .pending_operator()
            .filter(|&op| level.contains(op))
            .and_then(|op| prefix_form(op, is_operand(expr, prev)));
        if let Some(as_op) = form {
            if is_operand(expr, span.next_of(expr, id)) {
                expr.fold_unary(id, as_op)?;
                trace!("folded prefix {as_op:?} at {id:?}");
                folds += 1;
            }
        }
        cursor = prev;
    }
    Ok(folds)
}

/// Folds `expr` with a fresh [`TreeBuilder`].
pub fn build_tree(expr: &mut Expression) -> Result<NodeId> {
    TreeBuilder::new().build(expr)
}
