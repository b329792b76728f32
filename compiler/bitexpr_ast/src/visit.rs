//! Post-order traversal of a folded expression tree.
//!
//! A [`Visitor`] receives each node after its children have been visited, so
//! implementations combine child results bottom-up. The evaluator and the
//! renderer are both visitors.

use bitexpr_lexer::Operator;
use bitexpr_number::{ErrorKind, Result};

use crate::arena::{NodeId, NodeState};
use crate::expression::Expression;

/// The result type for visitor operations.
pub type VisitResult<T> = Result<T>;

/// Callbacks for the node kinds of a folded tree.
pub trait Visitor {
    /// The value produced for each subtree.
    type Output;

    fn visit_literal(&mut self, value: u64) -> VisitResult<Self::Output>;

    fn visit_unary(&mut self, op: Operator, operand: Self::Output) -> VisitResult<Self::Output>;

    fn visit_binary(
        &mut self,
        op: Operator,
        left: Self::Output,
        right: Self::Output,
    ) -> VisitResult<Self::Output>;

    /// Called for an operator that was never folded.
    ///
    /// The default treats it as a broken tree.
    fn visit_pending(&mut self, _op: Operator) -> VisitResult<Self::Output> {
        Err(ErrorKind::OperandNotANumber)
    }
}

enum Step {
    Enter(NodeId),
    Unary(Operator),
    Binary(Operator),
}

/// Visits the subtree rooted at `id`, children first.
///
/// The traversal keeps its own stack, so tree depth is bounded by the arena
/// and not by the thread's stack.
pub fn walk<V: Visitor + ?Sized>(
    expr: &Expression,
    id: NodeId,
    visitor: &mut V,
) -> VisitResult<V::Output> {
    let mut steps = vec![Step::Enter(id)];
    let mut values: Vec<V::Output> = Vec::new();

    while let Some(step) = steps.pop() {
        let value = match step {
            Step::Enter(id) => match expr.state(id) {
                NodeState::Literal(value) => visitor.visit_literal(value)?,
                NodeState::Pending(op) => visitor.visit_pending(op)?,
                NodeState::Folded { op, left, right } => {
                    // left is pushed last so its value lands first
                    match left {
                        None => steps.extend([Step::Unary(op), Step::Enter(right)]),
                        Some(left) => steps.extend([
                            Step::Binary(op),
                            Step::Enter(right),
                            Step::Enter(left),
                        ]),
                    }
                    continue;
                }
            },
            Step::Unary(op) => {
                let operand = values.pop().ok_or(ErrorKind::InvalidExpression)?;
                visitor.visit_unary(op, operand)?
            }
            Step::Binary(op) => {
                let right = values.pop().ok_or(ErrorKind::InvalidExpression)?;
                let left = values.pop().ok_or(ErrorKind::InvalidExpression)?;
                visitor.visit_binary(op, left, right)?
            }
        };
        values.push(value);
    }

    values.pop().ok_or(ErrorKind::InvalidExpression)
}
