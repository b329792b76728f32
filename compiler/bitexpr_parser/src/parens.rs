use log::debug;

use bitexpr_ast::{Expression, NodeId};
use bitexpr_lexer::Operator;
use bitexpr_number::{ErrorKind, Result};

use crate::builder::TreeBuilder;
use crate::span::Span;

/// Collapses every parenthesis group into the operand it evaluates to.
///
/// Groups close innermost first: each `)` pairs with the most recent unmatched
/// `(`, both markers are spliced out and the enclosed tokens are folded through
/// the full cascade. Afterwards no parenthesis remains in the sequence.
pub(crate) fn resolve_groups(builder: &mut TreeBuilder, expr: &mut Expression) -> Result<()> {
    let mut stack = std::mem::take(&mut builder.open_groups);
    stack.clear();
    let result = resolve_with(builder, expr, &mut stack);
    builder.open_groups = stack;
    result
}

fn resolve_with(builder: &TreeBuilder, expr: &mut Expression, stack: &mut Vec<NodeId>) -> Result<()> {
    let mut cursor = expr.head();
    while let Some(id) = cursor {
        match expr.state(id).pending_operator() {
            Some(Operator::LeftParen) => {
                stack.push(id);
                cursor = expr.node(id).next;
            }
            Some(Operator::RightParen) => {
                let open = stack.pop().ok_or(ErrorKind::ParenthesisMismatch)?;
                cursor = close_group(builder, expr, open, id)?;
            }
            _ => cursor = expr.node(id).next,
        }
    }

    if stack.is_empty() {
        Ok(())
    } else {
        debug!("{} unclosed group(s)", stack.len());
        Err(ErrorKind::ParenthesisMismatch)
    }
}

/// Folds the group between `open` and `close` and returns where scanning
/// resumes.
fn close_group(
    builder: &TreeBuilder,
    expr: &mut Expression,
    open: NodeId,
    close: NodeId,
) -> Result<Option<NodeId>> {
    if expr.node(open).next == Some(close) {
        debug!("empty group at {open:?}");
        return Err(ErrorKind::InvalidExpression);
    }

    let span = Span {
        before: expr.node(open).prev,
        after: expr.node(close).next,
    };
    expr.splice_out(open);
    expr.splice_out(close);

    let operand = builder.cascade(expr, span)?;
    debug!("group {open:?}..{close:?} reduced to {operand:?}");
    Ok(span.after)
}
