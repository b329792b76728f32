use bitexpr_ast::{Expression, NodeId};

/// A contiguous run of the sequence, delimited by the nodes just outside it.
///
/// Folds inside a span never touch its boundaries, so a span stays valid while
/// its contents shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Span {
    pub before: Option<NodeId>,
    pub after: Option<NodeId>,
}

impl Span {
    /// The whole sequence.
    pub fn whole() -> Self {
        Self::default()
    }

    pub fn first(&self, expr: &Expression) -> Option<NodeId> {
        let first = match self.before {
            Some(before) => expr.node(before).next,
            None => expr.head(),
        };
        first.filter(|&id| Some(id) != self.after)
    }

    pub fn last(&self, expr: &Expression) -> Option<NodeId> {
        let last = match self.after {
            Some(after) => expr.node(after).prev,
            None => expr.tail(),
        };
        last.filter(|&id| Some(id) != self.before)
    }

    pub fn prev_of(&self, expr: &Expression, id: NodeId) -> Option<NodeId> {
        expr.node(id).prev.filter(|&p| Some(p) != self.before)
    }

    pub fn next_of(&self, expr: &Expression, id: NodeId) -> Option<NodeId> {
        expr.node(id).next.filter(|&n| Some(n) != self.after)
    }
}
