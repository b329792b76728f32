//! Fixed-capacity node storage addressed by index.

use bitexpr_lexer::Operator;
use bitexpr_number::{ErrorKind, Result};

/// Stable index of a node inside its owning arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node currently is.
///
/// A `Pending` operator becomes `Folded` exactly once, when the tree builder
/// gives it its operands; nothing ever turns back into `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// An integer literal's unsigned magnitude.
    Literal(u64),
    /// An operator still waiting for its operands.
    Pending(Operator),
    /// The root of a folded subtree. `left` is `None` for unary operators.
    Folded {
        op: Operator,
        left: Option<NodeId>,
        right: NodeId,
    },
}

impl NodeState {
    /// Literals and folded subtrees can be used as values.
    pub fn is_operand(&self) -> bool {
        !matches!(self, NodeState::Pending(_))
    }

    /// The operator of a pending node.
    pub fn pending_operator(&self) -> Option<Operator> {
        match *self {
            NodeState::Pending(op) => Some(op),
            _ => None,
        }
    }
}

/// One token of an expression.
///
/// `prev`/`next` place the node in the flat sequence; a node that has been
/// folded into a subtree or spliced out has both set to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub state: NodeState,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

/// Bounded storage for the nodes of one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenArena {
    nodes: Vec<Node>,
    capacity: usize,
}

impl TokenArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Stores a new unlinked node, failing once the arena is full.
    pub fn alloc(&mut self, state: NodeState) -> Result<NodeId> {
        if self.nodes.len() >= self.capacity {
            return Err(ErrorKind::CapacityExceeded);
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            state,
            prev: None,
            next: None,
        });
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes allocated since the last clear.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every node. Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_respects_capacity() {
        let mut arena = TokenArena::with_capacity(2);
        assert!(arena.alloc(NodeState::Literal(1)).is_ok());
        assert!(arena.alloc(NodeState::Pending(Operator::Add)).is_ok());
        assert_eq!(
            arena.alloc(NodeState::Literal(2)),
            Err(ErrorKind::CapacityExceeded)
        );
        assert_eq!(arena.len(), 2);

        arena.clear();
        assert!(arena.is_empty());
        assert!(arena.alloc(NodeState::Literal(3)).is_ok());
    }

    #[test]
    fn operand_classification() {
        assert!(NodeState::Literal(0).is_operand());
        assert!(!NodeState::Pending(Operator::Add).is_operand());
        let folded = NodeState::Folded {
            op: Operator::Negate,
            left: None,
            right: NodeId(0),
        };
        assert!(folded.is_operand());
        assert_eq!(folded.pending_operator(), None);
    }
}
