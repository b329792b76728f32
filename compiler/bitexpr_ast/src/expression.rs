//! The token sequence of one expression and the relinking primitives the
//! tree builder folds it with.

use log::debug;

use bitexpr_lexer::{tokenize, Operator, TokenType};
use bitexpr_number::{ErrorKind, Result};

use crate::arena::{Node, NodeId, NodeState, TokenArena};

/// Tokens an expression holds unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 128;

/// Largest capacity an expression may be created with.
pub const MAX_CAPACITY: usize = 4096;

/// An ordered, mutable token sequence that exclusively owns its nodes.
///
/// Before evaluation the sequence is flat. Folding rewrites it in place until a
/// single operand remains at the head; that node is the root of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Expression {
    arena: TokenArena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression {
    /// An empty expression holding up to [`DEFAULT_CAPACITY`] tokens.
    pub fn new() -> Self {
        Self {
            arena: TokenArena::with_capacity(DEFAULT_CAPACITY),
            head: None,
            tail: None,
        }
    }

    /// An empty expression holding up to `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity > MAX_CAPACITY {
            return Err(ErrorKind::CapacityExceeded);
        }
        Ok(Self {
            arena: TokenArena::with_capacity(capacity),
            head: None,
            tail: None,
        })
    }

    /// Discards every token.
    pub fn reset(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Replaces the contents with the tokens of `text`.
    ///
    /// On failure the expression is left empty.
    pub fn set_from_str(&mut self, text: &str) -> Result<()> {
        self.reset();
        let tokens = tokenize(text).map_err(|err| {
            debug!("rejecting {text:?}: {err}");
            ErrorKind::from(err)
        })?;
        for token in tokens {
            if let Err(err) = self.append(token.token_type) {
                self.reset();
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn append(&mut self, token: TokenType) -> Result<NodeId> {
        match token {
            TokenType::Integer(value) => self.append_operand(value),
            TokenType::Operator(op) => self.append_operator(op),
        }
    }

    pub fn append_operand(&mut self, value: u64) -> Result<NodeId> {
        self.push_back(NodeState::Literal(value))
    }

    pub fn append_operator(&mut self, op: Operator) -> Result<NodeId> {
        self.push_back(NodeState::Pending(op))
    }

    /// Inserts a literal before sequence position `pos`; `pos == len` appends.
    pub fn insert_operand(&mut self, pos: usize, value: u64) -> Result<NodeId> {
        self.insert_at(pos, NodeState::Literal(value))
    }

    /// Inserts an operator before sequence position `pos`; `pos == len` appends.
    pub fn insert_operator(&mut self, pos: usize, op: Operator) -> Result<NodeId> {
        self.insert_at(pos, NodeState::Pending(op))
    }

    fn push_back(&mut self, state: NodeState) -> Result<NodeId> {
        let id = self.arena.alloc(state)?;
        self.link(self.tail, Some(id));
        self.link(Some(id), None);
        Ok(id)
    }

    fn insert_at(&mut self, pos: usize, state: NodeState) -> Result<NodeId> {
        let len = self.sequence_len();
        if pos > len {
            return Err(ErrorKind::InvalidExpression);
        }
        if pos == len {
            return self.push_back(state);
        }
        let before = self.tokens().nth(pos).map(|(id, _)| id);
        let id = self.arena.alloc(state)?;
        let after_prev = before.and_then(|b| self.arena.get(b).prev);
        self.link(after_prev, Some(id));
        self.link(Some(id), before);
        Ok(id)
    }

    /// Tokens appended since the last reset.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Maximum number of tokens this expression can hold.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of tokens currently linked in the sequence.
    pub fn sequence_len(&self) -> usize {
        self.tokens().count()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    pub fn state(&self, id: NodeId) -> NodeState {
        self.arena.get(id).state
    }

    /// The single operand the sequence has been folded into, if it has.
    pub fn root(&self) -> Option<NodeId> {
        let head = self.head?;
        let node = self.arena.get(head);
        (node.next.is_none() && node.state.is_operand()).then_some(head)
    }

    /// Walks the current sequence from head to tail.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            expr: self,
            cursor: self.head,
        }
    }

    /// Joins `prev` and `next`; `None` on either side moves the head or tail.
    fn link(&mut self, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(p) => self.arena.get_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.arena.get_mut(n).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Removes `id` from the sequence, joining its neighbors.
    ///
    /// A node that is no longer in the sequence is left alone.
    pub fn splice_out(&mut self, id: NodeId) {
        let Node { prev, next, .. } = *self.arena.get(id);
        if prev.is_none() && self.head != Some(id) {
            return;
        }
        self.link(prev, next);
        let node = self.arena.get_mut(id);
        node.prev = None;
        node.next = None;
    }

    /// Folds `lhs op rhs` into the operator node, which takes the place of all
    /// three in the sequence.
    ///
    /// The caller guarantees `op`'s neighbors are operands.
    pub fn fold_binary(&mut self, op_id: NodeId) -> Result<NodeId> {
        let op = self.pending(op_id)?;
        let node = *self.arena.get(op_id);
        let (Some(lhs), Some(rhs)) = (node.prev, node.next) else {
            return Err(ErrorKind::InvalidExpression);
        };
        self.splice_out(lhs);
        self.splice_out(rhs);
        self.arena.get_mut(op_id).state = NodeState::Folded {
            op,
            left: Some(lhs),
            right: rhs,
        };
        Ok(op_id)
    }

    /// Folds the prefix operator at `op_id` with the operand to its right,
    /// recording it as `as_op`.
    pub fn fold_unary(&mut self, op_id: NodeId, as_op: Operator) -> Result<NodeId> {
        self.pending(op_id)?;
        let Some(operand) = self.arena.get(op_id).next else {
            return Err(ErrorKind::InvalidExpression);
        };
        self.splice_out(operand);
        self.arena.get_mut(op_id).state = NodeState::Folded {
            op: as_op,
            left: None,
            right: operand,
        };
        Ok(op_id)
    }

    fn pending(&self, id: NodeId) -> Result<Operator> {
        self.arena
            .get(id)
            .state
            .pending_operator()
            .ok_or(ErrorKind::InvalidExpression)
    }
}

/// Iterator over the linked sequence of an [`Expression`].
pub struct Tokens<'a> {
    expr: &'a Expression,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.expr.node(id);
        self.cursor = node.next;
        Some((id, node))
    }
}
