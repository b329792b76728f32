use bitexpr_ast::{walk, Expression, NodeState, VisitResult, Visitor};
use bitexpr_lexer::Operator;
use pretty_assertions::assert_eq;

/// Measures the height of a folded tree.
struct Depth;

impl Visitor for Depth {
    type Output = usize;

    fn visit_literal(&mut self, _value: u64) -> VisitResult<usize> {
        Ok(1)
    }

    fn visit_unary(&mut self, _op: Operator, operand: usize) -> VisitResult<usize> {
        Ok(operand + 1)
    }

    fn visit_binary(&mut self, _op: Operator, left: usize, right: usize) -> VisitResult<usize> {
        Ok(left.max(right) + 1)
    }
}

#[test]
fn test_hand_folded_tree() {
    // 1 - 2 - 3 folded left to right
    let mut expr = Expression::new();
    expr.set_from_str("1 - 2 - 3").unwrap();
    let ids: Vec<_> = expr.tokens().map(|(id, _)| id).collect();
    expr.fold_binary(ids[1]).unwrap();
    expr.fold_binary(ids[3]).unwrap();

    let root = expr.root().expect("single root after two folds");
    assert_eq!(root, ids[3]);
    assert_eq!(walk(&expr, root, &mut Depth), Ok(3));
    assert_eq!(expr.to_string(), "( ( 1 - 2 ) - 3 )");

    match expr.state(root) {
        NodeState::Folded { left, right, .. } => {
            assert_eq!(left, Some(ids[1]));
            assert_eq!(right, ids[4]);
        }
        other => panic!("expected folded root, got {other:?}"),
    }
}

#[test]
fn test_appending_after_a_root_extends_the_sequence() {
    let mut expr = Expression::new();
    expr.set_from_str("1 + 2").unwrap();
    let plus = expr.tokens().nth(1).map(|(id, _)| id).unwrap();
    expr.fold_binary(plus).unwrap();
    assert!(expr.root().is_some());

    expr.append_operator(Operator::Multiply).unwrap();
    expr.append_operand(3).unwrap();
    assert_eq!(expr.root(), None);
    assert_eq!(expr.to_string(), "( 1 + 2 ) * 3");
    assert_eq!(expr.len(), 5);
}
