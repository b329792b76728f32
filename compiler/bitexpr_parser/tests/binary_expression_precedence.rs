use bitexpr_ast::Expression;
use bitexpr_number::ErrorKind;
use bitexpr_parser::{build_tree, TreeBuilder};
use pretty_assertions::assert_eq;

/// Builds `text` and renders the resulting tree.
fn tree(text: &str) -> String {
    let mut expr = Expression::new();
    expr.set_from_str(text).unwrap();
    build_tree(&mut expr).unwrap_or_else(|err| panic!("{text:?} failed to build: {err}"));
    expr.to_string()
}

fn build_error(text: &str) -> ErrorKind {
    let mut expr = Expression::new();
    expr.set_from_str(text).unwrap();
    build_tree(&mut expr).expect_err("build should fail")
}

#[test]
fn test_operator_precedence() {
    // 2 + (3 * 4), not (2 + 3) * 4
    assert_eq!(tree("2 + 3 * 4"), "( 2 + ( 3 * 4 ) )");
    assert_eq!(tree("2 * 3 + 4"), "( ( 2 * 3 ) + 4 )");
    assert_eq!(tree("1 << 2 + 3"), "( 1 << ( 2 + 3 ) )");
    assert_eq!(tree("1 | 2 ^ 3 & 4"), "( 1 | ( 2 ^ ( 3 & 4 ) ) )");
    assert_eq!(tree("1 & 2 | 3 ^ 4"), "( ( 1 & 2 ) | ( 3 ^ 4 ) )");
    assert_eq!(tree("7 % 4 - 1"), "( ( 7 % 4 ) - 1 )");
}

#[test]
fn test_left_associativity() {
    assert_eq!(tree("1 - 2 + 3"), "( ( 1 - 2 ) + 3 )");
    assert_eq!(tree("10 - 3 - 2"), "( ( 10 - 3 ) - 2 )");
    assert_eq!(tree("8 / 4 / 2"), "( ( 8 / 4 ) / 2 )");
    assert_eq!(tree("1 << 2 >> 1"), "( ( 1 << 2 ) >> 1 )");
}

#[test]
fn test_prefix_operators() {
    assert_eq!(tree("-3"), "( - 3 )");
    assert_eq!(tree("--3"), "( - ( - 3 ) )");
    assert_eq!(tree("~-1"), "( ~ ( - 1 ) )");
    assert_eq!(tree("2 * -3"), "( 2 * ( - 3 ) )");
    assert_eq!(tree("1 - -2"), "( 1 - ( - 2 ) )");
    assert_eq!(tree("1 - - - 2"), "( 1 - ( - ( - 2 ) ) )");
    assert_eq!(tree("~1 - 2"), "( ( ~ 1 ) - 2 )");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(tree("(1 + 2) * 3"), "( ( 1 + 2 ) * 3 )");
    assert_eq!(tree("-(1)"), "( - 1 )");
    assert_eq!(tree("((((7))))"), "7");
    assert_eq!(
        tree("1+2+3*(5+2)"),
        "( ( 1 + 2 ) + ( 3 * ( 5 + 2 ) ) )"
    );
    assert_eq!(tree("(1 - (2 - 3)) - 4"), "( ( 1 - ( 2 - 3 ) ) - 4 )");
}

#[test]
fn test_malformed_sequences() {
    assert_eq!(build_error("1 +"), ErrorKind::InvalidExpression);
    assert_eq!(build_error("* 2"), ErrorKind::InvalidExpression);
    assert_eq!(build_error("1 2"), ErrorKind::InvalidExpression);
    assert_eq!(build_error("1 + ~"), ErrorKind::InvalidExpression);
    assert_eq!(build_error("()1+2"), ErrorKind::InvalidExpression);
    assert_eq!(build_error("(1"), ErrorKind::ParenthesisMismatch);
    assert_eq!(build_error("1)"), ErrorKind::ParenthesisMismatch);
    assert_eq!(build_error("(1))("), ErrorKind::ParenthesisMismatch);
}

#[test]
fn test_failed_build_leaves_sequence_intact() {
    let mut expr = Expression::new();
    expr.set_from_str("1 + (2 * )").unwrap();
    let before = expr.clone();

    let mut builder = TreeBuilder::new();
    assert_eq!(builder.build(&mut expr), Err(ErrorKind::InvalidExpression));
    assert_eq!(expr, before);
    assert_eq!(expr.to_string(), "1 + ( 2 * )");

    // the same expression builds once it is completed
    expr.reset();
    expr.set_from_str("1 + (2 * 3)").unwrap();
    builder.build(&mut expr).unwrap();
    assert_eq!(expr.to_string(), "( 1 + ( 2 * 3 ) )");
}
