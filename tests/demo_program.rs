use bitexpr::{
    append_operand, append_operator, evaluate, new_expression, render, set_from_str, ErrorKind,
    Operator, Signedness, SizeMode, DEFAULT_CAPACITY,
};
use pretty_assertions::assert_eq;
use tests::init_test_logger;

#[test]
fn test_demo_session() {
    init_test_logger();
    let mut expr = new_expression(DEFAULT_CAPACITY).unwrap();
    append_operand(&mut expr, 24).unwrap();
    append_operator(&mut expr, Operator::Add).unwrap();
    append_operand(&mut expr, 37).unwrap();
    assert_eq!(render(&expr), "24 + 37");

    // lexes fine, but the empty groups cannot be built
    set_from_str(&mut expr, "()1+2+()3*(5+2)()").unwrap();
    assert_eq!(render(&expr), "( ) 1 + 2 + ( ) 3 * ( 5 + 2 ) ( )");
    assert_eq!(
        evaluate(&mut expr, SizeMode::Qword, Signedness::Unsigned),
        Err(ErrorKind::InvalidExpression)
    );
    assert_eq!(render(&expr), "( ) 1 + 2 + ( ) 3 * ( 5 + 2 ) ( )");

    set_from_str(&mut expr, "1+2+3*(5+2)").unwrap();
    let result = evaluate(&mut expr, SizeMode::Qword, Signedness::Unsigned).unwrap();
    assert_eq!(result.as_u64(), 24);
    assert_eq!(render(&expr), "( ( 1 + 2 ) + ( 3 * ( 5 + 2 ) ) )");
}

#[test]
fn test_lex_failure_empties_expression() {
    init_test_logger();
    let mut expr = new_expression(16).unwrap();
    set_from_str(&mut expr, "1 + 2").unwrap();
    assert_eq!(set_from_str(&mut expr, "1 +\n2"), Err(ErrorKind::InvalidExpression));
    assert_eq!(render(&expr), "");
    assert_eq!(
        evaluate(&mut expr, SizeMode::Qword, Signedness::Unsigned),
        Err(ErrorKind::InvalidExpression)
    );
}

#[test]
fn test_capacity_bounds_the_sequence() {
    let mut expr = new_expression(5).unwrap();
    assert_eq!(set_from_str(&mut expr, "1 + 2 + 3 + 4"), Err(ErrorKind::CapacityExceeded));
    set_from_str(&mut expr, "(1+2)").unwrap();
    assert_eq!(
        evaluate(&mut expr, SizeMode::Byte, Signedness::Unsigned).map(|n| n.as_u64()),
        Ok(3)
    );
}
