//! Canonical text form of an expression.
//!
//! Tokens are separated by single spaces, operators print as their symbol and
//! literals in decimal. A folded subtree prints as a parenthesized group, so a
//! fully built expression renders as one group.

use std::fmt;

use bitexpr_lexer::Operator;

use crate::expression::Expression;
use crate::visit::{walk, VisitResult, Visitor};

struct Renderer;

impl Visitor for Renderer {
    type Output = String;

    fn visit_literal(&mut self, value: u64) -> VisitResult<String> {
        Ok(value.to_string())
    }

    fn visit_unary(&mut self, op: Operator, operand: String) -> VisitResult<String> {
        Ok(format!("( {op} {operand} )"))
    }

    fn visit_binary(&mut self, op: Operator, left: String, right: String) -> VisitResult<String> {
        Ok(format!("( {left} {op} {right} )"))
    }

    fn visit_pending(&mut self, op: Operator) -> VisitResult<String> {
        Ok(op.symbol().to_string())
    }
}

/// Renders the current token sequence of `expr`.
pub fn render(expr: &Expression) -> String {
    let mut out = String::new();
    for (id, _) in expr.tokens() {
        if !out.is_empty() {
            out.push(' ');
        }
        // the renderer accepts every node state
        if let Ok(text) = walk(expr, id, &mut Renderer) {
            out.push_str(&text);
        }
    }
    out
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flat_sequence() {
        let mut expr = Expression::new();
        expr.set_from_str("0x1A+0b101 <<(0755)").unwrap();
        assert_eq!(render(&expr), "26 + 5 << ( 493 )");
    }

    #[test]
    fn appended_tokens() {
        let mut expr = Expression::new();
        expr.append_operand(24).unwrap();
        expr.append_operator(Operator::Add).unwrap();
        expr.append_operand(37).unwrap();
        assert_eq!(expr.to_string(), "24 + 37");
    }

    #[test]
    fn folded_subtrees_are_grouped() {
        let mut expr = Expression::new();
        expr.set_from_str("~1 * 2").unwrap();
        let ids: Vec<_> = expr.tokens().map(|(id, _)| id).collect();
        expr.fold_unary(ids[0], Operator::BitNot).unwrap();
        assert_eq!(render(&expr), "( ~ 1 ) * 2");
        expr.fold_binary(ids[2]).unwrap();
        assert_eq!(render(&expr), "( ( ~ 1 ) * 2 )");
    }

    #[test]
    fn empty_expression() {
        assert_eq!(render(&Expression::new()), "");
    }
}
