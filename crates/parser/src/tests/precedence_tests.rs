// Operator Precedence Tests
//
// Tests to ensure correct operator precedence parsing.

use super::parse_expr;
use crate::ast::{BinaryOp, Expr, UnaryOp};

fn num(n: f64) -> Expr {
    Expr::Number(n)
}

#[test]
fn test_mul_over_add() {
    // 1 + 2 * 3 should be 1 + (2 * 3)
    assert_eq!(
        parse_expr("1 + 2 * 3").unwrap(),
        Expr::binary(
            BinaryOp::Add,
            num(1.0),
            Expr::binary(BinaryOp::Mul, num(2.0), num(3.0))
        )
    );
}

#[test]
fn test_div_over_sub() {
    // 10 - 4 / 2 should be 10 - (4 / 2)
    assert_eq!(
        parse_expr("10 - 4 / 2").unwrap(),
        Expr::binary(
            BinaryOp::Sub,
            num(10.0),
            Expr::binary(BinaryOp::Div, num(4.0), num(2.0))
        )
    );
}

#[test]
fn test_pow_over_mul() {
    // 2 * 3 ** 4 should be 2 * (3 ** 4)
    assert_eq!(
        parse_expr("2 * 3 ** 4").unwrap(),
        Expr::binary(
            BinaryOp::Mul,
            num(2.0),
            Expr::binary(BinaryOp::Pow, num(3.0), num(4.0))
        )
    );
}

#[test]
fn test_sub_is_left_associative() {
    // 10 - 3 - 2 should be (10 - 3) - 2
    assert_eq!(
        parse_expr("10 - 3 - 2").unwrap(),
        Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Sub, num(10.0), num(3.0)),
            num(2.0)
        )
    );
}

#[test]
fn test_div_is_left_associative() {
    assert_eq!(
        parse_expr("8 / 4 / 2").unwrap(),
        Expr::binary(
            BinaryOp::Div,
            Expr::binary(BinaryOp::Div, num(8.0), num(4.0)),
            num(2.0)
        )
    );
}

#[test]
fn test_pow_is_right_associative() {
    // 2 ** 3 ** 2 should be 2 ** (3 ** 2)
    assert_eq!(
        parse_expr("2 ** 3 ** 2").unwrap(),
        Expr::binary(
            BinaryOp::Pow,
            num(2.0),
            Expr::binary(BinaryOp::Pow, num(3.0), num(2.0))
        )
    );
}

#[test]
fn test_long_pow_chain() {
    assert_eq!(
        parse_expr("1 ** 2 ** 3 ** 4").unwrap(),
        Expr::binary(
            BinaryOp::Pow,
            num(1.0),
            Expr::binary(
                BinaryOp::Pow,
                num(2.0),
                Expr::binary(BinaryOp::Pow, num(3.0), num(4.0))
            )
        )
    );
}

#[test]
fn test_pow_binds_tighter_than_negation() {
    // -2 ** 2 should be -(2 ** 2)
    assert_eq!(
        parse_expr("-2 ** 2").unwrap(),
        Expr::unary(
            UnaryOp::Negate,
            Expr::binary(BinaryOp::Pow, num(2.0), num(2.0))
        )
    );
}

#[test]
fn test_negation_matches_subtraction_form() {
    // 0 - 2 ** 2 negates the same power
    assert_eq!(
        parse_expr("0 - 2 ** 2").unwrap(),
        Expr::binary(
            BinaryOp::Sub,
            num(0.0),
            Expr::binary(BinaryOp::Pow, num(2.0), num(2.0))
        )
    );
}

#[test]
fn test_parenthesized_negative_base() {
    assert_eq!(
        parse_expr("(-2) ** 2").unwrap(),
        Expr::binary(
            BinaryOp::Pow,
            Expr::unary(UnaryOp::Negate, num(2.0)),
            num(2.0)
        )
    );
}

#[test]
fn test_signed_exponent_keeps_chain() {
    // 2 ** -3 ** 2 should be 2 ** -(3 ** 2)
    assert_eq!(
        parse_expr("2 ** -3 ** 2").unwrap(),
        Expr::binary(
            BinaryOp::Pow,
            num(2.0),
            Expr::unary(
                UnaryOp::Negate,
                Expr::binary(BinaryOp::Pow, num(3.0), num(2.0))
            )
        )
    );
}

#[test]
fn test_negative_exponent() {
    assert_eq!(
        parse_expr("2 ** -1").unwrap(),
        Expr::binary(
            BinaryOp::Pow,
            num(2.0),
            Expr::unary(UnaryOp::Negate, num(1.0))
        )
    );
}

#[test]
fn test_parens_override_precedence() {
    // (1 + 2) * 3
    assert_eq!(
        parse_expr("(1 + 2) * 3").unwrap(),
        Expr::binary(
            BinaryOp::Mul,
            Expr::binary(BinaryOp::Add, num(1.0), num(2.0)),
            num(3.0)
        )
    );
}
