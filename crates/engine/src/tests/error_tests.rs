// Error Type Tests

use crate::error::{CalcError, FailureKind};

#[test]
fn test_kinds() {
    assert_eq!(CalcError::syntax("x", None).kind(), FailureKind::Syntax);
    assert_eq!(CalcError::math("x").kind(), FailureKind::Math);
    assert_eq!(CalcError::validation("x").kind(), FailureKind::Validation);
}

#[test]
fn test_exit_codes_are_distinct() {
    assert_eq!(CalcError::syntax("x", Some(0..1)).exit_code(), 2);
    assert_eq!(CalcError::math("x").exit_code(), 3);
    assert_eq!(CalcError::validation("x").exit_code(), 4);
}

#[test]
fn test_display() {
    assert_eq!(
        CalcError::syntax("unexpected end of input", None).to_string(),
        "Syntax error: unexpected end of input"
    );
    assert_eq!(
        CalcError::math("division by zero").to_string(),
        "Math error: division by zero"
    );
    assert_eq!(
        CalcError::validation("people must be a positive integer").to_string(),
        "Invalid input: people must be a positive integer"
    );
}
