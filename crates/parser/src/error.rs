// Parse error helpers
//
// Chumsky reports `Simple<T>` errors; callers only need a readable message
// and the span of the first failure.

use crate::ast::Span;
use chumsky::error::{Simple, SimpleReason};
use lexer::token::{HexToken, Token};
use std::fmt::Display;
use std::hash::Hash;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// Parser errors of the hexadecimal grammar
pub type HexParseError = Simple<HexToken>;

/// Readable message for a single parse error
pub fn describe<T: Hash + Eq + Display>(error: &Simple<T>) -> String {
    match error.reason() {
        SimpleReason::Custom(msg) => return msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            return format!("unclosed delimiter '{}'", delimiter);
        }
        SimpleReason::Unexpected => {}
    }

    let found = match error.found() {
        Some(token) => format!("unexpected '{}'", token),
        None => "unexpected end of input".to_string(),
    };

    // Sorted so the message does not depend on hash order
    let mut expected: Vec<String> = error.expected().map(format_expected).collect();
    expected.sort();
    expected.dedup();

    match expected.len() {
        0 => found,
        1..=5 => format!("{}, expected {}", found, expected.join(" or ")),
        _ => format!("{}, expected one of {}, ...", found, expected[..5].join(", ")),
    }
}

/// Message and span of the first error, if any
pub fn first_error<T: Hash + Eq + Display>(errors: &[Simple<T>]) -> Option<(String, Span)> {
    errors.first().map(|e| (describe(e), e.span()))
}

/// Format expected token for human-readable output
fn format_expected<T: Display>(token: &Option<T>) -> String {
    match token {
        Some(t) => format!("'{}'", t),
        None => "end of input".to_string(),
    }
}
