// Test module for parser
//
// Tests are organized by category to cover tree construction, operator
// precedence, error reporting and the hexadecimal grammar.

mod precedence_tests;

use crate::ast::{Expr, HexExpr};
use crate::error::{HexParseError, ParseError};
use crate::parser::{parse_hex_tokens, parse_tokens};

pub(crate) fn parse_expr(input: &str) -> Result<Expr, Vec<ParseError>> {
    parse_tokens(lexer::lex_spanned(input), input.len())
}

pub(crate) fn parse_hex(input: &str) -> Result<HexExpr, Vec<HexParseError>> {
    parse_hex_tokens(lexer::lex_hex_spanned(input), input.len())
}
