// Token Recognition Tests
//
// Operators, delimiters and identifiers of scientific expressions.

use crate::token::Token;
use logos::Logos;

// Helper function to tokenize input and return all tokens
fn tokenize(input: &str) -> Vec<Result<Token, ()>> {
    Token::lexer(input).collect()
}

// Helper function to tokenize and assert single token
fn assert_single_token(input: &str, expected: Token) {
    let mut lexer = Token::lexer(input);
    let token = lexer.next();
    assert_eq!(token, Some(Ok(expected)), "Failed to match token for input: {}", input);
    assert_eq!(lexer.next(), None, "Expected single token, found more");
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn num(text: &str) -> Token {
    Token::Number(text.to_string())
}

// ==================== OPERATOR TESTS ====================

#[test]
fn test_plus() {
    assert_single_token("+", Token::Plus);
}

#[test]
fn test_minus() {
    assert_single_token("-", Token::Minus);
}

#[test]
fn test_star() {
    assert_single_token("*", Token::Star);
}

#[test]
fn test_slash() {
    assert_single_token("/", Token::Slash);
}

#[test]
fn test_pow_is_one_token() {
    assert_single_token("**", Token::Pow);
}

#[test]
fn test_triple_star_is_pow_then_star() {
    assert_eq!(tokenize("***"), vec![Ok(Token::Pow), Ok(Token::Star)]);
}

#[test]
fn test_comma() {
    assert_single_token(",", Token::Comma);
}

// ==================== DELIMITER TESTS ====================

#[test]
fn test_parens() {
    assert_eq!(tokenize("()"), vec![Ok(Token::LParen), Ok(Token::RParen)]);
}

// ==================== IDENTIFIER TESTS ====================

#[test]
fn test_function_names() {
    for name in ["sin", "cos", "tan", "log", "ln", "sqrt", "pow", "fact"] {
        assert_single_token(name, ident(name));
    }
}

#[test]
fn test_constants_keep_case() {
    assert_single_token("PI", ident("PI"));
    assert_single_token("E", ident("E"));
    assert_single_token("Ans", ident("Ans"));
}

#[test]
fn test_identifier_with_digits() {
    assert_single_token("log10", ident("log10"));
}

// ==================== SEQUENCE TESTS ====================

#[test]
fn test_function_call_sequence() {
    assert_eq!(
        tokenize("sin(90)"),
        vec![Ok(ident("sin")), Ok(Token::LParen), Ok(num("90")), Ok(Token::RParen)]
    );
}

#[test]
fn test_binary_call_sequence() {
    assert_eq!(
        tokenize("pow(2, 10)"),
        vec![
            Ok(ident("pow")),
            Ok(Token::LParen),
            Ok(num("2")),
            Ok(Token::Comma),
            Ok(num("10")),
            Ok(Token::RParen),
        ]
    );
}

#[test]
fn test_memory_expression() {
    assert_eq!(
        tokenize("Ans*2"),
        vec![Ok(ident("Ans")), Ok(Token::Star), Ok(num("2"))]
    );
}

#[test]
fn test_display_round_trips_operators() {
    let rendered: Vec<String> = tokenize("(1+2)**3")
        .into_iter()
        .map(|t| t.unwrap().to_string())
        .collect();
    assert_eq!(rendered.concat(), "(1+2)**3");
}
