use logos::Logos;
use std::fmt;

/// Tokens of a normalized scientific expression (see `normalize`).
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\n\f]+")] // Ignore spaces, tabs and line breaks automatically
pub enum Token {
    // --- Literals ---

    // Identifiers: function names, constants and memory (ex: "sin", "PI", "Ans")
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Numbers keep their source text so the token stays hashable
    // (ex: 42, 3.14, .5, 2e-3)
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)(e[+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    // --- Operators ---
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("**")]
    Pow,

    #[token(",")]
    Comma,

    // --- Delimiters ---
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Placeholder for characters the lexer rejected
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Number(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Pow => write!(f, "**"),
            Token::Comma => write!(f, ","),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Error => write!(f, "<invalid>"),
        }
    }
}

/// Tokens of the hexadecimal display buffer ("A + 5", "FF * 2").
///
/// Every maximal run of hex digits is a single literal, so digits and the
/// letters A-F never reach an identifier rule.
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\n\f]+")]
pub enum HexToken {
    #[regex(r"[0-9A-Fa-f]+", |lex| lex.slice().to_string())]
    Literal(String),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    Error,
}

impl fmt::Display for HexToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HexToken::Literal(digits) => write!(f, "{}", digits),
            HexToken::Plus => write!(f, "+"),
            HexToken::Minus => write!(f, "-"),
            HexToken::Star => write!(f, "*"),
            HexToken::Slash => write!(f, "/"),
            HexToken::Error => write!(f, "<invalid>"),
        }
    }
}
