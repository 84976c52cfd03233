pub mod normalize;
pub mod token;

use logos::Logos;
use std::ops::Range;
use token::{HexToken, Token};

#[cfg(test)]
mod tests;

/// Tokenize a source string and return a Vec of tokens
#[cfg(test)]
pub(crate) fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Tokenize keeping byte spans; rejected characters become `Token::Error`
pub fn lex_spanned(source: &str) -> Vec<(Token, Range<usize>)> {
    Token::lexer(source)
        .spanned()
        .map(|(t, span)| (t.unwrap_or(Token::Error), span))
        .collect()
}

/// Tokenize a hexadecimal display buffer keeping byte spans
pub fn lex_hex_spanned(source: &str) -> Vec<(HexToken, Range<usize>)> {
    HexToken::lexer(source)
        .spanned()
        .map(|(t, span)| (t.unwrap_or(HexToken::Error), span))
        .collect()
}
