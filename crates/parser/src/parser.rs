use crate::ast::{BinaryOp, Expr, HexExpr, Span, UnaryOp};
use chumsky::prelude::*;
use chumsky::Stream;
use lexer::token::{HexToken, Token};

/// Parser for a whole scientific expression
pub fn parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    expr_parser().then_ignore(end())
}

/// Parse spanned tokens; `source_len` places the end-of-input span.
pub fn parse_tokens(
    tokens: Vec<(Token, Span)>,
    source_len: usize,
) -> Result<Expr, Vec<Simple<Token>>> {
    parser().parse(Stream::from_iter(
        source_len..source_len + 1,
        tokens.into_iter(),
    ))
}

fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    recursive(|expr| {
        let number = select! { Token::Number(text) => text }.try_map(|text, span| {
            text.parse::<f64>()
                .map(Expr::Number)
                .map_err(|e| Simple::custom(span, format!("invalid number '{}': {}", text, e)))
        });

        let args = expr
            .clone()
            .separated_by(just(Token::Comma))
            .delimited_by(just(Token::LParen), just(Token::RParen));

        // A name followed by an argument list is a call, otherwise a symbol
        let call_or_symbol = select! { Token::Identifier(name) => name }
            .map_with_span(|name, span| (name, span))
            .then(args.or_not())
            .map(|((name, span), maybe_args)| match maybe_args {
                Some(args) => Expr::Call { name, args, span },
                None => Expr::Identifier { name, span },
            });

        let atom = number
            .or(call_or_symbol)
            .or(expr
                .clone()
                .delimited_by(just(Token::LParen), just(Token::RParen)))
            .boxed();

        // Prefix signs wrap the whole power chain: -2 ** 2 == -(2 ** 2).
        // The exponent is itself signed, which makes `**` right-associative
        // (2 ** 3 ** 2 == 2 ** 9) and accepts 2 ** -1.
        let signed = recursive(|signed| {
            let power = atom
                .then(just(Token::Pow).ignore_then(signed).or_not())
                .map(|(base, exponent)| match exponent {
                    Some(exponent) => Expr::binary(BinaryOp::Pow, base, exponent),
                    None => base,
                });

            just(Token::Minus)
                .to(UnaryOp::Negate)
                .or(just(Token::Plus).to(UnaryOp::Plus))
                .repeated()
                .then(power)
                .foldr(Expr::unary)
        })
        .boxed();

        let product = signed
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .then(signed)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
            .boxed();

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs));

        sum.boxed()
    })
}

/// Parser for the hexadecimal display buffer: `+ - * /` over literals,
/// products before sums, no grouping.
pub fn hex_parser() -> impl Parser<HexToken, HexExpr, Error = Simple<HexToken>> {
    let literal = select! { HexToken::Literal(digits) => digits }
        .map_with_span(|digits, span| HexExpr::Literal { digits, span });

    let operand = just(HexToken::Minus)
        .to(UnaryOp::Negate)
        .or(just(HexToken::Plus).to(UnaryOp::Plus))
        .repeated()
        .then(literal)
        .foldr(|op, expr| HexExpr::Unary {
            op,
            expr: Box::new(expr),
        });

    let product = operand
        .clone()
        .then(
            just(HexToken::Star)
                .to(BinaryOp::Mul)
                .or(just(HexToken::Slash).to(BinaryOp::Div))
                .then(operand)
                .repeated(),
        )
        .foldl(|lhs, (op, rhs)| HexExpr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        });

    let sum = product
        .clone()
        .then(
            just(HexToken::Plus)
                .to(BinaryOp::Add)
                .or(just(HexToken::Minus).to(BinaryOp::Sub))
                .then(product)
                .repeated(),
        )
        .foldl(|lhs, (op, rhs)| HexExpr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        });

    sum.then_ignore(end())
}

/// Parse spanned hex tokens; `source_len` places the end-of-input span.
pub fn parse_hex_tokens(
    tokens: Vec<(HexToken, Span)>,
    source_len: usize,
) -> Result<HexExpr, Vec<Simple<HexToken>>> {
    hex_parser().parse(Stream::from_iter(
        source_len..source_len + 1,
        tokens.into_iter(),
    ))
}
