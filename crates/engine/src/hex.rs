// Hexadecimal expression evaluation
//
// Operands are base-16 literals, arithmetic is checked `i64`, division
// truncates toward zero. Negative results are shown as their 32-bit
// two's-complement bit pattern.

use crate::error::{CalcError, CalcResult};
use parser::ast::{BinaryOp, HexExpr, UnaryOp};
use parser::error::first_error;
use parser::parser::parse_hex_tokens;
use tracing::debug;

/// Shown by the live preview when the trailing token is not a number
pub const PREVIEW_PLACEHOLDER: &str = "-";

/// Width of the two's-complement rendering
const TWOS_COMPLEMENT_BITS: u32 = 32;

/// Integer result of a hex evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexValue(i64);

impl HexValue {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Uppercase hex; negative values as 32-bit two's complement
    pub fn hex(self) -> String {
        if self.0 < 0 {
            to_radix(u64::from(twos_complement_32(self.0)), 16)
        } else {
            to_radix(self.0.unsigned_abs(), 16)
        }
    }

    pub fn decimal(self) -> String {
        self.0.to_string()
    }
}

/// Wrap `value` into 32 bits: the unsigned pattern of `value mod 2^32`.
pub fn twos_complement_32(value: i64) -> u32 {
    let modulus = 1_i64 << TWOS_COMPLEMENT_BITS;
    // rem_euclid keeps the result in 0..modulus, which always fits u32
    value.rem_euclid(modulus) as u32
}

/// Render `value` in `radix` (2..=16) with uppercase digits and no
/// leading zeros.
pub fn to_radix(mut value: u64, radix: u64) -> String {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    debug_assert!((2..=16).contains(&radix));

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % radix) as usize]);
        value /= radix;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Evaluate a hex display buffer such as `"A + 5"`.
pub fn evaluate_hex(buffer: &str) -> CalcResult<HexValue> {
    if buffer.trim().is_empty() {
        return Err(CalcError::syntax("empty expression", None));
    }

    let tree = parse_hex_tokens(lexer::lex_hex_spanned(buffer), buffer.len()).map_err(|errors| {
        match first_error(&errors) {
            Some((message, span)) => CalcError::syntax(message, Some(span)),
            None => CalcError::syntax("invalid expression", None),
        }
    })?;

    let value = eval(&tree)?;
    debug!(buffer, value, "hex expression evaluated");
    Ok(HexValue(value))
}

fn eval(expr: &HexExpr) -> CalcResult<i64> {
    match expr {
        HexExpr::Literal { digits, .. } => parse_literal(digits),

        HexExpr::Unary { op, expr } => {
            let value = eval(expr)?;
            match op {
                UnaryOp::Negate => value.checked_neg().ok_or_else(overflow),
                UnaryOp::Plus => Ok(value),
            }
        }

        HexExpr::Binary { op, lhs, rhs } => {
            let lhs = eval(lhs)?;
            let rhs = eval(rhs)?;
            match op {
                BinaryOp::Add => lhs.checked_add(rhs).ok_or_else(overflow),
                BinaryOp::Sub => lhs.checked_sub(rhs).ok_or_else(overflow),
                BinaryOp::Mul => lhs.checked_mul(rhs).ok_or_else(overflow),
                BinaryOp::Div if rhs == 0 => Err(CalcError::math("division by zero")),
                BinaryOp::Div => lhs.checked_div(rhs).ok_or_else(overflow),
                BinaryOp::Pow => Err(CalcError::syntax("'**' is not a hex operator", None)),
            }
        }
    }
}

fn parse_literal(digits: &str) -> CalcResult<i64> {
    i64::from_str_radix(digits, 16)
        .map_err(|_| CalcError::math(format!("literal '{}' is too large", digits)))
}

fn overflow() -> CalcError {
    CalcError::math("integer overflow")
}

/// Decimal value of the token after the last space, if it is a hex number.
///
/// Drives the live preview; never fails, so it cannot block input.
pub fn preview(buffer: &str) -> Option<u64> {
    let last = buffer.rsplit(' ').next()?;
    if last.is_empty() || !last.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(last, 16).ok()
}
