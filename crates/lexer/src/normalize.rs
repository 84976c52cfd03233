// Keystroke normalization
//
// The keypad produces `^` for powers and an uppercase `E` for both Euler's
// constant and the exponent of scientific notation. These rewrites turn the
// raw input buffer into text the tokenizer understands.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A digit, the constant letter `E`, an optional sign and another digit.
    static ref SCIENTIFIC_EXPONENT: Regex = Regex::new(r"(\d)E([+-]?\d)").unwrap();
}

/// Apply every rewrite, in order.
pub fn normalize(input: &str) -> String {
    lower_scientific_exponent(&expand_power(input))
}

/// Replace every `^` with the `**` exponentiation token.
pub fn expand_power(input: &str) -> String {
    input.replace('^', "**")
}

/// Turn `2E+3` into `2e+3` so it lexes as a single number.
///
/// Only an `E` sitting directly between a digit and a (signed) digit is
/// touched; `2 + E3` still reads as the constant followed by a digit and
/// fails later as an unknown symbol.
pub fn lower_scientific_exponent(input: &str) -> String {
    SCIENTIFIC_EXPONENT
        .replace_all(input, "${1}e${2}")
        .into_owned()
}
