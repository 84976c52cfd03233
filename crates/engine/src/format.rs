//! Result formatting.
//!
//! `format_number` renders evaluator output; `format_grouped` renders
//! currency amounts for the bill-split display.

/// Distance from an integer below which a value is shown as that integer.
pub const INTEGER_TOLERANCE: f64 = 1e-10;

/// Decimal places kept for non-integer results.
pub const DECIMAL_PLACES: usize = 10;

/// Canonical display string for a finite value.
///
/// Values within `INTEGER_TOLERANCE` of an integer lose their floating-point
/// noise (`sin(180°)` prints `0`); everything else is rounded to ten places
/// with trailing zeros stripped. Never uses exponential notation.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_TOLERANCE {
        // Adding zero turns -0.0 into 0.0
        return format!("{}", rounded + 0.0);
    }

    let fixed = format!("{:.*}", DECIMAL_PLACES, value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Amount with thousands separators and at most three decimals
/// (`1234567.5` -> `1,234,567.5`).
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, frac_part) = match digits.find('.') {
        Some(pos) => digits.split_at(pos),
        None => (digits, ""),
    };

    let grouped = format!("{}{}{}", sign, group_thousands(int_part), frac_part);
    if grouped == "-0" {
        "0".to_string()
    } else {
        grouped
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
