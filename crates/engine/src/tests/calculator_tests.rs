// Calculator Controller Tests

use crate::calculator::{
    parse_float_field, parse_int_field, Constant, HexCalculator, ScientificCalculator,
    WarikanCalculator, CLEARED_RESULT, ERROR_TEXT, INVALID_INPUT_MESSAGE,
};
use crate::error::FailureKind;
use crate::mode::{AngleUnit, Mode};
use crate::warikan::{Rounding, WeightGroup};

// ==================== SCIENTIFIC ====================

fn typed(keys: &[&str]) -> ScientificCalculator {
    let mut calc = ScientificCalculator::default();
    for key in keys {
        calc.append(key);
    }
    calc
}

#[test]
fn test_scientific_calculate() {
    let mut calc = ScientificCalculator::default();
    calc.append("2");
    calc.append_op("+");
    calc.append("2");

    assert_eq!(calc.calculate(), Some(Ok(4.0)));
    assert_eq!(calc.result_text(), "= 4");
    assert_eq!(calc.ans(), 4.0);
}

#[test]
fn test_scientific_function_keys() {
    let mut calc = ScientificCalculator::default();
    calc.append_func("sin");
    assert_eq!(calc.input(), "sin(");

    calc.clear();
    calc.append("2");
    calc.append_func("pow");
    calc.append("3");
    assert_eq!(calc.input(), "2^3");

    calc.clear();
    calc.append_func("fact");
    assert_eq!(calc.input(), "fact(");
}

#[test]
fn test_scientific_constant_keys() {
    let mut calc = ScientificCalculator::default();
    calc.append_constant(Constant::Pi);
    calc.append_op("*");
    calc.append_constant(Constant::E);
    assert_eq!(calc.input(), "PI*E");
}

#[test]
fn test_scientific_error_text() {
    let mut calc = typed(&["sin("]);
    let outcome = calc.calculate().unwrap();
    assert_eq!(outcome.unwrap_err().kind(), FailureKind::Syntax);
    assert_eq!(calc.result_text(), ERROR_TEXT);
}

#[test]
fn test_scientific_blank_input_is_noop() {
    let mut calc = typed(&["2+2"]);
    calc.calculate();
    calc.clear();
    calc.append(" ");

    assert_eq!(calc.calculate(), None);
    assert_eq!(calc.result_text(), CLEARED_RESULT);
    assert_eq!(calc.ans(), 4.0);
}

#[test]
fn test_scientific_clear_is_idempotent() {
    let mut calc = typed(&["12+"]);
    calc.clear();
    calc.clear();
    assert_eq!(calc.input(), "");
    assert_eq!(calc.result_text(), CLEARED_RESULT);
}

#[test]
fn test_scientific_backspace() {
    let mut calc = typed(&["12"]);
    calc.backspace();
    assert_eq!(calc.input(), "1");
    calc.backspace();
    calc.backspace();
    assert_eq!(calc.input(), "");
}

#[test]
fn test_toggle_angle_unit_recalculates() {
    let mut calc = typed(&["sin(90)"]);
    calc.calculate();
    assert_eq!(calc.result_text(), "= 1");

    calc.toggle_angle_unit();
    assert_eq!(calc.mode().angle_unit, AngleUnit::Radians);
    assert_eq!(calc.result_text(), "= 0.8939966636");
}

#[test]
fn test_toggle_inverse_recalculates() {
    let mut calc = typed(&["sqrt(3)"]);
    calc.calculate();
    assert_eq!(calc.result_text(), "= 1.7320508076");

    calc.toggle_inverse();
    assert!(calc.mode().inverse);
    assert_eq!(calc.result_text(), "= 9");
}

#[test]
fn test_ans_chains_between_calculations() {
    let mut calc = typed(&["2+2"]);
    calc.calculate();
    calc.clear();
    calc.append("Ans*2");
    calc.calculate();
    assert_eq!(calc.result_text(), "= 8");
}

#[test]
fn test_radians_start_mode() {
    let mut calc = ScientificCalculator::new(Mode::radians());
    calc.append("cos(PI)");
    calc.calculate();
    assert_eq!(calc.result_text(), "= -1");
}

// ==================== HEXADECIMAL ====================

#[test]
fn test_hex_keypad_flow() {
    let mut calc = HexCalculator::new();
    assert_eq!(calc.preview_text(), "DEC: 0");

    calc.append("A");
    assert_eq!(calc.preview_text(), "DEC: 10");

    calc.append_op("+");
    assert_eq!(calc.input(), "A + ");

    calc.append("5");
    assert_eq!(calc.preview_text(), "DEC: 5");

    assert!(calc.calculate().unwrap().is_ok());
    assert_eq!(calc.result_text(), "= F");
    assert_eq!(calc.preview_text(), "DEC: 15");
}

#[test]
fn test_hex_negative_result() {
    let mut calc = HexCalculator::new();
    calc.append("0");
    calc.append_op("-");
    calc.append("5");
    calc.calculate();
    assert_eq!(calc.result_text(), "= FFFFFFFB");
    assert_eq!(calc.preview_text(), "DEC: -5");
}

#[test]
fn test_hex_backspace_skips_padding() {
    let mut calc = HexCalculator::new();
    calc.append("A");
    calc.append_op("+");

    calc.backspace();
    assert_eq!(calc.input(), "A ");
    assert_eq!(calc.preview_text(), "DEC: -");

    calc.backspace();
    assert_eq!(calc.input(), "");
    assert_eq!(calc.preview_text(), "DEC: -");
}

#[test]
fn test_hex_error_and_blank() {
    let mut calc = HexCalculator::new();
    assert!(calc.calculate().is_none());

    calc.append("A");
    calc.append_op("/");
    calc.append("0");
    let outcome = calc.calculate().unwrap();
    assert_eq!(outcome.unwrap_err().kind(), FailureKind::Math);
    assert_eq!(calc.result_text(), ERROR_TEXT);
}

#[test]
fn test_hex_clear_is_idempotent() {
    let mut calc = HexCalculator::new();
    calc.append("FF");
    calc.clear();
    calc.clear();
    assert_eq!(calc.input(), "");
    assert_eq!(calc.result_text(), CLEARED_RESULT);
    assert_eq!(calc.preview_text(), "DEC: 0");
}

// ==================== BILL SPLIT ====================

#[test]
fn test_field_parsing() {
    assert_eq!(parse_float_field(" 12.5abc"), Some(12.5));
    assert_eq!(parse_float_field("2e3"), Some(2000.0));
    assert_eq!(parse_float_field("abc"), None);
    assert_eq!(parse_int_field("3.9"), Some(3));
    assert_eq!(parse_int_field("-2"), Some(-2));
    assert_eq!(parse_int_field("4 people"), Some(4));
    assert_eq!(parse_int_field(""), None);
}

#[test]
fn test_warikan_simple_display() {
    let mut calc = WarikanCalculator::default();
    calc.calculate("1000", "3").unwrap();

    let display = calc.display().unwrap();
    assert_eq!(display.per_person, "333");
    assert_eq!(display.remainder, "1");
    assert!(display.groups.is_empty());
    assert_eq!(calc.message(), None);
}

#[test]
fn test_warikan_round_up_display() {
    let mut calc = WarikanCalculator::new(Rounding::RoundUpTo100);
    calc.calculate("1000", "3").unwrap();

    let display = calc.display().unwrap();
    assert_eq!(display.per_person, "400");
    assert_eq!(display.remainder, "200");
}

#[test]
fn test_warikan_weighted_display() {
    let mut calc = WarikanCalculator::default();
    calc.add_group(WeightGroup::new(1, 1.5));
    calc.calculate("10000", "4").unwrap();

    let display = calc.display().unwrap();
    assert_eq!(display.per_person, "2,222");
    assert_eq!(display.groups, vec!["1 x 1.5: 3,333".to_string()]);
    assert_eq!(display.remainder, "1");
}

#[test]
fn test_warikan_fields_with_suffix() {
    let mut calc = WarikanCalculator::default();
    calc.calculate("12000yen", "4 people").unwrap();
    assert_eq!(calc.display().unwrap().per_person, "3,000");
}

#[test]
fn test_warikan_rejects_invalid_fields() {
    let mut calc = WarikanCalculator::default();
    for (total, people) in [("abc", "3"), ("1000", "0"), ("1000", ""), ("0", "3")] {
        let err = calc.calculate(total, people).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Validation);
        assert_eq!(calc.message(), Some(INVALID_INPUT_MESSAGE));
    }
}

#[test]
fn test_warikan_rejection_keeps_previous_display() {
    let mut calc = WarikanCalculator::default();
    calc.calculate("1000", "3").unwrap();
    assert!(calc.calculate("1000", "0").is_err());
    assert_eq!(calc.display().unwrap().per_person, "333");
}

#[test]
fn test_warikan_oversized_group_message() {
    let mut calc = WarikanCalculator::default();
    calc.add_group(WeightGroup::new(6, 1.0));
    assert!(calc.calculate("1000", "5").is_err());
    assert_eq!(calc.message(), Some(INVALID_INPUT_MESSAGE));
}

#[test]
fn test_warikan_clear_is_idempotent() {
    let mut calc = WarikanCalculator::default();
    calc.add_group(WeightGroup::new(1, 2.0));
    calc.calculate("1000", "3").unwrap();

    calc.clear();
    calc.clear();
    assert!(calc.display().is_none());
    assert!(calc.groups().is_empty());
    assert_eq!(calc.message(), None);
}
