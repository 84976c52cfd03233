//! Per-calculator input state.
//!
//! Each calculator owns its input buffer, flags and display strings, and
//! hands the buffer to the matching evaluator. Nothing is shared between
//! calculators.

use crate::error::CalcResult;
use crate::format::{format_grouped, format_number};
use crate::hex::{self, HexValue, PREVIEW_PLACEHOLDER};
use crate::mode::Mode;
use crate::scientific::ScientificEvaluator;
use crate::warikan::{Rounding, SplitRequest, SplitResult, WeightGroup};
use crate::CalcError;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

/// Shown in place of a result when evaluation fails
pub const ERROR_TEXT: &str = "Error";

/// Result line after a clear
pub const CLEARED_RESULT: &str = "= 0";

/// Shown when the bill-split form holds unusable numbers
pub const INVALID_INPUT_MESSAGE: &str = "有効な数値を入力してください。";

/// Constants offered on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn symbol(self) -> &'static str {
        match self {
            Constant::Pi => "PI",
            Constant::E => "E",
        }
    }
}

// ============================================================================
// Standard / scientific
// ============================================================================

#[derive(Debug, Clone)]
pub struct ScientificCalculator {
    input: String,
    result: String,
    evaluator: ScientificEvaluator,
}

impl Default for ScientificCalculator {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl ScientificCalculator {
    pub fn new(mode: Mode) -> Self {
        Self {
            input: String::new(),
            result: CLEARED_RESULT.to_string(),
            evaluator: ScientificEvaluator::new(mode),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// `= <value>` or `Error`
    pub fn result_text(&self) -> &str {
        &self.result
    }

    pub fn mode(&self) -> Mode {
        self.evaluator.mode()
    }

    pub fn ans(&self) -> f64 {
        self.evaluator.ans()
    }

    pub fn append(&mut self, text: &str) {
        self.input.push_str(text);
    }

    pub fn append_op(&mut self, op: &str) {
        self.input.push_str(op);
    }

    /// `pow` enters the `^` operator; every other function opens a call.
    pub fn append_func(&mut self, func: &str) {
        if func == "pow" {
            self.input.push('^');
        } else {
            self.input.push_str(func);
            self.input.push('(');
        }
    }

    pub fn append_constant(&mut self, constant: Constant) {
        self.input.push_str(constant.symbol());
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.result = CLEARED_RESULT.to_string();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Switch degrees/radians and re-evaluate the current input.
    pub fn toggle_angle_unit(&mut self) {
        let mode = self.mode();
        self.evaluator.set_mode(Mode {
            angle_unit: mode.angle_unit.toggled(),
            ..mode
        });
        self.calculate();
    }

    /// Switch the inverse bindings and re-evaluate the current input.
    pub fn toggle_inverse(&mut self) {
        let mode = self.mode();
        self.evaluator.set_mode(mode.with_inverse(!mode.inverse));
        self.calculate();
    }

    /// Evaluate the buffer. Blank input is a no-op and returns `None`.
    pub fn calculate(&mut self) -> Option<CalcResult<f64>> {
        if self.input.trim().is_empty() {
            return None;
        }

        let outcome = self.evaluator.evaluate(&self.input);
        match &outcome {
            Ok(value) => self.result = format!("= {}", format_number(*value)),
            Err(err) => {
                debug!(input = %self.input, error = %err, "scientific evaluation failed");
                self.result = ERROR_TEXT.to_string();
            }
        }
        Some(outcome)
    }
}

// ============================================================================
// Hexadecimal
// ============================================================================

#[derive(Debug, Clone)]
pub struct HexCalculator {
    input: String,
    result: String,
    preview: String,
}

impl Default for HexCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl HexCalculator {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            result: CLEARED_RESULT.to_string(),
            preview: "DEC: 0".to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result_text(&self) -> &str {
        &self.result
    }

    /// `DEC: <n>` for the operand being typed, `DEC: -` otherwise
    pub fn preview_text(&self) -> &str {
        &self.preview
    }

    pub fn append(&mut self, digits: &str) {
        self.input.push_str(digits);
        self.update_preview();
    }

    /// Operators are padded with one space on each side.
    pub fn append_op(&mut self, op: &str) {
        self.input.push(' ');
        self.input.push_str(op);
        self.input.push(' ');
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.result = CLEARED_RESULT.to_string();
        self.preview = "DEC: 0".to_string();
    }

    /// Drop trailing padding, then one character.
    pub fn backspace(&mut self) {
        let kept = self.input.trim_end().len();
        self.input.truncate(kept);
        self.input.pop();
        self.update_preview();
    }

    fn update_preview(&mut self) {
        self.preview = match hex::preview(&self.input) {
            Some(value) => format!("DEC: {}", value),
            None => format!("DEC: {}", PREVIEW_PLACEHOLDER),
        };
    }

    /// Evaluate the buffer. Blank input is a no-op and returns `None`.
    pub fn calculate(&mut self) -> Option<CalcResult<HexValue>> {
        if self.input.trim().is_empty() {
            return None;
        }

        let outcome = hex::evaluate_hex(&self.input);
        match &outcome {
            Ok(value) => {
                self.result = format!("= {}", value.hex());
                self.preview = format!("DEC: {}", value.decimal());
            }
            Err(err) => {
                debug!(input = %self.input, error = %err, "hex evaluation failed");
                self.result = ERROR_TEXT.to_string();
            }
        }
        Some(outcome)
    }
}

// ============================================================================
// Bill split
// ============================================================================

lazy_static! {
    /// Leading decimal number of a form field ("1000", "12.5yen", "2e3")
    static ref FLOAT_PREFIX: Regex =
        Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?").unwrap();

    /// Leading integer of a form field ("3", "3.5", "4 people")
    static ref INT_PREFIX: Regex = Regex::new(r"^[+-]?[0-9]+").unwrap();
}

/// Numeric prefix of a text field, ignoring leading whitespace
pub fn parse_float_field(field: &str) -> Option<f64> {
    FLOAT_PREFIX
        .find(field.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

/// Integer prefix of a text field, ignoring leading whitespace
pub fn parse_int_field(field: &str) -> Option<i64> {
    INT_PREFIX
        .find(field.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

/// Display strings of a computed split
#[derive(Debug, Clone, PartialEq)]
pub struct WarikanDisplay {
    pub per_person: String,
    pub remainder: String,
    /// `count x ratio: pay` lines for weighted groups
    pub groups: Vec<String>,
}

impl WarikanDisplay {
    pub fn from_result(result: &SplitResult) -> Self {
        let groups = match result {
            SplitResult::Simple { .. } => Vec::new(),
            SplitResult::Weighted { groups, .. } => groups
                .iter()
                .map(|g| format!("{} x {}: {}", g.count, g.ratio, format_grouped(g.pay)))
                .collect(),
        };
        Self {
            per_person: format_grouped(result.regular_pay()),
            remainder: format_grouped(result.remainder()),
            groups,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WarikanCalculator {
    rounding: Rounding,
    groups: Vec<WeightGroup>,
    display: Option<WarikanDisplay>,
    message: Option<&'static str>,
}

impl WarikanCalculator {
    pub fn new(rounding: Rounding) -> Self {
        Self {
            rounding,
            ..Self::default()
        }
    }

    pub fn add_group(&mut self, group: WeightGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[WeightGroup] {
        &self.groups
    }

    /// Last successful split, if the result panel is showing
    pub fn display(&self) -> Option<&WarikanDisplay> {
        self.display.as_ref()
    }

    /// Blocking message from the last attempt, if it was rejected
    pub fn message(&self) -> Option<&str> {
        self.message
    }

    /// Hide the result and forget weighted groups.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.display = None;
        self.message = None;
    }

    /// Split using the raw text of the total and people fields.
    pub fn calculate(&mut self, total_field: &str, people_field: &str) -> CalcResult<SplitResult> {
        let outcome = self.parse_fields(total_field, people_field).and_then(|(total, people)| {
            SplitRequest::new(total, people, self.rounding)
                .with_groups(self.groups.clone())
                .compute()
        });

        match &outcome {
            Ok(result) => {
                self.display = Some(WarikanDisplay::from_result(result));
                self.message = None;
            }
            Err(err) => {
                warn!(total_field, people_field, error = %err, "bill split rejected");
                self.message = Some(INVALID_INPUT_MESSAGE);
            }
        }
        outcome
    }

    fn parse_fields(&self, total_field: &str, people_field: &str) -> CalcResult<(f64, u32)> {
        let total = parse_float_field(total_field)
            .filter(|t| *t != 0.0)
            .ok_or_else(|| CalcError::validation("total is not a number"))?;
        let people = parse_int_field(people_field)
            .filter(|p| *p > 0)
            .and_then(|p| u32::try_from(p).ok())
            .ok_or_else(|| CalcError::validation("people must be a positive integer"))?;
        Ok((total, people))
    }
}
