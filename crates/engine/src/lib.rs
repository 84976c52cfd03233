//! Evaluation engine: numeric formatting, the scientific and hexadecimal
//! evaluators, the bill-split allocator and the per-calculator controllers.

pub mod builtins;
pub mod calculator;
pub mod error;
pub mod error_report;
pub mod format;
pub mod hex;
pub mod mode;
pub mod scientific;
pub mod warikan;

// Re-export error types for public API
pub use error::{CalcError, CalcResult, FailureKind, Span};
pub use error_report::report_calc_error;

pub use calculator::{Constant, HexCalculator, ScientificCalculator, WarikanCalculator};
pub use format::{format_grouped, format_number};
pub use hex::{evaluate_hex, HexValue};
pub use mode::{AngleUnit, Mode};
pub use scientific::{evaluate, ScientificEvaluator};
pub use warikan::{
    compute_simple, compute_weighted, GroupShare, Rounding, SplitRequest, SplitResult, WeightGroup,
};

#[cfg(test)]
mod tests;
