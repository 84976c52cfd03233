// Test module for the evaluation engine
//
// Tests are organized by component: formatter, symbol table, scientific
// and hex evaluators, bill split, calculators and error types.

mod calculator_tests;
mod error_tests;
