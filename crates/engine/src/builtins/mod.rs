// Built-in symbols for scientific expressions
//
// This module contains the mode-keyed symbol table: constants and the
// functions each name is bound to with the inverse flag off or on.

pub mod math;
