// Math library functions (sin, cos, sqrt, etc.)
//
// Every function is a pure `fn(&[f64], Mode) -> f64`. Domain violations
// produce NaN/Infinity; the evaluator turns a non-finite result into a
// math error.

use crate::mode::Mode;
use std::f64::consts;

/// Signature shared by all built-in functions
pub type BuiltinFn = fn(&[f64], Mode) -> f64;

/// A callable function with a fixed argument count
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    pub call: BuiltinFn,
}

impl Builtin {
    const fn new(name: &'static str, arity: usize, call: BuiltinFn) -> Self {
        Self { name, arity, call }
    }

    pub fn apply(&self, args: &[f64], mode: Mode) -> f64 {
        (self.call)(args, mode)
    }
}

/// A user-visible name and what it means with the inverse flag off and on
struct Binding {
    name: &'static str,
    direct: Builtin,
    inverse: Builtin,
}

const SIN: Builtin = Builtin::new("sin", 1, sin);
const COS: Builtin = Builtin::new("cos", 1, cos);
const TAN: Builtin = Builtin::new("tan", 1, tan);
const ASIN: Builtin = Builtin::new("asin", 1, asin);
const ACOS: Builtin = Builtin::new("acos", 1, acos);
const ATAN: Builtin = Builtin::new("atan", 1, atan);
const LOG: Builtin = Builtin::new("log", 1, log10);
const TENPOW: Builtin = Builtin::new("tenpow", 1, tenpow);
const LN: Builtin = Builtin::new("ln", 1, ln);
const EXP: Builtin = Builtin::new("exp", 1, exp);
const SQRT: Builtin = Builtin::new("sqrt", 1, sqrt);
const SQ: Builtin = Builtin::new("sq", 1, square);
const POW: Builtin = Builtin::new("pow", 2, pow);
const ROOT: Builtin = Builtin::new("root", 2, root);
const FACT: Builtin = Builtin::new("fact", 1, fact);

const FUNCTIONS: &[Binding] = &[
    Binding { name: "sin", direct: SIN, inverse: ASIN },
    Binding { name: "cos", direct: COS, inverse: ACOS },
    Binding { name: "tan", direct: TAN, inverse: ATAN },
    Binding { name: "log", direct: LOG, inverse: TENPOW },
    Binding { name: "ln", direct: LN, inverse: EXP },
    Binding { name: "sqrt", direct: SQRT, inverse: SQ },
    Binding { name: "pow", direct: POW, inverse: ROOT },
    Binding { name: "fact", direct: FACT, inverse: FACT },
];

/// Mathematical constants, matched by exact name
const CONSTANTS: &[(&str, f64)] = &[("PI", consts::PI), ("E", consts::E)];

/// Name of the answer-memory symbol
pub const ANSWER_SYMBOL: &str = "Ans";

/// Resolve a function name under the given mode
pub fn function(name: &str, mode: Mode) -> Option<Builtin> {
    FUNCTIONS
        .iter()
        .find(|binding| binding.name == name)
        .map(|binding| {
            if mode.inverse {
                binding.inverse
            } else {
                binding.direct
            }
        })
}

/// Resolve the `**` operator under the given mode (power or root)
pub fn power(mode: Mode) -> Builtin {
    if mode.inverse { ROOT } else { POW }
}

pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|(_, value)| *value)
}

/// Every name the symbol table knows, for help output
pub fn symbol_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS
        .iter()
        .map(|binding| binding.name)
        .chain(CONSTANTS.iter().map(|(name, _)| *name))
        .chain(std::iter::once(ANSWER_SYMBOL))
}

// --- Trigonometric ---

fn sin(args: &[f64], mode: Mode) -> f64 {
    mode.angle_unit.to_radians(args[0]).sin()
}

fn cos(args: &[f64], mode: Mode) -> f64 {
    mode.angle_unit.to_radians(args[0]).cos()
}

fn tan(args: &[f64], mode: Mode) -> f64 {
    mode.angle_unit.to_radians(args[0]).tan()
}

fn asin(args: &[f64], mode: Mode) -> f64 {
    mode.angle_unit.from_radians(args[0].asin())
}

fn acos(args: &[f64], mode: Mode) -> f64 {
    mode.angle_unit.from_radians(args[0].acos())
}

fn atan(args: &[f64], mode: Mode) -> f64 {
    mode.angle_unit.from_radians(args[0].atan())
}

// --- Exponential and logarithmic ---

fn log10(args: &[f64], _mode: Mode) -> f64 {
    args[0].log10()
}

fn tenpow(args: &[f64], _mode: Mode) -> f64 {
    10f64.powf(args[0])
}

fn ln(args: &[f64], _mode: Mode) -> f64 {
    args[0].ln()
}

fn exp(args: &[f64], _mode: Mode) -> f64 {
    args[0].exp()
}

// --- Powers and roots ---

fn sqrt(args: &[f64], _mode: Mode) -> f64 {
    args[0].sqrt()
}

fn square(args: &[f64], _mode: Mode) -> f64 {
    args[0] * args[0]
}

fn pow(args: &[f64], _mode: Mode) -> f64 {
    args[0].powf(args[1])
}

/// y-th root of x
fn root(args: &[f64], _mode: Mode) -> f64 {
    args[0].powf(1.0 / args[1])
}

/// Product 2..=n stepping by one from 2; NaN for negative n.
///
/// Non-integer n multiplies every integer up to n (`fact(3.5) == 6`).
fn fact(args: &[f64], _mode: Mode) -> f64 {
    let n = args[0];
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }

    let mut product = 1.0;
    let mut i = 2.0;
    while i <= n {
        product *= i;
        if product.is_infinite() {
            break;
        }
        i += 1.0;
    }
    product
}
