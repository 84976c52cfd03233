// Scientific expression evaluation
//
// Pipeline: keypad normalization -> tokens -> expression tree -> tree walk
// against the mode-keyed symbol table. The result is checked for finiteness
// once, at the end.

use crate::builtins::math::{self, ANSWER_SYMBOL};
use crate::error::{CalcError, CalcResult, Span};
use crate::mode::Mode;
use lexer::normalize::normalize;
use parser::ast::{BinaryOp, Expr, UnaryOp};
use parser::error::first_error;
use parser::parser::parse_tokens;
use tracing::{debug, trace};

/// Evaluate a raw input buffer under `mode`, with `ans` bound to `Ans`.
pub fn evaluate(input: &str, mode: Mode, ans: f64) -> CalcResult<f64> {
    let normalized = normalize(input);
    debug!(input, normalized = %normalized, ?mode, "evaluating expression");

    let tree = parse(&normalized)?;
    let value = Interpreter { mode, ans }.eval(&tree)?;
    check_finite(value)?;

    trace!(value, "expression evaluated");
    Ok(value)
}

/// Parse already-normalized text into an expression tree.
pub fn parse(normalized: &str) -> CalcResult<Expr> {
    if normalized.trim().is_empty() {
        return Err(CalcError::syntax("empty expression", None));
    }

    parse_tokens(lexer::lex_spanned(normalized), normalized.len()).map_err(|errors| {
        match first_error(&errors) {
            Some((message, span)) => CalcError::syntax(message, Some(span)),
            None => CalcError::syntax("invalid expression", None),
        }
    })
}

fn check_finite(value: f64) -> CalcResult<()> {
    if value.is_nan() {
        Err(CalcError::math("result is not a number"))
    } else if value.is_infinite() {
        Err(CalcError::math("result is infinite"))
    } else {
        Ok(())
    }
}

/// Tree walker with the mode and answer memory it was created with
struct Interpreter {
    mode: Mode,
    ans: f64,
}

impl Interpreter {
    fn eval(&self, expr: &Expr) -> CalcResult<f64> {
        match expr {
            Expr::Number(n) => Ok(*n),

            Expr::Identifier { name, span } => self.symbol(name, span),

            Expr::Unary { op, expr } => {
                let value = self.eval(expr)?;
                Ok(match op {
                    UnaryOp::Negate => -value,
                    UnaryOp::Plus => value,
                })
            }

            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                Ok(match op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Sub => lhs - rhs,
                    BinaryOp::Mul => lhs * rhs,
                    BinaryOp::Div => lhs / rhs,
                    BinaryOp::Pow => math::power(self.mode).apply(&[lhs, rhs], self.mode),
                })
            }

            Expr::Call { name, args, span } => self.call(name, args, span),
        }
    }

    fn symbol(&self, name: &str, span: &Span) -> CalcResult<f64> {
        if name == ANSWER_SYMBOL {
            return Ok(self.ans);
        }
        if let Some(value) = math::constant(name) {
            return Ok(value);
        }
        if math::function(name, self.mode).is_some() {
            return Err(CalcError::syntax(
                format!("'{}' is a function; call it as {}(...)", name, name),
                Some(span.clone()),
            ));
        }
        Err(CalcError::syntax(
            format!("unknown symbol '{}'", name),
            Some(span.clone()),
        ))
    }

    fn call(&self, name: &str, args: &[Expr], span: &Span) -> CalcResult<f64> {
        let Some(builtin) = math::function(name, self.mode) else {
            let message = if name == ANSWER_SYMBOL || math::constant(name).is_some() {
                format!("'{}' is not a function", name)
            } else {
                format!("unknown function '{}'", name)
            };
            return Err(CalcError::syntax(message, Some(span.clone())));
        };

        if args.len() != builtin.arity {
            return Err(CalcError::syntax(
                format!(
                    "'{}' takes {} argument{}, found {}",
                    name,
                    builtin.arity,
                    if builtin.arity == 1 { "" } else { "s" },
                    args.len()
                ),
                Some(span.clone()),
            ));
        }

        let values = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<CalcResult<Vec<f64>>>()?;

        trace!(name, bound = builtin.name, ?values, "calling builtin");
        Ok(builtin.apply(&values, self.mode))
    }
}

/// Evaluator that owns the mode flags and answer memory of one calculator.
#[derive(Debug, Clone, Default)]
pub struct ScientificEvaluator {
    mode: Mode,
    ans: f64,
}

impl ScientificEvaluator {
    pub fn new(mode: Mode) -> Self {
        Self { mode, ans: 0.0 }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Last successful result (0 until the first success)
    pub fn ans(&self) -> f64 {
        self.ans
    }

    /// Evaluate and, on success, store the value as `Ans`.
    pub fn evaluate(&mut self, input: &str) -> CalcResult<f64> {
        let value = evaluate(input, self.mode, self.ans)?;
        self.ans = value;
        Ok(value)
    }
}
