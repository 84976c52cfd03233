// crates/parser/src/ast.rs

use std::ops::Range;

/// Byte range into the normalized expression text
pub type Span = Range<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Plus,
}

/// Scientific expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),

    /// Constant or memory symbol (PI, E, Ans)
    Identifier { name: String, span: Span },

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    Call {
        name: String,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary {
            op,
            expr: Box::new(expr),
        }
    }
}

/// Hexadecimal display buffer tree; literals keep their digits so the
/// evaluator decides how wide they may be.
#[derive(Debug, Clone, PartialEq)]
pub enum HexExpr {
    Literal { digits: String, span: Span },

    Unary {
        op: UnaryOp,
        expr: Box<HexExpr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<HexExpr>,
        rhs: Box<HexExpr>,
    },
}
