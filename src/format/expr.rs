use std::f64::consts::{E, PI};

use crate::expr::Expr;

/// Render `expr` in the input notation with as few parentheses as the
/// grammar allows, so that parsing the result gives back the same tree.
pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::X => "x".to_string(),
            Expr::Constant(c) if *c < 0.0 => bracket(ctx, 3, format!("-{}", show_constant(-c))),
            Expr::Constant(c) => show_constant(*c),

            Expr::Add(a, b) => bracket(ctx, 1, format!("{} + {}", pp(1, a), pp(2, b))),
            Expr::Sub(a, b) => bracket(ctx, 1, format!("{} - {}", pp(1, a), pp(2, b))),
            Expr::Mul(a, b) => bracket(ctx, 2, format!("{}*{}", pp(2, a), pp(3, b))),
            Expr::Div(a, b) => bracket(ctx, 2, format!("{}/{}", pp(2, a), pp(3, b))),
            Expr::Neg(a) => bracket(ctx, 3, format!("-{}", pp(3, a))),
            Expr::Pow(a, b) => bracket(ctx, 4, format!("{}^{}", pp(5, a), pp(3, b))),

            Expr::Sin(a) => call("sin", a),
            Expr::Cos(a) => call("cos", a),
            Expr::Tan(a) => call("tan", a),
            Expr::Exp(a) => call("exp", a),
            Expr::Sqrt(a) => call("sqrt", a),
            Expr::Abs(a) => call("abs", a),
            Expr::Log10(a) => call("log", a),
            Expr::Ln(a) => call("ln", a),
        }
    }

    fn call(name: &str, arg: &Expr) -> String {
        format!("{name}({})", pp(0, arg))
    }

    pp(0, expr)
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}

fn show_constant(c: f64) -> String {
    if c == PI {
        "pi".to_string()
    } else if c == E {
        "e".to_string()
    } else {
        format!("{c}")
    }
}
