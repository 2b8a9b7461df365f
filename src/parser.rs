use std::f64::consts::{E, PI};

use crate::error::{NumError, Result};
use crate::expr::Expr;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric0, char, digit0, digit1, multispace0, one_of};
use nom::combinator::{all_consuming, cut, map_res, not, opt, recognize};
use nom::error::{ErrorKind, FromExternalError, ParseError};
use nom::multi::{fold_many0, separated_list0};
use nom::sequence::{delimited, pair, terminated, tuple};

const FUNCTION_NAMES: [&str; 9] = ["sin", "cos", "tan", "log", "ln", "exp", "sqrt", "abs", "pow"];

/// Nesting budget for one expression. Parentheses, calls, signs, exponents
/// and every further operand of a `+`/`*` chain each spend one level, which
/// also bounds the height of the resulting tree.
pub const MAX_DEPTH: usize = 128;

/// Parse an expression in the input notation into an [`Expr`].
///
/// Grammar, loosest binding first:
///
/// ```text
/// sum     := product (('+' | '-') product)*
/// product := unary (('*' | '/') unary)*
/// unary   := ('+' | '-') unary | power
/// power   := primary (('^' | '**') unary)?
/// primary := number | '(' sum ')' | name '(' sum (',' sum)* ')' | name
/// ```
pub fn parse_expr(input: &str) -> Result<Expr> {
    if input.trim().is_empty() {
        return Err(compilation_error(input, "empty expression".to_string()));
    }
    match all_consuming(ws(|i| parse_add_sub(i, 0)))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(compilation_error(input, describe(input, &e)))
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(compilation_error(input, "incomplete expression".to_string()))
        }
    }
}

fn compilation_error(input: &str, message: String) -> NumError {
    NumError::Compilation {
        expression: input.to_string(),
        message,
    }
}

fn describe(input: &str, error: &SyntaxError<'_>) -> String {
    let rest = error.input.trim_start();
    let position = input.len() - rest.len();
    match (&error.message, rest.chars().next()) {
        (Some(message), _) => format!("{message} at position {position}"),
        (None, None) => format!("unexpected end of input at position {position}"),
        (None, Some(c)) => format!("unexpected `{c}` at position {position}"),
    }
}

/// Parser error that remembers where it happened and, for semantic
/// failures such as unknown names, a readable message.
#[derive(Debug, Clone, PartialEq)]
struct SyntaxError<'a> {
    input: &'a str,
    message: Option<String>,
}

impl<'a> ParseError<&'a str> for SyntaxError<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        SyntaxError {
            input,
            message: None,
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    // Keep the alternative that got furthest into the input.
    fn or(self, other: Self) -> Self {
        if other.input.len() < self.input.len()
            || (other.input.len() == self.input.len() && self.message.is_none())
        {
            other
        } else {
            self
        }
    }
}

impl<'a> FromExternalError<&'a str, String> for SyntaxError<'a> {
    fn from_external_error(input: &'a str, _kind: ErrorKind, message: String) -> Self {
        SyntaxError {
            input,
            message: Some(message),
        }
    }
}

type ParseResult<'a, O> = IResult<&'a str, O, SyntaxError<'a>>;

/// One level deeper, or a hard failure once the budget is spent.
fn descend(input: &str, depth: usize) -> std::result::Result<usize, nom::Err<SyntaxError<'_>>> {
    if depth >= MAX_DEPTH {
        Err(nom::Err::Failure(SyntaxError {
            input,
            message: Some("expression nested too deeply".to_string()),
        }))
    } else {
        Ok(depth + 1)
    }
}

fn parse_add_sub<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Expr> {
    let (rest, init) = parse_mul_div(input, depth)?;
    let mut link = depth;
    fold_many0(
        pair(
            ws(alt((char('+'), char('-')))),
            cut(move |i: &'a str| {
                link = descend(i, link)?;
                parse_mul_div(i, link)
            }),
        ),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul_div<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Expr> {
    let (rest, init) = parse_unary(input, depth)?;
    let mut link = depth;
    fold_many0(
        pair(
            ws(alt((terminated(char('*'), not(char('*'))), char('/')))),
            cut(move |i: &'a str| {
                link = descend(i, link)?;
                parse_unary(i, link)
            }),
        ),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            _ => Expr::Div(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_unary<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Expr> {
    let Ok((rest, sign)) = parse_sign(input) else {
        return parse_pow(input, depth);
    };
    let depth = descend(input, depth)?;
    let (rest, expr) = cut(|i: &'a str| parse_unary(i, depth))(rest)?;
    match sign {
        '-' => Ok((rest, Expr::Neg(expr.boxed()))),
        _ => Ok((rest, expr)),
    }
}

fn parse_pow<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Expr> {
    let (rest, base) = parse_primary(input, depth)?;
    let (rest, op) = opt(parse_pow_op)(rest)?;
    if op.is_none() {
        return Ok((rest, base));
    }
    let depth = descend(rest, depth)?;
    let (rest, exp) = cut(|i: &'a str| parse_unary(i, depth))(rest)?;
    Ok((rest, Expr::Pow(base.boxed(), exp.boxed())))
}

fn parse_sign(input: &str) -> ParseResult<'_, char> {
    ws(one_of("+-"))(input)
}

fn parse_pow_op(input: &str) -> ParseResult<'_, &str> {
    ws(alt((tag("**"), tag("^"))))(input)
}

fn parse_primary<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Expr> {
    alt((
        parse_number,
        |i: &'a str| parse_parens(i, depth),
        |i: &'a str| parse_name(i, depth),
    ))(input)
}

fn parse_parens<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Expr> {
    let (rest, _) = ws(char::<_, SyntaxError<'a>>('('))(input)?;
    let depth = descend(input, depth)?;
    cut(terminated(
        move |i: &'a str| parse_add_sub(i, depth),
        ws(char(')')),
    ))(rest)
}

fn parse_number(input: &str) -> ParseResult<'_, Expr> {
    map_res(
        ws(recognize(pair(
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |text: &str| {
            text.parse::<f64>()
                .map(Expr::Constant)
                .map_err(|e| format!("invalid number `{text}`: {e}"))
        },
    )(input)
}

/// A bare name (`x`, `pi`, `e`) or a function call such as `log(x, ...)`.
fn parse_name<'a>(input: &'a str, depth: usize) -> ParseResult<'a, Expr> {
    let (rest, name) = ws(recognize(pair(alpha1, alphanumeric0)))(input)?;
    let semantic = |message: String| {
        nom::Err::Failure(SyntaxError {
            input,
            message: Some(message),
        })
    };

    if let Ok((after_paren, _)) = char::<_, SyntaxError<'_>>('(')(rest) {
        let depth = descend(input, depth)?;
        let (rest, args) = cut(terminated(
            separated_list0(ws(char(',')), |i: &'a str| parse_add_sub(i, depth)),
            ws(char(')')),
        ))(after_paren)?;
        let expr = resolve_call(name, args).map_err(semantic)?;
        return Ok((rest, expr));
    }

    let expr = resolve_name(name).map_err(semantic)?;
    Ok((rest, expr))
}

fn resolve_name(name: &str) -> std::result::Result<Expr, String> {
    match name {
        "x" => Ok(Expr::X),
        "pi" => Ok(Expr::Constant(PI)),
        "e" => Ok(Expr::Constant(E)),
        f if FUNCTION_NAMES.contains(&f) => Err(format!("function `{f}` must be followed by `(`")),
        other => Err(format!("unknown identifier `{other}`")),
    }
}

fn resolve_call(name: &str, args: Vec<Expr>) -> std::result::Result<Expr, String> {
    let unary: fn(Box<Expr>) -> Expr = match name {
        "sin" => Expr::Sin,
        "cos" => Expr::Cos,
        "tan" => Expr::Tan,
        "exp" => Expr::Exp,
        "sqrt" => Expr::Sqrt,
        "abs" => Expr::Abs,
        "log" => Expr::Log10,
        "ln" => Expr::Ln,
        "pow" => {
            let [base, exp]: [Expr; 2] = args
                .try_into()
                .map_err(|args: Vec<Expr>| arity_message(name, 2, args.len()))?;
            return Ok(Expr::Pow(base.boxed(), exp.boxed()));
        }
        other => return Err(format!("unknown function `{other}`")),
    };
    let [arg]: [Expr; 1] = args
        .try_into()
        .map_err(|args: Vec<Expr>| arity_message(name, 1, args.len()))?;
    Ok(unary(arg.boxed()))
}

fn arity_message(name: &str, expected: usize, got: usize) -> String {
    let plural = if expected == 1 { "" } else { "s" };
    format!("`{name}` expects {expected} argument{plural}, got {got}")
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{add, mul, neg, pow, x};

    fn message(input: &str) -> String {
        match parse_expr(input) {
            Err(NumError::Compilation { message, .. }) => message,
            other => panic!("expected a compilation error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn respects_precedence() {
        let expr = parse_expr("1 + 2*x^2").unwrap();
        let expected = add(
            Expr::Constant(1.0),
            mul(Expr::Constant(2.0), pow(x(), Expr::Constant(2.0))),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        assert_eq!(
            parse_expr("-x^2").unwrap(),
            neg(pow(x(), Expr::Constant(2.0)))
        );
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(
            parse_expr("2^3^2").unwrap(),
            pow(Expr::Constant(2.0), pow(Expr::Constant(3.0), Expr::Constant(2.0)))
        );
        assert_eq!(parse_expr("x**2").unwrap(), parse_expr("x^2").unwrap());
    }

    #[test]
    fn log_and_ln_map_to_different_nodes() {
        assert!(matches!(parse_expr("log(x)").unwrap(), Expr::Log10(_)));
        assert!(matches!(parse_expr("ln(x)").unwrap(), Expr::Ln(_)));
    }

    #[test]
    fn pow_call_is_a_power() {
        assert_eq!(parse_expr("pow(x, 3)").unwrap(), parse_expr("x^3").unwrap());
    }

    #[test]
    fn parses_number_forms() {
        let cases = [
            ("2", 2.0),
            ("0.5", 0.5),
            (".5", 0.5),
            ("3.", 3.0),
            ("1e-3", 1e-3),
            ("2.5E+4", 2.5e4),
        ];
        for (text, value) in cases {
            assert_eq!(parse_expr(text).unwrap(), Expr::Constant(value), "{text}");
        }
    }

    #[test]
    fn reports_positions() {
        assert_eq!(message("(x + 1"), "unexpected end of input at position 6");
        assert_eq!(message("x + 1)"), "unexpected `)` at position 5");
        assert_eq!(message("x +"), "unexpected end of input at position 3");
        assert_eq!(message("2x"), "unexpected `x` at position 1");
    }

    #[test]
    fn reports_unknown_names() {
        assert_eq!(message("y + 1"), "unknown identifier `y` at position 0");
        assert_eq!(message("x + asin(x)"), "unknown function `asin` at position 4");
        assert_eq!(message("sin"), "function `sin` must be followed by `(` at position 0");
    }

    #[test]
    fn reports_arity() {
        assert_eq!(message("pow(x)"), "`pow` expects 2 arguments, got 1 at position 0");
        assert_eq!(message("sin(x, 2)"), "`sin` expects 1 argument, got 2 at position 0");
        assert_eq!(message("sqrt()"), "`sqrt` expects 1 argument, got 0 at position 0");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(message("   "), "empty expression");
    }

    #[test]
    fn stops_at_the_nesting_budget() {
        let nested = |n: usize| format!("{}x{}", "(".repeat(n), ")".repeat(n));
        assert!(parse_expr(&nested(MAX_DEPTH)).is_ok());
        assert_eq!(
            message(&nested(MAX_DEPTH + 1)),
            format!("expression nested too deeply at position {MAX_DEPTH}")
        );
        assert!(message(&format!("{}x", "-".repeat(10_000))).contains("nested too deeply"));
        assert!(message(&format!("x{}", "^x".repeat(10_000))).contains("nested too deeply"));
        assert!(message(&format!("x{}", " + x".repeat(10_000))).contains("nested too deeply"));
    }
}
