use std::f64::consts::PI;

use numeth::{compile, evaluate, EvalCause, NumError};

fn close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= 1e-12 * scale,
        "got {actual}, expected {expected}"
    );
}

fn value(input: &str, x: f64) -> f64 {
    evaluate(input, x).unwrap_or_else(|err| panic!("{input} at {x}: {err}"))
}

#[test]
fn arithmetic_matches_textbook_values() {
    close(value("x^2 - 4", 3.0), 5.0);
    close(value("2*x + 3*x - x/4", 8.0), 38.0);
    close(value("(x + 1)*(x - 1)", 5.0), 24.0);
    close(value("2^3^2", 0.0), 512.0);
    close(value("-x^2", 3.0), -9.0);
    close(value("2^-2", 0.0), 0.25);
    close(value("pow(x, 3)", 2.0), 8.0);
    close(value("x**0.5", 16.0), 4.0);
    close(value("10 - 4 - 3", 0.0), 3.0);
    close(value("48 / 4 / 2", 0.0), 6.0);
}

#[test]
fn named_functions() {
    assert_eq!(value("sin(x)", 0.0), 0.0);
    close(value("cos(x)", PI), -1.0);
    close(value("tan(pi/4)", 0.0), 1.0);
    close(value("exp(x)", 1.0), std::f64::consts::E);
    close(value("sqrt(x)", 2.0), 2f64.sqrt());
    close(value("abs(x)", -7.5), 7.5);
}

#[test]
fn log_is_base_ten_and_ln_is_natural() {
    close(value("log(100)", 42.0), 2.0);
    close(value("ln(e)", 0.0), 1.0);
    close(value("ln(x)", 100.0), 100f64.ln());
    assert_ne!(value("log(x)", 100.0), value("ln(x)", 100.0));
}

#[test]
fn division_by_zero_is_an_evaluation_error() {
    match evaluate("1/x", 0.0) {
        Err(NumError::Evaluation { point, expression, cause }) => {
            assert_eq!(point, 0.0);
            assert_eq!(expression, "1/x");
            assert!(matches!(cause, EvalCause::NonFinite(v) if v.is_infinite()));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn out_of_domain_values_fail() {
    assert!(matches!(
        evaluate("sqrt(x)", -1.0),
        Err(NumError::Evaluation { cause: EvalCause::NonFinite(v), .. }) if v.is_nan()
    ));
    assert!(evaluate("ln(x)", 0.0).is_err());
    assert!(evaluate("exp(x)", 1000.0).is_err());
}

#[test]
fn compilation_failures_are_reported_at_the_point() {
    match evaluate("x +* 2", 1.5) {
        Err(NumError::Evaluation { point, cause: EvalCause::Compilation(message), .. }) => {
            assert_eq!(point, 1.5);
            assert!(message.contains("position"), "{message}");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn error_messages_name_point_and_expression() {
    let err = evaluate("1/x", 0.0).unwrap_err();
    assert_eq!(err.point(), Some(0.0));
    let text = err.to_string();
    assert!(text.contains("f(0)"), "{text}");
    assert!(text.contains("1/x"), "{text}");
}

#[test]
fn repeated_evaluation_is_identical() {
    let first = evaluate("sin(x)^2 + ln(x)", 0.7).unwrap();
    let second = evaluate("sin(x)^2 + ln(x)", 0.7).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    let f = compile("sin(x)^2 + ln(x)").unwrap();
    assert_eq!(f.evaluate(0.7).unwrap().to_bits(), first.to_bits());
    assert_eq!(f.call(0.7).to_bits(), first.to_bits());
}
