use numeth::{evaluate, BracketSearch};
use proptest::prelude::*;

fn polynomial_text(coeffs: &[i32]) -> String {
    coeffs
        .iter()
        .enumerate()
        .map(|(power, c)| format!("({c})*x^{power}"))
        .collect::<Vec<_>>()
        .join(" + ")
}

fn horner(coeffs: &[i32], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + f64::from(c))
}

proptest! {
    #[test]
    fn polynomials_match_horner(
        coeffs in proptest::collection::vec(-20i32..20, 1..6),
        x in -10.0f64..10.0,
    ) {
        let got = evaluate(&polynomial_text(&coeffs), x).unwrap();
        let expected = horner(&coeffs, x);
        let magnitude = coeffs.iter().map(|c| f64::from(c.abs())).sum::<f64>();
        let scale = magnitude * x.abs().max(1.0).powi(5);
        prop_assert!(
            (got - expected).abs() <= 1e-12 * scale.max(1.0),
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn evaluation_is_idempotent(x in -100.0f64..100.0) {
        let input = "sin(x) + x^2/3 - exp(x/50)";
        let first = evaluate(input, x).unwrap();
        let second = evaluate(input, x).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn found_intervals_bracket_the_root(seed in any::<u64>(), root in -50.0f64..50.0) {
        let input = format!("x - ({root})");
        let interval = BracketSearch::new(100.0, 10_000).find_seeded(&input, seed).unwrap();
        let fa = evaluate(&input, interval.low()).unwrap();
        let fb = evaluate(&input, interval.high()).unwrap();
        prop_assert!(fa < 0.0 && fb > 0.0);
        prop_assert!(interval.contains(root));
    }
}
