/// Decimal places used by the result tables.
pub const DEFAULT_DECIMALS: usize = 9;

/// Round to `decimals` places and print the shortest form of the result.
///
/// Trailing zeros are dropped, negative zero prints as `0`, and anything
/// non-finite prints as `N/A`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let rounded: f64 = format!("{value:.decimals$}").parse().unwrap_or(value);
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Percentage relative error between successive iterates.
///
/// Zero when there is no previous iterate (`previous == 0`). The error is
/// measured against `current`, so a zero current iterate yields infinity.
pub fn relative_error(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    ((current - previous) / current).abs() * 100.0
}
