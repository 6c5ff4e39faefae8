//! Formatting utilities used for CLI outputs.
//! Ratio metrics are rounded here and only here; the engine keeps the
//! unrounded values for all arithmetic.

/// Render an optional ratio metric with one decimal, "-" when undefined.
pub fn fmt_ratio(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.1}", x),
        None => "-".to_string(),
    }
}

/// Render a signed difference with one decimal and an explicit sign.
pub fn fmt_diff(v: f64) -> String {
    format!("{:+.1}", v)
}

pub fn fmt_percent(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.1}%", x),
        None => "-".to_string(),
    }
}
