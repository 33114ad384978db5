//! Rendering of extracted numbers in rule messages.

/// Format a parameter value the way report messages show it.
///
/// Extracted values are always floats, so integral values keep a trailing
/// `.0` (`1000000000.0`, `5.0`). Magnitudes outside `1e-4..1e16` switch to
/// exponent form with a signed, two-digit exponent (`1e+16`, `1.81e-05`).
/// Non-finite values render as `inf`, `-inf` and `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map(|(m, e)| (m, e.parse::<i32>().unwrap_or(0)))
        .unwrap_or((scientific.as_str(), 0));

    if (-4..16).contains(&exponent) {
        let fixed = value.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{fixed}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}
