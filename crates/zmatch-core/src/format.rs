//! Readout formatting
//!
//! Composes fixed-decimal values with SI-prefix symbols and unit suffixes
//! for the tool's readouts and clipboard export.

use num_complex::Complex64;

use crate::math::conversions::complex_2_degree;
use crate::units::SiPrefix;

/// Literal textual form of a non-finite value
fn nonfinite(val: f64) -> String {
    if val.is_nan() {
        "NaN".to_string()
    } else if val > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/// Render a base-unit value scaled into `prefix`, with exactly `decimals`
/// digits after the decimal point, followed by the prefix symbol and
/// `suffix`
///
/// Non-finite values render as their literal form with no unit or suffix.
/// `decimals` is expected in 0..=10 but not bounded here.
pub fn format_value(val: f64, prefix: SiPrefix, suffix: &str, decimals: usize) -> String {
    if !val.is_finite() {
        return nonfinite(val);
    }

    format!(
        "{:.*}{}{}",
        decimals,
        prefix.scale(val),
        prefix.symbol(),
        suffix
    )
}

/// Render a complex value as `a + bj`, with the sign of the imaginary part
/// split out and its magnitude rendered unsigned
pub fn format_complex(z: Complex64, decimals: usize) -> String {
    let sign = if z.im < 0.0 { "-" } else { "+" };

    format!(
        "{} {} {}",
        format_value(z.re, SiPrefix::None, "", decimals),
        sign,
        format_value(z.im.abs(), SiPrefix::None, "j", decimals)
    )
}

/// Render a complex value as `mag ∠ ang°`
pub fn format_polar(z: Complex64, decimals: usize) -> String {
    format!(
        "{} ∠ {}",
        format_value(z.norm(), SiPrefix::None, "", decimals),
        format_value(complex_2_degree(z), SiPrefix::None, "°", decimals)
    )
}

/// Render an `x, y unit` pair for clipboard export
///
/// Values keep full precision; the prefix uses its ASCII symbol so the
/// string survives plain-text round trips.
pub fn format_point(x: f64, y: f64, prefix: SiPrefix, unit: &str) -> String {
    format!("{}, {}{}{}", x, y, prefix.symbol_ascii(), unit)
}
