//! Unit conversion functions
//!
//! Conversions between representations of a complex value
//! (real/imaginary, magnitude/angle, dB/angle).

use num_complex::Complex64;
use std::f64::consts::PI;

/// Convert degrees to radians
pub fn degree_2_radian(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert complex number to phase in degrees
///
/// Always goes through `atan2`, so all four quadrants and the axis cases
/// come out right.
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(z.arg())
}

/// Convert complex number to magnitude
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert dB10 to magnitude (10^(dB/10))
pub fn db10_2_mag(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Convert magnitude to dB10 (10*log10(mag))
pub fn mag_2_db10(mag: f64) -> f64 {
    10.0 * mag.log10()
}

/// Convert (magnitude, degree) to complex
pub fn magdeg_2_complex(mag: f64, deg: f64) -> Complex64 {
    Complex64::from_polar(mag, degree_2_radian(deg))
}

/// Convert (dB, degree) to complex
///
/// The dB value is a power ratio, 10^(dB/10). The tool this engine feeds
/// has always read its dB field that way, so the amplitude-ratio form
/// (10^(dB/20)) is deliberately not used here.
pub fn dbdeg_2_complex(db: f64, deg: f64) -> Complex64 {
    magdeg_2_complex(db10_2_mag(db), deg)
}
