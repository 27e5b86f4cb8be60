//! One-port reflection transforms
//!
//! Conversions between reflection coefficient and impedance at a reference
//! impedance, and the equivalent parallel-RC extraction.

use num_complex::Complex64;

use crate::units::SiPrefix;

/// Convert impedance to reflection coefficient
///
/// Formula: gamma = (z - z0) / (z + z0)
///
/// When z + z0 is the zero complex the division degenerates and the
/// non-finite components propagate to the caller.
pub fn z2gamma(z: Complex64, z0: Complex64) -> Complex64 {
    (z - z0) / (z + z0)
}

/// Convert reflection coefficient to impedance
///
/// Formula: z = (1 + gamma) / (1 - gamma) * z0
///
/// Degenerates at gamma = 1 + 0j, the open-circuit limit.
pub fn gamma2z(gamma: Complex64, z0: Complex64) -> Complex64 {
    let one = Complex64::new(1.0, 0.0);
    (one + gamma) / (one - gamma) * z0
}

/// Equivalent parallel RC of an impedance at angular frequency `omega`
///
/// Works through the admittance y = 1/z: the parallel resistance is
/// 1/Re(y) in ohms, the parallel capacitance Im(y)/omega in farads,
/// returned scaled into `cap_unit`.
///
/// r is non-finite for a purely reactive load; c diverges when omega = 0.
pub fn z2rc(z: Complex64, omega: f64, cap_unit: SiPrefix) -> (f64, f64) {
    let y = z.inv();
    let r = 1.0 / y.re;
    let c = cap_unit.scale(y.im / omega);

    (r, c)
}

/// Impedance of a parallel RC at angular frequency `omega`
///
/// `r` is in ohms; `c` is given in `cap_unit` display units.
pub fn rc2z(r: f64, c: f64, omega: f64, cap_unit: SiPrefix) -> Complex64 {
    Complex64::new(1.0 / r, omega * cap_unit.unscale(c)).inv()
}
