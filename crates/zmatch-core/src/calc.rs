//! Conversion request orchestration
//!
//! The single entry point the UI layer calls: one typed request record in,
//! every derived representation of the measurement out.

use num_complex::Complex64;
use std::f64::consts::PI;
use std::str::FromStr;
use thiserror::Error;

use crate::math::conversions::{complex_2_degree, dbdeg_2_complex, magdeg_2_complex};
use crate::math::transforms::{gamma2z, rc2z, z2gamma, z2rc};
use crate::units::SiPrefix;

/// Calculation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// An input-format tag the engine has no conversion branch for.
    /// Silently picking a default path would misread an electrical
    /// measurement, so this is a hard error.
    #[error("unsupported input format: {format}")]
    UnsupportedFormat { format: String },
}

/// Declared format of the two input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Reflection coefficient, real/imaginary
    #[default]
    Ri,
    /// Reflection coefficient, magnitude/angle in degrees
    Ma,
    /// Reflection coefficient, power-ratio dB magnitude/angle in degrees
    Db,
    /// Impedance, real/imaginary in ohms
    Z,
    /// Parallel resistance in ohms/capacitance in the request's cap unit
    Rc,
}

impl FromStr for InputFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ri" => Ok(InputFormat::Ri),
            "ma" => Ok(InputFormat::Ma),
            "db" => Ok(InputFormat::Db),
            "z" => Ok(InputFormat::Z),
            "rc" => Ok(InputFormat::Rc),
            _ => Err(CalcError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// A single conversion request
///
/// `freq_hz` arrives already unscaled to base Hz by the caller.
/// `cap_unit` governs both the capacitance input field (`Rc` format) and
/// the capacitance output.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRequest {
    pub re: f64,
    pub im: f64,
    pub format: InputFormat,
    /// Reference impedance in ohms, > 0
    pub z0: f64,
    pub freq_hz: f64,
    pub cap_unit: SiPrefix,
}

/// Every representation derived from one request
#[derive(Debug, Clone, Copy)]
pub struct ConversionResult {
    /// Impedance in ohms
    pub z: Complex64,
    /// Reflection coefficient
    pub gamma: Complex64,
    /// Equivalent parallel resistance in ohms
    pub r: f64,
    /// Equivalent parallel capacitance, in the request's cap unit
    pub c: f64,
}

impl ConversionResult {
    /// Reflection-coefficient magnitude
    #[inline]
    pub fn gamma_mag(&self) -> f64 {
        self.gamma.norm()
    }

    /// Reflection-coefficient angle in degrees
    #[inline]
    pub fn gamma_deg(&self) -> f64 {
        complex_2_degree(self.gamma)
    }
}

/// Compute every representation for one request
///
/// Whichever representation comes in, both the impedance and the
/// reflection coefficient go out, plus the equivalent parallel RC at the
/// request frequency. Pure and total over finite inputs; the numeric
/// degeneracies (open circuit, zero frequency, zero-magnitude divisor)
/// propagate as non-finite components rather than failing.
pub fn calc_vals(req: &ConversionRequest) -> ConversionResult {
    let z0 = Complex64::new(req.z0, 0.0);
    let omega = 2.0 * PI * req.freq_hz;

    let (z, gamma) = match req.format {
        InputFormat::Z => {
            let z = Complex64::new(req.re, req.im);
            (z, z2gamma(z, z0))
        }
        InputFormat::Ri => {
            let gamma = Complex64::new(req.re, req.im);
            (gamma2z(gamma, z0), gamma)
        }
        InputFormat::Ma => {
            let gamma = magdeg_2_complex(req.re, req.im);
            (gamma2z(gamma, z0), gamma)
        }
        InputFormat::Db => {
            let gamma = dbdeg_2_complex(req.re, req.im);
            (gamma2z(gamma, z0), gamma)
        }
        InputFormat::Rc => {
            let z = rc2z(req.re, req.im, omega, req.cap_unit);
            (z, z2gamma(z, z0))
        }
    };

    let (r, c) = z2rc(z, omega, req.cap_unit);

    ConversionResult { z, gamma, r, c }
}
