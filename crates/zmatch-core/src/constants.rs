//! Numerical constants for matching calculations
//!
//! Defaults the interactive tool starts a session from.

/// Default reference impedance in ohms.
pub const DEFAULT_Z0: f64 = 50.0;

/// Default number of digits after the decimal point in readouts.
pub const DEFAULT_SIG_DIGITS: usize = 2;
