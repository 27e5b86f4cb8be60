//! zmatch-core: One-port impedance matching calculations
//!
//! Conversion engine behind an interactive impedance-matching tool:
//! reflection coefficient <-> impedance at a reference impedance, plus the
//! equivalent parallel RC model at a given frequency.
//!
//! ## Modules
//!
//! - `units` - SI-prefix scaling
//! - `math` - Scalar conversions and one-port transforms
//! - `format` - Readout formatting
//! - `calc` - Conversion request orchestration

pub mod calc;
pub mod constants;
pub mod format;
pub mod math;
pub mod units;

pub use calc::{calc_vals, CalcError, ConversionRequest, ConversionResult, InputFormat};
pub use units::SiPrefix;
