//! Mathematical functions module
//!
//! Scalar complex-number conversions and one-port reflection transforms.

pub mod conversions;
pub mod transforms;

pub use conversions::*;
pub use transforms::*;
