//! WASM bindings for the conversion entry point

use wasm_bindgen::prelude::*;
use zmatch_core::format;
use zmatch_core::units::SiPrefix;
use zmatch_core::{calc_vals, ConversionRequest, ConversionResult, InputFormat};

/// Result record for one conversion
#[wasm_bindgen]
pub struct WasmConversionResult {
    inner: ConversionResult,
}

#[wasm_bindgen]
impl WasmConversionResult {
    /// Impedance, real part in ohms
    #[wasm_bindgen(getter)]
    pub fn z_re(&self) -> f64 {
        self.inner.z.re
    }

    /// Impedance, imaginary part in ohms
    #[wasm_bindgen(getter)]
    pub fn z_im(&self) -> f64 {
        self.inner.z.im
    }

    /// Reflection coefficient, real part
    #[wasm_bindgen(getter)]
    pub fn g_re(&self) -> f64 {
        self.inner.gamma.re
    }

    /// Reflection coefficient, imaginary part
    #[wasm_bindgen(getter)]
    pub fn g_im(&self) -> f64 {
        self.inner.gamma.im
    }

    /// Reflection coefficient magnitude
    #[wasm_bindgen(getter)]
    pub fn g_mag(&self) -> f64 {
        self.inner.gamma_mag()
    }

    /// Reflection coefficient angle in degrees
    #[wasm_bindgen(getter)]
    pub fn g_ang(&self) -> f64 {
        self.inner.gamma_deg()
    }

    /// Equivalent parallel resistance in ohms
    #[wasm_bindgen(getter)]
    pub fn r(&self) -> f64 {
        self.inner.r
    }

    /// Equivalent parallel capacitance, in the requested cap unit
    #[wasm_bindgen(getter)]
    pub fn c(&self) -> f64 {
        self.inner.c
    }
}

/// Compute every representation of a one-port measurement
///
/// `format` and `cap_unit` arrive as the UI's string tags. An unknown
/// format tag is a hard error; an unknown unit tag falls back to identity
/// scaling.
///
/// @param re - First input field (interpretation depends on format)
/// @param im - Second input field
/// @param format - One of "ri", "ma", "db", "z", "rc"
/// @param z0 - Reference impedance in ohms
/// @param freq_hz - Frequency already unscaled to Hz
/// @param cap_unit - SI prefix tag for the capacitance field
#[wasm_bindgen(js_name = calcVals)]
pub fn calc_vals_js(
    re: f64,
    im: f64,
    format: &str,
    z0: f64,
    freq_hz: f64,
    cap_unit: &str,
) -> Result<WasmConversionResult, JsValue> {
    let format = format
        .parse::<InputFormat>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let cap_unit = SiPrefix::from_str(cap_unit).unwrap_or_default();

    let req = ConversionRequest {
        re,
        im,
        format,
        z0,
        freq_hz,
        cap_unit,
    };

    Ok(WasmConversionResult {
        inner: calc_vals(&req),
    })
}

/// Render a base-unit value for a readout: fixed decimals, prefix symbol,
/// unit suffix; non-finite values render as their literal form
#[wasm_bindgen(js_name = formatValue)]
pub fn format_value_js(val: f64, unit: &str, suffix: &str, decimals: usize) -> String {
    let prefix = SiPrefix::from_str(unit).unwrap_or_default();
    format::format_value(val, prefix, suffix, decimals)
}

/// Render an `x, y unit` pair for clipboard export
#[wasm_bindgen(js_name = formatPoint)]
pub fn format_point_js(x: f64, y: f64, unit: &str, suffix: &str) -> String {
    let prefix = SiPrefix::from_str(unit).unwrap_or_default();
    format::format_point(x, y, prefix, suffix)
}
