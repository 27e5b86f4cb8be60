//! WASM bindings for zmatch-core
//!
//! This module exposes the conversion engine to the JavaScript UI layer.

use wasm_bindgen::prelude::*;

mod calc;

pub use calc::WasmConversionResult;

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    "0.1.0".to_string()
}
