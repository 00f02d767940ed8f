//! WASM bindings for tabulax
//!
//! This module provides JavaScript-accessible functions for table formatting.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Format tab/newline delimited content as a headerless table
///
/// # Arguments
/// * `body` - Rows separated by `\n`, cells separated by `\t`
///
/// # Returns
/// The rendered table text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "tabulate")]
pub fn tabulate_wasm(body: &str) -> Result<String, JsValue> {
    crate::tabulate(body).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Format tab/newline delimited content as a headered table
///
/// # Arguments
/// * `body` - Rows separated by `\n`, cells separated by `\t`
/// * `headers` - A single row of tab-separated header labels
///
/// # Returns
/// The rendered table text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "tabulateWithHeaders")]
pub fn tabulate_with_headers_wasm(body: &str, headers: &str) -> Result<String, JsValue> {
    crate::tabulate_with_headers(body, headers).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Format tab/newline delimited content with explicit padding
///
/// # Arguments
/// * `body` - Rows separated by `\n`, cells separated by `\t`
/// * `headers` - Optional single row of tab-separated header labels
/// * `padding` - Spaces on each side of every cell, at least 1
///
/// # Returns
/// The rendered table text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "tabulateWithPadding")]
pub fn tabulate_with_padding_wasm(
    body: &str,
    headers: Option<String>,
    padding: usize,
) -> Result<String, JsValue> {
    crate::tabulate_with_padding(body, headers.as_deref(), padding)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
