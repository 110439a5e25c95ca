//! WebAssembly bindings for the ternary logic engine.
//!
//! Trits cross the boundary as their symbols (`"-"`, `"0"`, `"+"`); derived
//! structures are returned as JSON strings.

use wasm_bindgen::prelude::*;
use js_sys::Array;
use crate::{algebra, Arity, Trit};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn names(arity: Arity) -> Array {
    algebra::operation_names(arity)
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Names of the one-input operations, for a selector.
#[wasm_bindgen(js_name = monadicOperations)]
pub fn monadic_operations() -> Array {
    names(Arity::Monadic)
}

/// Names of the two-input operations, for a selector.
#[wasm_bindgen(js_name = dyadicOperations)]
pub fn dyadic_operations() -> Array {
    names(Arity::Dyadic)
}

/// `"monadic"` or `"dyadic"`.
#[wasm_bindgen]
pub fn describe(op: &str) -> Result<String, JsError> {
    algebra::describe(op).map(|arity| arity.to_string()).map_err(js_err)
}

#[wasm_bindgen]
pub fn description(op: &str) -> Result<String, JsError> {
    algebra::description(op).map(str::to_string).map_err(js_err)
}

/// Evaluate an operation. `b` may be omitted for monadic operations.
#[wasm_bindgen]
pub fn evaluate(op: &str, a: &str, b: Option<String>) -> Result<String, JsError> {
    let a: Trit = a.parse().map_err(js_err)?;
    let b = b.map(|b| b.parse::<Trit>()).transpose().map_err(js_err)?;
    let result = algebra::evaluate(op, a, b).map_err(js_err)?;
    Ok(result.to_string())
}

#[wasm_bindgen(js_name = truthTableJson)]
pub fn truth_table_json(op: &str) -> Result<String, JsError> {
    let table = algebra::truth_table(op).map_err(js_err)?;
    serde_json::to_string(&table).map_err(js_err)
}

#[wasm_bindgen(js_name = karnaughMapJson)]
pub fn karnaugh_map_json(op: &str) -> Result<String, JsError> {
    let map = algebra::karnaugh_map(op).map_err(js_err)?;
    serde_json::to_string(&map).map_err(js_err)
}

#[wasm_bindgen(js_name = matrixNotation)]
pub fn matrix_notation(op: &str) -> Result<String, JsError> {
    algebra::matrix_notation(op).map_err(js_err)
}

#[wasm_bindgen(js_name = vectorNotation)]
pub fn vector_notation(op: &str) -> Result<String, JsError> {
    algebra::vector_notation(op).map_err(js_err)
}
