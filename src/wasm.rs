// WebAssembly bindings for the in-page widget
use crate::noun::NounForm;
use crate::value::{format_quantity, parse_quantity};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ScaledQuantity {
    value: f64,
    text: String,
}

#[wasm_bindgen]
pub struct PortionWasm {}

impl Default for PortionWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PortionWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Parse quantity text ("¼", "1 1/2", "0.75") into its numeric value.
    #[wasm_bindgen]
    pub fn parse_text(&self, text: &str) -> Result<f64, JsValue> {
        parse_quantity(text).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Render a value for display. `round_to_nice` is for bulk rescaling;
    /// pass false when echoing the exact value back for editing.
    #[wasm_bindgen]
    pub fn format_value(&self, value: f64, round_to_nice: bool) -> String {
        format_quantity(value, round_to_nice)
    }

    /// Pick singular or plural label text for a value.
    #[wasm_bindgen]
    pub fn select_noun(&self, value: f64, singular: &str, plural: &str) -> String {
        NounForm::new(singular, plural).select(value).to_string()
    }

    /// Scale a JSON array of stored values by `factor`.
    /// Returns a JSON array of `{value, text}` pairs: the exact scaled
    /// value for the page to store, and its nice-rounded display text.
    #[wasm_bindgen]
    pub fn scale_values(&self, values_json: &str, factor: f64) -> Result<String, JsValue> {
        let values: Vec<f64> = serde_json::from_str(values_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse values JSON: {}", e)))?;

        let scaled: Vec<ScaledQuantity> = values
            .into_iter()
            .map(|v| {
                let value = v * factor;
                ScaledQuantity {
                    value,
                    text: format_quantity(value, true),
                }
            })
            .collect();

        serde_json::to_string(&scaled)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }
}
