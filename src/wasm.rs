//! WebAssembly bindings for the dice-pool engine.
//!
//! Every method returns a JSON string so the chart layer can read outcome
//! keys and masses directly.
//!
//! ## Usage (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { WasmDiceEngine } from 'dicepool-engine';
//!
//! await init();
//!
//! const engine = new WasmDiceEngine();
//! const attack = JSON.parse(engine.highDie(3, 6));
//! const hits = JSON.parse(engine.threshold(2, 5, 3));
//! const legend = JSON.parse(engine.summary(JSON.stringify(hits)));
//! console.log(`Avg: ${legend.expected.toFixed(2)}`);
//! ```

use crate::analytic::{all_probabilities_for_high_die, all_probabilities_for_threshold};
use crate::error::DiceError;
use crate::mechanic::Ruleset;
use crate::pmf::{Pmf, TOLERANCE};
use crate::stats::Summary;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (call once at startup)
#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
}

/// JSON façade over the generators
#[wasm_bindgen]
pub struct WasmDiceEngine {
    tolerance: f64,
}

#[wasm_bindgen]
impl WasmDiceEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }

    /// Use a custom tolerance for normalization checks
    #[wasm_bindgen(js_name = "withTolerance")]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Highest-die distribution as `{"1": p, ..}`
    #[wasm_bindgen(js_name = "highDie")]
    pub fn high_die(&self, dice: u32, sides: u32) -> Result<String, JsValue> {
        Ok(all_probabilities_for_high_die(dice, sides).to_json()?)
    }

    /// Threshold-success distribution as `{"0": p, ..}`
    #[wasm_bindgen(js_name = "threshold")]
    pub fn threshold(&self, dice: u32, sides: u32, val: u32) -> Result<String, JsValue> {
        Ok(all_probabilities_for_threshold(dice, sides, val).to_json()?)
    }

    /// Summary statistics of a distribution given as JSON
    #[wasm_bindgen(js_name = "summary")]
    pub fn summary(&self, pmf_json: &str) -> Result<String, JsValue> {
        let pmf = Pmf::from_json(pmf_json)?;
        Ok(serde_json::to_string(&Summary::of(&pmf)).map_err(DiceError::from)?)
    }

    /// Does a distribution given as JSON sum to 1.0?
    #[wasm_bindgen(js_name = "isNormalized")]
    pub fn is_normalized(&self, pmf_json: &str) -> Result<bool, JsValue> {
        Ok(Pmf::from_json(pmf_json)?.is_normalized(self.tolerance))
    }

    /// Evaluate every analysis of a ruleset document
    #[wasm_bindgen(js_name = "evaluateRuleset")]
    pub fn evaluate_ruleset(&self, ruleset_json: &str) -> Result<String, JsValue> {
        let ruleset = Ruleset::from_json(ruleset_json)?;
        Ok(serde_json::to_string(&ruleset.evaluate()).map_err(DiceError::from)?)
    }
}

impl Default for WasmDiceEngine {
    fn default() -> Self {
        Self::new()
    }
}
