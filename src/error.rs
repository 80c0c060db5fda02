//! Error types for the dice-pool engine.
//!
//! The generators themselves never fail: invalid pools degrade to a sentinel
//! distribution. Errors only come from structurally invalid input, guarded
//! enumeration, and configuration parsing.

use thiserror::Error;

/// Main error type for dice-pool engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiceError {
    /// A roll with no dice has no highest die to drop
    #[error("Cannot drop the highest die from an empty roll")]
    EmptyRoll,

    /// Exhaustive enumeration was requested for too many dice
    #[error("Pool too large for enumeration: {dice} dice (max {max})")]
    PoolTooLarge { dice: u32, max: u32 },

    /// Ruleset configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, DiceError>;

impl DiceError {
    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DiceError::PoolTooLarge { .. } | DiceError::EmptyRoll)
    }
}

impl From<serde_json::Error> for DiceError {
    fn from(err: serde_json::Error) -> Self {
        DiceError::Serialization(err.to_string())
    }
}

#[cfg(feature = "wasm")]
impl From<DiceError> for wasm_bindgen::JsValue {
    fn from(err: DiceError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
