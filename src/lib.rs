//! # Dice-Pool Engine
//!
//! Exact probability distributions for tabletop dice-pool mechanics.
//!
//! ## Mechanics
//!
//! - **Highest die**: the largest face across `n` dice of `s` sides.
//! - **Threshold success**: how many of `n` dice show `v` or higher.
//!
//! ```text
//! P(max == v)    = (v/s)^n - ((v-1)/s)^n
//! P(k successes) = C(n,k) · q^k · (1-q)^(n-k),  q = (s-v+1)/s
//! ```
//!
//! Every generator returns a [`Pmf`]; [`stats`] reduces any `Pmf` to a
//! mean and standard deviation. Exhaustive enumeration in [`brute_force`]
//! exists to check the closed forms, see [`verify::check_accuracy`].
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `wasm`: WebAssembly bindings via wasm-bindgen
//!
//! ## Example
//!
//! ```rust
//! use dicepool_engine::{all_probabilities_for_threshold, expected_value, standard_deviation};
//!
//! // two d5, success on 3+
//! let hits = all_probabilities_for_threshold(2, 5, 3);
//! assert!((hits.get(2) - 0.36).abs() < 1e-12);
//! assert!((expected_value(&hits) - 1.2).abs() < 1e-12);
//! println!("σ = {:.4}", standard_deviation(&hits));
//! ```

pub mod analytic;
pub mod brute_force;
pub mod error;
pub mod mechanic;
pub mod pmf;
pub mod stats;
pub mod verify;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports
pub use analytic::*;
pub use brute_force::*;
pub use error::*;
pub use mechanic::*;
pub use pmf::*;
pub use stats::*;
pub use verify::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the engine (call once, especially important for WASM)
#[cfg(feature = "wasm")]
pub fn init() {
    console_error_panic_hook::set_once();
}
