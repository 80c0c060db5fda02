//! Cross-validation of the closed forms against enumeration.

use crate::analytic::all_probabilities_for_high_die;
use crate::brute_force::{brute_force_max_roll, D6};
use crate::error::{DiceError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Largest pool [`check_accuracy`] will enumerate (6^9 ≈ 10M outcomes)
pub const MAX_BRUTE_FORCE_DICE: u32 = 9;

/// One pool size compared
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyCheck {
    pub dice: u32,
    pub max_abs_diff: f64,
    pub passed: bool,
}

/// Results of comparing every pool size up to some maximum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub tolerance: f64,
    pub checks: Vec<AccuracyCheck>,
}

impl AccuracyReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Check with the largest disagreement
    pub fn worst(&self) -> Option<&AccuracyCheck> {
        self.checks
            .iter()
            .max_by(|a, b| a.max_abs_diff.total_cmp(&b.max_abs_diff))
    }
}

/// Compare the highest-die formula with enumeration for `1..=max_dice` d6.
pub fn check_accuracy(max_dice: u32, tolerance: f64) -> Result<AccuracyReport> {
    if max_dice > MAX_BRUTE_FORCE_DICE {
        return Err(DiceError::PoolTooLarge {
            dice: max_dice,
            max: MAX_BRUTE_FORCE_DICE,
        });
    }

    let checks = (1..=max_dice)
        .map(|dice| {
            let exact = all_probabilities_for_high_die(dice, D6);
            let brute = brute_force_max_roll(dice);
            let max_abs_diff = exact.max_abs_diff(&brute);
            let passed = max_abs_diff <= tolerance;
            if passed {
                debug!(dice, max_abs_diff, "high-die formula matches enumeration");
            } else {
                warn!(dice, max_abs_diff, tolerance, "high-die formula disagrees with enumeration");
            }
            AccuracyCheck {
                dice,
                max_abs_diff,
                passed,
            }
        })
        .collect();

    Ok(AccuracyReport { tolerance, checks })
}
