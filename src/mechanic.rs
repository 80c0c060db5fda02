//! Dice mechanics and the ruleset that names them.
//!
//! A [`Ruleset`] is the explicit configuration a display layer passes in:
//! which mechanic each named analysis uses, and whether an analysis with
//! nothing to show should still be charted.
//!
//! ```json
//! {
//!   "analyses": [
//!     { "name": "Attack", "mechanic": { "type": "high_die", "dice": 2, "sides": 6 } },
//!     { "name": "Damage", "mechanic": { "type": "threshold", "dice": 3, "sides": 6, "val": 4 },
//!       "show_if_missing": true }
//!   ]
//! }
//! ```

use crate::analytic::{all_probabilities_for_high_die, all_probabilities_for_threshold};
use crate::error::{DiceError, Result};
use crate::pmf::Pmf;
use crate::stats::Summary;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One dice-pool mechanic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mechanic {
    /// Highest face across the pool
    HighDie { dice: u32, sides: u32 },
    /// Count of dice showing `val` or higher
    Threshold { dice: u32, sides: u32, val: u32 },
}

impl Mechanic {
    /// Exact distribution for this mechanic
    pub fn evaluate(&self) -> Pmf {
        match *self {
            Mechanic::HighDie { dice, sides } => all_probabilities_for_high_die(dice, sides),
            Mechanic::Threshold { dice, sides, val } => {
                all_probabilities_for_threshold(dice, sides, val)
            }
        }
    }
}

impl std::fmt::Display for Mechanic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mechanic::HighDie { dice, sides } => write!(f, "{}d{} highest", dice, sides),
            Mechanic::Threshold { dice, sides, val } => {
                write!(f, "{}d{} successes on {}+", dice, sides, val)
            }
        }
    }
}

/// A named analysis in the ruleset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub name: String,
    pub mechanic: Mechanic,

    /// Chart this analysis even when it can only ever show zero
    #[serde(default)]
    pub show_if_missing: bool,
}

impl Analysis {
    pub fn new(name: impl Into<String>, mechanic: Mechanic) -> Self {
        Self {
            name: name.into(),
            mechanic,
            show_if_missing: false,
        }
    }

    pub fn with_show_if_missing(mut self, show: bool) -> Self {
        self.show_if_missing = show;
        self
    }
}

/// Evaluated analysis, ready for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub pmf: Pmf,
    pub summary: Summary,

    /// Nothing worth plotting: zero average, fewer than two outcomes, and
    /// the analysis does not ask to be shown anyway
    pub skip: bool,
}

impl AnalysisResult {
    pub fn compute(analysis: &Analysis) -> Self {
        let pmf = analysis.mechanic.evaluate();
        let summary = Summary::of(&pmf);
        let skip = summary.expected == 0.0 && pmf.len() < 2 && !analysis.show_if_missing;
        Self {
            name: analysis.name.clone(),
            pmf,
            summary,
            skip,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Ordered set of uniquely named analyses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ruleset {
    analyses: Vec<Analysis>,
}

#[derive(Deserialize)]
struct RulesetDocument {
    #[serde(default)]
    analyses: Vec<Analysis>,
}

impl Ruleset {
    /// Build from analyses, rejecting duplicate names
    pub fn new(analyses: Vec<Analysis>) -> Result<Self> {
        let mut seen = HashSet::new();
        for analysis in &analyses {
            if !seen.insert(analysis.name.as_str()) {
                return Err(DiceError::Config(format!(
                    "duplicate analysis name: {}",
                    analysis.name
                )));
            }
        }
        Ok(Self { analyses })
    }

    /// Parse a ruleset document
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: RulesetDocument = serde_json::from_str(json)?;
        Self::new(doc.analyses)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }

    pub fn get(&self, name: &str) -> Option<&Analysis> {
        self.analyses.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// Evaluate every analysis in order
    pub fn evaluate(&self) -> Vec<AnalysisResult> {
        self.analyses
            .iter()
            .map(|analysis| {
                let result = AnalysisResult::compute(analysis);
                debug!(
                    name = %analysis.name,
                    mechanic = %analysis.mechanic,
                    expected = result.summary.expected,
                    skip = result.skip,
                    "evaluated analysis"
                );
                result
            })
            .collect()
    }
}
