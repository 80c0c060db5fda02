//! Probability mass function over integer outcomes.
//!
//! A `Pmf` is the one value type shared by every generator and statistic in
//! the crate: a finite mapping from outcome `k` to probability `p(k)`, kept in
//! ascending key order so that chart axes come out sorted.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default tolerance for comparing distributions
pub const TOLERANCE: f64 = 1e-9;

/// Discrete probability distribution keyed by outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pmf {
    masses: BTreeMap<i64, f64>,
}

impl Pmf {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Degenerate distribution: `outcome` with certainty
    pub fn point(outcome: i64) -> Self {
        let mut masses = BTreeMap::new();
        masses.insert(outcome, 1.0);
        Self { masses }
    }

    /// Probability of `outcome` (0.0 when absent)
    #[inline]
    pub fn get(&self, outcome: i64) -> f64 {
        self.masses.get(&outcome).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn contains(&self, outcome: i64) -> bool {
        self.masses.contains_key(&outcome)
    }

    /// Iterate `(outcome, probability)` in ascending outcome order
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.masses.iter().map(|(&k, &p)| (k, p))
    }

    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.masses.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.masses.values().copied()
    }

    /// Number of outcomes
    #[inline]
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn min_outcome(&self) -> Option<i64> {
        self.masses.keys().next().copied()
    }

    pub fn max_outcome(&self) -> Option<i64> {
        self.masses.keys().next_back().copied()
    }

    /// Sum of all masses
    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }

    /// Does the distribution sum to 1.0 within `tolerance`?
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_mass() - 1.0).abs() <= tolerance
    }

    /// Largest absolute mass difference over the union of both key sets.
    ///
    /// An outcome missing from one side counts as mass 0.0 there.
    pub fn max_abs_diff(&self, other: &Pmf) -> f64 {
        self.keys()
            .chain(other.keys())
            .map(|k| (self.get(k) - other.get(k)).abs())
            .fold(0.0, f64::max)
    }

    /// Do both distributions agree at every outcome within `tolerance`?
    pub fn approx_eq(&self, other: &Pmf, tolerance: f64) -> bool {
        self.max_abs_diff(other) <= tolerance
    }

    /// Survival view: outcome `k` maps to `P(X >= k)`.
    ///
    /// Keys are the same as `self`; the lowest outcome maps to the total mass.
    pub fn at_least(&self) -> Pmf {
        let mut running = 0.0;
        let mut masses = BTreeMap::new();
        for (&k, &p) in self.masses.iter().rev() {
            running += p;
            masses.insert(k, running);
        }
        Pmf { masses }
    }

    /// Conditional view `P(X = k | X > 0)` over the positive outcomes.
    ///
    /// Empty when no positive outcome carries mass.
    pub fn given_positive(&self) -> Pmf {
        let positive: f64 = self.masses.range(1i64..).map(|(_, &p)| p).sum();
        if positive <= 0.0 {
            return Pmf::new();
        }
        self.masses
            .range(1i64..)
            .map(|(&k, &p)| (k, p / positive))
            .collect()
    }

    /// Serialize to JSON (outcomes become string keys)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<(i64, f64)> for Pmf {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self {
            masses: iter.into_iter().collect(),
        }
    }
}
