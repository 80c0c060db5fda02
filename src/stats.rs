//! Summary statistics over any [`Pmf`].
//!
//! These are descriptive: a degenerate or empty distribution still gets a
//! value (0.0) rather than an error, so chart legends always have something
//! to show.

use crate::pmf::Pmf;
use serde::{Deserialize, Serialize};

/// Expected value E[X] = Σ k·p(k)
pub fn expected_value(pmf: &Pmf) -> f64 {
    compensated_sum(pmf.iter().map(|(k, p)| k as f64 * p))
}

/// Variance Σ (k − E)²·p(k)
pub fn variance(pmf: &Pmf) -> f64 {
    let mean = expected_value(pmf);
    compensated_sum(pmf.iter().map(|(k, p)| {
        let d = k as f64 - mean;
        d * d * p
    }))
}

/// Standard deviation √Var(X)
pub fn standard_deviation(pmf: &Pmf) -> f64 {
    variance(pmf).max(0.0).sqrt()
}

/// Neumaier-compensated sum
fn compensated_sum(terms: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in terms {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Legend-ready statistics for one distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub expected: f64,
    pub std_dev: f64,
    pub outcomes: usize,
}

impl Summary {
    pub fn of(pmf: &Pmf) -> Self {
        Self {
            expected: expected_value(pmf),
            std_dev: standard_deviation(pmf),
            outcomes: pmf.len(),
        }
    }
}
