//! Closed-form dice-pool distributions.
//!
//! Two mechanics:
//! - **Highest die**: the largest face shown across the pool.
//! - **Threshold success**: the number of dice showing `val` or higher.
//!
//! ```text
//! P(max <= v) = (v / s)^n
//! P(max == v) = (v / s)^n - ((v - 1) / s)^n
//! P(k successes) = C(n, k) · q^k · (1 - q)^(n - k),  q = (s - v + 1) / s
//! ```

use crate::pmf::Pmf;

/// Probability that the highest of `dice` fair `sides`-sided dice equals `val`.
///
/// A pool with no dice has no highest die, so `dice == 0` gives 0.0, as do
/// `sides == 0` and any `val` outside `1..=sides`.
pub fn probability_of_max_equal_to(dice: u32, sides: u32, val: u32) -> f64 {
    if dice == 0 || sides == 0 || val == 0 || val > sides {
        return 0.0;
    }
    let n = dice as f64;
    let s = sides as f64;
    ((val as f64 / s).powf(n) - ((val - 1) as f64 / s).powf(n)).max(0.0)
}

/// Distribution of the highest die over outcomes `1..=sides`.
///
/// Empty for `dice == 0` or `sides == 0`.
pub fn all_probabilities_for_high_die(dice: u32, sides: u32) -> Pmf {
    if dice == 0 || sides == 0 {
        return Pmf::new();
    }
    (1..=sides)
        .map(|val| (val as i64, probability_of_max_equal_to(dice, sides, val)))
        .collect()
}

/// Distribution of the number of successes over outcomes `0..=dice`.
///
/// A success is any die showing `val` or higher. Pools that cannot produce a
/// meaningful count (`dice == 0`, `sides == 0`, `val == 0`, `val > sides`)
/// yield `{0: 1.0}`: certainly no successes.
pub fn all_probabilities_for_threshold(dice: u32, sides: u32, val: u32) -> Pmf {
    if dice == 0 || sides == 0 || val == 0 || val > sides {
        return Pmf::point(0);
    }

    let q = (sides - val + 1) as f64 / sides as f64;
    binomial_masses(dice, q)
        .into_iter()
        .enumerate()
        .map(|(k, p)| (k as i64, p))
        .collect()
}

/// Binomial masses for `0..=n` successes with per-trial probability `q`.
///
/// Weights start at 1.0 on the mode and shrink outward through the ratio
/// `P(k+1) / P(k) = (n-k)/(k+1) · q/(1-q)`, then are divided by their total.
/// Every weight stays in `[0, 1]`, so no pool size overflows; far tails
/// underflow to 0.0.
fn binomial_masses(n: u32, q: f64) -> Vec<f64> {
    let len = n as usize + 1;
    if q >= 1.0 {
        let mut masses = vec![0.0; len];
        masses[n as usize] = 1.0;
        return masses;
    }
    if q <= 0.0 {
        let mut masses = vec![0.0; len];
        masses[0] = 1.0;
        return masses;
    }

    let odds = q / (1.0 - q);
    let mode = (((n as f64 + 1.0) * q).floor() as u32).min(n);

    let mut weights = vec![0.0; len];
    weights[mode as usize] = 1.0;
    for k in mode..n {
        weights[k as usize + 1] =
            weights[k as usize] * ((n - k) as f64 / (k + 1) as f64) * odds;
    }
    for k in (1..=mode).rev() {
        weights[k as usize - 1] =
            weights[k as usize] * (k as f64 / (n - k + 1) as f64) / odds;
    }

    let total: f64 = weights.iter().sum();
    for w in weights.iter_mut() {
        *w /= total;
    }
    weights
}

/// Binomial coefficient C(n, k) as a float (0.0 when `k > n`).
///
/// Exceeds `f64::MAX` for large `n` near `k = n/2` (around `n > 1020`);
/// the threshold generator does not go through it.
pub fn binomial(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}
