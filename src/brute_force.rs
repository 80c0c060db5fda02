//! Exhaustive enumeration of dice pools.
//!
//! Ground truth for the closed forms in [`crate::analytic`]. Cost grows as
//! `sides^dice`, so these are only practical for small pools; callers bound
//! the pool size (see [`crate::verify::MAX_BRUTE_FORCE_DICE`]).

use crate::error::{DiceError, Result};
use crate::pmf::Pmf;
use std::collections::BTreeMap;
use tracing::debug;

/// Faces on the standard die used by the verification generators
pub const D6: u32 = 6;

/// Every outcome of `dice` dice with `sides` faces, in odometer order.
///
/// `[1, 1, .., 1]` first, `[sides, .., sides]` last. A pool of zero dice has
/// exactly one outcome, the empty roll.
#[derive(Debug, Clone)]
pub struct Rolls {
    sides: u32,
    current: Option<Vec<u32>>,
}

impl Rolls {
    pub fn new(dice: u32, sides: u32) -> Self {
        let current = if dice > 0 && sides == 0 {
            None
        } else {
            Some(vec![1; dice as usize])
        };
        Self { sides, current }
    }
}

impl Iterator for Rolls {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let roll = self.current.take()?;

        let mut successor = roll.clone();
        for face in successor.iter_mut().rev() {
            if *face < self.sides {
                *face += 1;
                self.current = Some(successor);
                break;
            }
            *face = 1;
        }

        Some(roll)
    }
}

/// Remove one occurrence of the highest die, keeping the others in order.
pub fn drop_highest(roll: &[u32]) -> Result<Vec<u32>> {
    let highest = roll.iter().copied().max().ok_or(DiceError::EmptyRoll)?;
    let mut rest = roll.to_vec();
    if let Some(pos) = rest.iter().position(|&face| face == highest) {
        rest.remove(pos);
    }
    Ok(rest)
}

/// Highest-die distribution for `dice` d6, by enumeration.
pub fn brute_force_max_roll(dice: u32) -> Pmf {
    brute_force_max_roll_with_sides(dice, D6)
}

/// Highest-die distribution for `dice` dice of `sides` faces, by enumeration.
///
/// Empty for a pool of zero dice.
pub fn brute_force_max_roll_with_sides(dice: u32, sides: u32) -> Pmf {
    let pmf = tally(Rolls::new(dice, sides).map(|roll| roll.into_iter().max()));
    debug!(dice, sides, outcomes = pmf.len(), "enumerated max roll");
    pmf
}

/// Distribution of the highest remaining die after dropping the highest,
/// for `dice` d6.
pub fn brute_force_drop_highest(dice: u32) -> Pmf {
    brute_force_drop_highest_with_sides(dice, D6)
}

/// Drop-highest distribution for `dice` dice of `sides` faces.
///
/// Pools of fewer than two dice leave nothing to take a maximum of, so the
/// result is empty.
pub fn brute_force_drop_highest_with_sides(dice: u32, sides: u32) -> Pmf {
    let pmf = tally(Rolls::new(dice, sides).map(|roll| {
        drop_highest(&roll)
            .ok()
            .and_then(|rest| rest.into_iter().max())
    }));
    debug!(dice, sides, outcomes = pmf.len(), "enumerated drop-highest roll");
    pmf
}

/// Count outcomes and normalize by the number of outcomes that produced a
/// value. Outcomes mapping to `None` are not counted.
fn tally(outcomes: impl Iterator<Item = Option<u32>>) -> Pmf {
    let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
    let mut total: u64 = 0;
    for face in outcomes.flatten() {
        *counts.entry(face as i64).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return Pmf::new();
    }
    counts
        .into_iter()
        .map(|(k, count)| (k, count as f64 / total as f64))
        .collect()
}
