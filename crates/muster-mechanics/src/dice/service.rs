//! Dice services: the single source of randomness for career resolution.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::DiceExpr;
use crate::error::{MechError, MechResult};

/// Produces results for dice expressions.
///
/// Every random draw the career engine makes goes through this trait, so a
/// run can be replayed exactly by swapping in a [`ScriptedDice`].
pub trait DiceService {
    /// Roll the expression and return the summed total.
    fn roll(&mut self, expr: DiceExpr) -> MechResult<u32>;
}

/// Seeded pseudo-random dice.
#[derive(Debug, Clone)]
pub struct RngDice {
    rng: StdRng,
}

impl RngDice {
    /// Create dice seeded for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceService for RngDice {
    fn roll(&mut self, expr: DiceExpr) -> MechResult<u32> {
        let result = expr.pool().roll(&mut self.rng);
        tracing::trace!(%result, "rolled");
        Ok(result.total())
    }
}

/// Dice that replay pre-recorded totals in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    totals: VecDeque<u32>,
}

impl ScriptedDice {
    /// Create scripted dice from a sequence of totals.
    pub fn new(totals: impl IntoIterator<Item = u32>) -> Self {
        Self {
            totals: totals.into_iter().collect(),
        }
    }

    /// Number of totals not yet consumed.
    pub fn remaining(&self) -> usize {
        self.totals.len()
    }
}

impl DiceService for ScriptedDice {
    fn roll(&mut self, expr: DiceExpr) -> MechResult<u32> {
        let total = self
            .totals
            .pop_front()
            .ok_or_else(|| MechError::DiceExhausted(expr.to_string()))?;
        if !(expr.min()..=expr.max()).contains(&total) {
            return Err(MechError::InvalidDice(format!(
                "scripted total {total} impossible for {expr}"
            )));
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_dice_stay_in_range() {
        let mut dice = RngDice::seeded(7);
        for _ in 0..200 {
            let v = dice.roll(DiceExpr::TWO_D6).unwrap();
            assert!((2..=12).contains(&v));
        }
    }

    #[test]
    fn rng_dice_reproducible() {
        let mut a = RngDice::seeded(11);
        let mut b = RngDice::seeded(11);
        for _ in 0..20 {
            assert_eq!(
                a.roll(DiceExpr::D6).unwrap(),
                b.roll(DiceExpr::D6).unwrap()
            );
        }
    }

    #[test]
    fn scripted_dice_replay_in_order() {
        let mut dice = ScriptedDice::new([7, 3]);
        assert_eq!(dice.roll(DiceExpr::TWO_D6).unwrap(), 7);
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll(DiceExpr::D6).unwrap(), 3);
        assert!(matches!(
            dice.roll(DiceExpr::D6),
            Err(MechError::DiceExhausted(_))
        ));
    }

    #[test]
    fn scripted_dice_reject_impossible_totals() {
        let mut dice = ScriptedDice::new([9]);
        assert!(matches!(
            dice.roll(DiceExpr::D6),
            Err(MechError::InvalidDice(_))
        ));
    }
}
