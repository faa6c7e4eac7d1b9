//! Rolling a dice expression against an RNG.

use rand::Rng;

use super::roll::RollResult;
use super::{DiceExpr, Die};

/// A handful of identical dice thrown together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePool {
    die: Die,
    count: u32,
}

impl DicePool {
    /// The pool an expression describes.
    pub fn of(expr: DiceExpr) -> Self {
        Self {
            die: expr.die,
            count: expr.count,
        }
    }

    /// The expression this pool rolls.
    pub fn expr(&self) -> DiceExpr {
        DiceExpr {
            count: self.count,
            die: self.die,
        }
    }

    /// Throw every die once.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> RollResult {
        let sides = self.die.sides();
        let faces = (0..self.count).map(|_| rng.random_range(1..=sides)).collect();
        RollResult::new(self.expr(), faces)
    }
}
