//! Dice types, pools, expressions and dice services.
//!
//! Career resolution only ever asks for a handful of shapes: two six-sided
//! dice summed for checks, one six-sided die for training, mishaps and
//! muster-out, and one die of the term length for early aging.

pub mod pool;
pub mod roll;
pub mod service;

pub use pool::DicePool;
pub use roll::RollResult;
pub use service::{DiceService, RngDice, ScriptedDice};

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die.
    D6,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::Custom(n) => n,
        }
    }

    /// Build a die from a side count, normalizing six to [`Die::D6`].
    pub fn with_sides(sides: u32) -> Self {
        if sides == 6 { Self::D6 } else { Self::Custom(sides) }
    }

    /// Parse a die from a string like "d6" or "d4".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let num = s.strip_prefix('d')?.parse::<u32>().ok()?;
        if num >= 2 { Some(Self::with_sides(num)) } else { None }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A request for `count` dice of one type, summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice rolled.
    pub count: u32,
    /// The die rolled.
    pub die: Die,
}

impl DiceExpr {
    /// Two six-sided dice summed, the standard check roll.
    pub const TWO_D6: Self = Self {
        count: 2,
        die: Die::D6,
    };

    /// A single six-sided die.
    pub const D6: Self = Self {
        count: 1,
        die: Die::D6,
    };

    /// A single die of the given size.
    pub fn die(sides: u32) -> Self {
        Self {
            count: 1,
            die: Die::with_sides(sides),
        }
    }

    /// Smallest possible total.
    pub fn min(self) -> u32 {
        self.count
    }

    /// Largest possible total.
    pub fn max(self) -> u32 {
        self.count * self.die.sides()
    }

    /// Parse an expression such as "2d6", "d6" or "1d4".
    pub fn parse(s: &str) -> MechResult<Self> {
        let trimmed = s.trim().to_lowercase();
        let invalid = || MechError::InvalidDice(s.to_string());
        let (count, die) = trimmed.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        let die = Die::from_str_tag(&format!("d{die}")).ok_or_else(invalid)?;
        if count == 0 {
            return Err(invalid());
        }
        Ok(Self { count, die })
    }

    /// Convert into a pool ready to be rolled.
    pub fn pool(self) -> DicePool {
        DicePool::of(self)
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::Custom(4).sides(), 4);
        assert_eq!(Die::with_sides(6), Die::D6);
    }

    #[test]
    fn die_from_str() {
        assert_eq!(Die::from_str_tag("D6"), Some(Die::D6));
        assert_eq!(Die::from_str_tag("d4"), Some(Die::Custom(4)));
        assert_eq!(Die::from_str_tag("d1"), None);
        assert_eq!(Die::from_str_tag("foo"), None);
    }

    #[test]
    fn expr_parse() {
        assert_eq!(DiceExpr::parse("2d6").unwrap(), DiceExpr::TWO_D6);
        assert_eq!(DiceExpr::parse("d6").unwrap(), DiceExpr::D6);
        assert_eq!(DiceExpr::parse("1d4").unwrap(), DiceExpr::die(4));
        assert!(DiceExpr::parse("0d6").is_err());
        assert!(DiceExpr::parse("two dice").is_err());
    }

    #[test]
    fn expr_bounds_and_display() {
        assert_eq!(DiceExpr::TWO_D6.min(), 2);
        assert_eq!(DiceExpr::TWO_D6.max(), 12);
        assert_eq!(DiceExpr::TWO_D6.to_string(), "2d6");
        assert_eq!(DiceExpr::die(4).to_string(), "1d4");
    }
}
