//! Game mechanics for the Muster career generator.
//!
//! Provides dice and dice services, the character sheet the career engine
//! writes to, the stat modifier table and 2d6 target checks.

pub mod check;
pub mod dice;
pub mod error;
pub mod sheet;

pub use check::{CheckOutcome, TargetCheck};
pub use dice::{DiceExpr, DicePool, DiceService, Die, RngDice, RollResult, ScriptedDice};
pub use error::{MechError, MechResult};
pub use sheet::{Character, MAX_CASH_ROLLS, SkillSet, Stat, Stats, split_skill, stat_modifier};
