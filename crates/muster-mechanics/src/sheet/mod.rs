//! Character sheets: stats, skills, money, possessions and the life log.
//!
//! The sheet is the only mutable state a career touches outside itself.
//! Every change the career engine makes goes through the methods here so
//! that the append-only log stays a faithful chronicle of the character's
//! life.

pub mod skills;
pub mod stats;

pub use skills::{SkillSet, split_skill};
pub use stats::{Stat, Stats, stat_modifier};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dice::DiceService;
use crate::error::MechResult;

/// Most cash rolls a character may ever receive across all careers.
pub const MAX_CASH_ROLLS: u32 = 3;

/// A character's mechanical state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Stat values.
    pub stats: Stats,
    /// Trained skills.
    pub skills: SkillSet,
    /// Credits on hand.
    pub credits: u64,
    /// Possessions with counts (e.g. "Weapon": 2).
    pub stuff: BTreeMap<String, u32>,
    /// Cash rolls taken so far (lifetime).
    pub cash_rolls: u32,
    log: Vec<String>,
}

impl Character {
    /// Create a character with the given stats and no skills.
    pub fn new(name: impl Into<String>, age: u32, stats: Stats) -> Self {
        Self {
            name: name.into(),
            age,
            stats,
            skills: SkillSet::new(),
            credits: 0,
            stuff: BTreeMap::new(),
            cash_rolls: 0,
            log: Vec::new(),
        }
    }

    /// Create a character with freshly rolled stats.
    pub fn roll(name: impl Into<String>, age: u32, dice: &mut dyn DiceService) -> MechResult<Self> {
        Ok(Self::new(name, age, Stats::roll(dice)?))
    }

    /// Current value of a stat.
    pub fn stat_value(&self, stat: Stat) -> u32 {
        self.stats.get(stat)
    }

    /// Roll modifier derived from a stat's current value.
    pub fn stat_modifier(&self, stat: Stat) -> MechResult<i32> {
        stat_modifier(self.stat_value(stat))
    }

    /// Returns true if the skill is trained at any level.
    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.knows(name)
    }

    /// Returns true if the skill is trained at `level` or higher.
    pub fn skill_check(&self, name: &str, level: u32) -> bool {
        self.skills.check(name, level)
    }

    /// Raise a skill by one, or to at least `floor`. Returns the new level.
    pub fn train_skill(&mut self, name: &str, floor: Option<u32>) -> MechResult<u32> {
        self.skills.bump(name, floor)
    }

    /// Provide a skill at level 0 if untrained. Returns true if newly added.
    pub fn provide_skill(&mut self, name: &str) -> MechResult<bool> {
        self.skills.provide(name)
    }

    /// Raise a stat by one, or to at least `floor`. Returns the new value.
    pub fn bump_stat(&mut self, stat: Stat, floor: Option<u32>) -> u32 {
        self.stats.bump(stat, floor)
    }

    /// Age the character.
    pub fn advance_age(&mut self, years: u32) {
        self.age += years;
    }

    /// Add credits. Zero amounts are ignored and not logged.
    pub fn grant_currency(&mut self, amount: u64) {
        if amount == 0 {
            return;
        }
        self.credits += amount;
        self.append(format!("Career benefit: {amount} credits"));
    }

    /// Add one of an item to the character's possessions.
    pub fn grant_item(&mut self, name: &str) {
        *self.stuff.entry(name.to_string()).or_insert(0) += 1;
        self.append(format!("Career benefit: {name}"));
    }

    /// Record a cash roll and pay it out unless the lifetime cap is spent.
    /// Returns true if the credits were granted.
    pub fn cash_roll(&mut self, amount: u64) -> bool {
        self.cash_rolls += 1;
        let n = self.cash_rolls;
        if n <= MAX_CASH_ROLLS {
            self.credits += amount;
            self.append(format!("Cash roll #{n}: {amount} credits"));
            true
        } else {
            self.append(format!("Cash roll #{n}: Ignored"));
            false
        }
    }

    /// Cash rolls still available this lifetime.
    pub fn cash_rolls_left(&self) -> u32 {
        MAX_CASH_ROLLS.saturating_sub(self.cash_rolls)
    }

    /// Append a line to the character's life log.
    pub fn append(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(character = %self.name, "{line}");
        self.log.push(line);
    }

    /// The life log, oldest line first.
    pub fn log(&self) -> &[String] {
        &self.log
    }
}
