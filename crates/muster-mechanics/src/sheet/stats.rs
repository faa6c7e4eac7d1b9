//! The six characteristics and the standard modifier table.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceExpr, DiceService};
use crate::error::{MechError, MechResult};

/// A raw character stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Physical strength.
    Strength,
    /// Agility and coordination.
    Dexterity,
    /// Stamina and toughness.
    Endurance,
    /// Raw intellect.
    Intelligence,
    /// Learning and schooling.
    Education,
    /// Standing in society.
    SocialStatus,
}

impl Stat {
    /// All stats in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Endurance,
        Self::Intelligence,
        Self::Education,
        Self::SocialStatus,
    ];

    /// Three-letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Endurance => "END",
            Self::Intelligence => "INT",
            Self::Education => "EDU",
            Self::SocialStatus => "SOC",
        }
    }

    /// Parse a stat from a full name or abbreviation.
    pub fn parse(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "dexterity" | "dex" => Ok(Self::Dexterity),
            "endurance" | "end" => Ok(Self::Endurance),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "education" | "edu" => Ok(Self::Education),
            "social_status" | "soc" => Ok(Self::SocialStatus),
            _ => Err(MechError::UnknownStat(s.to_string())),
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Endurance => "Endurance",
            Self::Intelligence => "Intelligence",
            Self::Education => "Education",
            Self::SocialStatus => "Social Status",
        };
        f.write_str(name)
    }
}

/// Convert a stat value into its roll modifier.
pub fn stat_modifier(value: u32) -> MechResult<i32> {
    match value {
        0 => Ok(-3),
        1..=2 => Ok(-2),
        3..=5 => Ok(-1),
        6..=8 => Ok(0),
        9..=11 => Ok(1),
        12..=14 => Ok(2),
        15..=20 => Ok(3),
        _ => Err(MechError::InvalidStatValue(value)),
    }
}

/// A character's six stat values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Strength value.
    pub strength: u32,
    /// Dexterity value.
    pub dexterity: u32,
    /// Endurance value.
    pub endurance: u32,
    /// Intelligence value.
    pub intelligence: u32,
    /// Education value.
    pub education: u32,
    /// Social status value.
    pub social_status: u32,
}

impl Stats {
    /// Build stats from values in sheet order.
    pub fn new(values: [u32; 6]) -> Self {
        let [strength, dexterity, endurance, intelligence, education, social_status] = values;
        Self {
            strength,
            dexterity,
            endurance,
            intelligence,
            education,
            social_status,
        }
    }

    /// Roll 2d6 for every stat.
    pub fn roll(dice: &mut dyn DiceService) -> MechResult<Self> {
        let mut values = [0; 6];
        for v in &mut values {
            *v = dice.roll(DiceExpr::TWO_D6)?;
        }
        Ok(Self::new(values))
    }

    /// Read one stat.
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Endurance => self.endurance,
            Stat::Intelligence => self.intelligence,
            Stat::Education => self.education,
            Stat::SocialStatus => self.social_status,
        }
    }

    /// Mutable access to one stat.
    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Endurance => &mut self.endurance,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Education => &mut self.education,
            Stat::SocialStatus => &mut self.social_status,
        }
    }

    /// Raise a stat: to at least `floor` when given, otherwise by one.
    /// Returns the new value. Never lowers the stat.
    pub fn bump(&mut self, stat: Stat, floor: Option<u32>) -> u32 {
        let value = self.get_mut(stat);
        match floor {
            Some(level) => *value = (*value).max(level),
            None => *value += 1,
        }
        *value
    }

    /// Iterate `(stat, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use proptest::prelude::*;

    #[test]
    fn modifier_table() {
        assert_eq!(stat_modifier(0).unwrap(), -3);
        assert_eq!(stat_modifier(2).unwrap(), -2);
        assert_eq!(stat_modifier(5).unwrap(), -1);
        assert_eq!(stat_modifier(7).unwrap(), 0);
        assert_eq!(stat_modifier(9).unwrap(), 1);
        assert_eq!(stat_modifier(14).unwrap(), 2);
        assert_eq!(stat_modifier(20).unwrap(), 3);
        assert!(matches!(
            stat_modifier(21),
            Err(MechError::InvalidStatValue(21))
        ));
    }

    #[test]
    fn parse_names() {
        assert_eq!(Stat::parse("social_status").unwrap(), Stat::SocialStatus);
        assert_eq!(Stat::parse("Social Status").unwrap(), Stat::SocialStatus);
        assert_eq!(Stat::parse("EDU").unwrap(), Stat::Education);
        assert!(Stat::parse("luck").is_err());
    }

    #[test]
    fn bump_with_and_without_floor() {
        let mut stats = Stats::new([7, 7, 7, 7, 7, 8]);
        assert_eq!(stats.bump(Stat::Endurance, None), 8);
        assert_eq!(stats.bump(Stat::SocialStatus, Some(10)), 10);
        assert_eq!(stats.bump(Stat::SocialStatus, Some(4)), 10);
    }

    #[test]
    fn roll_reads_six_totals() {
        let mut dice = ScriptedDice::new([2, 3, 4, 5, 6, 12]);
        let stats = Stats::roll(&mut dice).unwrap();
        assert_eq!(stats.strength, 2);
        assert_eq!(stats.social_status, 12);
    }

    proptest! {
        #[test]
        fn modifier_is_monotonic(a in 0u32..=20, b in 0u32..=20) {
            prop_assume!(a <= b);
            prop_assert!(stat_modifier(a).unwrap() <= stat_modifier(b).unwrap());
        }

        #[test]
        fn floor_bump_never_lowers(start in 0u32..=15, floor in 0u32..=15) {
            let mut stats = Stats::new([start; 6]);
            let after = stats.bump(Stat::Education, Some(floor));
            prop_assert!(after >= start);
            prop_assert_eq!(after, start.max(floor));
        }
    }
}
