//! Table cells: grants, requirements, benefits and choice sets.
//!
//! Whether a table entry names a skill or a stat is settled once, when the
//! table is deserialized or built, so the engine dispatches on a tagged
//! [`Grant`] instead of probing the character sheet at run time.

use serde::{Deserialize, Serialize};

use muster_mechanics::Stat;

/// Either a single value or a set of alternatives the player picks from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pick<T> {
    /// Alternatives; exactly one is taken.
    Choose {
        /// The alternatives offered.
        choose: Vec<T>,
    },
    /// A single fixed value.
    One(T),
}

impl<T> Pick<T> {
    /// Build a choice set.
    pub fn choose(options: impl IntoIterator<Item = T>) -> Self {
        Self::Choose {
            choose: options.into_iter().collect(),
        }
    }

    /// Every value this cell could resolve to.
    pub fn options(&self) -> &[T] {
        match self {
            Self::Choose { choose } => choose,
            Self::One(value) => std::slice::from_ref(value),
        }
    }

    /// Returns true for an empty choice set, which cannot be resolved.
    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }
}

impl<T> From<T> for Pick<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

/// A skill or stat improvement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GrantRepr", into = "GrantRepr")]
pub enum Grant {
    /// Train a skill.
    Skill {
        /// Skill name, e.g. "Gun Combat".
        name: String,
        /// Level floor; `None` means the default for the context.
        level: Option<u32>,
    },
    /// Raise a stat.
    Stat {
        /// The stat raised.
        stat: Stat,
        /// Level floor; `None` means the default for the context.
        level: Option<u32>,
    },
}

impl Grant {
    /// A skill grant with no level.
    pub fn skill(name: impl Into<String>) -> Self {
        Self::Skill {
            name: name.into(),
            level: None,
        }
    }

    /// A stat grant with no level.
    pub fn stat(stat: Stat) -> Self {
        Self::Stat { stat, level: None }
    }

    /// The same grant with a level floor.
    pub fn at(self, floor: u32) -> Self {
        match self {
            Self::Skill { name, .. } => Self::Skill {
                name,
                level: Some(floor),
            },
            Self::Stat { stat, .. } => Self::Stat {
                stat,
                level: Some(floor),
            },
        }
    }

    /// The level floor, if any.
    pub fn level(&self) -> Option<u32> {
        match self {
            Self::Skill { level, .. } | Self::Stat { level, .. } => *level,
        }
    }

    /// Name of the skill or stat this grant raises.
    pub fn target(&self) -> String {
        match self {
            Self::Skill { name, .. } => name.clone(),
            Self::Stat { stat, .. } => stat.to_string(),
        }
    }

    /// The skill name, if this is a skill grant.
    pub fn skill_name(&self) -> Option<&str> {
        match self {
            Self::Skill { name, .. } => Some(name),
            Self::Stat { .. } => None,
        }
    }
}

impl std::fmt::Display for Grant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skill { name, .. } => write!(f, "{name}")?,
            Self::Stat { stat, .. } => write!(f, "{stat}")?,
        }
        match self.level() {
            Some(level) => write!(f, " {level}"),
            None => Ok(()),
        }
    }
}

/// Serialized shape of a grant: a bare name, or a map with a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum GrantRepr {
    Name(String),
    Full {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        skill: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stat: Option<Stat>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u32>,
    },
}

impl TryFrom<GrantRepr> for Grant {
    type Error = String;

    fn try_from(repr: GrantRepr) -> Result<Self, Self::Error> {
        match repr {
            GrantRepr::Name(name) => Ok(match Stat::parse(&name) {
                Ok(stat) => Self::stat(stat),
                Err(_) => Self::skill(name),
            }),
            GrantRepr::Full {
                skill: Some(name),
                stat: None,
                level,
            } => Ok(Self::Skill { name, level }),
            GrantRepr::Full {
                skill: None,
                stat: Some(stat),
                level,
            } => Ok(Self::Stat { stat, level }),
            GrantRepr::Full { .. } => Err("grant needs exactly one of 'skill' or 'stat'".into()),
        }
    }
}

impl From<Grant> for GrantRepr {
    fn from(grant: Grant) -> Self {
        match grant {
            Grant::Skill { name, level: None } => Self::Name(name),
            Grant::Skill { name, level } => Self::Full {
                skill: Some(name),
                stat: None,
                level,
            },
            Grant::Stat { stat, level } => Self::Full {
                skill: None,
                stat: Some(stat),
                level,
            },
        }
    }
}

/// A stat and the target number a check against it must reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTarget {
    /// Stat whose modifier applies.
    pub stat: Stat,
    /// Target number.
    pub target: u32,
}

impl StatTarget {
    /// Build a requirement.
    pub fn new(stat: Stat, target: u32) -> Self {
        Self { stat, target }
    }
}

impl std::fmt::Display for StatTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}+", self.stat.abbrev(), self.target)
    }
}

/// A requirement: a fixed stat/target or a choice among several.
pub type Requirement = Pick<StatTarget>;

/// One muster-out benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BenefitRepr", into = "BenefitRepr")]
pub enum Benefit {
    /// A lump of credits.
    Credits(u64),
    /// A named possession.
    Item(String),
    /// +1 to a stat.
    Stat(Stat),
}

impl std::fmt::Display for Benefit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credits(n) => write!(f, "{n} credits"),
            Self::Item(name) => write!(f, "{name}"),
            Self::Stat(stat) => write!(f, "{stat} +1"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum BenefitRepr {
    Credits(u64),
    Name(String),
}

impl TryFrom<BenefitRepr> for Benefit {
    type Error = String;

    fn try_from(repr: BenefitRepr) -> Result<Self, Self::Error> {
        Ok(match repr {
            BenefitRepr::Credits(n) => Self::Credits(n),
            BenefitRepr::Name(name) => match Stat::parse(&name) {
                Ok(stat) => Self::Stat(stat),
                Err(_) => Self::Item(name),
            },
        })
    }
}

impl From<Benefit> for BenefitRepr {
    fn from(benefit: Benefit) -> Self {
        match benefit {
            Benefit::Credits(n) => Self::Credits(n),
            Benefit::Item(name) => Self::Name(name),
            Benefit::Stat(stat) => Self::Name(stat_key(stat).to_string()),
        }
    }
}

fn stat_key(stat: Stat) -> &'static str {
    match stat {
        Stat::Strength => "strength",
        Stat::Dexterity => "dexterity",
        Stat::Endurance => "endurance",
        Stat::Intelligence => "intelligence",
        Stat::Education => "education",
        Stat::SocialStatus => "social_status",
    }
}

/// A muster-out benefits table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BenefitEntry {
    /// Pick one of several benefits.
    Choose {
        /// The alternatives offered.
        choose: Vec<Benefit>,
    },
    /// Every listed benefit is granted.
    All(Vec<Benefit>),
    /// A single benefit.
    One(Benefit),
}

impl BenefitEntry {
    /// Build a choice cell.
    pub fn choose(options: impl IntoIterator<Item = Benefit>) -> Self {
        Self::Choose {
            choose: options.into_iter().collect(),
        }
    }
}

impl From<Benefit> for BenefitEntry {
    fn from(benefit: Benefit) -> Self {
        Self::One(benefit)
    }
}
