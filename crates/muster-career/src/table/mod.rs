//! Career tables: the immutable data each career track is played from.
//!
//! A [`CareerTable`] bundles a track's qualification, specializations, skill
//! lists, rank ladders, event and mishap tables and muster-out tables.
//! Tables are validated once when built or loaded; after that every lookup
//! the engine makes is expected to hit, and a miss is reported as
//! [`CareerError::MalformedTable`].

pub mod catalog;
pub mod grant;
pub mod standard;

pub use catalog::{Catalog, DraftEntry};
pub use grant::{Benefit, BenefitEntry, Grant, Pick, Requirement, StatTarget};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use muster_mechanics::split_skill;

use crate::error::{CareerError, CareerResult};

/// A fixed six-entry skill list, indexed by a d6 roll.
pub type SkillList = [Pick<Grant>; 6];

/// Rank number → benefit for reaching it. Missing ranks grant nothing.
pub type RankLadder = BTreeMap<u32, RankBenefit>;

/// Number of entries in an event table (2d6: 2-12).
pub const EVENT_ENTRIES: usize = 11;
/// Number of entries in a mishap table (1d6).
pub const MISHAP_ENTRIES: usize = 6;
/// Number of entries in the muster-out tables (1d6 + gambler bonus).
pub const MUSTER_ENTRIES: usize = 7;

/// What a character gets for reaching a rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankBenefit {
    /// Title taken on reaching the rank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A skill or stat grant, fixed or chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant: Option<Pick<Grant>>,
}

impl RankBenefit {
    /// A rank that only carries a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            grant: None,
        }
    }

    /// Attach a grant.
    pub fn with(mut self, grant: impl Into<Pick<Grant>>) -> Self {
        self.grant = Some(grant.into());
        self
    }
}

/// A sub-track within a career, chosen once at activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    /// Assignment name.
    pub name: String,
    /// Survival check.
    pub survival: Requirement,
    /// Advancement check.
    pub advancement: Requirement,
    /// Specialist training list.
    pub skills: SkillList,
    /// Name of the enlisted rank ladder this assignment uses.
    pub ranks: String,
}

/// Age penalty applied to qualification for older applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgePenalty {
    /// Age at which the penalty starts.
    pub age: u32,
    /// Modifier applied (negative).
    pub dm: i32,
}

/// Extra rules for military tracks with a parallel officer track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilitaryRules {
    /// Commission check.
    pub commission: Requirement,
    /// Name of the officer rank ladder.
    pub officer_ranks: String,
    /// Officer training list.
    pub officer_skills: SkillList,
    /// Qualification penalty for older applicants.
    pub age_penalty: AgePenalty,
}

/// Training regimens a character can pick for a training roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regimen {
    /// Personal development (mostly stats).
    Personal,
    /// Service skills common to the track.
    Service,
    /// Skills of the current assignment.
    Specialist,
    /// Advanced education, gated on Education.
    Advanced,
    /// Officer training, only once commissioned.
    Officer,
}

impl std::fmt::Display for Regimen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Personal => "Personal",
            Self::Service => "Service",
            Self::Specialist => "Specialist",
            Self::Advanced => "Advanced",
            Self::Officer => "Officer",
        };
        f.write_str(name)
    }
}

/// The complete data for one career track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerTable {
    /// Track name, e.g. "Army".
    pub name: String,
    /// Qualification check; `None` always qualifies.
    #[serde(default)]
    pub qualification: Option<Requirement>,
    /// Whether this is the always-eligible fallback track.
    #[serde(default)]
    pub fallback: bool,
    /// Education needed for advanced training; `None` disables it.
    #[serde(default)]
    pub advanced_education: Option<u32>,
    /// Personal development list.
    pub personal_skills: SkillList,
    /// Service skills list; also the basic training pool.
    pub service_skills: SkillList,
    /// Advanced education list.
    #[serde(default)]
    pub advanced_skills: Option<SkillList>,
    /// Assignments in the order they are offered.
    pub specializations: Vec<Specialization>,
    /// Named rank ladders shared between assignments.
    pub ladders: BTreeMap<String, RankLadder>,
    /// Event texts for 2d6 results 2-12.
    pub events: Vec<String>,
    /// Mishap texts for 1d6 results 1-6.
    pub mishaps: Vec<String>,
    /// Cash for muster-out results 1-7.
    pub credits: Vec<u64>,
    /// Benefits for muster-out results 1-7.
    pub benefits: Vec<BenefitEntry>,
    /// Officer track rules, for military careers.
    #[serde(default)]
    pub military: Option<MilitaryRules>,
}

impl CareerTable {
    /// Returns true if this track has a parallel officer track.
    pub fn is_military(&self) -> bool {
        self.military.is_some()
    }

    /// Assignment names in offer order.
    pub fn assignment_names(&self) -> Vec<&str> {
        self.specializations.iter().map(|s| s.name.as_str()).collect()
    }

    /// Look up an assignment.
    pub fn specialization(&self, name: &str) -> Option<&Specialization> {
        self.specializations.iter().find(|s| s.name == name)
    }

    /// Look up a rank ladder by name.
    pub fn ladder(&self, name: &str) -> CareerResult<&RankLadder> {
        self.ladders
            .get(name)
            .ok_or_else(|| self.malformed(format!("missing rank ladder '{name}'")))
    }

    /// Event text for a 2d6 result.
    pub fn event(&self, roll: u32) -> CareerResult<&str> {
        lookup(&self.events, roll, 2)
            .map(String::as_str)
            .ok_or_else(|| self.malformed(format!("no event for roll {roll}")))
    }

    /// Mishap text for a 1d6 result.
    pub fn mishap(&self, roll: u32) -> CareerResult<&str> {
        lookup(&self.mishaps, roll, 1)
            .map(String::as_str)
            .ok_or_else(|| self.malformed(format!("no mishap for roll {roll}")))
    }

    /// Cash for a muster-out result.
    pub fn cash(&self, roll: u32) -> CareerResult<u64> {
        lookup(&self.credits, roll, 1)
            .copied()
            .ok_or_else(|| self.malformed(format!("no credits for roll {roll}")))
    }

    /// Benefit cell for a muster-out result.
    pub fn benefit(&self, roll: u32) -> CareerResult<&BenefitEntry> {
        lookup(&self.benefits, roll, 1)
            .ok_or_else(|| self.malformed(format!("no benefit for roll {roll}")))
    }

    /// Every skill name in the service list, choice sets flattened.
    pub fn service_skill_names(&self) -> Vec<&str> {
        self.service_skills
            .iter()
            .flat_map(Pick::options)
            .filter_map(Grant::skill_name)
            .collect()
    }

    /// The skill list for a regimen, given the current assignment.
    pub fn skill_list<'t>(
        &'t self,
        regimen: Regimen,
        assignment: &'t Specialization,
    ) -> CareerResult<&'t SkillList> {
        match regimen {
            Regimen::Personal => Ok(&self.personal_skills),
            Regimen::Service => Ok(&self.service_skills),
            Regimen::Specialist => Ok(&assignment.skills),
            Regimen::Advanced => self
                .advanced_skills
                .as_ref()
                .ok_or_else(|| self.malformed("no advanced skills list")),
            Regimen::Officer => self
                .military
                .as_ref()
                .map(|m| &m.officer_skills)
                .ok_or_else(|| self.malformed("no officer skills list")),
        }
    }

    /// Check the table is complete and internally consistent.
    pub fn validate(&self) -> CareerResult<()> {
        if self.specializations.is_empty() {
            return Err(self.malformed("no specializations"));
        }
        for (i, spec) in self.specializations.iter().enumerate() {
            if self.specializations[..i].iter().any(|s| s.name == spec.name) {
                return Err(self.malformed(format!("duplicate assignment '{}'", spec.name)));
            }
            self.ladder(&spec.ranks)?;
            if spec.survival.is_empty() || spec.advancement.is_empty() {
                return Err(self.malformed(format!("empty check in '{}'", spec.name)));
            }
            self.validate_list(&spec.skills, &spec.name)?;
        }
        if self.fallback && self.qualification.is_some() {
            return Err(self.malformed("fallback track cannot require qualification"));
        }
        if self.qualification.as_ref().is_some_and(Pick::is_empty) {
            return Err(self.malformed("empty qualification choice"));
        }
        self.validate_list(&self.personal_skills, "personal")?;
        self.validate_list(&self.service_skills, "service")?;
        match (&self.advanced_skills, self.advanced_education) {
            (Some(list), Some(_)) => self.validate_list(list, "advanced")?,
            (None, None) => {}
            _ => {
                return Err(
                    self.malformed("advanced skills and advanced education must come together")
                );
            }
        }
        for (name, ladder) in &self.ladders {
            let place = format!("ladder '{name}'");
            for pick in ladder.values().filter_map(|rb| rb.grant.as_ref()) {
                if pick.is_empty() {
                    return Err(self.malformed("empty rank benefit choice"));
                }
                for grant in pick.options() {
                    self.validate_grant(grant, &place)?;
                    // a stat floor of 1 never raises a rolled stat
                    if matches!(grant, Grant::Stat { level: None, .. }) {
                        let detail = format!("stat grant without a level in {place}");
                        return Err(self.malformed(detail));
                    }
                }
            }
        }
        if let Some(military) = &self.military {
            self.ladder(&military.officer_ranks)?;
            self.validate_list(&military.officer_skills, "officer")?;
            if military.commission.is_empty() {
                return Err(self.malformed("empty commission choice"));
            }
        }
        self.expect_len("events", self.events.len(), EVENT_ENTRIES)?;
        self.expect_len("mishaps", self.mishaps.len(), MISHAP_ENTRIES)?;
        self.expect_len("credits", self.credits.len(), MUSTER_ENTRIES)?;
        self.expect_len("benefits", self.benefits.len(), MUSTER_ENTRIES)?;
        let empty_benefit = self.benefits.iter().any(|b| match b {
            BenefitEntry::Choose { choose } => choose.is_empty(),
            BenefitEntry::All(all) => all.is_empty(),
            BenefitEntry::One(_) => false,
        });
        if empty_benefit {
            return Err(self.malformed("empty benefit entry"));
        }
        Ok(())
    }

    fn validate_list(&self, list: &SkillList, which: &str) -> CareerResult<()> {
        if list.iter().any(Pick::is_empty) {
            return Err(self.malformed(format!("empty choice in {which} skills")));
        }
        let place = format!("{which} skills");
        list.iter()
            .flat_map(Pick::options)
            .try_for_each(|grant| self.validate_grant(grant, &place))
    }

    fn validate_grant(&self, grant: &Grant, place: &str) -> CareerResult<()> {
        match grant.skill_name().map(split_skill) {
            Some(Err(e)) => Err(self.malformed(format!("{e} in {place}"))),
            _ => Ok(()),
        }
    }

    fn expect_len(&self, which: &str, len: usize, expected: usize) -> CareerResult<()> {
        if len == expected {
            Ok(())
        } else {
            Err(self.malformed(format!("{which} has {len} entries, expected {expected}")))
        }
    }

    fn malformed(&self, detail: impl Into<String>) -> CareerError {
        CareerError::malformed(&self.name, detail)
    }
}

/// Index a die-roll table whose first entry is for `first`.
fn lookup<T>(entries: &[T], roll: u32, first: u32) -> Option<&T> {
    let index = roll.checked_sub(first)?;
    entries.get(usize::try_from(index).ok()?)
}
