//! Trained skills and their levels.
//!
//! Skill names are checked against a fixed list. Some skills split into
//! specialities, written `Parent:Speciality` (`Pilot:Small Craft`). A
//! trained speciality implies its parent at level 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Every learnable skill with the specialities it splits into.
const KNOWN_SKILLS: &[(&str, &[&str])] = &[
    ("Admin", &[]),
    ("Advocate", &[]),
    ("Animals", &["Handling", "Riding", "Training", "Veterinary"]),
    ("Art", &["Holography", "Instrument", "Performer", "Visual Media", "Write"]),
    ("Astrogation", &[]),
    ("Athletics", &["Dexterity", "Endurance", "Strength"]),
    ("Battle Dress", &[]),
    ("Broker", &[]),
    ("Carouse", &[]),
    ("Deception", &[]),
    ("Diplomat", &[]),
    ("Drive", &["Hovercraft", "Mole", "Track", "Walker", "Wheel"]),
    ("Electronics", &["Comms", "Computers", "Remote Ops", "Sensors"]),
    ("Engineer", &["J-drive", "Life Support", "M-drive", "Power"]),
    ("Explosives", &[]),
    ("Flyer", &["Airship", "Grav", "Ornithopter", "Rotor", "Wing"]),
    ("Gambler", &[]),
    ("Gun Combat", &["Archaic", "Energy", "Slug"]),
    ("Gunner", &["Capital", "Ortillery", "Screen", "Turret"]),
    ("Heavy Weapons", &["Artillery", "Man Portable", "Vehicle"]),
    ("Investigate", &[]),
    ("Jack-of-all-Trades", &[]),
    ("Language", &["Anglic", "Aslan", "Vilani", "Zdetl"]),
    ("Leadership", &[]),
    ("Mechanic", &[]),
    ("Medic", &[]),
    ("Melee", &["Blade", "Bludgeon", "Natural", "Unarmed"]),
    ("Navigation", &[]),
    ("Persuade", &[]),
    ("Pilot", &["Capital Ships", "Small Craft", "Spacecraft"]),
    ("Profession", &["Belter", "Biologicals", "Construction", "Hydroponics", "Polymers"]),
    ("Recon", &[]),
    (
        "Science",
        &["Astronomy", "Biology", "Chemistry", "History", "Linguistics", "Physics", "Robotics"],
    ),
    ("Seafarer", &["Ocean Ships", "Personal", "Sail", "Submarine"]),
    ("Stealth", &[]),
    ("Steward", &[]),
    ("Streetwise", &[]),
    ("Survival", &[]),
    ("Tactics", &["Military", "Naval"]),
    ("Vacc Suit", &[]),
];

/// Split a skill name into its parent and optional speciality, rejecting
/// names that are not on the known skill list.
pub fn split_skill(name: &str) -> MechResult<(&str, Option<&str>)> {
    let (parent, speciality) = match name.split_once(':') {
        Some((parent, speciality)) => (parent, Some(speciality)),
        None => (name, None),
    };
    let unknown = || MechError::UnknownSkill(name.to_string());
    let (_, specialities) = KNOWN_SKILLS
        .iter()
        .find(|(known, _)| *known == parent)
        .ok_or_else(unknown)?;
    match speciality {
        Some(s) if !specialities.contains(&s) => Err(unknown()),
        _ => Ok((parent, speciality)),
    }
}

/// Skills a character has trained, keyed by name.
///
/// A skill absent from the set is untrained. Basic training provides a
/// skill at level 0; every other acquisition starts at level 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    levels: BTreeMap<String, u32>,
}

impl SkillSet {
    /// Create an empty skill set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of a skill, or `None` if untrained. A parent skill with a
    /// trained speciality but no level of its own is at 0.
    pub fn level(&self, name: &str) -> Option<u32> {
        self.levels
            .get(name)
            .copied()
            .or_else(|| self.has_speciality(name).then_some(0))
    }

    fn has_speciality(&self, parent: &str) -> bool {
        self.levels
            .keys()
            .filter_map(|k| k.split_once(':'))
            .any(|(p, _)| p == parent)
    }

    /// Returns true if the skill is trained at any level.
    pub fn knows(&self, name: &str) -> bool {
        self.level(name).is_some()
    }

    /// Returns true if the skill is trained at `level` or higher.
    pub fn check(&self, name: &str, level: u32) -> bool {
        self.level(name).is_some_and(|l| l >= level)
    }

    /// Provide a skill at level 0 if it is not already trained.
    /// Returns true if the skill was newly added.
    pub fn provide(&mut self, name: &str) -> MechResult<bool> {
        split_skill(name)?;
        if self.knows(name) {
            return Ok(false);
        }
        self.levels.insert(name.to_string(), 0);
        Ok(true)
    }

    /// Raise a skill: to at least `floor` when given, otherwise by one
    /// (an untrained skill goes straight to 1). Returns the new level.
    pub fn bump(&mut self, name: &str, floor: Option<u32>) -> MechResult<u32> {
        split_skill(name)?;
        let next = match (self.level(name), floor) {
            (Some(level), Some(floor)) => level.max(floor),
            (None, Some(floor)) => floor,
            (Some(level), None) => level + 1,
            (None, None) => 1,
        };
        self.levels.insert(name.to_string(), next);
        Ok(next)
    }

    /// Iterate `(name, level)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.levels.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of trained skills.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether no skills are trained.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
