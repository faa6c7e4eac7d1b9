//! The set of career tracks a character can choose from.

use serde::{Deserialize, Serialize};

use super::{CareerTable, standard};
use crate::error::{CareerError, CareerResult};

/// Number of entries in the draft table (1d6).
pub const DRAFT_ENTRIES: usize = 6;

/// A draft table cell: the track a drafted character is sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEntry {
    /// Track name.
    pub track: String,
    /// Assignment forced on the draftee; `None` lets them choose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<String>,
}

impl DraftEntry {
    fn to(track: &str) -> Self {
        Self {
            track: track.to_string(),
            assignment: None,
        }
    }
}

/// Every career track on offer plus the draft table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Tracks in the order they are offered.
    pub tables: Vec<CareerTable>,
    /// Draft results for 1d6 rolls 1-6.
    pub draft: Vec<DraftEntry>,
}

impl Catalog {
    /// The built-in tracks and draft table.
    pub fn standard() -> Self {
        Self {
            tables: standard::all(),
            draft: vec![
                DraftEntry::to("Navy"),
                DraftEntry::to("Army"),
                DraftEntry::to("Marines"),
                DraftEntry::to("Marines"),
                DraftEntry::to("Scout"),
                DraftEntry {
                    track: "Agent".to_string(),
                    assignment: Some("Law Enforcement".to_string()),
                },
            ],
        }
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> CareerResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CareerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a track by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&CareerTable> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Look up a track, failing if it is not in the catalog.
    pub fn require(&self, name: &str) -> CareerResult<&CareerTable> {
        self.get(name)
            .ok_or_else(|| CareerError::IneligibleCareer(format!("no such track '{name}'")))
    }

    /// The always-eligible fallback track.
    pub fn fallback(&self) -> CareerResult<&CareerTable> {
        self.tables
            .iter()
            .find(|t| t.fallback)
            .ok_or_else(|| CareerError::malformed("catalog", "no fallback track"))
    }

    /// Track names in offer order.
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Draft table cell for a 1d6 result.
    pub fn draft_entry(&self, roll: u32) -> CareerResult<&DraftEntry> {
        roll.checked_sub(1)
            .and_then(|i| self.draft.get(i as usize))
            .ok_or_else(|| CareerError::malformed("catalog", format!("no draft entry for roll {roll}")))
    }

    /// Validate every table and the cross-references between them.
    pub fn validate(&self) -> CareerResult<()> {
        for (i, table) in self.tables.iter().enumerate() {
            table.validate()?;
            if self.tables[..i]
                .iter()
                .any(|t| t.name.eq_ignore_ascii_case(&table.name))
            {
                return Err(CareerError::malformed(
                    "catalog",
                    format!("duplicate track '{}'", table.name),
                ));
            }
        }
        let fallbacks = self.tables.iter().filter(|t| t.fallback).count();
        if fallbacks != 1 {
            return Err(CareerError::malformed(
                "catalog",
                format!("expected exactly one fallback track, found {fallbacks}"),
            ));
        }
        if self.draft.len() != DRAFT_ENTRIES {
            return Err(CareerError::malformed(
                "catalog",
                format!(
                    "draft has {} entries, expected {DRAFT_ENTRIES}",
                    self.draft.len()
                ),
            ));
        }
        for entry in &self.draft {
            let table = self.get(&entry.track).ok_or_else(|| {
                CareerError::malformed("catalog", format!("draft names unknown track '{}'", entry.track))
            })?;
            if let Some(assignment) = &entry.assignment {
                if table.specialization(assignment).is_none() {
                    return Err(CareerError::UnknownAssignment {
                        track: table.name.clone(),
                        assignment: assignment.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_validates() {
        let catalog = Catalog::standard();
        catalog.validate().unwrap();
        assert_eq!(
            catalog.names(),
            ["Drifter", "Scout", "Agent", "Army", "Marines", "Navy"]
        );
        assert_eq!(catalog.fallback().unwrap().name, "Drifter");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get("navy").unwrap().name, "Navy");
        assert!(catalog.get("Merchant").is_none());
        assert!(catalog.require("Merchant").is_err());
    }

    #[test]
    fn draft_table_covers_d6() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.draft_entry(1).unwrap().track, "Navy");
        let agent = catalog.draft_entry(6).unwrap();
        assert_eq!(agent.track, "Agent");
        assert_eq!(agent.assignment.as_deref(), Some("Law Enforcement"));
        assert!(catalog.draft_entry(0).is_err());
        assert!(catalog.draft_entry(7).is_err());
    }

    #[test]
    fn json_round_trip_validates() {
        let json = Catalog::standard().to_json().unwrap();
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back, Catalog::standard());
    }

    #[test]
    fn draft_must_name_known_tracks() {
        let mut catalog = Catalog::standard();
        catalog.draft[0].track = "Merchant".into();
        assert!(catalog.validate().is_err());
        let mut catalog = Catalog::standard();
        catalog.draft[5].assignment = Some("Bounty Hunter".into());
        assert!(matches!(
            catalog.validate(),
            Err(CareerError::UnknownAssignment { .. })
        ));
    }

    #[test]
    fn exactly_one_fallback() {
        let mut catalog = Catalog::standard();
        catalog.tables.retain(|t| !t.fallback);
        catalog.draft.clear();
        assert!(catalog.validate().is_err());
    }
}
