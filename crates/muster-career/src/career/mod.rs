//! One attempt at a career track.
//!
//! A [`Career`] moves `New → Active → (Mishap | Finished)` and is never
//! reactivated. It borrows its [`CareerTable`] for its whole life and works
//! against the character through a [`Context`] passed to every operation.
//!
//! The operations are split by phase:
//! - activation and qualification live here,
//! - [`term`] resolves a term of service,
//! - [`military`] adds the commission sub-protocol,
//! - [`muster`] converts service into benefits.

pub mod military;
pub mod muster;
pub mod rank;
pub mod term;

pub use muster::MusterReport;
pub use rank::RankTrack;
pub use term::TermOutcome;

use serde::{Deserialize, Serialize};

use muster_mechanics::{CheckOutcome, DiceExpr, TargetCheck};

use crate::context::Context;
use crate::error::{CareerError, CareerResult};
use crate::table::{CareerTable, Requirement, Specialization};

/// Years in one term of service.
pub const TERM_YEARS: u32 = 4;

/// Where a career is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Created but not yet activated.
    New,
    /// Serving terms.
    Active,
    /// Ended by a failed survival check.
    Mishap,
    /// Mustered out.
    Finished,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "New"),
            Self::Active => write!(f, "Active"),
            Self::Mishap => write!(f, "Mishap"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Override on whether the character may leave after the current term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mandate {
    /// The character decides.
    #[default]
    None,
    /// Another term must be served before mustering out.
    MustRemain,
    /// No further terms may be served.
    MustExit,
}

impl Mandate {
    /// Mandate set by an advancement roll. Uses the unmodified 2d6 total.
    pub fn from_roll(raw_roll: u32, term: u32) -> Self {
        if raw_roll <= term {
            Self::MustExit
        } else if raw_roll == DiceExpr::TWO_D6.max() {
            Self::MustRemain
        } else {
            Self::None
        }
    }
}

impl std::fmt::Display for Mandate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "-"),
            Self::MustRemain => write!(f, "must remain"),
            Self::MustExit => write!(f, "must exit"),
        }
    }
}

/// The serializable state of a career, enough to rebuild it against the
/// same table and replay identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerState {
    /// Track name.
    pub track: String,
    /// Terms served.
    pub term: u32,
    /// Lifecycle status.
    pub status: Status,
    /// Assignment, set once active.
    #[serde(default)]
    pub assignment: Option<String>,
    /// Enlisted rank.
    pub rank: u32,
    /// Officer rank, once commissioned.
    #[serde(default)]
    pub officer_rank: Option<u32>,
    /// Current title.
    #[serde(default)]
    pub title: Option<String>,
    /// Mandate from the last advancement check.
    #[serde(default)]
    pub mandate: Mandate,
}

/// A single career: term count, status, ranks, assignment and title.
#[derive(Debug, Clone)]
pub struct Career<'t> {
    table: &'t CareerTable,
    term: u32,
    status: Status,
    assignment: Option<&'t Specialization>,
    enlisted: Option<RankTrack<'t>>,
    officer: Option<RankTrack<'t>>,
    title: Option<String>,
    mandate: Mandate,
}

impl<'t> Career<'t> {
    /// A fresh career on `table`, status `New`.
    pub fn new(table: &'t CareerTable) -> Self {
        Self {
            table,
            term: 0,
            status: Status::New,
            assignment: None,
            enlisted: None,
            officer: None,
            title: None,
            mandate: Mandate::None,
        }
    }

    /// Track name.
    pub fn name(&self) -> &'t str {
        &self.table.name
    }

    /// The table this career is played from.
    pub fn table(&self) -> &'t CareerTable {
        self.table
    }

    /// Terms served so far.
    pub fn term(&self) -> u32 {
        self.term
    }

    /// Lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true while terms can be served.
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// The chosen assignment, once active.
    pub fn assignment(&self) -> Option<&'t str> {
        self.assignment.map(|s| s.name.as_str())
    }

    /// Rank on the track currently advancing: officer rank once
    /// commissioned, otherwise enlisted rank.
    pub fn rank(&self) -> u32 {
        self.officer_rank().unwrap_or_else(|| self.enlisted_rank())
    }

    /// Enlisted rank, frozen once commissioned.
    pub fn enlisted_rank(&self) -> u32 {
        self.enlisted.map_or(0, |t| t.rank)
    }

    /// Officer rank, if commissioned.
    pub fn officer_rank(&self) -> Option<u32> {
        self.officer.map(|t| t.rank)
    }

    /// Returns true once commissioned.
    pub fn is_officer(&self) -> bool {
        self.officer.is_some()
    }

    /// Enlisted plus officer rank.
    pub fn total_rank(&self) -> u32 {
        self.enlisted_rank() + self.officer_rank().unwrap_or(0)
    }

    /// Current title, if any rank has awarded one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Mandate set by this term's advancement check.
    pub fn mandate(&self) -> Mandate {
        self.mandate
    }

    /// Returns true if the character must leave after this term.
    pub fn must_exit(&self) -> bool {
        self.mandate == Mandate::MustExit
    }

    /// Returns true if the character may not muster out after this term.
    pub fn must_remain(&self) -> bool {
        self.mandate == Mandate::MustRemain
    }

    /// Roll to enter the track. `dm` is added to the stat modifier.
    ///
    /// Tracks without a qualification always pass without rolling.
    /// Military tracks subtract their age penalty from older applicants.
    pub fn qualify(&self, ctx: &mut Context<'_>, dm: i32) -> CareerResult<bool> {
        let Some(requirement) = &self.table.qualification else {
            ctx.log(format!("{} qualification: automatic", self.name()));
            return Ok(true);
        };
        let dm = dm + self.age_penalty(ctx.sheet.age);
        let outcome = self.check(ctx, "Qualification", requirement, dm)?;
        ctx.log(format!(
            "{} qualification {}",
            self.name(),
            if outcome.success { "passed" } else { "failed" }
        ));
        Ok(outcome.success)
    }

    /// Take up the career with `assignment`, or ask for one.
    ///
    /// Only legal from `New`. The rank-0 benefit of the assignment's ladder
    /// is applied before the career becomes active.
    pub fn activate(&mut self, ctx: &mut Context<'_>, assignment: Option<&str>) -> CareerResult<()> {
        if self.status != Status::New {
            return Err(self.invalid("activate", format!("status is {}", self.status)));
        }
        let table = self.table;
        let spec = match assignment {
            Some(name) => table.specialization(name),
            None => {
                let names = table.assignment_names();
                let name = *ctx.choose("Choose an assignment", &names)?;
                table.specialization(name)
            }
        }
        .ok_or_else(|| CareerError::UnknownAssignment {
            track: table.name.clone(),
            assignment: assignment.unwrap_or_default().to_string(),
        })?;

        ctx.log(format!("Entered {} as {}", table.name, spec.name));
        let enlisted = RankTrack::enlisted(table.ladder(&spec.ranks)?);
        let title = enlisted.take_benefit(ctx)?;

        self.assignment = Some(spec);
        self.enlisted = Some(enlisted);
        self.status = Status::Active;
        if title.is_some() {
            self.title = title;
        }
        tracing::info!(track = %table.name, assignment = %spec.name, "career activated");
        Ok(())
    }

    /// Capture the full state.
    pub fn snapshot(&self) -> CareerState {
        CareerState {
            track: self.table.name.clone(),
            term: self.term,
            status: self.status,
            assignment: self.assignment().map(str::to_string),
            rank: self.enlisted_rank(),
            officer_rank: self.officer_rank(),
            title: self.title.clone(),
            mandate: self.mandate,
        }
    }

    /// Rebuild a career from a snapshot taken against `table`.
    pub fn restore(table: &'t CareerTable, state: &CareerState) -> CareerResult<Self> {
        let mut career = Self::new(table);
        if !state.track.eq_ignore_ascii_case(&table.name) {
            return Err(career.invalid("restore", format!("snapshot is for '{}'", state.track)));
        }
        match (&state.assignment, state.status) {
            (None, Status::New) if state.term == 0 && state.rank == 0 => {}
            (None, Status::New) => {
                return Err(career.invalid("restore", "a new career has served no terms"));
            }
            (Some(name), status) if status != Status::New => {
                let spec = table.specialization(name).ok_or_else(|| {
                    CareerError::UnknownAssignment {
                        track: table.name.clone(),
                        assignment: name.clone(),
                    }
                })?;
                career.assignment = Some(spec);
                career.enlisted = Some(RankTrack::enlisted(table.ladder(&spec.ranks)?).at(state.rank));
            }
            _ => {
                return Err(career.invalid("restore", "assignment must be set exactly when not new"));
            }
        }
        if let Some(rank) = state.officer_rank {
            let military = career.military("restore")?;
            if rank == 0 {
                return Err(career.invalid("restore", "officer rank starts at 1"));
            }
            career.officer = Some(RankTrack::officer(table.ladder(&military.officer_ranks)?).at(rank));
        }
        career.term = state.term;
        career.status = state.status;
        career.title = state.title.clone();
        career.mandate = state.mandate;
        Ok(career)
    }

    /// Resolve a requirement and roll 2d6 against it.
    fn check(
        &self,
        ctx: &mut Context<'_>,
        label: &str,
        requirement: &Requirement,
        dm: i32,
    ) -> CareerResult<CheckOutcome> {
        let target = *ctx.resolve(&format!("Choose a {} check", label.to_lowercase()), requirement)?;
        ctx.log(format!("{} {label}: {target}", self.heading()));
        let dm = dm + ctx.sheet.stat_modifier(target.stat)?;
        let roll = ctx.roll(DiceExpr::TWO_D6)?;
        let outcome = TargetCheck::new(label, target.target).resolve(roll, dm);
        ctx.log(outcome.describe(label));
        Ok(outcome)
    }

    /// "Army [Infantry]" once assigned, else just the track name.
    fn heading(&self) -> String {
        match self.assignment() {
            Some(asg) => format!("{} [{asg}]", self.name()),
            None => self.name().to_string(),
        }
    }

    fn specialty(&self, operation: &'static str) -> CareerResult<&'t Specialization> {
        self.assignment
            .ok_or_else(|| self.invalid(operation, "no assignment"))
    }

    fn invalid(&self, operation: &'static str, reason: impl Into<String>) -> CareerError {
        CareerError::invalid_state(&self.table.name, operation, reason)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::choice::{ChoiceProvider, FirstChoice, ScriptedChoices};
    use crate::table::standard;
    use muster_mechanics::{Character, ScriptedDice, Stats};

    /// STR DEX END INT EDU SOC, all modifiers zero except where noted.
    pub(crate) fn sheet() -> Character {
        Character::new("Tester", 18, Stats::new([7, 7, 7, 7, 7, 7]))
    }

    pub(crate) fn run<T>(
        sheet: &mut Character,
        dice: impl IntoIterator<Item = u32>,
        choices: &mut dyn ChoiceProvider,
        f: impl FnOnce(&mut Context<'_>) -> T,
    ) -> T {
        let mut dice = ScriptedDice::new(dice);
        let mut ctx = Context::new(sheet, &mut dice, choices);
        f(&mut ctx)
    }

    #[test]
    fn new_career_is_unassigned() {
        let table = standard::army();
        let career = Career::new(&table);
        assert_eq!(career.status(), Status::New);
        assert_eq!(career.assignment(), None);
        assert_eq!(career.rank(), 0);
        assert_eq!(career.officer_rank(), None);
    }

    #[test]
    fn qualification_adds_stat_modifier() {
        let table = standard::navy();
        let mut c = sheet();
        c.stats.intelligence = 9;
        // INT 6+: roll 5 + 1 passes, roll 4 + 1 fails.
        let career = Career::new(&table);
        assert!(run(&mut c, [5], &mut FirstChoice, |ctx| career.qualify(ctx, 0)).unwrap());
        assert!(!run(&mut c, [4], &mut FirstChoice, |ctx| career.qualify(ctx, 0)).unwrap());
    }

    #[test]
    fn military_age_penalty_applies_at_threshold() {
        let table = standard::army();
        let career = Career::new(&table);
        let mut c = sheet();
        c.age = 30;
        // END 5+ with DM -2: a roll of 6 fails, 7 passes.
        assert!(!run(&mut c, [6], &mut FirstChoice, |ctx| career.qualify(ctx, 0)).unwrap());
        assert!(run(&mut c, [7], &mut FirstChoice, |ctx| career.qualify(ctx, 0)).unwrap());
    }

    #[test]
    fn fallback_qualifies_without_rolling() {
        let table = standard::drifter();
        let career = Career::new(&table);
        let mut c = sheet();
        assert!(run(&mut c, [], &mut FirstChoice, |ctx| career.qualify(ctx, -10)).unwrap());
    }

    #[test]
    fn activate_applies_rank_zero_benefit() {
        let table = standard::army();
        let mut career = Career::new(&table);
        let mut c = sheet();
        run(&mut c, [], &mut FirstChoice, |ctx| career.activate(ctx, Some("Infantry"))).unwrap();
        assert_eq!(career.status(), Status::Active);
        assert_eq!(career.assignment(), Some("Infantry"));
        assert_eq!(career.title(), Some("Private"));
        assert_eq!(c.skills.level("Gun Combat"), Some(1));
    }

    #[test]
    fn activate_asks_when_no_assignment_given() {
        let table = standard::army();
        let mut career = Career::new(&table);
        let mut c = sheet();
        let mut script = ScriptedChoices::new(["Cavalry"]);
        run(&mut c, [], &mut script, |ctx| career.activate(ctx, None)).unwrap();
        assert_eq!(career.assignment(), Some("Cavalry"));
    }

    #[test]
    fn activate_only_from_new() {
        let table = standard::army();
        let mut career = Career::new(&table);
        let mut c = sheet();
        run(&mut c, [], &mut FirstChoice, |ctx| career.activate(ctx, None)).unwrap();
        let err = run(&mut c, [], &mut FirstChoice, |ctx| career.activate(ctx, None)).unwrap_err();
        assert!(matches!(err, CareerError::InvalidState { operation: "activate", .. }));
    }

    #[test]
    fn unknown_assignment_is_rejected() {
        let table = standard::army();
        let mut career = Career::new(&table);
        let mut c = sheet();
        let err = run(&mut c, [], &mut FirstChoice, |ctx| {
            career.activate(ctx, Some("Artillery"))
        })
        .unwrap_err();
        assert!(matches!(err, CareerError::UnknownAssignment { .. }));
        assert_eq!(career.status(), Status::New);
    }

    #[test]
    fn mandate_from_raw_roll() {
        assert_eq!(Mandate::from_roll(2, 2), Mandate::MustExit);
        assert_eq!(Mandate::from_roll(3, 2), Mandate::None);
        assert_eq!(Mandate::from_roll(12, 1), Mandate::MustRemain);
        assert_eq!(Mandate::from_roll(12, 12), Mandate::MustExit);
    }

    #[test]
    fn snapshot_restores_ranks_and_assignment() {
        let table = standard::marines();
        let mut career = Career::new(&table);
        let mut c = sheet();
        run(&mut c, [], &mut FirstChoice, |ctx| career.activate(ctx, Some("Star Marine"))).unwrap();
        let mut state = career.snapshot();
        state.term = 3;
        state.rank = 2;
        state.officer_rank = Some(1);
        let back = Career::restore(&table, &state).unwrap();
        assert_eq!(back.snapshot(), state);
        assert_eq!(back.rank(), 1);
        assert_eq!(back.enlisted_rank(), 2);
        assert_eq!(back.total_rank(), 3);
    }

    #[test]
    fn restore_rejects_inconsistent_state() {
        let table = standard::scout();
        let state = CareerState {
            track: "Scout".into(),
            term: 1,
            status: Status::Active,
            assignment: None,
            rank: 0,
            officer_rank: None,
            title: None,
            mandate: Mandate::None,
        };
        assert!(Career::restore(&table, &state).is_err());
        let officer = CareerState {
            assignment: Some("Courier".into()),
            officer_rank: Some(1),
            ..state
        };
        assert!(Career::restore(&table, &officer).is_err());
    }

    #[test]
    fn restore_rejects_a_new_career_with_terms() {
        let table = standard::scout();
        let state = CareerState {
            track: "Scout".into(),
            term: 2,
            status: Status::New,
            assignment: None,
            rank: 0,
            officer_rank: None,
            title: None,
            mandate: Mandate::None,
        };
        let err = Career::restore(&table, &state).unwrap_err();
        assert!(matches!(err, CareerError::InvalidState { operation: "restore", .. }));
        let fresh = CareerState { term: 0, ..state };
        assert_eq!(Career::restore(&table, &fresh).unwrap().status(), Status::New);
    }
}
