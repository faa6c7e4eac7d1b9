//! Commissioning onto the parallel officer track of military careers.

use muster_mechanics::{Character, Stat};

use super::{Career, RankTrack};
use crate::context::Context;
use crate::error::CareerResult;
use crate::table::MilitaryRules;

/// Social status above which a commission may be sought after term 1.
pub const COMMISSION_SOCIAL_STATUS: u32 = 9;

impl<'t> Career<'t> {
    /// Returns true if the character may try for a commission this term:
    /// a military track, not yet an officer, and either in their first term
    /// or of high enough social status.
    pub fn commission_eligible(&self, sheet: &Character) -> bool {
        self.table.is_military()
            && !self.is_officer()
            && (self.term == 1 || sheet.stat_value(Stat::SocialStatus) > COMMISSION_SOCIAL_STATUS)
    }

    /// Commission check against the track's requirement.
    pub fn commission_check(&self, ctx: &mut Context<'_>, dm: i32) -> CareerResult<bool> {
        let military = self.military("check commission")?;
        Ok(self.check(ctx, "Commission", &military.commission, dm)?.success)
    }

    /// Try for a commission, with DM -1 after the first term.
    ///
    /// On success the officer track starts at rank 1, its benefit is
    /// taken and a bonus training roll follows. The caller skips the
    /// regular advancement check for the term.
    pub fn commission_roll(&mut self, ctx: &mut Context<'_>) -> CareerResult<bool> {
        let military = self.military("commission")?;
        let dm = if self.term > 1 { -1 } else { 0 };
        if !self.commission_check(ctx, dm)? {
            ctx.log("Commission rejected");
            return Ok(false);
        }
        let officer = RankTrack::officer(self.table.ladder(&military.officer_ranks)?);
        ctx.log(format!("Commissioned as an officer in the {}", self.name()));
        tracing::info!(track = self.name(), term = self.term, "commissioned");
        let title = officer.take_benefit(ctx)?;
        self.officer = Some(officer);
        if title.is_some() {
            self.title = title;
        }
        self.training_roll(ctx)?;
        Ok(true)
    }

    /// Qualification DM for an applicant of `age`.
    pub(super) fn age_penalty(&self, age: u32) -> i32 {
        match &self.table.military {
            Some(m) if age >= m.age_penalty.age => m.age_penalty.dm,
            _ => 0,
        }
    }

    pub(super) fn military(&self, operation: &'static str) -> CareerResult<&'t MilitaryRules> {
        self.table
            .military
            .as_ref()
            .ok_or_else(|| self.invalid(operation, "not a military career"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::Mandate;
    use crate::career::tests::{run, sheet};
    use crate::choice::{FirstChoice, ScriptedChoices};
    use crate::table::{Regimen, standard};

    fn enlisted<'t>(table: &'t crate::table::CareerTable, c: &mut Character) -> Career<'t> {
        let mut career = Career::new(table);
        run(c, [], &mut FirstChoice, |ctx| career.activate(ctx, Some("Infantry"))).unwrap();
        career
    }

    #[test]
    fn first_term_or_high_social_status() {
        let table = standard::army();
        let mut c = sheet();
        let mut career = enlisted(&table, &mut c);
        career.term = 1;
        assert!(career.commission_eligible(&c));
        career.term = 2;
        assert!(!career.commission_eligible(&c));
        c.stats.social_status = 11;
        assert!(career.commission_eligible(&c));
    }

    #[test]
    fn never_twice() {
        let table = standard::army();
        let mut c = sheet();
        c.stats.social_status = 11;
        let mut career = enlisted(&table, &mut c);
        career.term = 1;
        career.officer = Some(RankTrack::officer(table.ladder("officer").unwrap()));
        assert!(!career.commission_eligible(&c));
    }

    #[test]
    fn civilian_tracks_never_commission() {
        let table = standard::scout();
        let mut c = sheet();
        let mut career = Career::new(&table);
        run(&mut c, [], &mut FirstChoice, |ctx| career.activate(ctx, None)).unwrap();
        career.term = 1;
        assert!(!career.commission_eligible(&c));
        assert!(run(&mut c, [12], &mut FirstChoice, |ctx| career.commission_roll(ctx)).is_err());
    }

    #[test]
    fn commission_term_skips_advancement() {
        let table = standard::army();
        let mut c = sheet();
        let mut career = enlisted(&table, &mut c);
        // training 1, survival 7, commission 8 (SOC 8+), bonus training 2, event 7
        let outcome = run(&mut c, [1, 7, 8, 2, 7], &mut FirstChoice, |ctx| {
            career.run_term(ctx, 0)
        })
        .unwrap();
        assert!(outcome.commissioned);
        assert!(!outcome.advanced);
        assert_eq!(outcome.mandate, Mandate::None);
        assert_eq!(career.officer_rank(), Some(1));
        assert_eq!(career.enlisted_rank(), 0);
        assert_eq!(career.title(), Some("Lieutenant"));
        assert_eq!(c.skills.level("Leadership"), Some(1));
        assert!(career.regimens(&c).contains(&Regimen::Officer));
    }

    #[test]
    fn rejected_commission_falls_through_to_advancement() {
        let table = standard::army();
        let mut c = sheet();
        let mut career = enlisted(&table, &mut c);
        // training 1, survival 7, commission 5 fails, advancement 7 (EDU 6+), bonus training 1, event 7
        let outcome = run(&mut c, [1, 7, 5, 7, 1, 7], &mut FirstChoice, |ctx| {
            career.run_term(ctx, 0)
        })
        .unwrap();
        assert!(!outcome.commissioned);
        assert!(outcome.advanced);
        assert_eq!(career.rank(), 1);
        assert_eq!(career.title(), Some("Lance Corporal"));
        assert!(c.log().iter().any(|l| l == "Commission rejected"));
    }

    #[test]
    fn officers_advance_on_the_officer_ladder() {
        let table = standard::army();
        let mut c = sheet();
        let mut career = enlisted(&table, &mut c);
        career.enlisted = career.enlisted.map(|t| t.at(3));
        career.officer = Some(RankTrack::officer(table.ladder("officer").unwrap()));
        let mut script = ScriptedChoices::default();
        run(&mut c, [], &mut script, |ctx| career.advance_rank(ctx)).unwrap();
        assert_eq!(career.officer_rank(), Some(2));
        assert_eq!(career.enlisted_rank(), 3);
        assert_eq!(career.total_rank(), 5);
        assert_eq!(career.title(), Some("Captain"));
    }

    #[test]
    fn later_terms_take_a_commission_penalty() {
        let table = standard::army();
        let mut c = sheet();
        c.stats.social_status = 10;
        let mut career = enlisted(&table, &mut c);
        career.term = 2;
        // SOC 10 gives +1, later term -1: roll 7 fails against 8.
        assert!(!run(&mut c, [7], &mut FirstChoice, |ctx| career.commission_roll(ctx)).unwrap());
        assert!(run(&mut c, [8, 1], &mut FirstChoice, |ctx| career.commission_roll(ctx)).unwrap());
    }
}
