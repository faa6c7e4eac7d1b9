//! Muster-out: converting service into cash, possessions and stats.

use serde::{Deserialize, Serialize};

use muster_mechanics::{Character, DiceExpr};

use super::{Career, Status};
use crate::context::Context;
use crate::error::CareerResult;
use crate::table::{Benefit, BenefitEntry};

/// Most extra benefit rolls rank can earn.
pub const MAX_RANK_BENEFIT_ROLLS: u32 = 3;
/// Terms needed before a retirement bonus is paid.
pub const RETIREMENT_TERMS: u32 = 5;
/// Retirement pay per term served.
pub const RETIREMENT_PER_TERM: u64 = 2000;
/// Skill that adds +1 to muster-out rolls.
pub const GAMBLER: &str = "Gambler";

/// What a muster-out paid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusterReport {
    /// Cash rolls taken.
    pub cash_rolls: u32,
    /// Benefit rolls taken.
    pub benefit_rolls: u32,
    /// Credits from cash rolls.
    pub cash: u64,
    /// Benefits granted, in order.
    pub benefits: Vec<Benefit>,
    /// Retirement bonus paid.
    pub retirement_bonus: u64,
}

impl<'t> Career<'t> {
    /// Cash rolls this career earns, limited by what is left of the
    /// character's lifetime allowance.
    pub fn cash_roll_budget(&self, sheet: &Character) -> u32 {
        self.term.min(sheet.cash_rolls_left())
    }

    /// Benefit rolls: one per term plus up to three for rank, less one if
    /// the career ended in a mishap.
    pub fn benefit_roll_budget(&self) -> u32 {
        let rolls = self.term + ((self.total_rank() + 1) / 2).min(MAX_RANK_BENEFIT_ROLLS);
        if self.status == Status::Mishap {
            rolls.saturating_sub(1)
        } else {
            rolls
        }
    }

    /// Flat bonus for long service.
    pub fn retirement_bonus(&self) -> u64 {
        if self.term >= RETIREMENT_TERMS {
            u64::from(self.term) * RETIREMENT_PER_TERM
        } else {
            0
        }
    }

    /// 1d6, +1 for a trained gambler.
    pub fn muster_roll(&self, ctx: &mut Context<'_>) -> CareerResult<u32> {
        let roll = ctx.roll(DiceExpr::D6)?;
        let dm = u32::from(ctx.sheet.skill_check(GAMBLER, 1));
        ctx.log(format!("Muster roll: {roll} (DM {dm})"));
        Ok(roll + dm)
    }

    /// Leave the career and collect benefits. Ends in `Finished`.
    pub fn muster_out(&mut self, ctx: &mut Context<'_>) -> CareerResult<MusterReport> {
        if self.term == 0 {
            return Err(self.invalid("muster out", "no terms served"));
        }
        match self.status {
            Status::Active => ctx.log(format!("Mustering out of {} in good standing", self.name())),
            Status::Mishap => ctx.log(format!(
                "Mustering out of {} early; the last term earns no benefit",
                self.name()
            )),
            status => return Err(self.invalid("muster out", format!("status is {status}"))),
        }

        let mut report = MusterReport {
            cash_rolls: self.cash_roll_budget(ctx.sheet),
            benefit_rolls: self.benefit_roll_budget(),
            ..MusterReport::default()
        };
        for _ in 0..report.cash_rolls {
            let roll = self.muster_roll(ctx)?;
            let amount = self.table.cash(roll)?;
            if ctx.sheet.cash_roll(amount) {
                report.cash += amount;
            }
        }
        for _ in 0..report.benefit_rolls {
            let roll = self.muster_roll(ctx)?;
            match self.table.benefit(roll)? {
                BenefitEntry::One(benefit) => report.benefits.push(grant(ctx, benefit)),
                BenefitEntry::All(all) => {
                    for benefit in all {
                        report.benefits.push(grant(ctx, benefit));
                    }
                }
                BenefitEntry::Choose { choose } => {
                    let benefit = ctx.choose("Choose a benefit", choose)?;
                    report.benefits.push(grant(ctx, benefit));
                }
            }
        }
        report.retirement_bonus = self.retirement_bonus();
        if report.retirement_bonus > 0 {
            ctx.log(format!("Retirement bonus: {} credits", report.retirement_bonus));
        }
        ctx.sheet.grant_currency(report.retirement_bonus);

        self.status = Status::Finished;
        tracing::info!(
            track = self.name(),
            terms = self.term,
            cash = report.cash,
            benefits = report.benefits.len(),
            "mustered out"
        );
        Ok(report)
    }
}

fn grant(ctx: &mut Context<'_>, benefit: &Benefit) -> Benefit {
    match benefit {
        Benefit::Credits(amount) => ctx.sheet.grant_currency(*amount),
        Benefit::Item(name) => ctx.sheet.grant_item(name),
        Benefit::Stat(stat) => {
            let value = ctx.sheet.bump_stat(*stat, None);
            ctx.log(format!("Career benefit: {stat} +1 (now {value})"));
        }
    }
    benefit.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::tests::{run, sheet};
    use crate::choice::{FirstChoice, ScriptedChoices};
    use crate::error::CareerError;
    use crate::table::standard;
    use muster_mechanics::{MAX_CASH_ROLLS, Stat};
    use proptest::prelude::*;

    fn served<'t>(table: &'t crate::table::CareerTable, c: &mut Character, terms: u32, rank: u32) -> Career<'t> {
        let mut career = Career::new(table);
        run(c, [], &mut FirstChoice, |ctx| career.activate(ctx, None)).unwrap();
        career.term = terms;
        career.enlisted = career.enlisted.map(|t| t.at(rank));
        career
    }

    #[test]
    fn benefit_rolls_count_rank() {
        let table = standard::army();
        let mut c = sheet();
        let mut career = served(&table, &mut c, 3, 2);
        assert_eq!(career.benefit_roll_budget(), 4);
        career.status = Status::Mishap;
        assert_eq!(career.benefit_roll_budget(), 3);
        career.enlisted = career.enlisted.map(|t| t.at(6));
        assert_eq!(career.benefit_roll_budget(), 5);
    }

    #[test]
    fn muster_needs_a_term() {
        let table = standard::army();
        let mut c = sheet();
        let mut career = served(&table, &mut c, 0, 0);
        let err = run(&mut c, [], &mut FirstChoice, |ctx| career.muster_out(ctx)).unwrap_err();
        assert!(matches!(err, CareerError::InvalidState { operation: "muster out", .. }));
    }

    #[test]
    fn muster_pays_cash_and_benefits() {
        let table = standard::army();
        let mut c = sheet();
        let mut career = served(&table, &mut c, 1, 0);
        // one cash roll (1 -> 2000), one benefit roll (2 -> INT)
        let report = run(&mut c, [1, 2], &mut FirstChoice, |ctx| career.muster_out(ctx)).unwrap();
        assert_eq!(report.cash, 2000);
        assert_eq!(report.benefits, [Benefit::Stat(Stat::Intelligence)]);
        assert_eq!(c.credits, 2000);
        assert_eq!(c.stats.intelligence, 8);
        assert_eq!(career.status(), Status::Finished);
        let err = run(&mut c, [1, 1], &mut FirstChoice, |ctx| career.muster_out(ctx)).unwrap_err();
        assert!(matches!(err, CareerError::InvalidState { .. }));
    }

    #[test]
    fn gambler_shifts_rolls_onto_the_seventh_row() {
        let table = standard::army();
        let mut c = sheet();
        c.skills.bump(GAMBLER, Some(1)).unwrap();
        let mut career = served(&table, &mut c, 1, 0);
        let report = run(&mut c, [6, 6], &mut FirstChoice, |ctx| career.muster_out(ctx)).unwrap();
        assert_eq!(report.cash, 30_000);
        assert_eq!(report.benefits, [Benefit::Stat(Stat::SocialStatus)]);
    }

    #[test]
    fn list_and_choice_entries() {
        let table = standard::marines();
        let mut c = sheet();
        c.cash_rolls = MAX_CASH_ROLLS;
        let mut career = served(&table, &mut c, 1, 2);
        // no cash rolls left; two benefit rolls: 7 is unreachable without
        // Gambler, so 6 (choice) and 1 (Armour).
        let mut script = ScriptedChoices::new(["Armour"]);
        let report = run(&mut c, [6, 1], &mut script, |ctx| career.muster_out(ctx)).unwrap();
        assert_eq!(report.cash_rolls, 0);
        assert_eq!(report.benefits.len(), 2);
        assert_eq!(c.stuff.get("Armour"), Some(&2));
    }

    #[test]
    fn retirement_after_five_terms() {
        let table = standard::army();
        let mut c = sheet();
        let career = served(&table, &mut c, 4, 0);
        assert_eq!(career.retirement_bonus(), 0);
        let career = served(&table, &mut c, 6, 0);
        assert_eq!(career.retirement_bonus(), 12_000);
    }

    proptest! {
        #[test]
        fn lifetime_cash_rolls_capped(terms in proptest::collection::vec(1u32..6, 1..5)) {
            let table = standard::scout();
            let mut c = sheet();
            for t in terms {
                let mut career = served(&table, &mut c, t, 0);
                let rolls = career.cash_roll_budget(&c) + career.benefit_roll_budget();
                let dice = vec![3; rolls as usize];
                run(&mut c, dice, &mut FirstChoice, |ctx| career.muster_out(ctx)).unwrap();
                prop_assert!(c.cash_rolls <= MAX_CASH_ROLLS);
            }
        }
    }
}
