//! Term resolution: training, survival, advancement, events and mishaps.

use muster_mechanics::{Character, DiceExpr, Stat};

use super::{Career, Mandate, RankTrack, Status, TERM_YEARS};
use crate::context::Context;
use crate::error::{CareerError, CareerResult};
use crate::table::{Grant, Regimen};

/// What happened during one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermOutcome {
    /// The term just served.
    pub term: u32,
    /// Whether the survival check passed.
    pub survived: bool,
    /// Whether the character was commissioned this term.
    pub commissioned: bool,
    /// Whether the character advanced a rank this term.
    pub advanced: bool,
    /// Mandate left by the term.
    pub mandate: Mandate,
}

impl<'t> Career<'t> {
    /// Serve one term.
    ///
    /// Order: training, survival, then on success aging, commission,
    /// advancement and an event; on failure a shorter stint, a mishap and
    /// the end of the career. `dm` modifies the survival check.
    pub fn run_term(&mut self, ctx: &mut Context<'_>, dm: i32) -> CareerResult<TermOutcome> {
        if self.status != Status::Active {
            return Err(self.invalid("run a term", format!("status is {}", self.status)));
        }
        if self.must_exit() {
            return Err(self.invalid("run a term", "mandated to leave"));
        }
        self.mandate = Mandate::None;
        self.term += 1;
        ctx.log(format!(
            "{} term {} started, age {}",
            self.name(),
            self.term,
            ctx.sheet.age
        ));
        tracing::debug!(track = self.name(), term = self.term, "term started");
        self.training_roll(ctx)?;

        let mut outcome = TermOutcome {
            term: self.term,
            survived: false,
            commissioned: false,
            advanced: false,
            mandate: Mandate::None,
        };
        if self.survival_check(ctx, dm)? {
            outcome.survived = true;
            ctx.log(format!("{} term {} completed", self.name(), self.term));
            ctx.sheet.advance_age(TERM_YEARS);
            if self.commission_eligible(ctx.sheet) {
                outcome.commissioned = self.commission_roll(ctx)?;
            }
            if !outcome.commissioned {
                outcome.advanced = self.advancement_roll(ctx, 0)?;
            }
            self.event_roll(ctx, 0)?;
        } else {
            let years = ctx.roll_labelled(DiceExpr::die(TERM_YEARS), "Years served")?;
            ctx.log(format!(
                "{} career ended with a mishap after {years} years",
                self.name()
            ));
            ctx.sheet.advance_age(years);
            self.mishap_roll(ctx)?;
            self.status = Status::Mishap;
            tracing::info!(track = self.name(), term = self.term, "career ended by mishap");
        }
        outcome.mandate = self.mandate;
        Ok(outcome)
    }

    /// Survival check for the current assignment.
    pub fn survival_check(&self, ctx: &mut Context<'_>, dm: i32) -> CareerResult<bool> {
        let spec = self.specialty("check survival")?;
        Ok(self.check(ctx, "Survival", &spec.survival, dm)?.success)
    }

    /// Advancement check for the current assignment.
    ///
    /// Besides pass/fail, the raw roll sets this term's mandate: at or
    /// below the term number the character must leave, a natural 12 means
    /// they must stay.
    pub fn advancement_check(&mut self, ctx: &mut Context<'_>, dm: i32) -> CareerResult<bool> {
        let spec = self.specialty("check advancement")?;
        let outcome = self.check(ctx, "Advancement", &spec.advancement, dm)?;
        self.mandate = Mandate::from_roll(outcome.roll, self.term);
        match self.mandate {
            Mandate::MustExit => ctx.log(format!("Must leave {} after this term", self.name())),
            Mandate::MustRemain => ctx.log(format!("Must remain in {} next term", self.name())),
            Mandate::None => {}
        }
        Ok(outcome.success)
    }

    /// Advancement check; on success, advance a rank and take a bonus
    /// training roll. Returns whether the check passed.
    pub fn advancement_roll(&mut self, ctx: &mut Context<'_>, dm: i32) -> CareerResult<bool> {
        if !self.advancement_check(ctx, dm)? {
            return Ok(false);
        }
        self.advance_rank(ctx)?;
        self.training_roll(ctx)?;
        Ok(true)
    }

    /// Climb one rank on the active track and take its benefit.
    pub fn advance_rank(&mut self, ctx: &mut Context<'_>) -> CareerResult<u32> {
        let track = self.active_track("advance rank")?.at(self.rank() + 1);
        if track.is_officer() {
            self.officer = Some(track);
            ctx.log(format!("Advanced to officer rank {}", track.rank));
        } else {
            self.enlisted = Some(track);
            ctx.log(format!("Advanced to rank {}", track.rank));
        }
        if let Some(title) = track.take_benefit(ctx)? {
            self.title = Some(title);
        }
        Ok(track.rank)
    }

    /// Regimens open to the character right now.
    pub fn regimens(&self, sheet: &Character) -> Vec<Regimen> {
        let mut regimens = vec![Regimen::Personal, Regimen::Service, Regimen::Specialist];
        if self
            .table
            .advanced_education
            .is_some_and(|edu| sheet.stat_value(Stat::Education) >= edu)
        {
            regimens.push(Regimen::Advanced);
        }
        if self.is_officer() {
            regimens.push(Regimen::Officer);
        }
        regimens
    }

    /// Pick a regimen, roll 1d6 on its list and train the result by one.
    pub fn training_roll(&self, ctx: &mut Context<'_>) -> CareerResult<Grant> {
        let spec = self.specialty("train")?;
        let regimens = self.regimens(ctx.sheet);
        let regimen = *ctx.choose("Choose a training regimen", &regimens)?;
        let list = self.table.skill_list(regimen, spec)?;
        let roll = ctx.roll_labelled(DiceExpr::D6, &format!("{regimen} training"))?;
        let entry = roll
            .checked_sub(1)
            .and_then(|i| list.get(i as usize))
            .ok_or_else(|| CareerError::malformed(self.name(), format!("no {regimen} skill for roll {roll}")))?;
        let grant = ctx.resolve("Choose a skill", entry)?;
        let level = match grant {
            Grant::Skill { name, .. } => ctx.sheet.train_skill(name, None)?,
            Grant::Stat { stat, .. } => ctx.sheet.bump_stat(*stat, None),
        };
        ctx.log(format!("Trained {} +1 (now {level})", grant.target()));
        Ok(grant.clone())
    }

    /// Roll 2d6 + `dm` on the event table, clamped to 2-12.
    pub fn event_roll(&self, ctx: &mut Context<'_>, dm: i32) -> CareerResult<u32> {
        let roll = ctx.roll_labelled(DiceExpr::TWO_D6, "Event")?;
        let index = (roll as i32 + dm).clamp(2, 12) as u32;
        let text = self.table.event(index)?;
        ctx.log(format!("Event: {text}"));
        Ok(index)
    }

    /// Roll 1d6 on the mishap table.
    pub fn mishap_roll(&self, ctx: &mut Context<'_>) -> CareerResult<u32> {
        let roll = ctx.roll_labelled(DiceExpr::D6, "Mishap")?;
        let text = self.table.mishap(roll)?;
        ctx.log(format!("Mishap: {text}"));
        Ok(roll)
    }

    fn active_track(&self, operation: &'static str) -> CareerResult<RankTrack<'t>> {
        self.officer
            .or(self.enlisted)
            .ok_or_else(|| self.invalid(operation, "not active"))
    }
}
