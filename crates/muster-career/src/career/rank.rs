//! Rank tracks and the rank benefit protocol.

use muster_mechanics::{Character, MechResult};

use crate::context::Context;
use crate::error::CareerResult;
use crate::table::{Grant, RankLadder};

/// Level a rank grant raises its target to when the table gives none.
pub const DEFAULT_RANK_LEVEL: u32 = 1;

/// A rank counter and the ladder it climbs.
///
/// A career holds an enlisted track from activation and an officer track
/// once commissioned; only the most recent one advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTrack<'t> {
    /// Current rank.
    pub rank: u32,
    ladder: &'t RankLadder,
    officer: bool,
}

impl<'t> RankTrack<'t> {
    /// Enlisted track at rank 0.
    pub fn enlisted(ladder: &'t RankLadder) -> Self {
        Self {
            rank: 0,
            ladder,
            officer: false,
        }
    }

    /// Officer track at rank 1.
    pub fn officer(ladder: &'t RankLadder) -> Self {
        Self {
            rank: 1,
            ladder,
            officer: true,
        }
    }

    /// The same track at another rank.
    pub fn at(self, rank: u32) -> Self {
        Self { rank, ..self }
    }

    /// Returns true for the officer track.
    pub fn is_officer(&self) -> bool {
        self.officer
    }

    fn label(&self) -> &'static str {
        if self.officer { "Officer rank" } else { "Rank" }
    }

    /// Apply the benefit for the current rank and return its title.
    ///
    /// A missing ladder entry is a no-op. A choice set is resolved through
    /// the choice provider and only the chosen grant is applied.
    pub fn take_benefit(&self, ctx: &mut Context<'_>) -> CareerResult<Option<String>> {
        let Some(benefit) = self.ladder.get(&self.rank) else {
            return Ok(None);
        };
        let label = self.label();
        if let Some(title) = &benefit.title {
            ctx.log(format!("{label} {}: {title}", self.rank));
        }
        if let Some(pick) = &benefit.grant {
            let grant = ctx.resolve("Choose a rank bonus", pick)?;
            let level = raise_to_floor(ctx.sheet, grant)?;
            ctx.log(format!("{label} bonus: {} {level}", grant.target()));
        }
        Ok(benefit.title.clone())
    }
}

/// Raise a grant's target to at least its level, never lowering it.
fn raise_to_floor(sheet: &mut Character, grant: &Grant) -> MechResult<u32> {
    let floor = Some(grant.level().unwrap_or(DEFAULT_RANK_LEVEL));
    match grant {
        Grant::Skill { name, .. } => sheet.train_skill(name, floor),
        Grant::Stat { stat, .. } => Ok(sheet.bump_stat(*stat, floor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::tests::{run, sheet};
    use crate::choice::{FirstChoice, ScriptedChoices};
    use crate::table::{Pick, RankBenefit, standard};
    use muster_mechanics::Stat;
    use proptest::prelude::*;

    fn ladder() -> RankLadder {
        [
            (0, RankBenefit::titled("Private").with(Grant::skill("Gun Combat").at(1))),
            (1, RankBenefit::default().with(Grant::stat(Stat::SocialStatus).at(10))),
            (
                2,
                RankBenefit::titled("Corporal").with(Pick::choose([
                    Grant::skill("Recon"),
                    Grant::skill("Melee").at(2),
                ])),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn title_and_fixed_grant() {
        let ladder = ladder();
        let mut c = sheet();
        let title = run(&mut c, [], &mut FirstChoice, |ctx| {
            RankTrack::enlisted(&ladder).take_benefit(ctx)
        })
        .unwrap();
        assert_eq!(title.as_deref(), Some("Private"));
        assert_eq!(c.skills.level("Gun Combat"), Some(1));
        assert_eq!(c.log(), ["Rank 0: Private", "Rank bonus: Gun Combat 1"]);
    }

    #[test]
    fn stat_grant_sets_floor() {
        let ladder = ladder();
        let mut c = sheet();
        run(&mut c, [], &mut FirstChoice, |ctx| {
            RankTrack::enlisted(&ladder).at(1).take_benefit(ctx)
        })
        .unwrap();
        assert_eq!(c.stats.social_status, 10);
    }

    #[test]
    fn choice_applies_only_the_pick() {
        let ladder = ladder();
        let mut c = sheet();
        let mut script = ScriptedChoices::new(["Melee 2"]);
        run(&mut c, [], &mut script, |ctx| {
            RankTrack::enlisted(&ladder).at(2).take_benefit(ctx)
        })
        .unwrap();
        assert_eq!(c.skills.level("Melee"), Some(2));
        assert!(!c.has_skill("Recon"));
    }

    #[test]
    fn missing_rank_is_a_no_op() {
        let ladder = ladder();
        let mut c = sheet();
        let title = run(&mut c, [], &mut FirstChoice, |ctx| {
            RankTrack::enlisted(&ladder).at(5).take_benefit(ctx)
        })
        .unwrap();
        assert_eq!(title, None);
        assert!(c.log().is_empty());
    }

    #[test]
    fn officer_track_starts_at_one() {
        let ladder = ladder();
        let track = RankTrack::officer(&ladder);
        assert_eq!(track.rank, 1);
        assert!(track.is_officer());
        let mut c = sheet();
        let title = run(&mut c, [], &mut FirstChoice, |ctx| track.at(2).take_benefit(ctx)).unwrap();
        assert_eq!(title.as_deref(), Some("Corporal"));
        assert_eq!(c.log()[0], "Officer rank 2: Corporal");
    }

    #[test]
    fn every_standard_rank_grant_changes_a_fresh_sheet() {
        for table in standard::all() {
            for (name, ladder) in &table.ladders {
                for (rank, benefit) in ladder {
                    let Some(pick) = &benefit.grant else { continue };
                    let labels: Vec<String> = pick.options().iter().map(Grant::to_string).collect();
                    let mut distinct = labels.clone();
                    distinct.sort();
                    distinct.dedup();
                    assert_eq!(distinct.len(), labels.len(), "{} {name} rank {rank}", table.name);
                    for label in &labels {
                        let mut c = sheet();
                        let before = (c.stats, c.skills.clone());
                        let mut script = ScriptedChoices::new([label.as_str()]);
                        run(&mut c, [], &mut script, |ctx| {
                            RankTrack::enlisted(ladder).at(*rank).take_benefit(ctx)
                        })
                        .unwrap();
                        let at = format!("{} {name} rank {rank}: {label}", table.name);
                        assert_ne!((c.stats, c.skills), before, "{at}");
                    }
                }
            }
        }
    }

    proptest! {
        #[test]
        fn rank_grants_never_lower(current in 0u32..6, soc in 2u32..16) {
            let ladder = ladder();
            let mut c = sheet();
            c.skills.bump("Gun Combat", Some(current)).unwrap();
            c.stats.social_status = soc;
            run(&mut c, [], &mut FirstChoice, |ctx| {
                RankTrack::enlisted(&ladder).take_benefit(ctx)?;
                RankTrack::enlisted(&ladder).at(1).take_benefit(ctx)
            })
            .unwrap();
            prop_assert_eq!(c.skills.level("Gun Combat"), Some(current.max(1)));
            prop_assert_eq!(c.stats.social_status, soc.max(10));
        }
    }
}
