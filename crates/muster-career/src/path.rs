//! A character's lifetime of careers.
//!
//! `CareerPath` owns the character sheet, the dice and the choice provider
//! for a run, and drives one [`Career`] at a time from application through
//! muster-out. Finished careers are kept in the order they were served.

use serde::{Deserialize, Serialize};

use muster_mechanics::{Character, DiceExpr, DiceService};

use crate::career::{Career, CareerState, Status};
use crate::choice::ChoiceProvider;
use crate::config::PathConfig;
use crate::context::Context;
use crate::error::{CareerError, CareerResult};
use crate::table::{CareerTable, Catalog, Grant};

/// Everything needed to rebuild a path: the character and the careers
/// served, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRecord {
    /// The character sheet, including its life log.
    pub character: Character,
    /// Careers served, oldest first.
    pub careers: Vec<CareerState>,
}

impl PathRecord {
    /// Parse a saved record.
    pub fn from_json(json: &str) -> CareerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CareerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Orchestrates the careers one character takes over a lifetime.
pub struct CareerPath<'t> {
    catalog: &'t Catalog,
    character: Character,
    dice: Box<dyn DiceService>,
    choices: Box<dyn ChoiceProvider>,
    config: PathConfig,
    careers: Vec<Career<'t>>,
    /// Track of the career activated but not yet served.
    active: Option<String>,
}

impl<'t> CareerPath<'t> {
    /// Start a path for an existing character.
    pub fn new(
        catalog: &'t Catalog,
        mut character: Character,
        dice: Box<dyn DiceService>,
        choices: Box<dyn ChoiceProvider>,
        config: PathConfig,
    ) -> Self {
        character.append("Initiated new career path");
        Self {
            catalog,
            character,
            dice,
            choices,
            config,
            careers: Vec::new(),
            active: None,
        }
    }

    /// Roll up a new character at the configured starting age and start a
    /// path for them.
    pub fn generate(
        catalog: &'t Catalog,
        name: &str,
        mut dice: Box<dyn DiceService>,
        choices: Box<dyn ChoiceProvider>,
        config: PathConfig,
    ) -> CareerResult<Self> {
        let character = Character::roll(name, config.starting_age, dice.as_mut())?;
        tracing::info!(name, seed = config.seed, "character generated");
        Ok(Self::new(catalog, character, dice, choices, config))
    }

    /// Rebuild a path from a saved record.
    pub fn restore(
        catalog: &'t Catalog,
        record: &PathRecord,
        dice: Box<dyn DiceService>,
        choices: Box<dyn ChoiceProvider>,
        config: PathConfig,
    ) -> CareerResult<Self> {
        let careers = record
            .careers
            .iter()
            .map(|state| Career::restore(catalog.require(&state.track)?, state))
            .collect::<CareerResult<Vec<_>>>()?;
        Ok(Self {
            catalog,
            character: record.character.clone(),
            dice,
            choices,
            config,
            careers,
            active: None,
        })
    }

    /// Capture the character and career history.
    pub fn snapshot(&self) -> PathRecord {
        PathRecord {
            character: self.character.clone(),
            careers: self.careers.iter().map(Career::snapshot).collect(),
        }
    }

    /// The character.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Careers served, oldest first.
    pub fn careers(&self) -> &[Career<'t>] {
        &self.careers
    }

    /// The catalog careers are drawn from.
    pub fn catalog(&self) -> &'t Catalog {
        self.catalog
    }

    /// Run configuration.
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Returns true if the character may take up `table`. Nothing may be
    /// taken while a career is in flight. Otherwise the fallback track is
    /// always open and any other track only if not served before.
    pub fn eligible(&self, table: &CareerTable) -> bool {
        self.active.is_none() && self.open(table)
    }

    /// The track in flight: activated through this path but not yet served.
    pub fn in_flight(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn open(&self, table: &CareerTable) -> bool {
        table.fallback || !self.careers.iter().any(|c| c.name() == table.name)
    }

    fn ensure_idle(&self) -> CareerResult<()> {
        match &self.active {
            Some(track) => Err(CareerError::IneligibleCareer(format!("{track} is still in progress"))),
            None => Ok(()),
        }
    }

    /// Returns true if `career` is untouched and its track is open.
    pub fn eligible_career(&self, career: &Career<'_>) -> bool {
        career.status() == Status::New && career.term() == 0 && self.eligible(career.table())
    }

    /// Tracks the character may still take, in catalog order.
    pub fn eligible_tracks(&self) -> Vec<&'t CareerTable> {
        self.catalog
            .tables
            .iter()
            .filter(|t| self.eligible(t))
            .collect()
    }

    /// Apply to a track and come out with an active career.
    ///
    /// Qualification takes DM -1 per career already served. On failure
    /// the character either drifts into the fallback track or submits to
    /// the draft.
    pub fn apply(&mut self, track: &str, assignment: Option<&str>) -> CareerResult<Career<'t>> {
        self.ensure_idle()?;
        let table = self.catalog.require(track)?;
        if !self.eligible(table) {
            return Err(CareerError::IneligibleCareer(table.name.clone()));
        }
        let career = Career::new(table);
        let dm = -i32::try_from(self.careers.len()).unwrap_or(i32::MAX);
        let qualified = {
            let mut ctx = Context::new(&mut self.character, self.dice.as_mut(), self.choices.as_mut());
            career.qualify(&mut ctx, dm)?
        };
        if qualified {
            self.character.append(format!("Qualified for {}", table.name));
            return self.enter(career, assignment);
        }

        self.character.append(format!("Did not qualify for {}", table.name));
        tracing::info!(track = %table.name, "qualification failed");
        let fallback = self.catalog.fallback()?;
        let draft = if self.config.allow_draft {
            let options = [fallback.name.as_str(), "Draft"];
            let mut ctx = Context::new(&mut self.character, self.dice.as_mut(), self.choices.as_mut());
            *ctx.choose("Choose a fallback", &options)? == "Draft"
        } else {
            false
        };
        if draft {
            self.draft()
        } else {
            self.enter(Career::new(fallback), None)
        }
    }

    /// Enter a career without qualifying: activation and basic training.
    pub fn enter(&mut self, mut career: Career<'t>, assignment: Option<&str>) -> CareerResult<Career<'t>> {
        self.ensure_idle()?;
        if !self.eligible_career(&career) {
            return Err(CareerError::IneligibleCareer(career.name().to_string()));
        }
        self.character.append(format!("Entering new career: {}", career.name()));
        self.activate(&mut career, assignment)?;
        Ok(career)
    }

    /// Roll on the draft table and enter the result without qualifying.
    ///
    /// A draft into a track already served sends the character to the
    /// fallback track instead.
    pub fn draft(&mut self) -> CareerResult<Career<'t>> {
        self.ensure_idle()?;
        let roll = {
            let mut ctx = Context::new(&mut self.character, self.dice.as_mut(), self.choices.as_mut());
            ctx.roll_labelled(DiceExpr::D6, "Draft")?
        };
        let entry = self.catalog.draft_entry(roll)?;
        let table = self.catalog.require(&entry.track)?;
        match &entry.assignment {
            Some(asg) => self.character.append(format!("Drafted: {}, {asg}", table.name)),
            None => self.character.append(format!("Drafted: {}", table.name)),
        }
        if !self.open(table) {
            self.character
                .append(format!("Already served in {}; drifting instead", table.name));
            return self.enter(Career::new(self.catalog.fallback()?), None);
        }
        let mut career = Career::new(table);
        self.activate(&mut career, entry.assignment.as_deref())?;
        Ok(career)
    }

    fn activate(&mut self, career: &mut Career<'t>, assignment: Option<&str>) -> CareerResult<()> {
        {
            let mut ctx = Context::new(&mut self.character, self.dice.as_mut(), self.choices.as_mut());
            career.activate(&mut ctx, assignment)?;
        }
        self.basic_training(career)?;
        self.active = Some(career.name().to_string());
        Ok(())
    }

    /// Basic training for a career about to serve its first term.
    ///
    /// The first career of a lifetime provides every service skill at
    /// level 0, with choice entries narrowed to untrained options. Later
    /// careers provide one untrained service skill of the player's choice.
    /// Returns the skills provided.
    pub fn basic_training(&mut self, career: &Career<'t>) -> CareerResult<Vec<String>> {
        if career.term() != 0 {
            return Ok(Vec::new());
        }
        let table = career.table();
        let mut ctx = Context::new(&mut self.character, self.dice.as_mut(), self.choices.as_mut());
        let mut skills: Vec<&str> = Vec::new();
        if self.careers.is_empty() {
            for entry in &table.service_skills {
                let untrained = untrained_skills(ctx.sheet, entry.options());
                match untrained.as_slice() {
                    [] => {}
                    [name] => skills.push(*name),
                    names => skills.push(*ctx.choose("Choose a service skill", names)?),
                }
            }
        } else {
            let names: Vec<&str> = table
                .service_skill_names()
                .into_iter()
                .filter(|name| !ctx.sheet.has_skill(name))
                .collect();
            if !names.is_empty() {
                skills.push(*ctx.choose("Choose a service skill", &names)?);
            }
        }
        for skill in &skills {
            ctx.sheet.provide_skill(skill)?;
            ctx.log(format!("Basic training: {skill} 0"));
        }
        Ok(skills.into_iter().map(str::to_string).collect())
    }

    /// Apply to a track and serve it to the end.
    pub fn run(&mut self, track: &str, assignment: Option<&str>) -> CareerResult<&Career<'t>> {
        let career = self.apply(track, assignment)?;
        self.serve(career)
    }

    /// Serve terms in an active career until a mishap, a forced exit or
    /// the player musters out, then muster out and record it.
    ///
    /// A term that mandates another term skips the muster-out question.
    /// Only the career in flight, or one activated outside the path while
    /// none is, may be served, and never a track already served.
    pub fn serve(&mut self, mut career: Career<'t>) -> CareerResult<&Career<'t>> {
        if !career.is_active() {
            return Err(CareerError::invalid_state(
                career.name(),
                "serve",
                format!("status is {}", career.status()),
            ));
        }
        let other_in_flight = self.active.as_deref().is_some_and(|track| track != career.name());
        if other_in_flight || !self.open(career.table()) {
            return Err(CareerError::IneligibleCareer(career.name().to_string()));
        }
        self.active = None;
        {
            let mut ctx = Context::new(&mut self.character, self.dice.as_mut(), self.choices.as_mut());
            loop {
                career.run_term(&mut ctx, 0)?;
                if !career.is_active() || career.must_exit() {
                    break;
                }
                if career.must_remain() {
                    continue;
                }
                if ctx.confirm("Muster out?")? {
                    break;
                }
            }
            career.muster_out(&mut ctx)?;
        }
        self.careers.push(career);
        self.careers
            .last()
            .ok_or_else(|| CareerError::invalid_state("path", "serve", "career not recorded"))
    }

    /// Keep choosing careers until none are open, the configured limit is
    /// reached or the player stops. `tracks` narrows the offer.
    pub fn run_lifetime(&mut self, tracks: Option<&[String]>) -> CareerResult<()> {
        loop {
            if self.config.careers_exhausted(self.careers.len()) {
                tracing::debug!(careers = self.careers.len(), "career limit reached");
                break;
            }
            let open: Vec<&'t str> = self
                .eligible_tracks()
                .into_iter()
                .map(|t| t.name.as_str())
                .filter(|name| {
                    tracks.is_none_or(|allowed| allowed.iter().any(|a| a.eq_ignore_ascii_case(name)))
                })
                .collect();
            if open.is_empty() {
                break;
            }
            let track = {
                let mut ctx = Context::new(&mut self.character, self.dice.as_mut(), self.choices.as_mut());
                *ctx.choose("Choose a career", &open)?
            };
            self.run(track, None)?;
            let mut ctx = Context::new(&mut self.character, self.dice.as_mut(), self.choices.as_mut());
            if ctx.confirm("Exit career mode?")? {
                break;
            }
        }
        Ok(())
    }
}

fn untrained_skills<'g>(sheet: &Character, options: &'g [Grant]) -> Vec<&'g str> {
    options
        .iter()
        .filter_map(Grant::skill_name)
        .filter(|name| !sheet.has_skill(name))
        .collect()
}
