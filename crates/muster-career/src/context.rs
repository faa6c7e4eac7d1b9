//! The collaborators a career operation works against.

use std::fmt::Display;

use muster_mechanics::{Character, DiceExpr, DiceService};

use crate::choice::ChoiceProvider;
use crate::error::{CareerError, CareerResult};
use crate::table::Pick;

/// Borrowed character sheet, dice and choice provider for one operation.
///
/// A context is built fresh for each call and threads the three external
/// collaborators explicitly; nothing in the engine reaches for global
/// randomness or logging.
pub struct Context<'a> {
    /// The character being played.
    pub sheet: &'a mut Character,
    /// Source of all dice results.
    pub dice: &'a mut dyn DiceService,
    /// Source of all decisions.
    pub choices: &'a mut dyn ChoiceProvider,
}

impl<'a> Context<'a> {
    /// Bundle the collaborators.
    pub fn new(
        sheet: &'a mut Character,
        dice: &'a mut dyn DiceService,
        choices: &'a mut dyn ChoiceProvider,
    ) -> Self {
        Self {
            sheet,
            dice,
            choices,
        }
    }

    /// Roll a dice expression.
    pub fn roll(&mut self, expr: DiceExpr) -> CareerResult<u32> {
        Ok(self.dice.roll(expr)?)
    }

    /// Roll and log the result under `label`.
    pub fn roll_labelled(&mut self, expr: DiceExpr, label: &str) -> CareerResult<u32> {
        let total = self.roll(expr)?;
        self.log(format!("{label} roll ({expr}): {total}"));
        Ok(total)
    }

    /// Ask the choice provider to pick one of `options`.
    pub fn choose<'o, T: Display>(&mut self, prompt: &str, options: &'o [T]) -> CareerResult<&'o T> {
        if options.is_empty() {
            return Err(CareerError::NoOptions(prompt.to_string()));
        }
        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        let index = self.choices.choose(prompt, &labels)?;
        options.get(index).ok_or_else(|| CareerError::ChoiceOutOfRange {
            prompt: prompt.to_string(),
            index,
        })
    }

    /// Resolve a table cell: fixed values pass through, choice sets are
    /// put to the choice provider.
    pub fn resolve<'o, T: Display>(&mut self, prompt: &str, pick: &'o Pick<T>) -> CareerResult<&'o T> {
        match pick {
            Pick::One(value) => Ok(value),
            Pick::Choose { choose } => self.choose(prompt, choose),
        }
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, prompt: &str) -> CareerResult<bool> {
        Ok(*self.choose(prompt, &["yes", "no"])? == "yes")
    }

    /// Append to the character's life log.
    pub fn log(&mut self, line: impl Into<String>) {
        self.sheet.append(line);
    }
}
