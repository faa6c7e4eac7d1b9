//! Choice providers: how "pick one of these" decisions get made.
//!
//! Assignments, training regimens, rank bonuses, muster-out benefits and
//! the muster-out decision itself all funnel through [`ChoiceProvider`], so
//! the engine never cares whether a person or a script is answering.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::CareerResult;

/// Resolves a decision among labelled options to one index.
pub trait ChoiceProvider {
    /// Pick one of `options` (never empty) and return its index.
    fn choose(&mut self, prompt: &str, options: &[String]) -> CareerResult<usize>;
}

/// Always takes the first option offered.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl ChoiceProvider for FirstChoice {
    fn choose(&mut self, _prompt: &str, _options: &[String]) -> CareerResult<usize> {
        Ok(0)
    }
}

/// Answers from a queue of labels, falling back to the first option when
/// the queue is empty or the queued label is not on offer.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    answers: VecDeque<String>,
}

impl ScriptedChoices {
    /// Create a script from answer labels, consumed in order.
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn choose(&mut self, prompt: &str, options: &[String]) -> CareerResult<usize> {
        let Some(answer) = self.answers.pop_front() else {
            return Ok(0);
        };
        let found = options.iter().position(|o| o.eq_ignore_ascii_case(&answer));
        if found.is_none() {
            tracing::debug!(prompt, answer, "scripted answer not offered, taking first");
        }
        Ok(found.unwrap_or(0))
    }
}

/// Picks uniformly at random from a seeded RNG.
#[derive(Debug, Clone)]
pub struct RandomChoice {
    rng: StdRng,
}

impl RandomChoice {
    /// Create a seeded random chooser.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ChoiceProvider for RandomChoice {
    fn choose(&mut self, _prompt: &str, options: &[String]) -> CareerResult<usize> {
        Ok(self.rng.random_range(0..options.len().max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_choice_is_zero() {
        assert_eq!(FirstChoice.choose("?", &opts(&["a", "b"])).unwrap(), 0);
    }

    #[test]
    fn scripted_matches_labels_in_order() {
        let mut script = ScriptedChoices::new(["Infantry", "service"]);
        let asg = opts(&["Support", "Infantry", "Cavalry"]);
        let regimen = opts(&["Personal", "Service", "Specialist"]);
        assert_eq!(script.choose("asg", &asg).unwrap(), 1);
        assert_eq!(script.choose("regimen", &regimen).unwrap(), 1);
        assert_eq!(script.remaining(), 0);
        assert_eq!(script.choose("regimen", &regimen).unwrap(), 0);
    }

    #[test]
    fn scripted_unknown_label_falls_back_to_first() {
        let mut script = ScriptedChoices::new(["Navy"]);
        assert_eq!(script.choose("c", &opts(&["Army", "Scout"])).unwrap(), 0);
    }

    #[test]
    fn random_stays_in_range_and_is_reproducible() {
        let options = opts(&["a", "b", "c"]);
        let mut a = RandomChoice::seeded(5);
        let mut b = RandomChoice::seeded(5);
        for _ in 0..50 {
            let ia = a.choose("?", &options).unwrap();
            assert!(ia < 3);
            assert_eq!(ia, b.choose("?", &options).unwrap());
        }
    }
}
