use std::fs;
use std::path::PathBuf;

use colored::Colorize;

use muster_career::{CareerPath, ChoiceProvider, FirstChoice, PathConfig, RandomChoice};
use muster_mechanics::RngDice;

use crate::prompt::StdinChoices;

/// Who answers the questions a career asks.
pub enum Answers {
    /// The player, on stdin.
    Prompt,
    /// Always the first option.
    First,
    /// Seeded random picks.
    Random,
}

pub struct Options {
    pub name: String,
    pub seed: u64,
    pub age: u32,
    pub catalog: Option<PathBuf>,
    pub answers: Answers,
    pub careers: Vec<String>,
    pub max_careers: usize,
    pub save: Option<PathBuf>,
}

pub fn run(opts: Options) -> Result<(), String> {
    let catalog = super::load_catalog(opts.catalog.as_deref())?;
    for name in &opts.careers {
        catalog.require(name).map_err(|e| e.to_string())?;
    }

    let choices: Box<dyn ChoiceProvider> = match opts.answers {
        Answers::Prompt => Box::new(StdinChoices::stdin()),
        Answers::First => Box::new(FirstChoice),
        Answers::Random => Box::new(RandomChoice::seeded(opts.seed)),
    };
    let config = PathConfig::default()
        .with_seed(opts.seed)
        .with_starting_age(opts.age)
        .with_max_careers(opts.max_careers);

    let mut path = CareerPath::generate(
        &catalog,
        &opts.name,
        Box::new(RngDice::seeded(opts.seed)),
        choices,
        config,
    )
    .map_err(|e| format!("failed to generate character: {e}"))?;

    let tracks = (!opts.careers.is_empty()).then_some(opts.careers.as_slice());
    path.run_lifetime(tracks).map_err(|e| e.to_string())?;

    let record = path.snapshot();
    super::report::print(&record);

    if let Some(file) = &opts.save {
        let json = record.to_json().map_err(|e| e.to_string())?;
        fs::write(file, json).map_err(|e| format!("cannot write {}: {e}", file.display()))?;
        println!();
        println!("  {} {}", "Saved".green().bold(), file.display());
    }
    Ok(())
}
