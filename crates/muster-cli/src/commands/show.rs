use std::path::Path;

use muster_career::{CareerPath, FirstChoice, PathConfig, PathRecord};
use muster_mechanics::ScriptedDice;

pub fn run(file: &Path, catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let json = super::read(file)?;
    let record = PathRecord::from_json(&json).map_err(|e| format!("{}: {e}", file.display()))?;

    // Rebuilding checks every career against its table.
    let path = CareerPath::restore(
        &catalog,
        &record,
        Box::new(ScriptedDice::default()),
        Box::new(FirstChoice),
        PathConfig::default(),
    )
    .map_err(|e| format!("{}: {e}", file.display()))?;

    super::report::print(&path.snapshot());
    Ok(())
}
