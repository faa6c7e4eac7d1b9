pub mod check_catalog;
pub mod generate;
pub mod report;
pub mod show;
pub mod tracks;

use std::fs;
use std::path::Path;

use muster_career::Catalog;

/// Load a catalog file, or the standard tracks when none is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    let Some(path) = path else {
        return Ok(Catalog::standard());
    };
    let json = read(path)?;
    Catalog::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}
