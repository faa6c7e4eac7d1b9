use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path) -> Result<(), String> {
    let catalog = super::load_catalog(Some(file))?;
    println!(
        "  {} {} ({} tracks: {})",
        "ok".green().bold(),
        file.display(),
        catalog.tables.len(),
        catalog.names().join(", ")
    );
    Ok(())
}
