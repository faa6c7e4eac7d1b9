use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use muster_career::CareerTable;

pub fn run(catalog: Option<&Path>, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    if json {
        println!("{}", catalog.to_json().map_err(|e| e.to_string())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Track", "Qualification", "Assignments", "Kind"]);
    for track in &catalog.tables {
        table.add_row(vec![
            track.name.clone(),
            qualification(track),
            track.assignment_names().join(", "),
            kind(track).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} tracks", catalog.tables.len());
    Ok(())
}

fn qualification(track: &CareerTable) -> String {
    match &track.qualification {
        Some(req) => req
            .options()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" or "),
        None => "automatic".into(),
    }
}

fn kind(track: &CareerTable) -> &'static str {
    if track.fallback {
        "fallback"
    } else if track.is_military() {
        "military"
    } else {
        "civilian"
    }
}
