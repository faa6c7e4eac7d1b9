use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use muster_career::{CareerState, PathRecord};
use muster_mechanics::{Character, stat_modifier};

/// Print the character, their careers and the life log.
pub fn print(record: &PathRecord) {
    let c = &record.character;
    println!();
    println!("  {} ({}, age {})", c.name.bold(), "character".dimmed(), c.age);
    println!();
    println!("{}", stats_table(c));

    if !c.skills.is_empty() {
        let skills: Vec<String> = c
            .skills
            .iter()
            .map(|(name, level)| format!("{name} {level}"))
            .collect();
        println!();
        println!("  {} {}", "Skills:".bold(), skills.join(", "));
    }
    println!("  {} {}", "Credits:".bold(), c.credits);
    if !c.stuff.is_empty() {
        let stuff: Vec<String> = c
            .stuff
            .iter()
            .map(|(name, count)| match count {
                1 => name.clone(),
                n => format!("{name} x{n}"),
            })
            .collect();
        println!("  {} {}", "Possessions:".bold(), stuff.join(", "));
    }

    println!();
    if record.careers.is_empty() {
        println!("  No careers served.");
    } else {
        println!("{}", careers_table(&record.careers));
    }

    println!();
    println!("  {}", "Life".bold().underline());
    for line in c.log() {
        println!("  {line}");
    }
}

fn stats_table(c: &Character) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value", "DM"]);
    for (stat, value) in c.stats.iter() {
        let dm = stat_modifier(value).map_or_else(|_| "?".to_string(), |dm| format!("{dm:+}"));
        table.add_row(vec![stat.to_string(), value.to_string(), dm]);
    }
    table
}

fn careers_table(careers: &[CareerState]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Career", "Assignment", "Terms", "Rank", "Title", "Status"]);
    for career in careers {
        let rank = match career.officer_rank {
            Some(officer) => format!("O{officer} (E{})", career.rank),
            None => career.rank.to_string(),
        };
        table.add_row(vec![
            career.track.clone(),
            career.assignment.clone().unwrap_or_else(|| "-".into()),
            career.term.to_string(),
            rank,
            career.title.clone().unwrap_or_else(|| "-".into()),
            career.status.to_string(),
        ]);
    }
    table
}
