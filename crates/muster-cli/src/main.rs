//! CLI frontend for the Muster career generator.

mod commands;
mod prompt;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "muster",
    about = "Muster: roll a character and play out their careers",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print diagnostic logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a new character and run a lifetime of careers
    Generate {
        /// Character name
        #[arg(short, long, default_value = "Traveller")]
        name: String,

        /// RNG seed for dice (and for --random choices)
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Age the character starts their first career at
        #[arg(long, default_value = "18")]
        age: u32,

        /// JSON catalog to use instead of the standard tracks
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Answer every question with the first option
        #[arg(long, conflicts_with = "random")]
        scripted: bool,

        /// Answer every question at random
        #[arg(long)]
        random: bool,

        /// Only offer these tracks (comma separated)
        #[arg(long, value_delimiter = ',')]
        careers: Vec<String>,

        /// Stop after this many careers (0 = no limit)
        #[arg(long, default_value = "0")]
        max_careers: usize,

        /// Save the finished path as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// List the career tracks in a catalog
    Tracks {
        /// JSON catalog to list instead of the standard tracks
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the report for a saved path
    Show {
        /// Saved path file
        file: PathBuf,

        /// Catalog the path was generated with
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a JSON catalog
    CheckCatalog {
        /// Catalog file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            name,
            seed,
            age,
            catalog,
            scripted,
            random,
            careers,
            max_careers,
            save,
        } => {
            let answers = if scripted {
                commands::generate::Answers::First
            } else if random {
                commands::generate::Answers::Random
            } else {
                commands::generate::Answers::Prompt
            };
            commands::generate::run(commands::generate::Options {
                name,
                seed,
                age,
                catalog,
                answers,
                careers,
                max_careers,
                save,
            })
        }
        Commands::Tracks { catalog, json } => commands::tracks::run(catalog.as_deref(), json),
        Commands::Show { file, catalog } => commands::show::run(&file, catalog.as_deref()),
        Commands::CheckCatalog { file } => commands::check_catalog::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
