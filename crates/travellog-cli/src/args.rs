use clap::{Parser, Subcommand};
use std::path::PathBuf;
use travellog_core::prefs::EntityKind;

/// CLI arguments for travellog
#[derive(Debug, Parser)]
#[command(
    name = "travellog",
    version,
    about = "Query a personal travel log: visited countries, flights and places"
)]
pub struct CliArgs {
    /// Config file (default: travellog.toml in the working directory)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding records, preferences and reference data
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Preference file (overrides the config)
    #[arg(long = "prefs", global = true)]
    pub prefs_file: Option<PathBuf>,

    /// Record file (overrides the config)
    #[arg(short = 'r', long = "records", global = true)]
    pub records_file: Option<PathBuf>,

    /// ISO2 code of the homeland, drawn separately on the map
    #[arg(long = "homeland", global = true)]
    pub homeland: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Visited countries, filtered and sorted with the stored criteria
    Countries,

    /// Completed flights, filtered and sorted with the stored criteria
    Flights,

    /// Visited cities and places, filtered and sorted with the stored criteria
    Places,

    /// Browse the reference country catalog
    Catalog {
        /// Include dependent territories
        #[arg(long)]
        all: bool,

        /// Accent-insensitive name search instead of the stored criteria
        #[arg(short = 's', long)]
        search: Option<String>,
    },

    /// Border rings for the given countries (homeland and visited when empty)
    Borders {
        /// ISO2 codes (e.g. SK AT CZ)
        codes: Vec<String>,

        /// Print the rings as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Store a criteria field or sort mode, e.g. `set flight date_from 01.01.2020`
    Set {
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,
        field: String,
        value: String,
    },

    /// Restore default criteria and sort mode for a screen
    Reset {
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,
    },

    /// Show the effective preferences
    Prefs {
        /// Only this screen (country, flight or place)
        #[arg(value_parser = parse_kind)]
        kind: Option<EntityKind>,
    },
}

fn parse_kind(s: &str) -> Result<EntityKind, String> {
    EntityKind::from_key(&s.to_ascii_lowercase())
        .ok_or_else(|| format!("unknown screen {s:?}, expected country, flight or place"))
}
