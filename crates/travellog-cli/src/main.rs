//! travellog: command-line front end for travellog-core
//!
//! Prints the three record screens (visited countries, flights, places) the
//! way the app shows them: filtered and sorted with the criteria last saved
//! in the preference file. Criteria are changed with `set` and `reset`.
//!
//! Usage examples
//! --------------
//!
//! - Show flights with the stored criteria
//!   $ travellog flights
//!
//! - Only flights from 2023 on, longest first
//!   $ travellog set flight date_from 01.01.2023
//!   $ travellog set flight sort duration_longest_first
//!
//! - Hide European countries
//!   $ travellog set country continent.europe false
//!
//! - Back to defaults
//!   $ travellog reset flight
//!
//! - Border rings of the homeland and every visited country
//!   $ travellog --homeland SK borders
//!
//! Configuration
//! -------------
//!
//! Settings come from `travellog.toml`, then `TRAVELLOG_*` environment
//! variables, then flags. Logging is controlled with `RUST_LOG`.
mod args;
mod config;

use crate::args::{CliArgs, Commands};
use crate::config::Config;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use travellog_core::loader::{self, RecordSet};
use travellog_core::prefs::pref_key;
use travellog_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = CliArgs::parse();
    let config = Config::load(&args).context("reading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let prefs_path = config.prefs_path();
    let store = JsonFilePreferences::open(&prefs_path)
        .with_context(|| format!("opening preferences {}", prefs_path.display()))?;
    let mut facade = FilterSortFacade::new(store);
    let catalog = LazyCatalog::new(config.catalog_path());

    match args.command {
        Commands::Countries => {
            let records = load_records(&config)?;
            let mut visited = records.countries;
            resolve_countries(&catalog, &mut visited);
            for vc in facade.refresh_countries(&visited) {
                let name = match vc.country() {
                    Some(c) => c.common_name(),
                    None => "(unknown)",
                };
                println!("{:<3} {:<32} {}", vc.country_code, name, vc.last_visit_date);
            }
        }

        Commands::Flights => {
            let records = load_records(&config)?;
            for f in facade.refresh_flights(&records.flights) {
                println!(
                    "{:<10} {} -> {} ({}h {:02}m)",
                    f.flight_date,
                    airport_label(&f.departure_airport),
                    airport_label(&f.arrival_airport),
                    f.duration.hours(),
                    f.duration.minutes()
                );
            }
        }

        Commands::Places => {
            let records = load_records(&config)?;
            for p in facade.refresh_places(&records.places) {
                let kind = match p.kind() {
                    PlaceKind::City => "city",
                    PlaceKind::Place => "place",
                };
                println!(
                    "{:<10} {:<5} {:<2} {}",
                    p.last_visit_date,
                    kind,
                    p.target.country_code(),
                    p.name()
                );
            }
        }

        Commands::Catalog { all, search } => {
            let cat = catalog
                .get()
                .with_context(|| format!("loading catalog {}", catalog.path().display()))?;
            let hits = match search {
                Some(q) => cat.search(&q),
                None => filter_catalog(cat.countries(), &facade.criteria::<CountryScreen>(), !all),
            };
            for c in &hits {
                let continents: Vec<_> = c.continents.iter().map(|k| k.display_name()).collect();
                println!("{} {:<32} {}", c.iso2(), c.common_name(), continents.join(", "));
            }
            println!("{} countries", hits.len());
        }

        Commands::Borders { codes, json } => {
            let borders_path = config.borders_path();
            let borders = BorderIndex::load(&borders_path)
                .with_context(|| format!("loading borders {}", borders_path.display()))?;

            if codes.is_empty() {
                let records = load_records(&config)?;
                let mut session = UserSession::new("local");
                if let Some(h) = &config.homeland {
                    session = session.with_homeland(h.clone());
                }
                let overlay = map_overlay(&session, &records.countries, &borders);
                if json {
                    let doc = serde_json::json!({
                        "homeland": overlay.homeland,
                        "visited": overlay.visited,
                    });
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                } else {
                    println!("homeland: {} rings", overlay.homeland.len());
                    println!("visited:  {} rings", overlay.visited.len());
                }
            } else {
                let builder = BorderGeometryBuilder::new(&borders);
                if json {
                    let rings = builder.build_batch(&codes);
                    println!("{}", serde_json::to_string_pretty(&rings)?);
                } else {
                    for code in &codes {
                        let rings = builder.build(code);
                        let points: usize = rings.iter().map(Vec::len).sum();
                        println!("{code}: {} rings, {points} points", rings.len());
                    }
                }
            }
        }

        Commands::Set { kind, field, value } => {
            facade.store_mut().write_raw(kind, &field, &value)?;
            println!("{}.{} = {}", kind, field, value);
        }

        Commands::Reset { kind } => {
            let records = load_records(&config)?;
            let shown = match kind {
                EntityKind::Country => {
                    let mut visited = records.countries;
                    resolve_countries(&catalog, &mut visited);
                    facade.reset::<CountryScreen>(&visited)?.len()
                }
                EntityKind::Flight => facade.reset::<FlightScreen>(&records.flights)?.len(),
                EntityKind::Place => facade.reset::<PlaceScreen>(&records.places)?.len(),
            };
            println!(
                "{kind} criteria reset ({} = {}), {shown} records shown",
                pref_key(kind, PrefField::Sort),
                facade.store().read_text(kind, PrefField::Sort)
            );
        }

        Commands::Prefs { kind } => {
            let kinds = match kind {
                Some(k) => vec![k],
                None => EntityKind::ALL.to_vec(),
            };
            for k in kinds {
                for (key, value) in facade.store().snapshot(k) {
                    println!("{key} = {value:?}");
                }
            }
        }
    }

    Ok(())
}

/// A missing record file is an empty log.
fn load_records(config: &Config) -> anyhow::Result<RecordSet> {
    let path = config.records_path();
    if !path.exists() {
        tracing::info!(path = %path.display(), "no record file, starting empty");
        return Ok(RecordSet::default());
    }
    loader::load_records(&path).with_context(|| format!("reading records {}", path.display()))
}

/// Country names come from the catalog; without it the list still prints.
fn resolve_countries(catalog: &LazyCatalog, visited: &mut [VisitedCountry]) {
    match catalog.get() {
        Ok(cat) => {
            cat.resolve(visited);
        }
        Err(e) => tracing::warn!(error = %e, "country catalog unavailable, names left blank"),
    }
}

fn airport_label(a: &Airport) -> &str {
    if a.city.is_empty() {
        &a.name
    } else {
        &a.city
    }
}
