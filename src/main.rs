//! Command-line front end for the record keeper.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crimerecords::commands::{self, AddOutcome};
use crimerecords::domain::RecordKind;
use crimerecords::infra::app_config::{AppConfig, load_config};
use crimerecords::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "crimerecords")]
#[command(version)]
#[command(about = "Keep criminal, victim and court records in a local database", long_about = None)]
struct Args {
    /// Path to the database file (overrides config and CRIMERECORDS_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the record tables if they do not exist yet
    Init,

    /// Add a record
    Add {
        #[command(subcommand)]
        record: AddRecord,
    },

    /// List every record of one kind
    List {
        /// criminals, victims or court-records
        kind: RecordKind,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum AddRecord {
    Criminal {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        crime: String,
    },
    Victim {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        address: String,
        /// Statement text; may contain line breaks
        #[arg(long)]
        report: String,
    },
    CourtRecord {
        #[arg(long)]
        criminal_id: String,
        #[arg(long)]
        judge_name: String,
        #[arg(long)]
        verdict: String,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let config = match args.db {
        Some(path) => AppConfig::with_db_path(path),
        None => load_config(),
    };
    let state = commands::initialize(config)?;

    let ok = match args.command {
        Commands::Init => {
            println!("Database ready at: {}", state.config.db_path.display());
            true
        }
        Commands::Add { record } => run_add(&state, record),
        Commands::List { kind, json } => run_list(&state, kind, json)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn run_add(state: &AppState, record: AddRecord) -> bool {
    let (kind, outcome) = match record {
        AddRecord::Criminal {
            name,
            age,
            address,
            crime,
        } => (
            RecordKind::Criminal,
            commands::add_criminal(state, &name, &age, &address, &crime),
        ),
        AddRecord::Victim {
            name,
            age,
            address,
            report,
        } => (
            RecordKind::Victim,
            commands::add_victim(state, &name, &age, &address, &report),
        ),
        AddRecord::CourtRecord {
            criminal_id,
            judge_name,
            verdict,
        } => (
            RecordKind::CourtRecord,
            commands::add_court_record(state, &criminal_id, &judge_name, &verdict),
        ),
    };

    match outcome {
        AddOutcome::Accepted { id } => {
            println!("{kind} record added successfully. (id {id})");
            true
        }
        AddOutcome::Rejected { reason } => {
            eprintln!("Error: {reason}");
            false
        }
        AddOutcome::StoreError { message } => {
            eprintln!("Error: {message}");
            false
        }
    }
}

/// Rows of one record kind, ready to print.
struct Listing {
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
    json: serde_json::Value,
}

fn run_list(state: &AppState, kind: RecordKind, json: bool) -> Result<bool> {
    let listing = match kind {
        RecordKind::Criminal => commands::list_criminals(state).map(|rows| Listing {
            headers: &["ID", "Name", "Age", "Address", "Crime"],
            rows: rows
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.name.clone(),
                        c.age.to_string(),
                        c.address.clone(),
                        c.crime.clone(),
                    ]
                })
                .collect(),
            json: serde_json::json!(rows),
        }),
        RecordKind::Victim => commands::list_victims(state).map(|rows| Listing {
            headers: &["ID", "Name", "Age", "Address", "Report"],
            rows: rows
                .iter()
                .map(|v| {
                    vec![
                        v.id.to_string(),
                        v.name.clone(),
                        v.age.to_string(),
                        v.address.clone(),
                        v.report.clone(),
                    ]
                })
                .collect(),
            json: serde_json::json!(rows),
        }),
        RecordKind::CourtRecord => commands::list_court_records(state).map(|rows| Listing {
            headers: &["ID", "Criminal ID", "Judge Name", "Verdict"],
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.criminal_id.to_string(),
                        r.judge_name.clone(),
                        r.verdict.clone(),
                    ]
                })
                .collect(),
            json: serde_json::json!(rows),
        }),
    };

    let listing = match listing {
        Ok(listing) => listing,
        Err(message) => {
            eprintln!("Error: {message}");
            return Ok(false);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing.json)?);
    } else {
        print!("{}", render_table(listing.headers, &listing.rows));
    }
    Ok(true)
}

/// Left-aligned columns; line breaks inside a cell are shown as " / ".
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.lines().collect::<Vec<_>>().join(" / "))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n", line.trim_end())
    };

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = format_row(&header);
    out.push_str(&format_row(&rule));
    for row in &rows {
        out.push_str(&format_row(row));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = vec![
            vec!["1".to_string(), "Jane Doe".to_string()],
            vec!["12".to_string(), "Al".to_string()],
        ];
        let out = render_table(&["ID", "Name"], &rows);
        assert_eq!(out, "ID  Name\n--  --------\n1   Jane Doe\n12  Al\n");
    }

    #[test]
    fn test_render_table_flattens_multiline_cells() {
        let rows = vec![vec!["1".to_string(), "first\nsecond".to_string()]];
        let out = render_table(&["ID", "Report"], &rows);
        assert!(out.contains("first / second"));
    }

    #[test]
    fn test_args_parse_add_court_record() {
        let args = Args::try_parse_from([
            "crimerecords",
            "add",
            "court-record",
            "--criminal-id",
            "999",
            "--judge-name",
            "Judge Lee",
            "--verdict",
            "Guilty",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Commands::Add {
                record: AddRecord::CourtRecord { .. }
            }
        ));
    }

    #[test]
    fn test_args_parse_list_kind() {
        let args = Args::try_parse_from(["crimerecords", "list", "court-records", "--json"]).unwrap();
        match args.command {
            Commands::List { kind, json } => {
                assert_eq!(kind, RecordKind::CourtRecord);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
