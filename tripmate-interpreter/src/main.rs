mod config;
mod snapshot_trip;

use std::{borrow::Cow, env, fs, io, process};

use config::AppConfig;
use snapshot_trip::SnapshotTrip;
use tracing_subscriber::EnvFilter;
use tripmate_application::SettlementService;
use tripmate_parser::parse_snapshot;
use tripmate_presentation::{SettlementPresenter, foreign_expense_lines, format_settlement_warning};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_env().map_err(|err| err.to_string())?;

    let Some(path) = env::args().nth(1) else {
        return Err("Usage: tripmate_interpreter <file.trip>".into());
    };

    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;
    let snapshot = parse_snapshot(&source).map_err(|err| err.to_string())?;
    let trip = SnapshotTrip::from_snapshot(&snapshot)?;
    tracing::debug!(
        trip = %trip.id,
        members = trip.members.len(),
        include_settled = config.include_settled,
        "loaded snapshot"
    );

    let result = SettlementService::new(&trip, &trip, &trip)
        .include_settled(config.include_settled)
        .settle(&trip.id)
        .map_err(|err| format!("{}: {err}", tripmate_i18n::SETTLEMENT_CALCULATION_FAILED))?;

    for warning in &result.warnings {
        eprintln!("{}", format_settlement_warning(warning));
    }

    let foreign = foreign_expense_lines(
        trip.records()
            .iter()
            .filter(|record| config.include_settled || !record.is_settled),
        trip.exchange_rates(),
    );
    if !foreign.is_empty() {
        println!("{}:", tripmate_i18n::FOREIGN_EXPENSES);
        for line in &foreign {
            println!("  {line}");
        }
        println!();
    }

    let view = SettlementPresenter::render(snapshot.trip, &result, &trip.members);
    println!("{}", SettlementPresenter::balance_table(&view.balance_rows));
    println!("{}", view.share_text);

    Ok(())
}
