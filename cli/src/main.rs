//! Charter Fare CLI
//!
//! Prices a charter-bus trip against a bureau tariff table.
//!
//! ```sh
//! # Reference trip against the built-in table
//! charter-fare calculate --distance 230 \
//!     --departure 2024-07-01T01:00 --return 2024-07-02T10:00 --bus-count 2
//!
//! # Custom tariff table, JSON output
//! charter-fare calculate --tariffs tariffs.json --bureau 関東運輸局 \
//!     --distance 120 --departure 2024-07-01T07:00 --return 2024-07-01T19:00 \
//!     --bus-count 1 --format json
//!
//! # List bureaus in a table
//! charter-fare bureaus --tariffs tariffs.json
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{error, info};

use charter_fare_core::fare::TOTAL_FARE_LABEL;
use charter_fare_core::tariff::HOKKAIDO_BUREAU;
use charter_fare_core::{BusSize, FareBreakdown, FareCalculator, TariffTable, TripRequest};

/// Regulated charter-bus fare calculator.
#[derive(Parser, Debug)]
#[command(name = "charter-fare", version, about = "Charter bus fare calculator")]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a trip
    Calculate(CalculateArgs),

    /// List bureaus and their rates
    Bureaus {
        /// Tariff table (JSON). Uses the built-in table when omitted.
        #[arg(short, long, env = "CHARTER_FARE_TARIFFS")]
        tariffs: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct CalculateArgs {
    /// Tariff table (JSON). Uses the built-in table when omitted.
    #[arg(short, long, env = "CHARTER_FARE_TARIFFS")]
    tariffs: Option<PathBuf>,

    /// Departure bureau
    #[arg(short, long, default_value = HOKKAIDO_BUREAU)]
    bureau: String,

    /// Total distance in km
    #[arg(short, long, allow_negative_numbers = true)]
    distance: f64,

    /// Departure time, local to the bureau (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = parse_timestamp)]
    departure: NaiveDateTime,

    /// Return time, local to the bureau (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long = "return", value_parser = parse_timestamp)]
    return_time: NaiveDateTime,

    /// Bus size (large, medium, micro, high_roof_van, or 大型/中型/マイクロ/ハイエース)
    #[arg(long, default_value = "large")]
    bus_size: BusSize,

    /// Number of buses
    #[arg(short = 'n', long, default_value_t = 1)]
    bus_count: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output of `calculate`
#[derive(Debug, Serialize)]
struct FareQuote<'a> {
    trip: &'a TripRequest,
    breakdown: &'a FareBreakdown,
    tariff_fingerprint: String,
}

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| format!("'{}' is not a YYYY-MM-DDTHH:MM[:SS] timestamp", raw))
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_tariffs(path: Option<&Path>) -> Result<TariffTable, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Cannot open tariff table {}: {}", path.display(), e))?;
            let table = TariffTable::from_reader(BufReader::new(file))?;
            info!(path = %path.display(), bureaus = table.len(), "Tariff table loaded");
            Ok(table)
        }
        None => {
            info!("Using built-in tariff table");
            Ok(TariffTable::builtin())
        }
    }
}

fn render_text(trip: &TripRequest, breakdown: &FareBreakdown) -> String {
    let mut out = format!(
        "{} / {} km / {} → {} / {} x{}\n",
        trip.departure_bureau,
        trip.total_distance,
        trip.departure_time,
        trip.return_time,
        trip.bus_size.label(),
        trip.bus_count,
    );
    for (component, amount) in breakdown.components() {
        out.push_str(&format!("{}: {}\n", component.label(), amount));
    }
    out.push_str(&format!("{}: {}", TOTAL_FARE_LABEL, breakdown.total_fare));
    out
}

fn calculate(args: CalculateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tariffs = load_tariffs(args.tariffs.as_deref())?;
    let trip = TripRequest::new(
        args.distance,
        args.departure,
        args.return_time,
        args.bus_size,
        args.bus_count,
        args.bureau,
    );

    let breakdown = FareCalculator::new(&tariffs).calculate(&trip)?;

    match args.format {
        OutputFormat::Text => println!("{}", render_text(&trip, &breakdown)),
        OutputFormat::Json => {
            let quote = FareQuote {
                trip: &trip,
                breakdown: &breakdown,
                tariff_fingerprint: tariffs.fingerprint(),
            };
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
    }
    Ok(())
}

fn list_bureaus(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let tariffs = load_tariffs(path)?;
    for (bureau, entry) in tariffs.iter() {
        println!(
            "{}\tdistance={} time={} replacement_driver={} night_increase={}",
            bureau,
            entry.distance_rate,
            entry.time_rate,
            entry.replacement_driver_rate,
            entry.night_rate_increase,
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Command::Calculate(args) => calculate(args),
        Command::Bureaus { tariffs } => list_bureaus(tariffs.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
