//! CLI entry point for the GTFS pathways generator.
//!
//! Builds the stop and pathway tables for a station, either from the built-in
//! example station or from a JSON dataset, and writes them as GTFS text files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gtfs_pathways::{
    dataset::Dataset,
    generator::Generator,
    output::DEFAULT_OUTPUT_DIR,
    sample::{example_station, example_stops, main_entrance_gate},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gtfs_pathways")]
#[command(about = "Generate GTFS stops.txt and pathways.txt for a station", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tables and write stops.txt and pathways.txt
    Generate {
        /// Directory to write the GTFS files into
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: String,

        /// JSON dataset to load instead of the example station
        #[arg(short, long, value_name = "FILE")]
        dataset: Option<String>,
    },
    /// Write the example station as an editable JSON dataset
    InitDataset {
        /// Path of the JSON file to write
        #[arg(short, long, default_value = "station.json")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gtfs_pathways.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gtfs_pathways.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output_dir,
            dataset,
        } => {
            let mut generator = Generator::new();

            match dataset {
                Some(path) => {
                    let dataset = Dataset::load(&path)?;
                    generator.load_dataset(&dataset);
                }
                None => build_example_station(&mut generator),
            }

            let summary = generator.export(&output_dir)?;
            info!(
                stops = %summary.stops_path.display(),
                pathways = %summary.pathways_path.display(),
                "Export complete"
            );
        }
        Commands::InitDataset { output } => {
            let station = example_station();
            station.save(&output)?;
            info!(
                path = %output,
                stops = station.stops.len(),
                pathways = station.pathways.len(),
                "Example dataset written"
            );
        }
    }

    Ok(())
}

/// Adds the example floor-plan stops, the standard pathways, and the main
/// entrance fare gate.
fn build_example_station(generator: &mut Generator) {
    for stop in example_stops() {
        generator.add_stop(stop.stop_id, stop.stop_name, stop.stop_lat, stop.stop_lon);
    }

    generator.add_standard_pathways();
    generator.add_pathway(main_entrance_gate());
}
