mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::MetricArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "semaforo",
    version,
    about = "Traffic-light recording tool for supplier food-safety analyses"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview both semaphores for a set of lab inputs (without recording)
    Classify {
        #[command(flatten)]
        metrics: MetricArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show per-metric reasoning
        #[arg(long)]
        verbose: bool,
    },
    /// Record a new analysis for a supplier
    Submit {
        /// Supplier directory XML file
        #[arg(short, long, value_name = "FILE", default_value = "PROVEEDORES.xml")]
        directory: PathBuf,

        /// Record store file (one JSON record per line)
        #[arg(short, long, value_name = "FILE", default_value = "registros.jsonl")]
        store: PathBuf,

        /// Supplier code
        #[arg(long, value_name = "CODE")]
        supplier: String,

        /// Analysis date, YYYY-MM-DD (default: today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        #[command(flatten)]
        metrics: MetricArgs,
    },
    /// Show the recorded history for a supplier, newest first
    History {
        /// Record store file (one JSON record per line)
        #[arg(short, long, value_name = "FILE", default_value = "registros.jsonl")]
        store: PathBuf,

        /// Supplier code
        #[arg(long, value_name = "CODE")]
        supplier: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Look up suppliers in the directory
    Suppliers {
        /// Supplier directory XML file
        #[arg(short, long, value_name = "FILE", default_value = "PROVEEDORES.xml")]
        directory: PathBuf,

        #[command(subcommand)]
        action: SuppliersAction,
    },
    /// Inspect and validate limits configuration
    Limits {
        #[command(subcommand)]
        action: LimitsAction,
    },
}

#[derive(Subcommand)]
enum SuppliersAction {
    /// List all suppliers
    List,
    /// Search suppliers by name substring
    Search { query: String },
    /// Show one supplier by code
    Show { code: String },
}

#[derive(Subcommand)]
enum LimitsAction {
    /// Show the built-in limits
    Show,
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom limits file
    Validate {
        /// Path to JSON limits file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            metrics,
            output,
            verbose,
        } => commands::classify::run(&metrics, &output, verbose),
        Commands::Submit {
            directory,
            store,
            supplier,
            date,
            metrics,
        } => commands::submit::run(directory, store, &supplier, date, &metrics),
        Commands::History {
            store,
            supplier,
            output,
        } => commands::history::run(store, &supplier, &output),
        Commands::Suppliers { directory, action } => match action {
            SuppliersAction::List => commands::suppliers::list(&directory),
            SuppliersAction::Search { query } => commands::suppliers::search(&directory, &query),
            SuppliersAction::Show { code } => commands::suppliers::show(&directory, &code),
        },
        Commands::Limits { action } => match action {
            LimitsAction::Show => commands::limits::show(),
            LimitsAction::Schema => commands::limits::schema(),
            LimitsAction::Validate { file } => commands::limits::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
