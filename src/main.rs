use agegrid::category::CategoryTable;
use agegrid::config::ColumnMap;
use agegrid::loader::load_records;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "constituencies.csv")]
    input: String,

    /// JSON category table replacing the built-in party colours.
    #[arg(global = true, long)]
    categories: Option<String>,

    /// JSON column mapping; column flags given before the subcommand override it.
    #[arg(global = true, long)]
    columns: Option<String>,

    #[command(flatten)]
    column_map: ColumnMap,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Layout(cmd::layout::LayoutArgs),
    Inspect(cmd::inspect::InspectArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let columns = match &cli.columns {
        Some(path) => {
            info!("Loading column mapping from: {}", path);
            let mut file_columns = ColumnMap::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_columns.merge_from_cli(&cli.column_map, &matches);
            file_columns
        }
        None => cli.column_map.clone(),
    };

    let table = match &cli.categories {
        Some(path) => {
            info!("Loading category table from: {}", path);
            CategoryTable::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => CategoryTable::uk_parties(),
    };

    let loaded = load_records(&cli.input, &columns).unwrap_or_else(|e| {
        error!("FATAL: could not load '{}': {}", cli.input, e);
        process::exit(1);
    });
    if loaded.records.is_empty() {
        warn!("No usable records in '{}'.", cli.input);
    }

    let outcome = match cli.command {
        Commands::Layout(args) => cmd::layout::run(args, &loaded.records, &table),
        Commands::Inspect(args) => cmd::inspect::run(args, &loaded.records, &table),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
