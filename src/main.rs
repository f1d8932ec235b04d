use clap::{Parser, Subcommand};
use keyweight::config::{ScoringConfig, ScoringOverrides};
use keyweight::error::KwResult;
use keyweight::BigramRegistry;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON scoring config. CLI flags are merged on top.
    #[arg(global = true, long)]
    config: Option<String>,

    #[command(flatten)]
    scoring: ScoringOverrides,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Layouts(cmd::layouts::LayoutsArgs),
    Lookup(cmd::lookup::LookupArgs),
    Table(cmd::table::TableArgs),
}

fn resolve_config(cli: &Cli) -> KwResult<ScoringConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("⚖️  Loading scoring config from: {}", path);
            ScoringConfig::load_from_file(path)?
        }
        None => ScoringConfig::default(),
    };
    config.merge_from_cli(&cli.scoring);
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let registry = resolve_config(&cli)
        .and_then(BigramRegistry::with_config)
        .unwrap_or_else(|e| {
            error!("❌ FATAL ERROR INITIALIZING REGISTRY: {}", e);
            process::exit(1);
        });

    let result = match cli.command {
        Commands::Layouts(args) => cmd::layouts::run(args, &registry),
        Commands::Lookup(args) => cmd::lookup::run(args, &registry),
        Commands::Table(args) => cmd::table::run(args, &registry),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
