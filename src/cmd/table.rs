use crate::reports;
use clap::Args;
use keyweight::error::KwResult;
use keyweight::{BigramRegistry, KnownLayout};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    #[arg(short, long, default_value = "qwerty")]
    pub layout: KnownLayout,

    /// Number of ranked pairs to print (0 = all).
    #[arg(short = 'n', long, default_value_t = 20)]
    pub top: usize,

    /// Write every ordered pair to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(args: TableArgs, registry: &BigramRegistry) -> KwResult<()> {
    let table = registry.table(args.layout);
    reports::print_layout_grid(registry.definition(args.layout));

    let ranked = table.ranked();
    let shown = if args.top == 0 {
        &ranked[..]
    } else {
        &ranked[..args.top.min(ranked.len())]
    };
    reports::print_ranked_table(shown);

    if let Some(path) = args.csv {
        let file = File::create(&path)?;
        table.write_csv(file)?;
        info!("Exported {} bigrams to {}", table.len(), path.display());
    }
    Ok(())
}
