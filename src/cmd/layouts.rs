use crate::reports;
use clap::Args;
use keyweight::error::KwResult;
use keyweight::BigramRegistry;

#[derive(Args, Debug, Clone)]
pub struct LayoutsArgs {
    /// Also print each layout's key grid.
    #[arg(short, long, default_value_t = false)]
    pub grid: bool,
}

pub fn run(args: LayoutsArgs, registry: &BigramRegistry) -> KwResult<()> {
    let defs: Vec<_> = registry
        .list_layouts()
        .into_iter()
        .map(|layout| registry.definition(layout))
        .collect();

    reports::print_layout_list(&defs);

    if args.grid {
        for def in defs {
            reports::print_layout_grid(def);
        }
    }
    Ok(())
}
