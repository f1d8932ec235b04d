use crate::reports;
use clap::Args;
use keyweight::error::{KeyWeightError, KwResult};
use keyweight::{BigramRegistry, KnownLayout};
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    #[arg(short, long, default_value = "qwerty")]
    pub layout: KnownLayout,

    /// Two characters, typed left to right.
    pub pair: String,
}

pub fn run(args: LookupArgs, registry: &BigramRegistry) -> KwResult<()> {
    let chars: Vec<char> = args.pair.chars().collect();
    let &[first, second] = chars.as_slice() else {
        return Err(KeyWeightError::Config(format!(
            "Expected exactly two characters, got '{}'",
            args.pair
        )));
    };

    let bigram = registry
        .bigram(args.layout, first, second)
        .inspect_err(|e| warn!("Lookup rejected: {}", e))?;
    let k1 = registry.key_position(args.layout, first)?;
    let k2 = registry.key_position(args.layout, second)?;

    reports::print_bigram_detail(&bigram, &k1, &k2);
    Ok(())
}
