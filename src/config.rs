use crate::error::KwResult;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiply the row-distance weight into every bigram weight.
    /// Off by default, matching the published formula.
    pub apply_row_distance: bool,
}

/// Command-line overrides. `None` leaves the file (or default) value alone.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringOverrides {
    /// `--apply-row-distance` turns the term on, `--apply-row-distance=false` forces it off.
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub apply_row_distance: Option<bool>,
}

impl ScoringConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KwResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Flags passed on the command line win over the file, in both directions.
    pub fn merge_from_cli(&mut self, cli: &ScoringOverrides) {
        if let Some(apply) = cli.apply_row_distance {
            self.apply_row_distance = apply;
        }
    }
}
